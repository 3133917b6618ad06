//! Sync-status checking for node endpoints

use crate::error::ClientError;
use crate::status::{SyncDistance, SyncStatus, SyncingResponse};
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

/// Sync check configuration
#[derive(Clone, Debug)]
pub struct SyncCheckConfig {
    /// HTTP path of the node's syncing API
    pub status_path: String,
    /// Connection timeout for a single request
    pub connect_timeout: Duration,
}

impl Default for SyncCheckConfig {
    fn default() -> Self {
        Self {
            status_path: "/eth/v1/node/syncing".to_string(),
            connect_timeout: Duration::from_secs(2),
        }
    }
}

/// Per-endpoint result of a sync check. Renders to the exact status line the
/// checker reports for that endpoint.
#[derive(Clone, Debug, PartialEq)]
pub enum CheckOutcome {
    Success {
        endpoint: String,
        is_syncing: bool,
        sync_distance: SyncDistance,
    },
    Error {
        endpoint: String,
    },
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckOutcome::Success {
                endpoint,
                is_syncing,
                sync_distance,
            } => write!(
                f,
                "Success: {}    SYNCING: {}    DISTANCE: {}",
                endpoint, is_syncing, sync_distance
            ),
            CheckOutcome::Error { endpoint } => write!(f, "Error: {}", endpoint),
        }
    }
}

/// Checker that polls an endpoint's sync-status API
pub struct SyncChecker {
    config: SyncCheckConfig,
    http: reqwest::Client,
}

impl SyncChecker {
    /// Create a new sync checker with the configured connection timeout
    pub fn new(config: SyncCheckConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .build()?;
        Ok(Self { config, http })
    }

    /// Fetch the sync status of an endpoint.
    ///
    /// The endpoint string is used as-is: callers provide `host:port` without
    /// a scheme, `http://` is prepended here. Connection failures, non-2xx
    /// responses, and unparseable bodies are distinct error variants.
    pub async fn fetch_status(&self, endpoint: &str) -> Result<SyncStatus, ClientError> {
        let url = format!("http://{}{}", endpoint, self.config.status_path);
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        let body = response.text().await?;
        let parsed: SyncingResponse = serde_json::from_str(&body)?;
        Ok(parsed.data)
    }

    /// Check one endpoint, collapsing any failure to an `Error` outcome.
    ///
    /// Never fails past this boundary; the cause is logged and the outcome
    /// carries only the endpoint.
    pub async fn check_endpoint(&self, endpoint: &str) -> CheckOutcome {
        match self.fetch_status(endpoint).await {
            Ok(status) => {
                debug!(
                    "Endpoint {} responded: syncing={} distance={}",
                    endpoint, status.is_syncing, status.sync_distance
                );
                CheckOutcome::Success {
                    endpoint: endpoint.to_string(),
                    is_syncing: status.is_syncing,
                    sync_distance: status.sync_distance,
                }
            }
            Err(e) => {
                warn!("Endpoint {} sync check failed: {}", endpoint, e);
                CheckOutcome::Error {
                    endpoint: endpoint.to_string(),
                }
            }
        }
    }
}
