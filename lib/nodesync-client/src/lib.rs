//! Sync-status HTTP client for node endpoints
//!
//! This library provides:
//! - The wire model for the `/eth/v1/node/syncing` response
//! - A checker that polls an endpoint and reports a per-endpoint outcome

pub mod checker;
pub mod error;
pub mod status;

pub use checker::{CheckOutcome, SyncCheckConfig, SyncChecker};
pub use error::ClientError;
pub use status::{SyncDistance, SyncStatus, SyncingResponse};
