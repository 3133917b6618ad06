//! Wire model for the `/eth/v1/node/syncing` response

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level response envelope: `{ "data": { ... } }`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SyncingResponse {
    pub data: SyncStatus,
}

/// The current syncing status of the node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SyncStatus {
    /// Is the node syncing.
    pub is_syncing: bool,
    /// How many slots the node is behind its target head. Beacon nodes serve
    /// this as a JSON string; other clients serve a number. Either way it is
    /// printed verbatim.
    pub sync_distance: SyncDistance,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SyncDistance {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for SyncDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncDistance::Number(n) => write!(f, "{}", n),
            SyncDistance::Text(s) => write!(f, "{}", s),
        }
    }
}
