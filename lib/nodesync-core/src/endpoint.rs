//! Endpoint file loading

use crate::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The on-disk endpoint file: `{ "endpoints": ["host:port", ...] }`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EndpointFile {
    pub endpoints: Vec<String>,
}

/// Read and parse an endpoint file, returning the endpoint list in file order.
///
/// The file is read fresh on every call; nothing is cached. Entries are not
/// validated — a malformed `host:port` string only fails whichever operation
/// later consumes it. Invalid JSON or a missing `endpoints` field maps to
/// [`CoreError::MalformedInput`].
pub fn load_endpoints<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path.as_ref())?;
    let file: EndpointFile = serde_json::from_str(&contents)
        .map_err(|e| CoreError::MalformedInput(e.to_string()))?;
    tracing::debug!(
        "Loaded {} endpoints from {}",
        file.endpoints.len(),
        path.as_ref().display()
    );
    Ok(file.endpoints)
}
