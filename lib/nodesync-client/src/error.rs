use thiserror::Error;

/// Per-endpoint failure causes. All of these collapse to the same
/// user-facing `Error:` line; the distinction only feeds diagnostics.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected status: {0}")]
    Status(reqwest::StatusCode),

    #[error("Malformed response body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}
