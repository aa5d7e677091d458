use thiserror::Error;

/// Failure while retrieving the listings payload.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("request to {url} failed: {reason}")]
    Network { url: String, reason: String },
    #[error("server answered {status} for {url}")]
    Status { url: String, status: u16 },
    #[error("malformed listings payload")]
    Decode(#[from] serde_json::Error),
}
