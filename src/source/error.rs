//! Error types for the product source.

use thiserror::Error;

/// Errors that can occur while fetching the product list.
///
/// Every variant is a "source unavailable" condition; an empty product
/// list is not an error.
#[derive(Debug, Error)]
pub enum SourceError {
    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection or transfer failed
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("Product API returned {status} for '{url}'")]
    Status { status: u16, url: String },

    /// Payload is not a valid product page
    #[error("Malformed product payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// Payload lists the same identifier twice
    #[error("Duplicate product id {id} in payload")]
    DuplicateId { id: u64 },

    /// Request exceeded the configured timeout
    #[error("Request timeout after {seconds}s")]
    Timeout { seconds: u64 },

    /// Source has no data to offer
    #[error("Product source unavailable: {reason}")]
    Unavailable { reason: String },
}

impl SourceError {
    /// Short, stable name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            SourceError::Client(_) => "client",
            SourceError::Transport { .. } => "transport",
            SourceError::Status { .. } => "status",
            SourceError::Decode(_) => "decode",
            SourceError::DuplicateId { .. } => "duplicate_id",
            SourceError::Timeout { .. } => "timeout",
            SourceError::Unavailable { .. } => "unavailable",
        }
    }
}
