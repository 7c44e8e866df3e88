//! Client error types

use thiserror::Error;

/// Client error type
///
/// Nothing here is fatal: every variant is recoverable by the user
/// retrying manually, and no automatic retry is attempted.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (network, timeout, connection)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Resource not found (404); carries the server's message
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rejected request (400); carries the server's message verbatim
    #[error("{0}")]
    Validation(String),

    /// Server-side failure (5xx and anything unclassified)
    #[error("Server error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
