//! Error types for the Roster client.

use thiserror::Error;

/// Errors that can occur when talking to a Roster server.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a failure envelope or error status
    #[error("Server error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Input rejected before sending
    #[error("{0}")]
    Validation(String),

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    Unreachable(String),
}

impl ClientError {
    /// Whether the server reported the user as missing
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
