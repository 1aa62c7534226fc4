//! Types for Roster API requests and responses.

use serde::Deserialize;

/// Configuration for connecting to a Roster server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the server (e.g., "http://localhost:5000")
    pub url: String,
    /// Total request timeout in seconds
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Create a config with the default timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_secs: 30,
        }
    }

    /// Override the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// Body of `GET /`.
#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}
