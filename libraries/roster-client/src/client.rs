//! Main Roster client.

use crate::error::{ClientError, Result};
use crate::types::{ClientConfig, HealthResponse};
use crate::users::UsersClient;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Main client for interacting with a Roster server.
///
/// Cheap to share by reference; user operations are reached through
/// [`RosterClient::users`].
///
/// # Example
///
/// ```ignore
/// use roster_client::{ClientConfig, RosterClient};
///
/// let client = RosterClient::new(ClientConfig::new("http://localhost:5000"))?;
/// let users = client.users().list().await?;
/// println!("Found {} users", users.len());
/// ```
#[derive(Debug, Clone)]
pub struct RosterClient {
    http: Client,
    base_url: String,
}

impl RosterClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.url.trim().is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.url.trim().trim_end_matches('/').to_string();
        let parsed = Url::parse(&base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Roster/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Get the normalized server URL.
    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Check that the backend is running.
    ///
    /// Returns the status message reported by `GET /`.
    pub async fn health(&self) -> Result<String> {
        let url = format!("{}/", self.base_url);
        debug!(url = %url, "Checking server health");

        let response = self.http.get(&url).send().await.map_err(send_error)?;
        let status = response.status();

        if status.is_success() {
            let health: HealthResponse = response.json().await.map_err(|e| {
                ClientError::Parse(format!("Failed to parse health response: {}", e))
            })?;
            info!(message = %health.message, "Connected to server");
            Ok(health.message)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::Api {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Get a client for user operations.
    pub fn users(&self) -> UsersClient<'_> {
        UsersClient::new(&self.http, &self.base_url)
    }
}

/// Classify a transport failure.
pub(crate) fn send_error(e: reqwest::Error) -> ClientError {
    if e.is_connect() || e.is_timeout() {
        ClientError::Unreachable(e.to_string())
    } else {
        ClientError::Request(e)
    }
}
