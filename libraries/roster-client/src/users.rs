//! User operations against a Roster server.

use crate::client::send_error;
use crate::error::{ClientError, Result};
use reqwest::{Client, RequestBuilder};
use roster_core::{ApiResponse, User, UserId, UserInput};
use serde::de::DeserializeOwned;
use tracing::debug;

/// User client for a Roster server.
pub struct UsersClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> UsersClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Get all users in insertion order.
    pub async fn list(&self) -> Result<Vec<User>> {
        let url = self.collection_url();
        debug!(url = %url, "Fetching users");

        let users: Vec<User> = self.execute(self.http.get(&url)).await?;
        debug!(count = users.len(), "Fetched users");
        Ok(users)
    }

    /// Get a single user.
    pub async fn get(&self, id: UserId) -> Result<User> {
        let url = self.item_url(id);
        debug!(url = %url, "Fetching user");

        self.execute(self.http.get(&url)).await
    }

    /// Create a user.
    ///
    /// Blank fields are rejected locally without contacting the server.
    pub async fn create(&self, name: &str, email: &str) -> Result<User> {
        let input = validate(name, email)?;
        let url = self.collection_url();
        debug!(url = %url, "Creating user");

        self.execute(self.http.post(&url).json(&input)).await
    }

    /// Replace a user's name and email.
    ///
    /// Blank fields are rejected locally without contacting the server.
    pub async fn update(&self, id: UserId, name: &str, email: &str) -> Result<User> {
        let input = validate(name, email)?;
        let url = self.item_url(id);
        debug!(url = %url, "Updating user");

        self.execute(self.http.put(&url).json(&input)).await
    }

    /// Delete a user, returning the removed record.
    pub async fn delete(&self, id: UserId) -> Result<User> {
        let url = self.item_url(id);
        debug!(url = %url, "Deleting user");

        self.execute(self.http.delete(&url)).await
    }

    fn collection_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    fn item_url(&self, id: UserId) -> String {
        format!("{}/users/{}", self.base_url, id)
    }

    /// Send a request and unwrap the response envelope.
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await.map_err(send_error)?;
        let status = response.status();
        let body = response.text().await?;

        let envelope: ApiResponse<T> = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(e) if status.is_success() => {
                return Err(ClientError::Parse(format!(
                    "Failed to parse user response: {}",
                    e
                )));
            }
            Err(_) => {
                return Err(ClientError::Api {
                    status: status.as_u16(),
                    message: body,
                });
            }
        };

        if status.is_success() && envelope.success {
            envelope
                .data
                .ok_or_else(|| ClientError::Parse("Response envelope has no data".into()))
        } else {
            Err(ClientError::Api {
                status: status.as_u16(),
                message: envelope
                    .error
                    .unwrap_or_else(|| status.to_string()),
            })
        }
    }
}

fn validate(name: &str, email: &str) -> Result<UserInput> {
    UserInput::from_fields(Some(name), Some(email))
        .map_err(|e| ClientError::Validation(e.to_string()))
}
