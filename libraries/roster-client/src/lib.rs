//! Roster Client
//!
//! HTTP client library for the Roster user API.
//!
//! # Features
//!
//! - **Health**: check that the backend is up
//! - **Users**: list, fetch, create, update and delete users
//! - **Validation**: blank names or emails are rejected before any request
//!
//! # Example
//!
//! ```ignore
//! use roster_client::{ClientConfig, RosterClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RosterClient::new(ClientConfig::new("http://localhost:5000"))?;
//!
//!     println!("{}", client.health().await?);
//!
//!     let users = client.users();
//!     let ann = users.create("Ann", "ann@x.com").await?;
//!     users.update(ann.id, "Ann B", "ann@x.com").await?;
//!
//!     for user in users.list().await? {
//!         println!("{} {} <{}>", user.id, user.name, user.email);
//!     }
//!
//!     users.delete(ann.id).await?;
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;
mod users;

pub use client::RosterClient;
pub use error::{ClientError, Result};
pub use types::{ClientConfig, HealthResponse};
pub use users::UsersClient;

pub use roster_core::{User, UserId};
