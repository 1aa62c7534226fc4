//! Roster Core
//!
//! Domain types, traits, and error handling shared by the Roster server,
//! storage layer and client.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `UserId`, `UserInput`
//! - **Wire Envelope**: `ApiResponse`, the `{success, data, error, ...}` wrapper
//! - **Core Traits**: `UserRepository`
//! - **Error Handling**: Unified `RosterError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use roster_core::{UserId, UserInput};
//!
//! let input = UserInput::from_fields(Some("  Ann "), Some("ann@x.com")).unwrap();
//! assert_eq!(input.name, "  Ann ");
//!
//! assert_eq!(UserId::from_path("42"), Some(UserId::new(42)));
//! assert_eq!(UserId::from_path("abc"), None);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

pub use error::{ErrorKind, Result, RosterError};
pub use traits::UserRepository;
pub use types::{ApiResponse, User, UserId, UserInput};
