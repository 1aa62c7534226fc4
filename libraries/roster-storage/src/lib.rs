//! Roster Storage
//!
//! In-memory user store for Roster.
//!
//! The store is the exclusive owner of the user collection and the id
//! counter. Nothing survives a restart.
//!
//! # Example
//!
//! ```rust
//! use roster_core::{UserInput, UserRepository};
//! use roster_storage::MemoryUserStore;
//!
//! let store = MemoryUserStore::new();
//! let input = UserInput::from_fields(Some("Ann"), Some("ann@x.com")).unwrap();
//! let user = store.create(input).unwrap();
//!
//! assert_eq!(user.id.get(), 1);
//! assert_eq!(store.list().unwrap().len(), 1);
//! ```

mod error;
mod memory;

pub use error::StorageError;
pub use memory::MemoryUserStore;
