/// Storage-specific errors
use thiserror::Error;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// A previous writer panicked while holding the lock
    #[error("User store lock poisoned")]
    Poisoned,
}

impl From<StorageError> for roster_core::RosterError {
    fn from(err: StorageError) -> Self {
        roster_core::RosterError::internal(err.to_string())
    }
}
