/// Core error types for Roster
use thiserror::Error;

/// Result type alias using `RosterError`
pub type Result<T> = std::result::Result<T, RosterError>;

/// Core error type for Roster
///
/// The `Display` strings double as the wire messages placed in the
/// `error` field of a failure envelope.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// No user with the requested id
    #[error("User not found")]
    NotFound,

    /// Another stored user already holds the email
    #[error("Email already exists")]
    DuplicateEmail,

    /// `name` or `email` missing or empty
    #[error("Name and email are required")]
    MissingField,

    /// Unexpected fault inside the core
    #[error("{0}")]
    Internal(String),
}

/// Coarse category of a `RosterError`, used by transports to pick a status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unknown id
    NotFound,
    /// Caller-supplied data rejected
    Validation,
    /// Anything unexpected
    Internal,
}

impl RosterError {
    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound => ErrorKind::NotFound,
            Self::DuplicateEmail | Self::MissingField => ErrorKind::Validation,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }
}
