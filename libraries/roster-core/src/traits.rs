/// Core traits for Roster
use crate::error::Result;
use crate::types::{User, UserId, UserInput};

/// User repository trait
///
/// Implementers own the authoritative user collection and enforce the
/// id and email uniqueness invariants. Every method hands out copies;
/// callers never mutate stored records directly.
///
/// Implementations must be safe to share between request handlers, so
/// mutations have to be serialized internally.
pub trait UserRepository: Send + Sync {
    /// All users in insertion order
    fn list(&self) -> Result<Vec<User>>;

    /// Look up a single user
    ///
    /// # Errors
    /// `RosterError::NotFound` if no user has this id
    fn get(&self, id: UserId) -> Result<User>;

    /// Store a new user and return it
    ///
    /// # Errors
    /// `RosterError::DuplicateEmail` if the email is already taken
    fn create(&self, input: UserInput) -> Result<User>;

    /// Replace name and email of an existing user
    ///
    /// # Errors
    /// `RosterError::NotFound` if the id is absent,
    /// `RosterError::DuplicateEmail` if a different user holds the email
    fn update(&self, id: UserId, input: UserInput) -> Result<User>;

    /// Remove a user and return the removed record
    ///
    /// # Errors
    /// `RosterError::NotFound` if no user has this id
    fn delete(&self, id: UserId) -> Result<User>;
}
