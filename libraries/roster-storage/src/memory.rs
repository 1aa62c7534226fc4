//! Lock-guarded in-memory user collection

use crate::StorageError;
use roster_core::{Result, RosterError, User, UserId, UserInput, UserRepository};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

#[derive(Debug)]
struct Inner {
    users: Vec<User>,
    next_id: u64,
}

impl Inner {
    fn position(&self, id: UserId) -> Option<usize> {
        self.users.iter().position(|u| u.id == id)
    }

    fn email_taken(&self, email: &str, except: Option<UserId>) -> bool {
        self.users
            .iter()
            .any(|u| u.email == email && Some(u.id) != except)
    }
}

/// In-memory user store
///
/// Users are kept in insertion order. All mutations take the write lock, so
/// the email check, id assignment and insert of `create` happen as one step.
/// The id counter starts at 1 and is never rewound, even after deletes.
#[derive(Debug)]
pub struct MemoryUserStore {
    inner: RwLock<Inner>,
}

impl MemoryUserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                users: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Number of stored users
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.users.len())
    }

    /// Whether the store holds no users
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.read()?.users.is_empty())
    }

    fn read(&self) -> std::result::Result<RwLockReadGuard<'_, Inner>, StorageError> {
        self.inner.read().map_err(|_| StorageError::Poisoned)
    }

    fn write(&self) -> std::result::Result<RwLockWriteGuard<'_, Inner>, StorageError> {
        self.inner.write().map_err(|_| StorageError::Poisoned)
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserRepository for MemoryUserStore {
    fn list(&self) -> Result<Vec<User>> {
        Ok(self.read()?.users.clone())
    }

    fn get(&self, id: UserId) -> Result<User> {
        self.read()?
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(RosterError::NotFound)
    }

    fn create(&self, input: UserInput) -> Result<User> {
        let mut inner = self.write()?;

        if inner.email_taken(input.normalized_email(), None) {
            return Err(RosterError::DuplicateEmail);
        }

        let id = UserId::new(inner.next_id);
        inner.next_id += 1;

        let user = User::new(id, &input);
        inner.users.push(user.clone());

        debug!(id = %user.id, email = %user.email, "Stored new user");
        Ok(user)
    }

    fn update(&self, id: UserId, input: UserInput) -> Result<User> {
        let mut inner = self.write()?;

        let index = inner.position(id).ok_or(RosterError::NotFound)?;

        if inner.email_taken(input.normalized_email(), Some(id)) {
            return Err(RosterError::DuplicateEmail);
        }

        let user = &mut inner.users[index];
        user.apply(&input);

        debug!(id = %id, "Updated user");
        Ok(user.clone())
    }

    fn delete(&self, id: UserId) -> Result<User> {
        let mut inner = self.write()?;

        let index = inner.position(id).ok_or(RosterError::NotFound)?;
        let user = inner.users.remove(index);

        debug!(id = %id, remaining = inner.users.len(), "Deleted user");
        Ok(user)
    }
}
