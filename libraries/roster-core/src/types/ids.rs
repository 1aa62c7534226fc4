/// ID types for Roster entities
use serde::{Deserialize, Serialize};
use std::fmt;

/// User identifier
///
/// Positive integer assigned by the store from a monotonic counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Wrap a raw id
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the inner value
    pub fn get(self) -> u64 {
        self.0
    }

    /// Parse an id taken from a URL path segment
    ///
    /// Returns `None` for anything that is not a plain decimal number.
    /// Callers treat `None` as an id that matches no user.
    pub fn from_path(segment: &str) -> Option<Self> {
        segment.parse::<u64>().ok().map(Self)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_accepts_decimal() {
        assert_eq!(UserId::from_path("1"), Some(UserId::new(1)));
        assert_eq!(UserId::from_path("007"), Some(UserId::new(7)));
    }

    #[test]
    fn test_from_path_rejects_garbage() {
        assert_eq!(UserId::from_path(""), None);
        assert_eq!(UserId::from_path("abc"), None);
        assert_eq!(UserId::from_path("-1"), None);
        assert_eq!(UserId::from_path("12abc"), None);
        assert_eq!(UserId::from_path("99999999999999999999999"), None);
    }

    #[test]
    fn test_serializes_as_bare_number() {
        let json = serde_json::to_string(&UserId::new(3)).unwrap();
        assert_eq!(json, "3");
    }
}
