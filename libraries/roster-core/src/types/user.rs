/// User domain types
use crate::error::{Result, RosterError};
use crate::types::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier, assigned by the store
    pub id: UserId,

    /// Display name (trimmed)
    pub name: String,

    /// Email address (trimmed, unique)
    pub email: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp, absent until the first update
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Build a fresh record from validated input
    ///
    /// Name and email are trimmed; `created_at` is stamped now.
    pub fn new(id: UserId, input: &UserInput) -> Self {
        Self {
            id,
            name: input.name.trim().to_string(),
            email: input.email.trim().to_string(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Overwrite name and email, stamping `updated_at`
    ///
    /// `id` and `created_at` are left untouched.
    pub fn apply(&mut self, input: &UserInput) {
        self.name = input.name.trim().to_string();
        self.email = input.email.trim().to_string();
        self.updated_at = Some(Utc::now());
    }
}

/// Validated create/update payload
///
/// Holds the caller's values as given; trimming happens when the store
/// writes them. Only `from_fields` builds one, so it is serialize-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserInput {
    /// Requested name
    pub name: String,

    /// Requested email
    pub email: String,
}

impl UserInput {
    /// Build input from optional request fields
    ///
    /// # Errors
    /// `RosterError::MissingField` if either field is absent or blank
    pub fn from_fields(name: Option<&str>, email: Option<&str>) -> Result<Self> {
        match (name, email) {
            (Some(name), Some(email)) if !name.trim().is_empty() && !email.trim().is_empty() => {
                Ok(Self {
                    name: name.to_string(),
                    email: email.to_string(),
                })
            }
            _ => Err(RosterError::MissingField),
        }
    }

    /// Email as it will be stored
    pub fn normalized_email(&self) -> &str {
        self.email.trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, email: &str) -> UserInput {
        UserInput::from_fields(Some(name), Some(email)).unwrap()
    }

    #[test]
    fn test_from_fields_requires_both() {
        assert_eq!(
            UserInput::from_fields(None, Some("a@x.com")),
            Err(RosterError::MissingField)
        );
        assert_eq!(
            UserInput::from_fields(Some("Ann"), None),
            Err(RosterError::MissingField)
        );
        assert_eq!(
            UserInput::from_fields(Some(""), Some("a@x.com")),
            Err(RosterError::MissingField)
        );
        assert_eq!(
            UserInput::from_fields(Some("Ann"), Some("   ")),
            Err(RosterError::MissingField)
        );
    }

    // Deserializing would bypass the blank-field check in `from_fields`
    static_assertions::assert_not_impl_any!(UserInput: serde::de::DeserializeOwned);

    #[test]
    fn test_serializes_as_request_body() {
        let value = serde_json::to_value(input("Ann", "ann@x.com")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "name": "Ann", "email": "ann@x.com" })
        );
    }

    #[test]
    fn test_new_trims_fields() {
        let user = User::new(UserId::new(1), &input("  Ann ", " ann@x.com\n"));
        assert_eq!(user.name, "Ann");
        assert_eq!(user.email, "ann@x.com");
        assert!(user.updated_at.is_none());
    }

    #[test]
    fn test_apply_keeps_identity() {
        let mut user = User::new(UserId::new(5), &input("Ann", "ann@x.com"));
        let created_at = user.created_at;

        user.apply(&input(" Ann B ", "annb@x.com"));

        assert_eq!(user.id, UserId::new(5));
        assert_eq!(user.created_at, created_at);
        assert_eq!(user.name, "Ann B");
        assert_eq!(user.email, "annb@x.com");
        assert!(user.updated_at.is_some());
    }

    #[test]
    fn test_json_uses_camel_case_and_omits_updated_at() {
        let user = User::new(UserId::new(1), &input("Ann", "ann@x.com"));
        let value = serde_json::to_value(&user).unwrap();

        assert_eq!(value["id"], 1);
        assert!(value["createdAt"].is_string());
        assert!(value.get("updatedAt").is_none());
        assert!(value.get("created_at").is_none());
    }
}
