//! Property-based tests for the user store
//!
//! Drives the store with random operation sequences and checks the id and
//! email invariants after every step.

use proptest::prelude::*;
use roster_core::{RosterError, UserId, UserInput, UserRepository};
use roster_storage::MemoryUserStore;
use std::collections::HashSet;

#[derive(Debug, Clone)]
enum Op {
    Create { name: String, email: String },
    Update { id: u64, name: String, email: String },
    Delete { id: u64 },
}

// ===== Helpers =====

fn arbitrary_name() -> impl Strategy<Value = String> {
    "[ ]{0,2}[A-Za-z]{1,8}[ ]{0,2}"
}

// Small email space so collisions actually happen
fn arbitrary_email() -> impl Strategy<Value = String> {
    "[ ]{0,1}[a-d]@x\\.com[ ]{0,1}"
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (arbitrary_name(), arbitrary_email()).prop_map(|(name, email)| Op::Create { name, email }),
        (1u64..12, arbitrary_name(), arbitrary_email())
            .prop_map(|(id, name, email)| Op::Update { id, name, email }),
        (1u64..12).prop_map(|id| Op::Delete { id }),
    ]
}

fn input(name: &str, email: &str) -> UserInput {
    UserInput::from_fields(Some(name), Some(email)).unwrap()
}

// ===== Property Tests =====

proptest! {
    /// Property: create followed by get returns trimmed fields and the same id
    #[test]
    fn create_then_get_round_trips(name in arbitrary_name(), email in arbitrary_email()) {
        let store = MemoryUserStore::new();
        let created = store.create(input(&name, &email)).unwrap();
        let fetched = store.get(created.id).unwrap();

        prop_assert_eq!(&fetched.name, name.trim());
        prop_assert_eq!(&fetched.email, email.trim());
        prop_assert_eq!(fetched.id, created.id);
    }

    /// Property: emails stay unique and ids stay unique and increasing
    #[test]
    fn invariants_hold_across_operations(ops in prop::collection::vec(arbitrary_op(), 1..60)) {
        let store = MemoryUserStore::new();
        let mut highest_id = 0u64;

        for op in ops {
            match op {
                Op::Create { name, email } => {
                    let before = store.len().unwrap();
                    match store.create(input(&name, &email)) {
                        Ok(user) => {
                            prop_assert!(user.id.get() > highest_id, "id was reused or rewound");
                            highest_id = user.id.get();
                        }
                        Err(err) => {
                            prop_assert_eq!(err, RosterError::DuplicateEmail);
                            prop_assert_eq!(store.len().unwrap(), before);
                        }
                    }
                }
                Op::Update { id, name, email } => {
                    let id = UserId::new(id);
                    let before = store.get(id).ok();
                    if let Ok(updated) = store.update(id, input(&name, &email)) {
                        let before = before.unwrap();
                        prop_assert_eq!(updated.id, before.id);
                        prop_assert_eq!(updated.created_at, before.created_at);
                    }
                }
                Op::Delete { id } => {
                    let id = UserId::new(id);
                    if store.delete(id).is_ok() {
                        prop_assert_eq!(store.get(id), Err(RosterError::NotFound));
                    }
                }
            }

            let users = store.list().unwrap();
            let emails: HashSet<_> = users.iter().map(|u| u.email.as_str()).collect();
            prop_assert_eq!(emails.len(), users.len(), "duplicate email stored");

            let ids: Vec<_> = users.iter().map(|u| u.id).collect();
            let mut sorted = ids.clone();
            sorted.sort();
            prop_assert_eq!(ids, sorted, "list is not in insertion order");
        }
    }
}
