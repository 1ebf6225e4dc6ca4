//! User domain model.
//!
//! # Invariants
//! - `id` is assigned by storage at creation and never reused for another
//!   user.

use serde::{Deserialize, Serialize};

/// Stable identifier for a user.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type UserId = i64;

/// Storage-shape user row as read from and written to the `users` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEntity {
    pub id: UserId,
    pub name: String,
}

/// API-facing user model returned by service operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

/// Mutable user fields supplied by callers on create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<UserEntity> for User {
    fn from(entity: UserEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}
