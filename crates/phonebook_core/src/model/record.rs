//! Phonebook record domain model.
//!
//! # Invariants
//! - `id` is assigned by storage at creation and never reused for another
//!   record.
//! - `user_id` references the owning user for the whole record lifetime.

use crate::model::user::UserId;
use serde::{Deserialize, Serialize};

/// Stable identifier for a phonebook record.
pub type RecordId = i64;

/// Storage-shape record row as read from and written to the `records` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordEntity {
    pub id: RecordId,
    pub phone_owner: String,
    pub phone_number: String,
    pub user_id: UserId,
}

/// API-facing record model returned by service operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub phone_owner: String,
    pub phone_number: String,
    pub user_id: UserId,
}

/// Mutable record fields supplied by callers on create and update.
///
/// The owning user is passed separately; it is not a caller-mutable field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    pub phone_owner: String,
    pub phone_number: String,
}

impl NewRecord {
    pub fn new(phone_owner: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            phone_owner: phone_owner.into(),
            phone_number: phone_number.into(),
        }
    }
}

impl From<RecordEntity> for Record {
    fn from(entity: RecordEntity) -> Self {
        Self {
            id: entity.id,
            phone_owner: entity.phone_owner,
            phone_number: entity.phone_number,
            user_id: entity.user_id,
        }
    }
}
