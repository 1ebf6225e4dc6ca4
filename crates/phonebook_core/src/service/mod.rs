//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Translate absence into typed not-found failures with fixed messages.
//!
//! # Invariants
//! - Not-found messages never include the offending id; callers must not be
//!   able to probe which ids exist from message content.
//! - Record operations resolve the owning user before the record, so an
//!   invalid user always reports `UserNotFound` even when the record id is
//!   also invalid.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod record_service;
pub mod user_service;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service-layer failure for user and record operations.
///
/// The two not-found kinds are the whole caller-visible error contract; any
/// persistence fault passes through unchanged as `Db`.
#[derive(Debug)]
pub enum ServiceError {
    UserNotFound,
    RecordNotFound,
    Db(DbError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UserNotFound => write!(f, "user not found"),
            Self::RecordNotFound => write!(f, "record not found"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UserNotFound | Self::RecordNotFound => None,
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for ServiceError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}
