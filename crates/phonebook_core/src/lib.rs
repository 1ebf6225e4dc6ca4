//! Core domain logic for the multi-tenant phonebook.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::record::{NewRecord, Record, RecordEntity, RecordId};
pub use model::user::{NewUser, User, UserEntity, UserId};
pub use repo::record_repo::{RecordRepository, SqliteRecordRepository};
pub use repo::user_repo::{SqliteUserRepository, UserRepository};
pub use service::record_service::RecordService;
pub use service::user_service::UserService;
pub use service::{ServiceError, ServiceResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
