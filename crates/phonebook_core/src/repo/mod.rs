//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for users and records.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Absence is reported as `Option::None`, never as an error; semantic
//!   not-found classification belongs to the service layer.
//! - Compound mutations (read-modify or read-delete) run inside one scoped
//!   transaction.

pub mod record_repo;
pub mod user_repo;
