//! Phonebook domain model.
//!
//! # Responsibility
//! - Define storage-shape entities and API-facing models for users and
//!   records, with pure mappings between them.
//! - Keep the caller contract decoupled from persistence schema details.
//!
//! # Invariants
//! - Every entity is identified by a stable integer id assigned at creation.
//! - A record always references exactly one owning user.

pub mod record;
pub mod user;
