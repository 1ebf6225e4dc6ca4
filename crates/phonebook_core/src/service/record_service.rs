//! Record use-case service.
//!
//! # Responsibility
//! - Provide user-scoped CRUD entry points for phonebook records.
//! - Enforce the validate-then-act contract: resolve the owning user first,
//!   then the record.
//!
//! # Invariants
//! - Every operation checks user existence before touching records, so an
//!   unknown user reports `UserNotFound` even when the record id is also
//!   unknown.
//! - Ownership mismatch and record nonexistence are the same failure kind;
//!   callers cannot learn that a record exists under a different user.

use crate::model::record::{NewRecord, Record, RecordId};
use crate::model::user::UserId;
use crate::repo::record_repo::RecordRepository;
use crate::repo::user_repo::UserRepository;
use crate::service::{ServiceError, ServiceResult};

/// Use-case service wrapper for user-scoped record CRUD operations.
pub struct RecordService<U: UserRepository, R: RecordRepository> {
    users: U,
    records: R,
}

impl<U: UserRepository, R: RecordRepository> RecordService<U, R> {
    /// Creates a service using the provided repository implementations.
    pub fn new(users: U, records: R) -> Self {
        Self { users, records }
    }

    /// Persists a new record owned by `user_id`.
    ///
    /// # Errors
    /// - `UserNotFound` when no user with `user_id` exists.
    pub fn add_record(&self, input: &NewRecord, user_id: UserId) -> ServiceResult<Record> {
        self.ensure_user_exists(user_id)?;
        Ok(self.records.save(user_id, input)?.into())
    }

    /// Returns all records owned by `user_id`.
    ///
    /// # Errors
    /// - `UserNotFound` when no user with `user_id` exists.
    pub fn get_user_records(&self, user_id: UserId) -> ServiceResult<Vec<Record>> {
        self.ensure_user_exists(user_id)?;
        Ok(self
            .records
            .find_by_user_id(user_id)?
            .into_iter()
            .map(Record::from)
            .collect())
    }

    /// Fetches one record by id, constrained to the owning user.
    ///
    /// # Errors
    /// - `UserNotFound` when no user with `user_id` exists.
    /// - `RecordNotFound` when the record does not exist or belongs to a
    ///   different user.
    pub fn get_user_record(&self, record_id: RecordId, user_id: UserId) -> ServiceResult<Record> {
        self.ensure_user_exists(user_id)?;
        self.records
            .find_by_user_id_and_id(user_id, record_id)?
            .map(Record::from)
            .ok_or(ServiceError::RecordNotFound)
    }

    /// Overwrites mutable fields of an owned record, preserving its id and
    /// owning user.
    ///
    /// # Errors
    /// - `UserNotFound` when no user with `user_id` exists.
    /// - `RecordNotFound` when the record does not exist or belongs to a
    ///   different user.
    pub fn update_user_record(
        &self,
        record_id: RecordId,
        user_id: UserId,
        input: &NewRecord,
    ) -> ServiceResult<Record> {
        self.ensure_user_exists(user_id)?;
        self.records
            .update(user_id, record_id, input)?
            .map(Record::from)
            .ok_or(ServiceError::RecordNotFound)
    }

    /// Removes an owned record and returns it as it existed just before
    /// deletion.
    ///
    /// # Errors
    /// - `UserNotFound` when no user with `user_id` exists.
    /// - `RecordNotFound` when the record does not exist or belongs to a
    ///   different user.
    pub fn delete_user_record(
        &self,
        record_id: RecordId,
        user_id: UserId,
    ) -> ServiceResult<Record> {
        self.ensure_user_exists(user_id)?;
        self.records
            .delete(user_id, record_id)?
            .map(Record::from)
            .ok_or(ServiceError::RecordNotFound)
    }

    /// Returns records owned by `user_id` whose phone number matches
    /// `phone_number` exactly.
    ///
    /// # Errors
    /// - `UserNotFound` when no user with `user_id` exists.
    pub fn get_user_record_by_phone_number(
        &self,
        phone_number: &str,
        user_id: UserId,
    ) -> ServiceResult<Vec<Record>> {
        self.ensure_user_exists(user_id)?;
        Ok(self
            .records
            .find_by_user_id_and_phone_number(user_id, phone_number)?
            .into_iter()
            .map(Record::from)
            .collect())
    }

    fn ensure_user_exists(&self, user_id: UserId) -> ServiceResult<()> {
        if self.users.exists(user_id)? {
            Ok(())
        } else {
            Err(ServiceError::UserNotFound)
        }
    }
}
