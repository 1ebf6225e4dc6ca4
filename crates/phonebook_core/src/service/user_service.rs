//! User use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for user lifecycle operations.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::user::{NewUser, User, UserId};
use crate::repo::user_repo::UserRepository;
use crate::service::{ServiceError, ServiceResult};

/// Use-case service wrapper for user CRUD operations.
pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists a new user and returns it with its assigned id.
    pub fn add_user(&self, input: &NewUser) -> ServiceResult<User> {
        Ok(self.repo.save(input)?.into())
    }

    /// Returns all known users in no specified order.
    pub fn get_users(&self) -> ServiceResult<Vec<User>> {
        Ok(self.repo.find_all()?.into_iter().map(User::from).collect())
    }

    /// Fetches one user by id.
    ///
    /// # Errors
    /// - `UserNotFound` when no user with `user_id` exists.
    pub fn get_user(&self, user_id: UserId) -> ServiceResult<User> {
        self.repo
            .find_by_id(user_id)?
            .map(User::from)
            .ok_or(ServiceError::UserNotFound)
    }

    /// Returns all users whose name contains `fragment`.
    ///
    /// Matching is a case-sensitive substring search.
    pub fn get_user_by_name(&self, fragment: &str) -> ServiceResult<Vec<User>> {
        Ok(self
            .repo
            .find_by_name_containing(fragment)?
            .into_iter()
            .map(User::from)
            .collect())
    }

    /// Overwrites mutable fields of an existing user, preserving its id.
    ///
    /// # Errors
    /// - `UserNotFound` when no user with `user_id` exists.
    pub fn update_user(&self, user_id: UserId, input: &NewUser) -> ServiceResult<User> {
        self.repo
            .update(user_id, input)?
            .map(User::from)
            .ok_or(ServiceError::UserNotFound)
    }

    /// Removes a user and returns it as it existed just before deletion.
    ///
    /// Owned records are removed by the schema-level cascade in the same
    /// transaction.
    ///
    /// # Errors
    /// - `UserNotFound` when no user with `user_id` exists.
    pub fn delete_user(&self, user_id: UserId) -> ServiceResult<User> {
        self.repo
            .delete(user_id)?
            .map(User::from)
            .ok_or(ServiceError::UserNotFound)
    }
}
