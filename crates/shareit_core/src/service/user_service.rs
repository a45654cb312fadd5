//! User use-case service.
//!
//! # Responsibility
//! - Validate user input before it reaches the repository.
//! - Delegate persistence and uniqueness checks to the repository.
//!
//! # Invariants
//! - Invalid input is rejected with `Validation` and never stored.
//! - Repository errors are returned unchanged.

use crate::model::user::{NewUser, User, UserId, UserPatch};
use crate::repo::error::RepoResult;
use crate::repo::user_repo::UserRepository;
use log::info;

/// Use-case service wrapper for user operations.
pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates and stores a new user.
    ///
    /// # Errors
    /// - `Validation` for a blank name or malformed email.
    /// - `Conflict` when the email is already taken.
    pub fn create_user(&self, user: NewUser) -> RepoResult<User> {
        user.validate()?;
        let created = self.repo.create(user)?;
        info!(
            "event=user_create module=service status=ok user_id={}",
            created.id
        );
        Ok(created)
    }

    /// Validates the provided fields and applies them to user `id`.
    pub fn update_user(&self, id: UserId, patch: UserPatch) -> RepoResult<User> {
        patch.validate()?;
        let updated = self.repo.update(id, patch)?;
        info!(
            "event=user_update module=service status=ok user_id={}",
            updated.id
        );
        Ok(updated)
    }

    pub fn get_user(&self, id: UserId) -> RepoResult<User> {
        self.repo.find_by_id(id)
    }

    pub fn list_users(&self) -> Vec<User> {
        self.repo.find_all()
    }

    /// Deletes user `id`. Deleting a missing user is not an error.
    pub fn delete_user(&self, id: UserId) {
        let removed = self.repo.delete(id);
        info!(
            "event=user_delete module=service status=ok user_id={} removed={}",
            id, removed
        );
    }
}
