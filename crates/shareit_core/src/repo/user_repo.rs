//! User repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide CRUD over users with case-insensitive email uniqueness.
//! - Answer user-existence checks for item workflows.
//!
//! # Invariants
//! - At most one user holds a given email (case-insensitive).
//! - Deleting a user frees its email immediately.

use crate::model::user::{NewUser, User, UserId, UserPatch};
use crate::repo::email_index::EmailIndex;
use crate::repo::entity_store::EntityStore;
use crate::repo::error::RepoResult;
use std::sync::Arc;

/// Repository interface for user CRUD operations.
pub trait UserRepository {
    /// Stores a new user and returns it with its assigned id.
    fn create(&self, user: NewUser) -> RepoResult<User>;
    /// Applies `patch` to user `id` and returns the updated record.
    fn update(&self, id: UserId, patch: UserPatch) -> RepoResult<User>;
    fn find_by_id(&self, id: UserId) -> RepoResult<User>;
    fn find_all(&self) -> Vec<User>;
    /// Removes user `id`; returns `false` when it did not exist.
    fn delete(&self, id: UserId) -> bool;
}

/// User-existence capability consumed by item workflows.
pub trait UserDirectory {
    fn user_exists(&self, id: UserId) -> bool;
}

/// In-memory user repository backed by an email-indexed collection.
#[derive(Default)]
pub struct InMemoryUserRepository {
    store: EntityStore<User, EmailIndex>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn create(&self, user: NewUser) -> RepoResult<User> {
        self.store.create(|id| user.into_user(id))
    }

    fn update(&self, id: UserId, patch: UserPatch) -> RepoResult<User> {
        self.store.update(id, |current| {
            let mut next = current.clone();
            next.apply_patch(patch);
            Ok(next)
        })
    }

    fn find_by_id(&self, id: UserId) -> RepoResult<User> {
        self.store.find_by_id(id)
    }

    fn find_all(&self) -> Vec<User> {
        self.store.find_all()
    }

    fn delete(&self, id: UserId) -> bool {
        self.store.delete(id)
    }
}

impl UserDirectory for InMemoryUserRepository {
    fn user_exists(&self, id: UserId) -> bool {
        self.store.contains(id)
    }
}

impl<R: UserRepository + ?Sized> UserRepository for &R {
    fn create(&self, user: NewUser) -> RepoResult<User> {
        (**self).create(user)
    }

    fn update(&self, id: UserId, patch: UserPatch) -> RepoResult<User> {
        (**self).update(id, patch)
    }

    fn find_by_id(&self, id: UserId) -> RepoResult<User> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> Vec<User> {
        (**self).find_all()
    }

    fn delete(&self, id: UserId) -> bool {
        (**self).delete(id)
    }
}

impl<D: UserDirectory + ?Sized> UserDirectory for &D {
    fn user_exists(&self, id: UserId) -> bool {
        (**self).user_exists(id)
    }
}

impl<D: UserDirectory + ?Sized> UserDirectory for Arc<D> {
    fn user_exists(&self, id: UserId) -> bool {
        (**self).user_exists(id)
    }
}
