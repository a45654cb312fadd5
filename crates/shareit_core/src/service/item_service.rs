//! Item use-case service.
//!
//! # Responsibility
//! - Validate item input and reject items for unknown owners.
//! - Delegate storage, ownership checks and queries to the repository.
//!
//! # Invariants
//! - An item is only created for an owner the user directory knows.
//! - Repository errors are returned unchanged.

use crate::model::item::{Item, ItemId, ItemPatch, NewItem};
use crate::model::user::{User, UserId};
use crate::model::Record;
use crate::repo::error::{RepoError, RepoResult};
use crate::repo::item_repo::ItemRepository;
use crate::repo::user_repo::UserDirectory;
use log::{info, warn};

/// Use-case service wrapper for item operations.
pub struct ItemService<I: ItemRepository, U: UserDirectory> {
    items: I,
    users: U,
}

impl<I: ItemRepository, U: UserDirectory> ItemService<I, U> {
    pub fn new(items: I, users: U) -> Self {
        Self { items, users }
    }

    /// Validates and stores a new item owned by `owner`.
    ///
    /// # Errors
    /// - `Validation` for a blank name or description.
    /// - `NotFound` when `owner` is not a known user.
    pub fn create_item(&self, item: NewItem, owner: UserId) -> RepoResult<Item> {
        item.validate()?;
        if !self.users.user_exists(owner) {
            warn!(
                "event=item_create module=service status=rejected error_kind=NotFound owner_id={}",
                owner
            );
            return Err(RepoError::not_found(User::KIND, owner));
        }

        let created = self.items.create(item, owner)?;
        info!(
            "event=item_create module=service status=ok item_id={} owner_id={}",
            created.id, owner
        );
        Ok(created)
    }

    /// Validates the provided fields and applies them on behalf of
    /// `requester`.
    ///
    /// # Errors
    /// - `Validation` for a blank name or description in the patch.
    /// - `NotFound` for a missing item, `Forbidden` for a non-owner.
    pub fn update_item(
        &self,
        item_id: ItemId,
        patch: ItemPatch,
        requester: UserId,
    ) -> RepoResult<Item> {
        patch.validate()?;
        let updated = self.items.update(item_id, patch, requester)?;
        info!(
            "event=item_update module=service status=ok item_id={} requester_id={}",
            item_id, requester
        );
        Ok(updated)
    }

    pub fn get_item(&self, item_id: ItemId) -> RepoResult<Item> {
        self.items.find_by_id(item_id)
    }

    /// Lists every item owned by `owner`.
    pub fn list_owner_items(&self, owner: UserId) -> Vec<Item> {
        self.items.find_by_owner(owner)
    }

    /// Searches available items by name or description.
    pub fn search_items(&self, text: &str) -> Vec<Item> {
        self.items.search(text)
    }

    pub fn delete_item(&self, item_id: ItemId) {
        let removed = self.items.delete(item_id);
        info!(
            "event=item_delete module=service status=ok item_id={} removed={}",
            item_id, removed
        );
    }
}
