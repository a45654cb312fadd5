//! Item repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide CRUD over items with owner-only mutation.
//! - Provide ownership filtering and availability-aware text search.
//!
//! # Invariants
//! - Only the owner may update an item; the owner field never changes.
//! - `find_by_owner` and `search` are linear scans; there is no owner or
//!   text index.

use crate::model::item::{Item, ItemId, ItemPatch, NewItem};
use crate::model::user::UserId;
use crate::model::Record;
use crate::repo::entity_store::EntityStore;
use crate::repo::error::{RepoError, RepoResult};
use crate::search::item_query::ItemQuery;
use log::debug;

/// Repository interface for item CRUD and query operations.
pub trait ItemRepository {
    /// Stores a new item owned by `owner`. The owner is not validated here.
    fn create(&self, item: NewItem, owner: UserId) -> RepoResult<Item>;
    /// Applies `patch` to item `id` on behalf of `requester`.
    ///
    /// Fails with `NotFound` for a missing item and `Forbidden` when
    /// `requester` is not the owner.
    fn update(&self, id: ItemId, patch: ItemPatch, requester: UserId) -> RepoResult<Item>;
    fn find_by_id(&self, id: ItemId) -> RepoResult<Item>;
    fn find_all(&self) -> Vec<Item>;
    /// Returns every item owned by `owner`.
    fn find_by_owner(&self, owner: UserId) -> Vec<Item>;
    /// Returns available items whose name or description contains `text`,
    /// ignoring case. Blank text yields no items.
    fn search(&self, text: &str) -> Vec<Item>;
    fn delete(&self, id: ItemId) -> bool;
}

/// In-memory item repository.
#[derive(Default)]
pub struct InMemoryItemRepository {
    store: EntityStore<Item>,
}

impl InMemoryItemRepository {
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

impl ItemRepository for InMemoryItemRepository {
    fn create(&self, item: NewItem, owner: UserId) -> RepoResult<Item> {
        self.store.create(|id| item.into_item(id, owner))
    }

    fn update(&self, id: ItemId, patch: ItemPatch, requester: UserId) -> RepoResult<Item> {
        self.store.update(id, |current| {
            if !current.is_owned_by(requester) {
                return Err(RepoError::Forbidden {
                    entity: Item::KIND,
                    id,
                    requester,
                });
            }
            let mut next = current.clone();
            next.apply_patch(patch);
            Ok(next)
        })
    }

    fn find_by_id(&self, id: ItemId) -> RepoResult<Item> {
        self.store.find_by_id(id)
    }

    fn find_all(&self) -> Vec<Item> {
        self.store.find_all()
    }

    fn find_by_owner(&self, owner: UserId) -> Vec<Item> {
        self.store.filter(|item| item.is_owned_by(owner))
    }

    fn search(&self, text: &str) -> Vec<Item> {
        let Some(query) = ItemQuery::parse(text) else {
            return Vec::new();
        };

        let hits = self.store.filter(|item| query.matches(item));
        debug!(
            "event=item_search module=repo status=ok hit_count={}",
            hits.len()
        );
        hits
    }

    fn delete(&self, id: ItemId) -> bool {
        self.store.delete(id)
    }
}

impl<R: ItemRepository + ?Sized> ItemRepository for &R {
    fn create(&self, item: NewItem, owner: UserId) -> RepoResult<Item> {
        (**self).create(item, owner)
    }

    fn update(&self, id: ItemId, patch: ItemPatch, requester: UserId) -> RepoResult<Item> {
        (**self).update(id, patch, requester)
    }

    fn find_by_id(&self, id: ItemId) -> RepoResult<Item> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> Vec<Item> {
        (**self).find_all()
    }

    fn find_by_owner(&self, owner: UserId) -> Vec<Item> {
        (**self).find_by_owner(owner)
    }

    fn search(&self, text: &str) -> Vec<Item> {
        (**self).search(text)
    }

    fn delete(&self, id: ItemId) -> bool {
        (**self).delete(id)
    }
}
