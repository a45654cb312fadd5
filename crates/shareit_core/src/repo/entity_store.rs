//! Generic in-memory entity collection.
//!
//! # Responsibility
//! - Own every record of one entity type, keyed by store-assigned id.
//! - Run id generation, index validation and insertion as one serialized
//!   write.
//! - Keep any secondary index in step with inserts, updates and deletes.
//!
//! # Invariants
//! - All mutations hold the write lock for their full read-modify-write
//!   sequence; readers never observe a partially applied write.
//! - A rejected write leaves records, index and id generator unchanged.
//! - `delete` is idempotent.

use crate::model::{Record, RecordId};
use crate::repo::error::{RepoError, RepoResult};
use crate::repo::identity::IdentityGenerator;
use log::{debug, warn};
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// Secondary index maintained alongside a collection.
///
/// `check` runs under the collection write lock before a record is stored;
/// `commit` and `retract` run after the collection has accepted the write.
pub trait RecordIndex<T>: Default {
    /// Validates `candidate`. `current` is the stored version on update and
    /// `None` on create.
    fn check(&self, candidate: &T, current: Option<&T>) -> RepoResult<()>;
    fn commit(&mut self, previous: Option<&T>, next: &T);
    fn retract(&mut self, record: &T);
}

/// Index for collections without secondary constraints.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoIndex;

impl<T> RecordIndex<T> for NoIndex {
    fn check(&self, _candidate: &T, _current: Option<&T>) -> RepoResult<()> {
        Ok(())
    }

    fn commit(&mut self, _previous: Option<&T>, _next: &T) {}

    fn retract(&mut self, _record: &T) {}
}

struct Collection<T, I> {
    records: BTreeMap<RecordId, T>,
    ids: IdentityGenerator,
    index: I,
}

/// Lock-guarded id-to-record map with an optional secondary index.
pub struct EntityStore<T, I = NoIndex> {
    state: RwLock<Collection<T, I>>,
}

impl<T: Record, I: RecordIndex<T>> Default for EntityStore<T, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record, I: RecordIndex<T>> EntityStore<T, I> {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(Collection {
                records: BTreeMap::new(),
                ids: IdentityGenerator::new(),
                index: I::default(),
            }),
        }
    }

    /// Assigns the next id, builds the record with it and stores it.
    ///
    /// `build` must return a record carrying the id it was given.
    ///
    /// # Errors
    /// - Returns the index error (e.g. `Conflict`) when validation fails.
    pub fn create<F>(&self, build: F) -> RepoResult<T>
    where
        F: FnOnce(RecordId) -> T,
    {
        let mut guard = self.state.write();
        let state = &mut *guard;

        let id = state
            .ids
            .next(state.records.last_key_value().map(|(id, _)| *id));
        let record = build(id);
        debug_assert_eq!(record.id(), id);

        if let Err(err) = state.index.check(&record, None) {
            return Err(rejected::<T>("record_create", id, err));
        }

        state.index.commit(None, &record);
        state.ids.mark_issued(id);
        state.records.insert(id, record.clone());
        debug!(
            "event=record_create module=repo entity={} status=ok id={}",
            T::KIND,
            id
        );
        Ok(record)
    }

    /// Replaces the record `id` with the value produced by `change`.
    ///
    /// `change` sees the stored record and may reject the write (for example
    /// on an ownership mismatch); its error is returned unchanged.
    ///
    /// # Errors
    /// - `NotFound` when `id` is absent.
    /// - Any error from `change` or from index validation.
    pub fn update<F>(&self, id: RecordId, change: F) -> RepoResult<T>
    where
        F: FnOnce(&T) -> RepoResult<T>,
    {
        let mut guard = self.state.write();
        let state = &mut *guard;

        let Some(current) = state.records.get(&id) else {
            return Err(rejected::<T>(
                "record_update",
                id,
                RepoError::not_found(T::KIND, id),
            ));
        };

        let next = match change(current) {
            Ok(next) => next,
            Err(err) => return Err(rejected::<T>("record_update", id, err)),
        };
        debug_assert_eq!(next.id(), id);

        if let Err(err) = state.index.check(&next, Some(current)) {
            return Err(rejected::<T>("record_update", id, err));
        }

        state.index.commit(Some(current), &next);
        state.records.insert(id, next.clone());
        debug!(
            "event=record_update module=repo entity={} status=ok id={}",
            T::KIND,
            id
        );
        Ok(next)
    }

    /// Returns a copy of record `id`, or `NotFound`.
    pub fn find_by_id(&self, id: RecordId) -> RepoResult<T> {
        self.get(id)
            .ok_or_else(|| RepoError::not_found(T::KIND, id))
    }

    /// Returns a copy of record `id` when present.
    pub fn get(&self, id: RecordId) -> Option<T> {
        self.state.read().records.get(&id).cloned()
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.state.read().records.contains_key(&id)
    }

    /// Returns copies of all records in ascending id order.
    pub fn find_all(&self) -> Vec<T> {
        self.state.read().records.values().cloned().collect()
    }

    /// Returns copies of the records matching `predicate`, in ascending id
    /// order. Scans the whole collection.
    pub fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.state
            .read()
            .records
            .values()
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }

    /// Removes record `id` and its index entries.
    ///
    /// Returns `false` when nothing was stored under `id`.
    pub fn delete(&self, id: RecordId) -> bool {
        let mut guard = self.state.write();
        let state = &mut *guard;

        match state.records.remove(&id) {
            Some(record) => {
                state.index.retract(&record);
                debug!(
                    "event=record_delete module=repo entity={} status=ok id={}",
                    T::KIND,
                    id
                );
                true
            }
            None => {
                debug!(
                    "event=record_delete module=repo entity={} status=noop id={}",
                    T::KIND,
                    id
                );
                false
            }
        }
    }

    pub fn len(&self) -> usize {
        self.state.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().records.is_empty()
    }
}

fn rejected<T: Record>(event: &str, id: RecordId, err: RepoError) -> RepoError {
    warn!(
        "event={} module=repo entity={} status=rejected id={} error_kind={:?}",
        event,
        T::KIND,
        id,
        err.kind()
    );
    err
}

#[cfg(test)]
mod tests {
    use super::{EntityStore, RecordIndex};
    use crate::model::{Record, RecordId};
    use crate::repo::error::{ErrorKind, RepoError, RepoResult};

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Label {
        id: RecordId,
        text: String,
    }

    impl Record for Label {
        const KIND: &'static str = "label";

        fn id(&self) -> RecordId {
            self.id
        }
    }

    fn label(id: RecordId, text: &str) -> Label {
        Label {
            id,
            text: text.to_string(),
        }
    }

    /// Rejects any label whose text is already stored.
    #[derive(Default)]
    struct UniqueText {
        texts: Vec<String>,
    }

    impl RecordIndex<Label> for UniqueText {
        fn check(&self, candidate: &Label, _current: Option<&Label>) -> RepoResult<()> {
            if self.texts.contains(&candidate.text) {
                return Err(RepoError::Conflict("duplicate text".to_string()));
            }
            Ok(())
        }

        fn commit(&mut self, previous: Option<&Label>, next: &Label) {
            if let Some(previous) = previous {
                self.texts.retain(|text| text != &previous.text);
            }
            self.texts.push(next.text.clone());
        }

        fn retract(&mut self, record: &Label) {
            self.texts.retain(|text| text != &record.text);
        }
    }

    #[test]
    fn create_assigns_sequential_ids() {
        let store: EntityStore<Label> = EntityStore::new();
        let first = store.create(|id| label(id, "a")).unwrap();
        let second = store.create(|id| label(id, "b")).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.find_all(), vec![first, second]);
    }

    #[test]
    fn ids_are_not_reused_after_deleting_the_maximum() {
        let store: EntityStore<Label> = EntityStore::new();
        store.create(|id| label(id, "a")).unwrap();
        let second = store.create(|id| label(id, "b")).unwrap();

        assert!(store.delete(second.id));
        let third = store.create(|id| label(id, "c")).unwrap();
        assert_eq!(third.id, 3);
    }

    #[test]
    fn rejected_create_leaves_store_unchanged() {
        let store: EntityStore<Label, UniqueText> = EntityStore::new();
        store.create(|id| label(id, "same")).unwrap();

        let err = store.create(|id| label(id, "same")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(store.len(), 1);

        let next = store.create(|id| label(id, "other")).unwrap();
        assert_eq!(next.id, 2);
    }

    #[test]
    fn update_missing_record_is_not_found() {
        let store: EntityStore<Label> = EntityStore::new();
        let err = store
            .update(5, |current| Ok(current.clone()))
            .unwrap_err();
        assert_eq!(err, RepoError::not_found("label", 5));
    }

    #[test]
    fn update_error_from_change_is_returned_and_nothing_changes() {
        let store: EntityStore<Label> = EntityStore::new();
        let stored = store.create(|id| label(id, "keep")).unwrap();

        let err = store
            .update(stored.id, |_| Err(RepoError::Conflict("nope".to_string())))
            .unwrap_err();
        assert_eq!(err, RepoError::Conflict("nope".to_string()));
        assert_eq!(store.find_by_id(stored.id).unwrap(), stored);
    }

    #[test]
    fn delete_retracts_index_entries_and_is_idempotent() {
        let store: EntityStore<Label, UniqueText> = EntityStore::new();
        let stored = store.create(|id| label(id, "x")).unwrap();

        assert!(store.delete(stored.id));
        assert!(!store.delete(stored.id));
        assert!(store.create(|id| label(id, "x")).is_ok());
    }

    #[test]
    fn filter_scans_in_id_order() {
        let store: EntityStore<Label> = EntityStore::new();
        for text in ["keep-1", "drop", "keep-2"] {
            store.create(|id| label(id, text)).unwrap();
        }

        let kept = store.filter(|record| record.text.starts_with("keep"));
        let ids = kept.iter().map(|record| record.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 3]);
    }
}
