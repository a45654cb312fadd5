//! Per-collection identifier generation.
//!
//! # Invariants
//! - Issued ids are strictly increasing within one generator.
//! - An id is never issued twice, even after the record holding the current
//!   maximum is deleted.

use crate::model::RecordId;

/// Generates ids as one past the largest id the collection has seen.
#[derive(Debug, Default)]
pub struct IdentityGenerator {
    high_water: RecordId,
}

impl IdentityGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next id for a collection currently holding `current_ids`.
    ///
    /// Returns `1` for an empty collection that never issued an id. Does not
    /// reserve the id; call [`IdentityGenerator::mark_issued`] once the
    /// record is committed.
    pub fn next<I>(&self, current_ids: I) -> RecordId
    where
        I: IntoIterator<Item = RecordId>,
    {
        let current_max = current_ids.into_iter().max().unwrap_or(0);
        current_max.max(self.high_water) + 1
    }

    pub fn mark_issued(&mut self, id: RecordId) {
        self.high_water = self.high_water.max(id);
    }

    /// Largest id issued so far, `0` when none.
    pub fn high_water(&self) -> RecordId {
        self.high_water
    }
}

#[cfg(test)]
mod tests {
    use super::IdentityGenerator;

    #[test]
    fn empty_collection_starts_at_one() {
        assert_eq!(IdentityGenerator::new().next([]), 1);
    }

    #[test]
    fn next_is_one_past_current_maximum() {
        let ids = IdentityGenerator::new();
        assert_eq!(ids.next([3, 9, 4]), 10);
    }

    #[test]
    fn deleted_maximum_is_not_reissued() {
        let mut ids = IdentityGenerator::new();
        ids.mark_issued(1);
        ids.mark_issued(2);

        // Record 2 was deleted; only 1 remains.
        assert_eq!(ids.next([1]), 3);
        assert_eq!(ids.high_water(), 2);
    }
}
