//! Substring matching over item name and description.
//!
//! # Invariants
//! - Blank queries match nothing.
//! - Unavailable items never match.
//! - Matching is case-insensitive substring containment, not tokenized.

use crate::model::item::Item;

/// Normalized search needle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemQuery {
    needle: String,
}

impl ItemQuery {
    /// Builds a query from user text.
    ///
    /// Returns `None` for empty or whitespace-only text so callers can
    /// short-circuit to an empty result.
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        Some(Self {
            needle: trimmed.to_lowercase(),
        })
    }

    pub fn needle(&self) -> &str {
        &self.needle
    }

    pub fn matches(&self, item: &Item) -> bool {
        item.available
            && (contains_ignore_case(&item.name, &self.needle)
                || contains_ignore_case(&item.description, &self.needle))
    }
}

fn contains_ignore_case(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

#[cfg(test)]
mod tests {
    use super::ItemQuery;
    use crate::model::item::Item;

    fn item(name: &str, description: &str, available: bool) -> Item {
        Item {
            id: 1,
            name: name.to_string(),
            description: description.to_string(),
            available,
            owner: 1,
            request_id: None,
        }
    }

    #[test]
    fn blank_text_yields_no_query() {
        assert!(ItemQuery::parse("").is_none());
        assert!(ItemQuery::parse("   ").is_none());
    }

    #[test]
    fn parse_trims_and_lowercases() {
        let query = ItemQuery::parse("  DrIll ").unwrap();
        assert_eq!(query.needle(), "drill");
    }

    #[test]
    fn matches_name_or_description_ignoring_case() {
        let query = ItemQuery::parse("drill").unwrap();
        assert!(query.matches(&item("Power DRILL", "heavy", true)));
        assert!(query.matches(&item("Tool", "a hammer drill", true)));
        assert!(!query.matches(&item("Saw", "sharp", true)));
    }

    #[test]
    fn unavailable_items_never_match() {
        let query = ItemQuery::parse("drill").unwrap();
        assert!(!query.matches(&item("Drill", "drill", false)));
    }
}
