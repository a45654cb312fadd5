//! Case-insensitive email uniqueness index for users.
//!
//! # Responsibility
//! - Map normalized email to the id of the user holding it.
//! - Reject a write that would give two users the same email.
//!
//! # Invariants
//! - Keys are lowercase; lookups normalize before comparing.
//! - Every stored user has exactly one entry; deleted users have none.
//! - An entry owned by the writing user itself is never a conflict.

use crate::model::user::{User, UserId};
use crate::repo::entity_store::RecordIndex;
use crate::repo::error::{RepoError, RepoResult};
use std::collections::HashMap;

const EMAIL_IN_USE_MESSAGE: &str = "email is already in use";

/// Secondary index from normalized email to owning user id.
#[derive(Debug, Default)]
pub struct EmailIndex {
    owners: HashMap<String, UserId>,
}

impl EmailIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails with `Conflict` when `email` belongs to a user other than
    /// `exclude`.
    ///
    /// `exclude` is `None` on create and the user's own id on update. An
    /// absent email never conflicts.
    pub fn check_email(&self, email: Option<&str>, exclude: Option<UserId>) -> RepoResult<()> {
        let Some(email) = email else {
            return Ok(());
        };

        match self.owners.get(&normalize_email(email)) {
            Some(owner) if Some(*owner) != exclude => {
                Err(RepoError::Conflict(EMAIL_IN_USE_MESSAGE.to_string()))
            }
            _ => Ok(()),
        }
    }

    pub fn reserve(&mut self, email: &str, owner: UserId) {
        self.owners.insert(normalize_email(email), owner);
    }

    /// Drops the entry for `email` if it still belongs to `owner`.
    pub fn release(&mut self, email: &str, owner: UserId) {
        let key = normalize_email(email);
        if self.owners.get(&key) == Some(&owner) {
            self.owners.remove(&key);
        }
    }

    pub fn owner_of(&self, email: &str) -> Option<UserId> {
        self.owners.get(&normalize_email(email)).copied()
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

impl RecordIndex<User> for EmailIndex {
    fn check(&self, candidate: &User, current: Option<&User>) -> RepoResult<()> {
        // Only a changed email needs re-validation.
        if let Some(current) = current {
            if current.email == candidate.email {
                return Ok(());
            }
        }
        self.check_email(Some(candidate.email.as_str()), current.map(|user| user.id))
    }

    fn commit(&mut self, previous: Option<&User>, next: &User) {
        if let Some(previous) = previous {
            self.release(&previous.email, previous.id);
        }
        self.reserve(&next.email, next.id);
    }

    fn retract(&mut self, record: &User) {
        self.release(&record.email, record.id);
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::EmailIndex;
    use crate::repo::error::RepoError;

    #[test]
    fn lookup_ignores_case() {
        let mut index = EmailIndex::new();
        index.reserve("A@X.com", 1);

        assert_eq!(index.owner_of("a@x.COM"), Some(1));
        assert!(matches!(
            index.check_email(Some("a@x.com"), None),
            Err(RepoError::Conflict(_))
        ));
    }

    #[test]
    fn own_entry_is_not_a_conflict() {
        let mut index = EmailIndex::new();
        index.reserve("ann@x.com", 1);

        assert!(index.check_email(Some("ANN@x.com"), Some(1)).is_ok());
        assert!(index.check_email(Some("ann@x.com"), Some(2)).is_err());
    }

    #[test]
    fn absent_email_never_conflicts() {
        let mut index = EmailIndex::new();
        index.reserve("ann@x.com", 1);
        assert!(index.check_email(None, None).is_ok());
    }

    #[test]
    fn release_ignores_entries_of_other_owners() {
        let mut index = EmailIndex::new();
        index.reserve("ann@x.com", 1);

        index.release("ann@x.com", 2);
        assert_eq!(index.owner_of("ann@x.com"), Some(1));

        index.release("Ann@X.com", 1);
        assert!(index.is_empty());
    }
}
