//! User domain model.
//!
//! # Invariants
//! - `id` is assigned by the user collection and never changes.
//! - `email` is unique across users under case-insensitive comparison; the
//!   repository, not this type, enforces that.

use crate::model::patch::FieldUpdate;
use crate::model::validation::{require_email, require_text, ValidationError};
use crate::model::{Record, RecordId};
use serde::{Deserialize, Serialize};

/// Identifier of a stored user.
pub type UserId = RecordId;

/// Stored user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Kept as entered; comparisons lowercase it.
    pub email: String,
}

impl User {
    /// Overwrites every field set in `patch`, leaving the rest untouched.
    pub fn apply_patch(&mut self, patch: UserPatch) {
        patch.name.apply_to(&mut self.name);
        patch.email.apply_to(&mut self.email);
    }
}

impl Record for User {
    const KIND: &'static str = "user";

    fn id(&self) -> RecordId {
        self.id
    }
}

/// Input for creating a user. The collection assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Checks that name is present and email is well-formed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)?;
        require_email(&self.email)
    }

    pub(crate) fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

/// Partial update for a stored user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: FieldUpdate<String>,
    pub email: FieldUpdate<String>,
}

impl UserPatch {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = FieldUpdate::Set(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = FieldUpdate::Set(email.into());
        self
    }

    /// Validates only the fields this patch sets.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = self.name.as_set() {
            require_text("name", name)?;
        }
        if let Some(email) = self.email.as_set() {
            require_email(email)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{NewUser, User, UserPatch};
    use crate::model::validation::ValidationError;

    #[test]
    fn apply_patch_overwrites_only_set_fields() {
        let mut user = NewUser::new("Ann", "ann@x.com").into_user(1);
        user.apply_patch(UserPatch::default().with_name("Annie"));

        assert_eq!(
            user,
            User {
                id: 1,
                name: "Annie".to_string(),
                email: "ann@x.com".to_string(),
            }
        );
    }

    #[test]
    fn empty_patch_is_valid() {
        assert!(UserPatch::default().validate().is_ok());
    }

    #[test]
    fn patch_rejects_blank_name() {
        let err = UserPatch::default().with_name(" ").validate().unwrap_err();
        assert_eq!(err, ValidationError::BlankField("name"));
    }
}
