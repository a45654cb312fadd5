//! Item domain model.
//!
//! # Invariants
//! - `owner` is fixed at creation; `ItemPatch` cannot change it.
//! - `owner` refers to a user id but is not checked by the item collection.

use crate::model::patch::FieldUpdate;
use crate::model::user::UserId;
use crate::model::validation::{require_text, ValidationError};
use crate::model::{Record, RecordId};
use serde::{Deserialize, Serialize};

/// Identifier of a stored item.
pub type ItemId = RecordId;

/// Identifier of the rental request an item was listed for.
pub type RequestId = RecordId;

/// Stored item record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    /// Only available items are returned by search.
    pub available: bool,
    pub owner: UserId,
    pub request_id: Option<RequestId>,
}

impl Item {
    /// Overwrites every field set in `patch`, leaving the rest untouched.
    pub fn apply_patch(&mut self, patch: ItemPatch) {
        patch.name.apply_to(&mut self.name);
        patch.description.apply_to(&mut self.description);
        patch.available.apply_to(&mut self.available);
        patch.request_id.apply_to(&mut self.request_id);
    }

    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner == user_id
    }
}

impl Record for Item {
    const KIND: &'static str = "item";

    fn id(&self) -> RecordId {
        self.id
    }
}

/// Input for creating an item. Owner is supplied by the caller at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub available: bool,
    #[serde(default)]
    pub request_id: Option<RequestId>,
}

impl NewItem {
    /// Creates an input with no request link.
    pub fn new(name: impl Into<String>, description: impl Into<String>, available: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            available,
            request_id: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)?;
        require_text("description", &self.description)
    }

    pub(crate) fn into_item(self, id: ItemId, owner: UserId) -> Item {
        Item {
            id,
            name: self.name,
            description: self.description,
            available: self.available,
            owner,
            request_id: self.request_id,
        }
    }
}

/// Partial update for a stored item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub name: FieldUpdate<String>,
    pub description: FieldUpdate<String>,
    pub available: FieldUpdate<bool>,
    /// `Set(None)` unlinks the item from its request.
    pub request_id: FieldUpdate<Option<RequestId>>,
}

impl ItemPatch {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = FieldUpdate::Set(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = FieldUpdate::Set(description.into());
        self
    }

    pub fn with_available(mut self, available: bool) -> Self {
        self.available = FieldUpdate::Set(available);
        self
    }

    pub fn with_request_id(mut self, request_id: Option<RequestId>) -> Self {
        self.request_id = FieldUpdate::Set(request_id);
        self
    }

    /// Validates only the fields this patch sets.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = self.name.as_set() {
            require_text("name", name)?;
        }
        if let Some(description) = self.description.as_set() {
            require_text("description", description)?;
        }
        Ok(())
    }
}
