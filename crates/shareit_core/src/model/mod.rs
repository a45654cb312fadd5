//! Domain model for the item-sharing core.
//!
//! # Responsibility
//! - Define the canonical `User` and `Item` records held by repositories.
//! - Define creation inputs and partial-update patches for both records.
//! - Own field validation rules applied before records reach storage.
//!
//! # Invariants
//! - Stored records always carry a store-assigned identifier.
//! - Creation inputs (`NewUser`, `NewItem`) carry no identifier.
//! - Item ownership is not patchable.

pub mod item;
pub mod patch;
pub mod user;
pub mod validation;

/// Integer identifier assigned by an entity collection.
pub type RecordId = u64;

/// Record kept by an entity collection.
pub trait Record: Clone {
    /// Entity name used in errors and log events.
    const KIND: &'static str;

    fn id(&self) -> RecordId;
}
