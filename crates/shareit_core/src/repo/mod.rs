//! Repository layer: in-memory entity collections and their contracts.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for users and items.
//! - Own identifier generation, email uniqueness and ownership checks.
//!
//! # Invariants
//! - Each collection serializes its writes behind one lock.
//! - Repository APIs return semantic errors (`NotFound`, `Conflict`,
//!   `Forbidden`); there is no transport error class.

pub mod email_index;
pub mod entity_store;
pub mod error;
pub mod identity;
pub mod item_repo;
pub mod user_repo;
