//! Core use-case services.
//!
//! # Responsibility
//! - Validate caller input and orchestrate repository calls.
//! - Keep transport layers decoupled from storage details.

pub mod item_service;
pub mod user_service;
