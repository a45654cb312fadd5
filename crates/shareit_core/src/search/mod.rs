//! Item search entry points.
//!
//! # Responsibility
//! - Normalize free-text queries and decide which items match.
//! - Keep match rules out of the repository scan loop.

pub mod item_query;
