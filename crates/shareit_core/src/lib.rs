//! Core domain logic for ShareIt.
//! This crate is the single source of truth for user/item invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use logging::{
    default_log_level, init_logging, logging_status, LoggingConfig, LoggingError,
};
pub use model::item::{Item, ItemId, ItemPatch, NewItem, RequestId};
pub use model::patch::FieldUpdate;
pub use model::user::{NewUser, User, UserId, UserPatch};
pub use model::validation::ValidationError;
pub use model::{Record, RecordId};
pub use repo::email_index::EmailIndex;
pub use repo::entity_store::{EntityStore, NoIndex, RecordIndex};
pub use repo::error::{ErrorKind, RepoError, RepoResult};
pub use repo::identity::IdentityGenerator;
pub use repo::item_repo::{InMemoryItemRepository, ItemRepository};
pub use repo::user_repo::{InMemoryUserRepository, UserDirectory, UserRepository};
pub use search::item_query::ItemQuery;
pub use service::item_service::ItemService;
pub use service::user_service::UserService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
