//! Repository error taxonomy.
//!
//! Every variant is terminal: the caller must change its input before
//! retrying. Transport layers classify errors through [`RepoError::kind`]
//! instead of matching on messages.

use crate::model::user::UserId;
use crate::model::validation::ValidationError;
use crate::model::RecordId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Error returned by repositories and services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// Input rejected before reaching storage.
    Validation(ValidationError),
    /// Referenced record does not exist.
    NotFound { entity: &'static str, id: RecordId },
    /// Uniqueness constraint violated.
    Conflict(String),
    /// Requester does not own the record it tried to mutate.
    Forbidden {
        entity: &'static str,
        id: RecordId,
        requester: UserId,
    },
}

/// Coarse classification consumed by transport-level error mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    Forbidden,
}

impl RepoError {
    pub fn not_found(entity: &'static str, id: RecordId) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Conflict(_) => ErrorKind::Conflict,
            Self::Forbidden { .. } => ErrorKind::Forbidden,
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound { entity, id } => write!(f, "{entity} with id {id} not found"),
            Self::Conflict(message) => write!(f, "{message}"),
            Self::Forbidden {
                entity,
                id,
                requester,
            } => write!(
                f,
                "user {requester} is not the owner of {entity} {id} and cannot modify it"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound { .. } | Self::Conflict(_) | Self::Forbidden { .. } => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{ErrorKind, RepoError};
    use crate::model::validation::ValidationError;
    use std::error::Error;

    #[test]
    fn messages_are_human_readable() {
        assert_eq!(
            RepoError::not_found("user", 3).to_string(),
            "user with id 3 not found"
        );
        let forbidden = RepoError::Forbidden {
            entity: "item",
            id: 2,
            requester: 7,
        };
        assert_eq!(
            forbidden.to_string(),
            "user 7 is not the owner of item 2 and cannot modify it"
        );
    }

    #[test]
    fn validation_errors_keep_their_source() {
        let err = RepoError::from(ValidationError::InvalidEmail);
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.source().is_some());
    }
}
