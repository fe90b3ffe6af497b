//! Application error taxonomy.
//!
//! Wrapping goes through `#[from]` conversions so the underlying kind
//! stays matchable: a `RepositoryError::OrderNotFound` is still
//! recognizable after it bubbles through a use case.

use domain::{OrderError, ValidationError};
use thiserror::Error;

/// Errors surfaced by repository adapters.
///
/// Not-found kinds are distinguishable so callers can branch on them
/// (create-on-not-found); everything else is opaque infrastructure
/// failure that triggers rollback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// No order row for the requested id.
    #[error("order record not found")]
    OrderNotFound,

    /// No product row for the requested id.
    #[error("product record not found")]
    ProductNotFound,

    /// No user row for the requested email.
    #[error("user record not found")]
    UserNotFound,

    /// Opaque backing-store failure.
    #[error("storage failure: {0}")]
    Storage(String),
}

impl RepositoryError {
    /// Returns true for any of the not-found kinds.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::OrderNotFound | Self::ProductNotFound | Self::UserNotFound
        )
    }
}

/// Errors returned by use cases.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UseCaseError {
    /// A value object rejected its input.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The order aggregate rejected the operation.
    #[error(transparent)]
    Order(#[from] OrderError),

    /// A repository call failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Registration hit an email that already belongs to a user.
    #[error("user already exists")]
    UserAlreadyExists,
}

/// A use case was built without one of its required dependencies.
///
/// Raised by builders at construction time; this is a programming
/// error, not a runtime condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The named dependency was never supplied to the builder.
    #[error("missing dependency: {0}")]
    MissingDependency(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_kinds_are_distinguishable() {
        assert!(RepositoryError::OrderNotFound.is_not_found());
        assert!(RepositoryError::UserNotFound.is_not_found());
        assert!(!RepositoryError::Storage("boom".into()).is_not_found());
    }

    #[test]
    fn wrapping_preserves_kind() {
        let err = UseCaseError::from(RepositoryError::OrderNotFound);
        assert!(matches!(
            err,
            UseCaseError::Repository(RepositoryError::OrderNotFound)
        ));

        let err = UseCaseError::from(OrderError::NotEnoughStock {
            requested: 5,
            available: 2,
        });
        assert!(matches!(
            err,
            UseCaseError::Order(OrderError::NotEnoughStock { .. })
        ));
    }
}
