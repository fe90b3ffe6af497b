//! Transaction-manager port.

use async_trait::async_trait;
use futures_util::future::BoxFuture;

use crate::error::UseCaseError;

/// The work a use case hands to the transaction manager: a boxed
/// future whose first error triggers rollback.
pub type UnitOfWork<'a> = BoxFuture<'a, Result<(), UseCaseError>>;

/// Runs a unit of work atomically.
///
/// The manager commits when the work resolves `Ok` and rolls back on
/// `Err`, passing the error through unchanged. No retries happen at
/// this boundary; whatever retry policy the backing store has is its
/// own concern.
#[async_trait]
pub trait TransactionManager: Send + Sync {
    /// Executes the work inside one transaction.
    async fn run(&self, work: UnitOfWork<'_>) -> Result<(), UseCaseError>;
}
