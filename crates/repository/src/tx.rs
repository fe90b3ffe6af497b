//! Pass-through transaction manager.

use async_trait::async_trait;
use tracing::warn;

use application::error::UseCaseError;
use application::tx::{TransactionManager, UnitOfWork};

/// Runs the unit of work with no transactional envelope.
///
/// The in-memory adapters apply each write immediately, so a failing
/// unit of work leaves earlier writes in place. Tests relying on
/// rollback must assert on call counters instead of final state; a SQL
/// adapter would wrap the work in a real transaction here.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTransactionManager;

impl NoopTransactionManager {
    /// Creates the manager.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TransactionManager for NoopTransactionManager {
    async fn run(&self, work: UnitOfWork<'_>) -> Result<(), UseCaseError> {
        let result = work.await;
        if let Err(err) = &result {
            warn!(error = %err, "unit of work failed; no rollback available");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use application::error::RepositoryError;

    #[tokio::test]
    async fn propagates_success_and_failure() {
        let tx = NoopTransactionManager::new();

        let ok = tx.run(Box::pin(async { Ok(()) })).await;
        assert!(ok.is_ok());

        let err = tx
            .run(Box::pin(async {
                Err(UseCaseError::Repository(RepositoryError::OrderNotFound))
            }))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            UseCaseError::Repository(RepositoryError::OrderNotFound)
        ));
    }
}
