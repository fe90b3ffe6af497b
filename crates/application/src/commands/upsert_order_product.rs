//! Persist one order line.

use std::sync::Arc;

use async_trait::async_trait;
use domain::OrderProduct;

use crate::error::RepositoryError;

/// Port for writing order lines.
#[async_trait]
pub trait OrderProductUpserter: Send + Sync {
    /// Insert-or-update keyed by (order id, product id). Idempotent.
    async fn upsert_order_product(&self, line: &OrderProduct) -> Result<(), RepositoryError>;
}

/// Write intent carrying the line to persist.
#[derive(Debug, Clone)]
pub struct UpsertOrderProductCommand {
    line: OrderProduct,
}

impl UpsertOrderProductCommand {
    /// Wraps the line.
    pub fn new(line: OrderProduct) -> Self {
        Self { line }
    }

    /// Returns the line.
    pub fn line(&self) -> &OrderProduct {
        &self.line
    }
}

/// Forwards commands to the port.
#[derive(Clone)]
pub struct UpsertOrderProductHandler {
    repo: Arc<dyn OrderProductUpserter>,
}

impl UpsertOrderProductHandler {
    /// Creates a handler over the given repository.
    pub fn new(repo: Arc<dyn OrderProductUpserter>) -> Self {
        Self { repo }
    }

    /// Executes the command.
    pub async fn handle(&self, command: &UpsertOrderProductCommand) -> Result<(), RepositoryError> {
        self.repo.upsert_order_product(command.line()).await
    }
}
