//! Persist an order aggregate.

use std::sync::Arc;

use async_trait::async_trait;
use domain::Order;

use crate::error::RepositoryError;

/// Port for writing orders.
#[async_trait]
pub trait OrderUpserter: Send + Sync {
    /// Insert-or-update keyed by the order id. Idempotent.
    async fn upsert_order(&self, order: &Order) -> Result<(), RepositoryError>;
}

/// Write intent carrying the aggregate to persist.
#[derive(Debug, Clone)]
pub struct UpsertOrderCommand {
    order: Order,
}

impl UpsertOrderCommand {
    /// Wraps the aggregate.
    pub fn new(order: Order) -> Self {
        Self { order }
    }

    /// Returns the aggregate.
    pub fn order(&self) -> &Order {
        &self.order
    }
}

/// Forwards commands to the port.
#[derive(Clone)]
pub struct UpsertOrderHandler {
    repo: Arc<dyn OrderUpserter>,
}

impl UpsertOrderHandler {
    /// Creates a handler over the given repository.
    pub fn new(repo: Arc<dyn OrderUpserter>) -> Self {
        Self { repo }
    }

    /// Executes the command.
    pub async fn handle(&self, command: &UpsertOrderCommand) -> Result<(), RepositoryError> {
        self.repo.upsert_order(command.order()).await
    }
}
