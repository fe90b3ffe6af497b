//! Fetch one order.

use std::sync::Arc;

use async_trait::async_trait;
use domain::{Order, OrderId, ValidationError};
use uuid::Uuid;

use crate::error::RepositoryError;
use crate::query_options::OrderQueryOptions;

/// Port for reading orders.
#[async_trait]
pub trait OrderGetter: Send + Sync {
    /// Fetches the order selected by the options, honoring the
    /// row-lock hint. Must return
    /// [`RepositoryError::OrderNotFound`] when absent.
    async fn get_order(&self, options: &OrderQueryOptions) -> Result<Order, RepositoryError>;
}

/// Validated fetch intent.
#[derive(Debug, Clone)]
pub struct GetOrderQuery {
    options: OrderQueryOptions,
}

impl GetOrderQuery {
    /// Plain fetch by id; rejects the nil UUID.
    pub fn by_id(order_uuid: Uuid) -> Result<Self, ValidationError> {
        let order_id = OrderId::new(order_uuid)?;

        Ok(Self {
            options: OrderQueryOptions::by_id(order_id),
        })
    }

    /// Fetch with a row lock for the surrounding transaction.
    pub fn for_update(order_uuid: Uuid) -> Result<Self, ValidationError> {
        let order_id = OrderId::new(order_uuid)?;

        Ok(Self {
            options: OrderQueryOptions::by_id(order_id).for_update(),
        })
    }

    /// Returns the resolved options.
    pub fn options(&self) -> &OrderQueryOptions {
        &self.options
    }
}

/// Forwards validated queries to the port.
#[derive(Clone)]
pub struct GetOrderHandler {
    repo: Arc<dyn OrderGetter>,
}

impl GetOrderHandler {
    /// Creates a handler over the given repository.
    pub fn new(repo: Arc<dyn OrderGetter>) -> Self {
        Self { repo }
    }

    /// Executes the query.
    pub async fn handle(&self, query: &GetOrderQuery) -> Result<Order, RepositoryError> {
        self.repo.get_order(query.options()).await
    }
}
