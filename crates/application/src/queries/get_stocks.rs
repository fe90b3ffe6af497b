//! Fetch all stock rows for a product.

use std::sync::Arc;

use async_trait::async_trait;
use domain::{ProductId, Stocks};

use crate::error::RepositoryError;
use crate::query_options::StocksQueryOptions;

/// Port for reading warehouse stock.
#[async_trait]
pub trait StocksGetter: Send + Sync {
    /// Fetches every warehouse row for the product in the options.
    /// A product with no rows yields an empty collection, not an
    /// error.
    async fn get_stocks(&self, options: &StocksQueryOptions) -> Result<Stocks, RepositoryError>;
}

/// Fetch intent.
///
/// Takes an already-typed [`ProductId`], so there is nothing left to
/// validate.
#[derive(Debug, Clone)]
pub struct GetStocksQuery {
    options: StocksQueryOptions,
}

impl GetStocksQuery {
    /// All rows for one product.
    pub fn by_product(product_id: ProductId) -> Self {
        Self {
            options: StocksQueryOptions::by_product(product_id),
        }
    }

    /// Returns the resolved options.
    pub fn options(&self) -> &StocksQueryOptions {
        &self.options
    }
}

/// Forwards queries to the port.
#[derive(Clone)]
pub struct GetStocksHandler {
    repo: Arc<dyn StocksGetter>,
}

impl GetStocksHandler {
    /// Creates a handler over the given repository.
    pub fn new(repo: Arc<dyn StocksGetter>) -> Self {
        Self { repo }
    }

    /// Executes the query.
    pub async fn handle(&self, query: &GetStocksQuery) -> Result<Stocks, RepositoryError> {
        self.repo.get_stocks(query.options()).await
    }
}
