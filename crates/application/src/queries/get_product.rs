//! Fetch one product.

use std::sync::Arc;

use async_trait::async_trait;
use domain::{Product, ProductId, ValidationError};
use uuid::Uuid;

use crate::error::RepositoryError;
use crate::query_options::ProductQueryOptions;

/// Port for reading catalog products.
#[async_trait]
pub trait ProductGetter: Send + Sync {
    /// Fetches the product selected by the options; must return
    /// [`RepositoryError::ProductNotFound`] when absent.
    async fn get_product(&self, options: &ProductQueryOptions) -> Result<Product, RepositoryError>;
}

/// Validated fetch intent.
#[derive(Debug, Clone)]
pub struct GetProductQuery {
    options: ProductQueryOptions,
}

impl GetProductQuery {
    /// Fetch by id; rejects the nil UUID.
    pub fn by_id(product_uuid: Uuid) -> Result<Self, ValidationError> {
        let product_id = ProductId::new(product_uuid)?;

        Ok(Self {
            options: ProductQueryOptions::by_id(product_id),
        })
    }

    /// Returns the resolved options.
    pub fn options(&self) -> &ProductQueryOptions {
        &self.options
    }
}

/// Forwards validated queries to the port.
#[derive(Clone)]
pub struct GetProductHandler {
    repo: Arc<dyn ProductGetter>,
}

impl GetProductHandler {
    /// Creates a handler over the given repository.
    pub fn new(repo: Arc<dyn ProductGetter>) -> Self {
        Self { repo }
    }

    /// Executes the query.
    pub async fn handle(&self, query: &GetProductQuery) -> Result<Product, RepositoryError> {
        self.repo.get_product(query.options()).await
    }
}
