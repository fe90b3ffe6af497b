//! Catalog product.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{Price, ProductDescription, ProductId, ProductTitle, Tags};

/// A product in the catalog.
///
/// Read-mostly from the order flow's perspective; the only thing orders
/// take from it is the identity and the current catalog price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    title: ProductTitle,
    description: ProductDescription,
    tags: Tags,
    price: Price,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Creates a product with a freshly generated id.
    pub fn new(
        id: ProductId,
        title: ProductTitle,
        description: ProductDescription,
        price: Price,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            tags: Tags::new(),
            price,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Replaces the tag set.
    pub fn with_tags(mut self, tags: Tags) -> Self {
        self.tags = tags;
        self
    }

    /// Returns the product id.
    pub fn id(&self) -> ProductId {
        self.id
    }

    /// Returns the title.
    pub fn title(&self) -> &ProductTitle {
        &self.title
    }

    /// Returns the description.
    pub fn description(&self) -> &ProductDescription {
        &self.description
    }

    /// Returns the tags.
    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    /// Returns the current catalog price.
    pub fn price(&self) -> Price {
        self.price
    }

    /// Returns the creation time.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last update time.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the soft-delete time, if deleted.
    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}
