//! Product catalog fields.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Product title, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductTitle(String);

impl ProductTitle {
    /// Validates and wraps a title.
    pub fn new(title: impl Into<String>) -> Result<Self, ValidationError> {
        let title = title.into();

        if title.is_empty() {
            return Err(ValidationError::EmptyProductTitle);
        }

        Ok(Self(title))
    }

    /// Returns the title as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Free-form product description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductDescription(String);

impl ProductDescription {
    /// Wraps a description; empty is fine.
    pub fn new(description: impl Into<String>) -> Self {
        Self(description.into())
    }

    /// Returns the description as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Catalog tags attached to a product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tags(Vec<String>);

impl Tags {
    /// Creates an empty tag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the tags.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for Tags {
    fn from(tags: Vec<String>) -> Self {
        Self(tags)
    }
}
