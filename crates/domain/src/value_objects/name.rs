//! Personal names.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A user's first name, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FirstName(String);

impl FirstName {
    /// Validates and wraps a first name.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if name.is_empty() {
            return Err(ValidationError::EmptyFirstName);
        }

        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FirstName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user's last name, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LastName(String);

impl LastName {
    /// Validates and wraps a last name.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if name.is_empty() {
            return Err(ValidationError::EmptyLastName);
        }

        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LastName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_must_be_non_empty() {
        assert_eq!(
            FirstName::new("").unwrap_err(),
            ValidationError::EmptyFirstName
        );
        assert_eq!(
            LastName::new("").unwrap_err(),
            ValidationError::EmptyLastName
        );
        assert_eq!(FirstName::new("Ada").unwrap().as_str(), "Ada");
        assert_eq!(LastName::new("Lovelace").unwrap().as_str(), "Lovelace");
    }
}
