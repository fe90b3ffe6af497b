//! Marital status enum.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Marital status of a registered user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
}

impl MaritalStatus {
    /// Parses from the wire representation.
    ///
    /// Empty input and unknown values are distinct errors so the caller
    /// can tell "missing" from "typo".
    pub fn parse(status: &str) -> Result<Self, ValidationError> {
        if status.is_empty() {
            return Err(ValidationError::EmptyMaritalStatus);
        }

        match status {
            "single" => Ok(Self::Single),
            "married" => Ok(Self::Married),
            "divorced" => Ok(Self::Divorced),
            "widowed" => Ok(Self::Widowed),
            other => Err(ValidationError::UnknownMaritalStatus(other.to_string())),
        }
    }

    /// Returns the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Married => "married",
            Self::Divorced => "divorced",
            Self::Widowed => "widowed",
        }
    }
}

impl FromStr for MaritalStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for MaritalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_statuses() {
        assert_eq!(
            MaritalStatus::parse("single").unwrap(),
            MaritalStatus::Single
        );
        assert_eq!(
            MaritalStatus::parse("married").unwrap(),
            MaritalStatus::Married
        );
        assert_eq!(
            MaritalStatus::parse("divorced").unwrap(),
            MaritalStatus::Divorced
        );
        assert_eq!(
            MaritalStatus::parse("widowed").unwrap(),
            MaritalStatus::Widowed
        );
    }

    #[test]
    fn empty_and_unknown_are_distinct_errors() {
        assert_eq!(
            MaritalStatus::parse("").unwrap_err(),
            ValidationError::EmptyMaritalStatus
        );
        assert_eq!(
            MaritalStatus::parse("complicated").unwrap_err(),
            ValidationError::UnknownMaritalStatus("complicated".to_string())
        );
    }

    #[test]
    fn display_roundtrip() {
        for status in [
            MaritalStatus::Single,
            MaritalStatus::Married,
            MaritalStatus::Divorced,
            MaritalStatus::Widowed,
        ] {
            assert_eq!(MaritalStatus::parse(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&MaritalStatus::Divorced).unwrap();
        assert_eq!(json, "\"divorced\"");
    }
}
