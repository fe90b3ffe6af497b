//! Stored password hash.

use common::PasswordHasher;
use serde::{Deserialize, Serialize};

use crate::error::{MIN_PASSWORD_LENGTH, ValidationError};

/// The hash of a user's password. The raw password never leaves the
/// constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Checks the raw password length and hashes it through the port.
    pub fn new(hasher: &dyn PasswordHasher, raw: &str) -> Result<Self, ValidationError> {
        if raw.len() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::PasswordTooShort { actual: raw.len() });
        }

        let hash = hasher.hash(raw.as_bytes())?;

        Ok(Self(hash))
    }

    /// Wraps an existing hash string, e.g. read back from storage.
    pub fn from_hash_unchecked(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    /// Returns the hash string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Verifies a raw password against this hash.
    pub fn matches(&self, hasher: &dyn PasswordHasher, raw: &str) -> bool {
        hasher.verify(&self.0, raw.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::PlainTextHasher;

    #[test]
    fn rejects_short_password() {
        let hasher = PlainTextHasher::new();
        let err = PasswordHash::new(&hasher, "1234567").unwrap_err();
        assert_eq!(err, ValidationError::PasswordTooShort { actual: 7 });
    }

    #[test]
    fn stores_hash_not_raw_password() {
        let hasher = PlainTextHasher::new();
        let hash = PasswordHash::new(&hasher, "longenough").unwrap();
        assert_ne!(hash.as_str(), "longenough");
        assert!(hash.matches(&hasher, "longenough"));
        assert!(!hash.matches(&hasher, "other password"));
    }

    #[test]
    fn accepts_exactly_minimum_length() {
        let hasher = PlainTextHasher::new();
        assert!(PasswordHash::new(&hasher, "12345678").is_ok());
    }
}
