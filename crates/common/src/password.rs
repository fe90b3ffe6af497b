//! Password hashing port.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordVerifier, SaltString, rand_core::OsRng},
};
use thiserror::Error;

/// Errors produced by a hasher implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// The hashing backend failed to produce a hash.
    #[error("password hashing failed: {0}")]
    Hashing(String),
}

/// Hashes and verifies passwords.
///
/// Only the resulting hash string ever leaves this port; raw passwords
/// are not stored anywhere.
pub trait PasswordHasher: Send + Sync {
    /// Hashes a raw password.
    fn hash(&self, raw: &[u8]) -> Result<String, HashError>;

    /// Verifies a raw password against a previously produced hash.
    fn verify(&self, hash: &str, raw: &[u8]) -> bool;
}

/// Production hasher using Argon2id with a random per-password salt.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    /// Creates a new hasher with the default Argon2id parameters.
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, raw: &[u8]) -> Result<String, HashError> {
        let salt = SaltString::generate(&mut OsRng);

        argon2::password_hash::PasswordHasher::hash_password(&Argon2::default(), raw, &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| HashError::Hashing(e.to_string()))
    }

    fn verify(&self, hash: &str, raw: &[u8]) -> bool {
        let Ok(parsed) = PasswordHash::new(hash) else {
            return false;
        };

        Argon2::default().verify_password(raw, &parsed).is_ok()
    }
}

/// Test hasher that prefixes the password instead of hashing it.
///
/// Keeps hashes human-readable in test assertions. Never use outside
/// tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextHasher;

impl PlainTextHasher {
    /// Creates a new plain-text hasher.
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for PlainTextHasher {
    fn hash(&self, raw: &[u8]) -> Result<String, HashError> {
        let raw = String::from_utf8_lossy(raw);
        Ok(format!("plain${raw}"))
    }

    fn verify(&self, hash: &str, raw: &[u8]) -> bool {
        hash.strip_prefix("plain$")
            .is_some_and(|stored| stored.as_bytes() == raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argon2_hash_differs_from_plain() {
        let hasher = Argon2Hasher::new();
        let hash = hasher.hash(b"correct horse battery").unwrap();
        assert_ne!(hash, "correct horse battery");
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn argon2_verify_roundtrip() {
        let hasher = Argon2Hasher::new();
        let hash = hasher.hash(b"correct horse battery").unwrap();
        assert!(hasher.verify(&hash, b"correct horse battery"));
        assert!(!hasher.verify(&hash, b"wrong password"));
    }

    #[test]
    fn argon2_salts_are_unique() {
        let hasher = Argon2Hasher::new();
        let a = hasher.hash(b"same password").unwrap();
        let b = hasher.hash(b"same password").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn argon2_verify_rejects_garbage_hash() {
        let hasher = Argon2Hasher::new();
        assert!(!hasher.verify("not a phc string", b"anything"));
    }

    #[test]
    fn plain_text_hasher_roundtrip() {
        let hasher = PlainTextHasher::new();
        let hash = hasher.hash(b"secret123").unwrap();
        assert_eq!(hash, "plain$secret123");
        assert!(hasher.verify(&hash, b"secret123"));
        assert!(!hasher.verify(&hash, b"other"));
    }
}
