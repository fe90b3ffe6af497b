//! Identifier generation port.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Source of fresh entity identifiers.
pub trait IdGenerator: Send + Sync {
    /// Returns a new, never-nil UUID.
    fn new_id(&self) -> Uuid;
}

/// Production generator producing random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl UuidGenerator {
    /// Creates a new random generator.
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidGenerator {
    fn new_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Deterministic generator for tests.
///
/// Yields UUIDs whose low 64 bits count up from 1, so the n-th generated
/// identifier is predictable.
#[derive(Debug, Default)]
pub struct SequenceIdGenerator {
    counter: AtomicU64,
}

impl SequenceIdGenerator {
    /// Creates a generator starting at 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the UUID the n-th call (1-based) produces.
    pub fn nth(n: u64) -> Uuid {
        Uuid::from_u64_pair(0, n)
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn new_id(&self) -> Uuid {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        Uuid::from_u64_pair(0, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_generator_never_returns_nil() {
        let generator = UuidGenerator::new();
        for _ in 0..100 {
            assert!(!generator.new_id().is_nil());
        }
    }

    #[test]
    fn uuid_generator_returns_unique_ids() {
        let generator = UuidGenerator::new();
        assert_ne!(generator.new_id(), generator.new_id());
    }

    #[test]
    fn sequence_generator_is_predictable() {
        let generator = SequenceIdGenerator::new();
        assert_eq!(generator.new_id(), SequenceIdGenerator::nth(1));
        assert_eq!(generator.new_id(), SequenceIdGenerator::nth(2));
        assert_eq!(generator.new_id(), SequenceIdGenerator::nth(3));
    }
}
