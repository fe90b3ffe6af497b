//! Unsigned quantity.

use serde::{Deserialize, Serialize};

/// A count of product units.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Quantity(u64);

impl Quantity {
    /// Creates a quantity.
    pub fn new(quantity: u64) -> Self {
        Self(quantity)
    }

    /// Returns the zero quantity.
    pub fn zero() -> Self {
        Self(0)
    }

    /// Returns the raw count.
    pub fn get(&self) -> u64 {
        self.0
    }

    /// Returns true if this quantity is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Compares against a raw count.
    pub fn is_less_than(&self, quantity: u64) -> bool {
        self.0 < quantity
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Quantity {
    fn from(quantity: u64) -> Self {
        Self(quantity)
    }
}
