//! Repository adapters for the warehouse order system.
//!
//! The in-memory implementations here satisfy every port in
//! `application`. They exist for tests and local development; a SQL
//! backend would slot in beside them by implementing the same traits.

pub mod memory;
pub mod tx;

pub use memory::{
    InMemoryOrderProducts, InMemoryOrders, InMemoryProducts, InMemoryStocks, InMemoryUsers,
};
pub use tx::NoopTransactionManager;
