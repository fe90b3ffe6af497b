//! Domain layer for the warehouse order system.
//!
//! This crate provides the business core:
//! - Value objects enforcing construction-time invariants
//! - Entities (aggregates) with invariant-preserving methods
//! - Validation and business-rule error types
//!
//! Nothing here performs I/O. Persistence, time, identifiers, and
//! hashing arrive through the ports in `common` and the repository
//! traits in `application`.

pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{NewUser, Order, OrderError, OrderProduct, Product, Stock, Stocks, User};
pub use error::ValidationError;
pub use value_objects::{
    Birthdate, Email, FirstName, LastName, MaritalStatus, OrderId, OrderStatus, PasswordHash,
    Price, ProductDescription, ProductId, ProductTitle, Quantity, Tags, UserId, WarehouseId,
};
