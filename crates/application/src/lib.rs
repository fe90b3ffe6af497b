//! Application layer: repository ports, thin command/query handlers,
//! and the use cases orchestrating them.
//!
//! The flow is always caller → use case → transaction manager →
//! handlers → ports. Handlers never retry, cache, or batch; use cases
//! own all cross-aggregate business rules.

pub mod commands;
pub mod error;
pub mod queries;
pub mod query_options;
pub mod tx;
pub mod usecases;

pub use error::{ConfigError, RepositoryError, UseCaseError};
pub use query_options::{Meta, OrderQueryOptions, Pagination, ProductQueryOptions, StocksQueryOptions};
pub use tx::{TransactionManager, UnitOfWork};
pub use usecases::{
    AddProductToOrder, AddProductToOrderRequest, UserRegistration, UserRegistrationRequest,
};
