//! Command side: one module per write operation.

mod create_user;
mod upsert_order;
mod upsert_order_product;

pub use create_user::{CreateUserCommand, CreateUserHandler, UserCreator};
pub use upsert_order::{OrderUpserter, UpsertOrderCommand, UpsertOrderHandler};
pub use upsert_order_product::{
    OrderProductUpserter, UpsertOrderProductCommand, UpsertOrderProductHandler,
};
