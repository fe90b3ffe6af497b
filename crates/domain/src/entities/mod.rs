//! Entities: mutable aggregates holding business state.

mod order;
mod order_product;
mod product;
mod stock;
mod user;

pub use order::{Order, OrderError};
pub use order_product::OrderProduct;
pub use product::Product;
pub use stock::{Stock, Stocks};
pub use user::{NewUser, User};
