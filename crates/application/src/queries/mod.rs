//! Query side: one module per fetch operation, each pairing the
//! repository port with a thin forwarding handler.

mod get_order;
mod get_product;
mod get_stocks;
mod get_user_by_email;

pub use get_order::{GetOrderHandler, GetOrderQuery, OrderGetter};
pub use get_product::{GetProductHandler, GetProductQuery, ProductGetter};
pub use get_stocks::{GetStocksHandler, GetStocksQuery, StocksGetter};
pub use get_user_by_email::{GetUserByEmailHandler, GetUserByEmailQuery, UserGetter};
