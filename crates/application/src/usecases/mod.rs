//! Use cases: application services orchestrating handlers.

mod add_product_to_order;
mod user_registration;

pub use add_product_to_order::{
    AddProductToOrder, AddProductToOrderBuilder, AddProductToOrderRequest,
};
pub use user_registration::{UserRegistration, UserRegistrationBuilder, UserRegistrationRequest};
