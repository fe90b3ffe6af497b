//! Value objects: immutable, validated wrappers with no identity of
//! their own.
//!
//! Each constructor validates its input and returns
//! [`ValidationError`](crate::ValidationError) on rejection. The
//! `_unchecked` variants skip validation and exist for values that are
//! guaranteed valid at the call site (freshly generated UUIDs,
//! already-hashed passwords).

mod birthdate;
mod email;
mod ids;
mod marital_status;
mod name;
mod order_status;
mod password_hash;
mod price;
mod product_fields;
mod quantity;

pub use birthdate::Birthdate;
pub use email::Email;
pub use ids::{OrderId, ProductId, UserId, WarehouseId};
pub use marital_status::MaritalStatus;
pub use name::{FirstName, LastName};
pub use order_status::OrderStatus;
pub use password_hash::PasswordHash;
pub use price::Price;
pub use product_fields::{ProductDescription, ProductTitle, Tags};
pub use quantity::Quantity;
