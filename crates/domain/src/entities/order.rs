//! Order aggregate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::value_objects::{OrderId, OrderStatus, Price, ProductId, UserId};

use super::{OrderProduct, Product, Stocks};

/// Business-rule violations raised by the order aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// The requested quantity exceeds the net stock across warehouses.
    #[error("not enough products in stocks: requested {requested}, available {available}")]
    NotEnoughStock {
        /// Quantity the caller asked for.
        requested: u64,
        /// Net quantity the stock rows can cover.
        available: u64,
    },
}

/// Order aggregate root.
///
/// Exclusively owns its product lines; every mutation goes through
/// [`change_order_products`](Order::change_order_products), which keeps
/// `total_price` equal to the sum of the line totals at all times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    user_id: UserId,
    status: OrderStatus,
    total_price: Price,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
    products: Vec<OrderProduct>,
}

impl Order {
    /// Creates an empty order for a user.
    ///
    /// `user_uuid` must be non-nil; `order_uuid` comes from the
    /// caller's id generator and is trusted.
    pub fn new(
        user_uuid: Uuid,
        order_uuid: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let user_id = UserId::new(user_uuid)?;

        Ok(Self {
            id: OrderId::from_uuid_unchecked(order_uuid),
            user_id,
            status: OrderStatus::Created,
            total_price: Price::zero(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
            products: Vec::new(),
        })
    }

    /// Sets the quantity of `product` in this order, checking stock
    /// availability first.
    ///
    /// Fails with [`OrderError::NotEnoughStock`] when the net stock
    /// cannot cover `quantity`. Quantity 0 means "remove the line": the
    /// line leaves the order, its prior total is subtracted, and the
    /// returned copy carries the soft-delete stamp for persistence.
    /// Otherwise the line's total is subtracted, the quantity replaced,
    /// and the new total added back — an O(1) adjustment instead of a
    /// full rescan, which is why the old total must be read before the
    /// quantity changes.
    ///
    /// Returns the affected line so the caller can persist it.
    pub fn change_order_products(
        &mut self,
        stocks: &Stocks,
        product: &Product,
        quantity: u64,
        now: DateTime<Utc>,
    ) -> Result<OrderProduct, OrderError> {
        let available = stocks.available_quantity();
        if available.is_less_than(quantity) {
            return Err(OrderError::NotEnoughStock {
                requested: quantity,
                available: available.get(),
            });
        }

        let index = self.position_or_create(product, now);

        if quantity == 0 {
            let mut line = self.products.remove(index);
            self.total_price -= line.total_price();
            line.mark_deleted(now);

            return Ok(line);
        }

        let line = &mut self.products[index];
        self.total_price -= line.total_price();
        line.change_quantity(quantity, now);
        let line = self.products[index].clone();
        self.total_price += line.total_price();

        Ok(line)
    }

    /// Finds the line for `product_id`, if present.
    pub fn order_product(&self, product_id: ProductId) -> Option<&OrderProduct> {
        self.products
            .iter()
            .find(|line| line.product_id() == product_id)
    }

    // Linear scan by product id; creates a zero-quantity line with the
    // catalog price snapshot when absent.
    fn position_or_create(&mut self, product: &Product, now: DateTime<Utc>) -> usize {
        if let Some(index) = self
            .products
            .iter()
            .position(|line| line.product_id() == product.id())
        {
            return index;
        }

        self.products
            .push(OrderProduct::new(self.id, product.id(), product.price(), now));

        self.products.len() - 1
    }

    /// Returns the order id.
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Returns the owning user's id.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the lifecycle status.
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Returns the order total.
    pub fn total_price(&self) -> Price {
        self.total_price
    }

    /// Returns the product lines.
    pub fn products(&self) -> &[OrderProduct] {
        &self.products
    }

    /// Returns the creation time.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last update time.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the soft-delete time, if deleted.
    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}
