//! Order line: one product within one order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{OrderId, Price, ProductId, Quantity};

/// A single product line inside an order.
///
/// Identity is the (`order_id`, `product_id`) pair; an order holds at
/// most one line per product. `price` is the unit price snapshotted
/// when the line was created and never changes afterwards, even if the
/// catalog price moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderProduct {
    order_id: OrderId,
    product_id: ProductId,
    quantity: Quantity,
    price: Price,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl OrderProduct {
    /// Creates a zero-quantity line with the given unit-price snapshot.
    pub fn new(
        order_id: OrderId,
        product_id: ProductId,
        price: Price,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            order_id,
            product_id,
            quantity: Quantity::zero(),
            price,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Sets a new quantity and stamps the update time.
    pub fn change_quantity(&mut self, quantity: u64, now: DateTime<Utc>) {
        self.quantity = Quantity::new(quantity);
        self.updated_at = now;
    }

    /// Soft-deletes the line.
    pub fn mark_deleted(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
        self.deleted_at = Some(now);
    }

    /// Line total: unit price times quantity.
    pub fn total_price(&self) -> Price {
        self.price.multiply(self.quantity)
    }

    /// Returns the owning order's id.
    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    /// Returns the product id.
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Returns the quantity.
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Returns the unit-price snapshot.
    pub fn price(&self) -> Price {
        self.price
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

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn line() -> OrderProduct {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        OrderProduct::new(
            OrderId::from_uuid_unchecked(Uuid::new_v4()),
            ProductId::from_uuid_unchecked(Uuid::new_v4()),
            Price::from_cents(500),
            now,
        )
    }

    #[test]
    fn new_line_starts_at_zero_quantity() {
        let line = line();
        assert!(line.quantity().is_zero());
        assert_eq!(line.total_price(), Price::zero());
        assert_eq!(line.created_at(), line.updated_at());
        assert!(line.deleted_at().is_none());
    }

    #[test]
    fn total_is_price_times_quantity() {
        let mut line = line();
        let later = Utc.with_ymd_and_hms(2024, 3, 1, 11, 0, 0).unwrap();
        line.change_quantity(3, later);
        assert_eq!(line.total_price(), Price::from_cents(1500));
        assert_eq!(line.updated_at(), later);
        // Snapshot price untouched by quantity changes.
        assert_eq!(line.price(), Price::from_cents(500));
    }

    #[test]
    fn mark_deleted_stamps_both_timestamps() {
        let mut line = line();
        let later = Utc.with_ymd_and_hms(2024, 3, 2, 9, 0, 0).unwrap();
        line.mark_deleted(later);
        assert_eq!(line.deleted_at(), Some(later));
        assert_eq!(line.updated_at(), later);
    }
}
