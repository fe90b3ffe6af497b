//! Warehouse stock rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{ProductId, Quantity, WarehouseId};

/// Stock of one product in one warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    product_id: ProductId,
    warehouse_id: WarehouseId,
    available_quantity: Quantity,
    reserved_quantity: Quantity,
    created_at: DateTime<Utc>,
}

impl Stock {
    /// Creates a stock row.
    pub fn new(
        product_id: ProductId,
        warehouse_id: WarehouseId,
        available_quantity: Quantity,
        reserved_quantity: Quantity,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            product_id,
            warehouse_id,
            available_quantity,
            reserved_quantity,
            created_at: now,
        }
    }

    /// Returns the product id.
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Returns the warehouse id.
    pub fn warehouse_id(&self) -> WarehouseId {
        self.warehouse_id
    }

    /// Returns the available quantity in this warehouse.
    pub fn available_quantity(&self) -> Quantity {
        self.available_quantity
    }

    /// Returns the reserved quantity in this warehouse.
    pub fn reserved_quantity(&self) -> Quantity {
        self.reserved_quantity
    }

    /// Returns the creation time.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// All stock rows for one product, one per warehouse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stocks(Vec<Stock>);

impl Stocks {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Net availability summed naively across warehouses:
    /// `Σ available − Σ reserved`, floored at zero. No per-warehouse
    /// allocation happens here.
    pub fn available_quantity(&self) -> Quantity {
        let available: u64 = self.0.iter().map(|s| s.available_quantity.get()).sum();
        let reserved: u64 = self.0.iter().map(|s| s.reserved_quantity.get()).sum();

        Quantity::new(available.saturating_sub(reserved))
    }

    /// Returns the product these rows belong to.
    pub fn product_id(&self) -> Option<ProductId> {
        self.0.first().map(Stock::product_id)
    }

    /// Adds a row.
    pub fn push(&mut self, stock: Stock) {
        self.0.push(stock);
    }

    /// Iterates over the rows.
    pub fn iter(&self) -> impl Iterator<Item = &Stock> {
        self.0.iter()
    }

    /// Returns the number of warehouse rows.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Stock>> for Stocks {
    fn from(stocks: Vec<Stock>) -> Self {
        Self(stocks)
    }
}

impl IntoIterator for Stocks {
    type Item = Stock;
    type IntoIter = std::vec::IntoIter<Stock>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn row(available: u64, reserved: u64) -> Stock {
        Stock::new(
            ProductId::from_uuid_unchecked(Uuid::from_u128(1)),
            WarehouseId::from_uuid_unchecked(Uuid::new_v4()),
            Quantity::new(available),
            Quantity::new(reserved),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn sums_net_availability_across_warehouses() {
        let stocks = Stocks::from(vec![row(10, 3), row(100, 5)]);
        assert_eq!(stocks.available_quantity(), Quantity::new(102));
    }

    #[test]
    fn empty_collection_has_zero_availability() {
        assert_eq!(Stocks::new().available_quantity(), Quantity::zero());
        assert!(Stocks::new().product_id().is_none());
    }

    #[test]
    fn over_reservation_floors_at_zero() {
        let stocks = Stocks::from(vec![row(5, 9)]);
        assert_eq!(stocks.available_quantity(), Quantity::zero());
    }

    #[test]
    fn product_id_comes_from_first_row() {
        let stocks = Stocks::from(vec![row(1, 0), row(2, 0)]);
        assert_eq!(
            stocks.product_id(),
            Some(ProductId::from_uuid_unchecked(Uuid::from_u128(1)))
        );
    }
}
