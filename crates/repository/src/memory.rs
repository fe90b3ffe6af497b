//! In-memory repository adapters.
//!
//! These back the application ports with `HashMap`s behind
//! `tokio::sync::RwLock` and provide the same interface a SQL
//! implementation would. Each adapter counts its writes and can be
//! told to fail, so tests can assert both what was persisted and what
//! was never attempted.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use application::commands::{OrderProductUpserter, OrderUpserter, UserCreator};
use application::error::RepositoryError;
use application::queries::{OrderGetter, ProductGetter, StocksGetter, UserGetter};
use application::query_options::{OrderQueryOptions, ProductQueryOptions, StocksQueryOptions};
use domain::{
    Email, Order, OrderId, OrderProduct, Product, ProductId, Stock, Stocks, User,
};

/// In-memory order repository.
#[derive(Clone, Default)]
pub struct InMemoryOrders {
    orders: Arc<RwLock<HashMap<OrderId, Order>>>,
    upsert_count: Arc<AtomicUsize>,
    fail_upsert: Arc<AtomicBool>,
}

impl InMemoryOrders {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an order directly, bypassing the port.
    pub async fn insert(&self, order: Order) {
        self.orders.write().await.insert(order.id(), order);
    }

    /// Number of upserts performed through the port.
    pub fn upsert_count(&self) -> usize {
        self.upsert_count.load(Ordering::SeqCst)
    }

    /// Makes every subsequent upsert fail with a storage error.
    pub fn set_fail_upsert(&self, fail: bool) {
        self.fail_upsert.store(fail, Ordering::SeqCst);
    }

    /// Returns the stored order, if any.
    pub async fn get(&self, id: OrderId) -> Option<Order> {
        self.orders.read().await.get(&id).cloned()
    }

    /// Number of stored orders.
    pub async fn len(&self) -> usize {
        self.orders.read().await.len()
    }

    /// Whether the repository is empty.
    pub async fn is_empty(&self) -> bool {
        self.orders.read().await.is_empty()
    }
}

#[async_trait]
impl OrderGetter for InMemoryOrders {
    async fn get_order(&self, options: &OrderQueryOptions) -> Result<Order, RepositoryError> {
        // No row locks here; `for_update` is honored by SQL adapters.
        self.orders
            .read()
            .await
            .get(&options.order_id())
            .cloned()
            .ok_or(RepositoryError::OrderNotFound)
    }
}

#[async_trait]
impl OrderUpserter for InMemoryOrders {
    async fn upsert_order(&self, order: &Order) -> Result<(), RepositoryError> {
        if self.fail_upsert.load(Ordering::SeqCst) {
            return Err(RepositoryError::Storage("order upsert failed".into()));
        }
        self.upsert_count.fetch_add(1, Ordering::SeqCst);
        self.orders.write().await.insert(order.id(), order.clone());
        Ok(())
    }
}

/// In-memory product catalog, read-only through the port.
#[derive(Clone, Default)]
pub struct InMemoryProducts {
    products: Arc<RwLock<HashMap<ProductId, Product>>>,
}

impl InMemoryProducts {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a product.
    pub async fn insert(&self, product: Product) {
        self.products.write().await.insert(product.id(), product);
    }
}

#[async_trait]
impl ProductGetter for InMemoryProducts {
    async fn get_product(&self, options: &ProductQueryOptions) -> Result<Product, RepositoryError> {
        self.products
            .read()
            .await
            .get(&options.product_id())
            .cloned()
            .ok_or(RepositoryError::ProductNotFound)
    }
}

/// In-memory stock rows, keyed by product. A product may have rows in
/// several warehouses; the port returns all of them.
#[derive(Clone, Default)]
pub struct InMemoryStocks {
    stocks: Arc<RwLock<Vec<Stock>>>,
}

impl InMemoryStocks {
    /// Creates an empty stock table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a stock row.
    pub async fn insert(&self, stock: Stock) {
        self.stocks.write().await.push(stock);
    }
}

#[async_trait]
impl StocksGetter for InMemoryStocks {
    async fn get_stocks(&self, options: &StocksQueryOptions) -> Result<Stocks, RepositoryError> {
        let rows = self.stocks.read().await;
        let matching: Vec<Stock> = rows
            .iter()
            .filter(|stock| stock.product_id() == options.product_id())
            .cloned()
            .collect();
        // An unknown product simply has no rows, which nets out to
        // zero availability.
        Ok(Stocks::from(matching))
    }
}

/// In-memory order-line store keyed by (order id, product id).
#[derive(Clone, Default)]
pub struct InMemoryOrderProducts {
    lines: Arc<RwLock<HashMap<(OrderId, ProductId), OrderProduct>>>,
    upsert_count: Arc<AtomicUsize>,
    fail_upsert: Arc<AtomicBool>,
}

impl InMemoryOrderProducts {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of upserts performed through the port.
    pub fn upsert_count(&self) -> usize {
        self.upsert_count.load(Ordering::SeqCst)
    }

    /// Makes every subsequent upsert fail with a storage error.
    pub fn set_fail_upsert(&self, fail: bool) {
        self.fail_upsert.store(fail, Ordering::SeqCst);
    }

    /// Returns the stored line, if any.
    pub async fn get(&self, order_id: OrderId, product_id: ProductId) -> Option<OrderProduct> {
        self.lines.read().await.get(&(order_id, product_id)).cloned()
    }
}

#[async_trait]
impl OrderProductUpserter for InMemoryOrderProducts {
    async fn upsert_order_product(&self, line: &OrderProduct) -> Result<(), RepositoryError> {
        if self.fail_upsert.load(Ordering::SeqCst) {
            return Err(RepositoryError::Storage("order line upsert failed".into()));
        }
        self.upsert_count.fetch_add(1, Ordering::SeqCst);
        self.lines
            .write()
            .await
            .insert((line.order_id(), line.product_id()), line.clone());
        Ok(())
    }
}

/// In-memory user store, indexed by email for the registration check.
#[derive(Clone, Default)]
pub struct InMemoryUsers {
    users: Arc<RwLock<HashMap<Email, User>>>,
    create_count: Arc<AtomicUsize>,
    fail_create: Arc<AtomicBool>,
}

impl InMemoryUsers {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a user directly, bypassing the port.
    pub async fn insert(&self, user: User) {
        self.users.write().await.insert(user.email().clone(), user);
    }

    /// Number of inserts performed through the port.
    pub fn create_count(&self) -> usize {
        self.create_count.load(Ordering::SeqCst)
    }

    /// Makes every subsequent insert fail with a storage error.
    pub fn set_fail_create(&self, fail: bool) {
        self.fail_create.store(fail, Ordering::SeqCst);
    }

    /// Number of stored users.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Whether the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserGetter for InMemoryUsers {
    async fn get_by_email(&self, email: &Email) -> Result<User, RepositoryError> {
        self.users
            .read()
            .await
            .get(email)
            .cloned()
            .ok_or(RepositoryError::UserNotFound)
    }
}

#[async_trait]
impl UserCreator for InMemoryUsers {
    async fn create_user(&self, user: &User) -> Result<(), RepositoryError> {
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(RepositoryError::Storage("user insert failed".into()));
        }
        self.create_count.fetch_add(1, Ordering::SeqCst);
        self.users
            .write()
            .await
            .insert(user.email().clone(), user.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use domain::{Price, ProductDescription, ProductTitle, Quantity, WarehouseId};
    use uuid::Uuid;

    fn now() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 1, 12, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn missing_order_maps_to_not_found() {
        let orders = InMemoryOrders::new();
        let options = OrderQueryOptions::by_id(
            OrderId::new(Uuid::from_u128(1)).unwrap(),
        );

        let err = orders.get_order(&options).await.unwrap_err();
        assert!(matches!(err, RepositoryError::OrderNotFound));
    }

    #[tokio::test]
    async fn upsert_is_idempotent_by_order_id() {
        let orders = InMemoryOrders::new();
        let order = Order::new(Uuid::from_u128(1), Uuid::from_u128(2), now()).unwrap();

        orders.upsert_order(&order).await.unwrap();
        orders.upsert_order(&order).await.unwrap();

        assert_eq!(orders.len().await, 1);
        assert_eq!(orders.upsert_count(), 2);
    }

    #[tokio::test]
    async fn failing_upsert_leaves_store_untouched() {
        let orders = InMemoryOrders::new();
        orders.set_fail_upsert(true);
        let order = Order::new(Uuid::from_u128(1), Uuid::from_u128(2), now()).unwrap();

        let err = orders.upsert_order(&order).await.unwrap_err();

        assert!(matches!(err, RepositoryError::Storage(_)));
        assert!(orders.is_empty().await);
        assert_eq!(orders.upsert_count(), 0);
    }

    #[tokio::test]
    async fn stocks_for_unknown_product_are_empty() {
        let stocks = InMemoryStocks::new();
        let product_id = ProductId::new(Uuid::from_u128(9)).unwrap();

        let rows = stocks
            .get_stocks(&StocksQueryOptions::by_product(product_id))
            .await
            .unwrap();

        assert!(rows.is_empty());
        assert_eq!(rows.available_quantity(), Quantity::zero());
    }

    #[tokio::test]
    async fn stocks_filter_by_product() {
        let stocks = InMemoryStocks::new();
        let wanted = ProductId::new(Uuid::from_u128(1)).unwrap();
        let other = ProductId::new(Uuid::from_u128(2)).unwrap();
        let warehouse = WarehouseId::new(Uuid::from_u128(3)).unwrap();

        stocks
            .insert(Stock::new(
                wanted,
                warehouse,
                Quantity::new(10),
                Quantity::new(3),
                now(),
            ))
            .await;
        stocks
            .insert(Stock::new(
                other,
                warehouse,
                Quantity::new(500),
                Quantity::zero(),
                now(),
            ))
            .await;

        let rows = stocks
            .get_stocks(&StocksQueryOptions::by_product(wanted))
            .await
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows.available_quantity(), Quantity::new(7));
    }

    #[tokio::test]
    async fn order_lines_are_keyed_by_order_and_product() {
        let lines = InMemoryOrderProducts::new();
        let order_id = OrderId::new(Uuid::from_u128(1)).unwrap();
        let product_id = ProductId::new(Uuid::from_u128(2)).unwrap();

        let mut line = OrderProduct::new(order_id, product_id, Price::from_cents(250), now());
        line.change_quantity(2, now());
        lines.upsert_order_product(&line).await.unwrap();

        line.change_quantity(5, now());
        lines.upsert_order_product(&line).await.unwrap();

        let stored = lines.get(order_id, product_id).await.unwrap();
        assert_eq!(stored.quantity(), Quantity::new(5));
        assert_eq!(lines.upsert_count(), 2);
    }

    #[tokio::test]
    async fn product_lookup_maps_to_not_found() {
        let products = InMemoryProducts::new();
        let options =
            ProductQueryOptions::by_id(ProductId::new(Uuid::from_u128(4)).unwrap());

        let err = products.get_product(&options).await.unwrap_err();
        assert!(matches!(err, RepositoryError::ProductNotFound));
    }

    #[tokio::test]
    async fn product_round_trips() {
        let products = InMemoryProducts::new();
        let product = Product::new(
            ProductId::new(Uuid::from_u128(4)).unwrap(),
            ProductTitle::new("Mechanical keyboard").unwrap(),
            ProductDescription::new("Tenkeyless, brown switches"),
            Price::from_cents(12_900),
            now(),
        );
        products.insert(product.clone()).await;

        let fetched = products
            .get_product(&ProductQueryOptions::by_id(product.id()))
            .await
            .unwrap();

        assert_eq!(fetched, product);
    }

    #[tokio::test]
    async fn unknown_email_maps_to_user_not_found() {
        let users = InMemoryUsers::new();
        let email = Email::new("nobody@example.com").unwrap();

        let err = users.get_by_email(&email).await.unwrap_err();
        assert!(matches!(err, RepositoryError::UserNotFound));
    }
}
