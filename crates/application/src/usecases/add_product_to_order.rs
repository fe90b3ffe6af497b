//! Order-product reconciliation: set the quantity of a product in an
//! order, creating the order on the way if needed.

use std::sync::Arc;

use common::{Clock, IdGenerator};
use domain::Order;
use tracing::{debug, error};
use uuid::Uuid;

use crate::commands::{
    UpsertOrderCommand, UpsertOrderHandler, UpsertOrderProductCommand, UpsertOrderProductHandler,
};
use crate::error::{ConfigError, RepositoryError, UseCaseError};
use crate::queries::{
    GetOrderHandler, GetOrderQuery, GetProductHandler, GetProductQuery, GetStocksHandler,
    GetStocksQuery,
};
use crate::tx::TransactionManager;

/// Input for [`AddProductToOrder::run`].
///
/// `order_id` of `None` (or the nil UUID) means "start a new order".
/// `quantity` of 0 means "remove the product from the order" and is
/// not an error.
#[derive(Debug, Clone)]
pub struct AddProductToOrderRequest {
    pub order_id: Option<Uuid>,
    pub user_id: Uuid,
    pub product_id: Uuid,
    pub quantity: u64,
}

/// Reconciles one product line of an order against current stock,
/// inside a single transaction.
///
/// The steps run in a fixed sequence: resolve (or create) the order
/// under a row lock, fetch the product and its stock, apply the
/// quantity change, persist the order, persist the affected line. The
/// order must hit storage before its line (foreign-key dependency),
/// and stock is checked before any mutation. Stock rows themselves are
/// read without a lock: two transactions on different orders can both
/// pass the availability check before either commits.
pub struct AddProductToOrder {
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    tx: Arc<dyn TransactionManager>,
    get_order: GetOrderHandler,
    get_product: GetProductHandler,
    get_stocks: GetStocksHandler,
    upsert_order: UpsertOrderHandler,
    upsert_order_product: UpsertOrderProductHandler,
}

impl std::fmt::Debug for AddProductToOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddProductToOrder").finish_non_exhaustive()
    }
}

impl AddProductToOrder {
    /// Starts a builder; every dependency is required.
    pub fn builder() -> AddProductToOrderBuilder {
        AddProductToOrderBuilder::default()
    }

    /// Runs the use case. Any error rolls the transaction back; there
    /// are no retries.
    #[tracing::instrument(
        name = "add_product_to_order",
        skip(self, request),
        fields(
            order_id = ?request.order_id,
            user_id = %request.user_id,
            product_id = %request.product_id,
            quantity = request.quantity,
        )
    )]
    pub async fn run(&self, request: AddProductToOrderRequest) -> Result<(), UseCaseError> {
        debug!("usecase started");

        let result = self.tx.run(Box::pin(self.reconcile(&request))).await;

        match &result {
            Ok(()) => debug!("usecase finished"),
            Err(err) => error!(error = %err, "transaction aborted"),
        }

        result
    }

    async fn reconcile(&self, request: &AddProductToOrderRequest) -> Result<(), UseCaseError> {
        // 1. Existing order under lock, or a fresh one.
        let mut order = self.resolve_order(request).await?;

        // 2. Product, for identity and the current catalog price.
        let product_query = GetProductQuery::by_id(request.product_id)?;
        let product = self.get_product.handle(&product_query).await?;

        // 3. Every warehouse row for the product.
        let stocks = self
            .get_stocks
            .handle(&GetStocksQuery::by_product(product.id()))
            .await?;

        debug!(
            available = stocks.available_quantity().get(),
            "stock resolved"
        );

        // 4. Apply the quantity change against net availability.
        let line =
            order.change_order_products(&stocks, &product, request.quantity, self.clock.now())?;

        // 5. Order before line: the line references the order row.
        self.upsert_order
            .handle(&UpsertOrderCommand::new(order))
            .await?;

        // 6. The one affected line.
        self.upsert_order_product
            .handle(&UpsertOrderProductCommand::new(line))
            .await?;

        Ok(())
    }

    /// Fetches the order for update when an id was supplied, falling
    /// back to creation when the id is absent or unknown. Any other
    /// fetch error aborts.
    async fn resolve_order(
        &self,
        request: &AddProductToOrderRequest,
    ) -> Result<Order, UseCaseError> {
        if let Some(order_uuid) = request.order_id.filter(|uuid| !uuid.is_nil()) {
            let query = GetOrderQuery::for_update(order_uuid)?;

            match self.get_order.handle(&query).await {
                Ok(order) => return Ok(order),
                Err(RepositoryError::OrderNotFound) => {
                    debug!(%order_uuid, "order not found, creating a new one");
                }
                Err(other) => return Err(other.into()),
            }
        }

        self.create_order(request).await
    }

    async fn create_order(
        &self,
        request: &AddProductToOrderRequest,
    ) -> Result<Order, UseCaseError> {
        let order = Order::new(request.user_id, self.ids.new_id(), self.clock.now())?;

        self.upsert_order
            .handle(&UpsertOrderCommand::new(order.clone()))
            .await?;

        debug!(order_id = %order.id(), "order created");

        Ok(order)
    }
}

/// Two-phase construction for [`AddProductToOrder`]: supply every
/// dependency, then [`build`](Self::build). A missing dependency is a
/// wiring bug and fails fast with [`ConfigError::MissingDependency`].
#[derive(Default)]
pub struct AddProductToOrderBuilder {
    clock: Option<Arc<dyn Clock>>,
    ids: Option<Arc<dyn IdGenerator>>,
    tx: Option<Arc<dyn TransactionManager>>,
    get_order: Option<GetOrderHandler>,
    get_product: Option<GetProductHandler>,
    get_stocks: Option<GetStocksHandler>,
    upsert_order: Option<UpsertOrderHandler>,
    upsert_order_product: Option<UpsertOrderProductHandler>,
}

impl AddProductToOrderBuilder {
    /// Sets the clock.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Sets the id generator.
    pub fn id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = Some(ids);
        self
    }

    /// Sets the transaction manager.
    pub fn transaction_manager(mut self, tx: Arc<dyn TransactionManager>) -> Self {
        self.tx = Some(tx);
        self
    }

    /// Sets the order query handler.
    pub fn get_order(mut self, handler: GetOrderHandler) -> Self {
        self.get_order = Some(handler);
        self
    }

    /// Sets the product query handler.
    pub fn get_product(mut self, handler: GetProductHandler) -> Self {
        self.get_product = Some(handler);
        self
    }

    /// Sets the stocks query handler.
    pub fn get_stocks(mut self, handler: GetStocksHandler) -> Self {
        self.get_stocks = Some(handler);
        self
    }

    /// Sets the order upsert handler.
    pub fn upsert_order(mut self, handler: UpsertOrderHandler) -> Self {
        self.upsert_order = Some(handler);
        self
    }

    /// Sets the order-line upsert handler.
    pub fn upsert_order_product(mut self, handler: UpsertOrderProductHandler) -> Self {
        self.upsert_order_product = Some(handler);
        self
    }

    /// Finalizes the use case, erroring on the first missing
    /// dependency.
    pub fn build(self) -> Result<AddProductToOrder, ConfigError> {
        Ok(AddProductToOrder {
            clock: self
                .clock
                .ok_or(ConfigError::MissingDependency("clock"))?,
            ids: self
                .ids
                .ok_or(ConfigError::MissingDependency("id_generator"))?,
            tx: self
                .tx
                .ok_or(ConfigError::MissingDependency("transaction_manager"))?,
            get_order: self
                .get_order
                .ok_or(ConfigError::MissingDependency("get_order"))?,
            get_product: self
                .get_product
                .ok_or(ConfigError::MissingDependency("get_product"))?,
            get_stocks: self
                .get_stocks
                .ok_or(ConfigError::MissingDependency("get_stocks"))?,
            upsert_order: self
                .upsert_order
                .ok_or(ConfigError::MissingDependency("upsert_order"))?,
            upsert_order_product: self
                .upsert_order_product
                .ok_or(ConfigError::MissingDependency("upsert_order_product"))?,
        })
    }
}
