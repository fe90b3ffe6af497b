//! Composable fetch options passed to repository ports.

use domain::{OrderId, ProductId};

/// Default page size when the caller does not specify one.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// 1-indexed pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl Pagination {
    /// Creates a window; zero page or page size falls back to the
    /// defaults.
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: if page == 0 { 1 } else { page },
            per_page: if per_page == 0 { DEFAULT_PER_PAGE } else { per_page },
        }
    }

    /// Row limit for the backing query.
    pub fn limit(&self) -> u64 {
        u64::from(self.per_page)
    }

    /// Row offset for the backing query.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * self.limit()
    }

    /// Returns the page number.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Builds the result-envelope meta for a known total.
    pub fn meta(&self, total: u64) -> Meta {
        Meta {
            total,
            per_page: self.per_page,
            page: self.page,
            last_page: total.div_ceil(u64::from(self.per_page)),
        }
    }
}

/// Pagination metadata returned alongside listing results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meta {
    pub total: u64,
    pub per_page: u32,
    pub page: u32,
    pub last_page: u64,
}

/// Options for fetching one order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderQueryOptions {
    order_id: OrderId,
    for_update: bool,
    pagination: Pagination,
}

impl OrderQueryOptions {
    /// Fetch by order id.
    pub fn by_id(order_id: OrderId) -> Self {
        Self {
            order_id,
            for_update: false,
            pagination: Pagination::default(),
        }
    }

    /// Requests a row lock for the duration of the surrounding
    /// transaction (`FOR UPDATE` semantics).
    pub fn for_update(mut self) -> Self {
        self.for_update = true;
        self
    }

    /// Returns true if the row-lock hint is set.
    pub fn is_for_update(&self) -> bool {
        self.for_update
    }

    /// Returns the order id to fetch.
    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    /// Returns the pagination window.
    pub fn pagination(&self) -> Pagination {
        self.pagination
    }
}

/// Options for fetching one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQueryOptions {
    product_id: ProductId,
    pagination: Pagination,
}

impl ProductQueryOptions {
    /// Fetch by product id.
    pub fn by_id(product_id: ProductId) -> Self {
        Self {
            product_id,
            pagination: Pagination::default(),
        }
    }

    /// Returns the product id to fetch.
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Returns the pagination window.
    pub fn pagination(&self) -> Pagination {
        self.pagination
    }
}

/// Options for fetching all stock rows of a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StocksQueryOptions {
    product_id: ProductId,
    pagination: Pagination,
}

impl StocksQueryOptions {
    /// Fetch all warehouse rows for a product.
    pub fn by_product(product_id: ProductId) -> Self {
        Self {
            product_id,
            pagination: Pagination::default(),
        }
    }

    /// Returns the product id to fetch rows for.
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Returns the pagination window.
    pub fn pagination(&self) -> Pagination {
        self.pagination
    }
}
