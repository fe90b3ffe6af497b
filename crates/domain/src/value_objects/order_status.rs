//! Order status and its transition graph.

use serde::{Deserialize, Serialize};

/// Lifecycle status of an order.
///
/// Transition graph:
/// ```text
/// Created ──► Paid ──► Ordered ──► Shipped ──► Received ──► Returned
///    │          │         │  └───────┼───────────▲             ▲
///    │          │         │          │           │             │
///    └──────────┴─────────┴──────────┴──► Canceled   Shipped ──┘
/// ```
///
/// The graph is declared here as a validation table; no current use
/// case performs a checked transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Initial status of every new order.
    #[default]
    Created,
    Paid,
    Ordered,
    Shipped,
    Received,
    Returned,
    Canceled,
}

impl OrderStatus {
    /// Returns true if the graph allows moving from `self` to `next`.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        use OrderStatus::*;

        let allowed: &[OrderStatus] = match self {
            Created => &[Paid, Canceled],
            Paid => &[Ordered, Canceled],
            Ordered => &[Shipped, Received, Canceled],
            Shipped => &[Received, Returned, Canceled],
            Received => &[Returned],
            Returned | Canceled => &[],
        };

        allowed.contains(&next)
    }

    /// Returns the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Paid => "paid",
            Self::Ordered => "ordered",
            Self::Shipped => "shipped",
            Self::Received => "received",
            Self::Returned => "returned",
            Self::Canceled => "canceled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
