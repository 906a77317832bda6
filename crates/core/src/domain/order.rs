use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::collection::{LineItem, ProductCollection};
use crate::errors::DomainError;

/// Scoped to one customer's order list: assigned as order-count + 1, so two
/// customers may each hold an order with id 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    items: ProductCollection,
    status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Read-only projection of one order for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderDetails {
    pub id: OrderId,
    pub status: OrderStatus,
    pub line_items: Vec<LineItem>,
    pub total: Decimal,
}

impl Order {
    pub fn new(id: OrderId, items: ProductCollection) -> Self {
        Self { id, items, status: OrderStatus::Pending, created_at: Utc::now() }
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn items(&self) -> &ProductCollection {
        &self.items
    }

    pub fn total(&self) -> Decimal {
        self.items.total()
    }

    /// Marks the order Completed. The only guard is that the collection must
    /// be non-empty; completion is permitted from any prior status, including
    /// Cancelled (the lifecycle is deliberately permissive).
    pub fn complete(&mut self) -> Result<(), DomainError> {
        if self.items.is_empty() {
            return Err(DomainError::EmptyOrder { id: self.id });
        }

        self.status = OrderStatus::Completed;
        Ok(())
    }

    /// Cancels unconditionally, whatever the prior status.
    pub fn cancel(&mut self) {
        self.status = OrderStatus::Cancelled;
    }

    pub fn details(&self) -> OrderDetails {
        OrderDetails {
            id: self.id,
            status: self.status,
            line_items: self.items.items().to_vec(),
            total: self.items.total(),
        }
    }
}
