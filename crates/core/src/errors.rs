use thiserror::Error;

use crate::domain::customer::CustomerId;
use crate::domain::order::OrderId;

/// Recoverable domain failures. Per-line product misses during order
/// creation are not errors; they are reported inside the order receipt and
/// the order proceeds with the remaining lines.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("customer {id} not found")]
    CustomerNotFound { id: CustomerId },
    #[error("order {id} has no line items and cannot be completed")]
    EmptyOrder { id: OrderId },
}
