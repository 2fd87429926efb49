//! Allocation errors reported by the explicit (`try_*`) operations.

use thiserror::Error;

use stockline_core::DomainError;

use crate::ids::{OrderId, Sku};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AllocationError {
    #[error("sku mismatch (batch: {batch_sku}, line: {line_sku})")]
    SkuMismatch { batch_sku: Sku, line_sku: Sku },

    #[error("insufficient stock (requested: {requested}, available: {available})")]
    InsufficientStock { requested: i64, available: i64 },

    #[error("order line for {order_id} is not allocated")]
    NotAllocated { order_id: OrderId },

    #[error("out of stock for sku {sku}")]
    OutOfStock { sku: Sku },

    #[error("quantity of order line for {order_id} is out of range")]
    QuantityOverflow { order_id: OrderId },
}

impl From<AllocationError> for DomainError {
    fn from(err: AllocationError) -> Self {
        match err {
            AllocationError::SkuMismatch { .. }
            | AllocationError::InsufficientStock { .. }
            | AllocationError::QuantityOverflow { .. } => DomainError::invariant(err.to_string()),
            AllocationError::NotAllocated { .. } => DomainError::not_found(err.to_string()),
            AllocationError::OutOfStock { .. } => DomainError::conflict(err.to_string()),
        }
    }
}
