use serde::{Deserialize, Serialize};

use stockline_core::{DomainError, DomainResult, ValueObject};

use crate::ids::{OrderId, Sku};

/// Value object: a request to allocate `qty` units of `sku` for an order.
///
/// A line is identified only by its data. Change the order, the SKU or the
/// quantity and you have a different line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderLine {
    order_id: OrderId,
    sku: Sku,
    qty: i64,
}

impl OrderLine {
    /// Build a line without validation (any quantity is accepted).
    pub fn new(order_id: impl Into<OrderId>, sku: impl Into<Sku>, qty: i64) -> Self {
        Self {
            order_id: order_id.into(),
            sku: sku.into(),
            qty,
        }
    }

    /// Build a line, rejecting blank identifiers and non-positive quantities.
    pub fn try_new(
        order_id: impl Into<OrderId>,
        sku: impl Into<Sku>,
        qty: i64,
    ) -> DomainResult<Self> {
        let line = Self::new(order_id, sku, qty);
        if line.order_id.is_blank() {
            return Err(DomainError::validation("order_id cannot be empty"));
        }
        if line.sku.is_blank() {
            return Err(DomainError::validation("sku cannot be empty"));
        }
        if line.qty <= 0 {
            return Err(DomainError::validation(format!(
                "qty must be positive (got {})",
                line.qty
            )));
        }
        Ok(line)
    }

    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn qty(&self) -> i64 {
        self.qty
    }
}

impl ValueObject for OrderLine {}
