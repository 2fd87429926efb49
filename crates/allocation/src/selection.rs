//! Choosing a batch for an order line among several candidates.

use crate::batch::Batch;
use crate::error::AllocationError;
use crate::ids::BatchRef;
use crate::order_line::OrderLine;

/// Allocate `line` into the preferred batch that can take it.
///
/// Batches in stock are preferred over shipments, and earlier shipments over
/// later ones (see [`Batch::cmp_priority`]). If a batch already holds the line,
/// its reference is returned and nothing changes.
pub fn allocate(line: &OrderLine, batches: &mut [Batch]) -> Result<BatchRef, AllocationError> {
    if let Some(holder) = batches.iter().find(|b| b.is_allocated(line)) {
        return Ok(holder.reference().clone());
    }

    let mut candidates: Vec<&mut Batch> = batches.iter_mut().collect();
    candidates.sort_by(|a, b| a.cmp_priority(b));

    for batch in candidates {
        if batch.try_allocate(line.clone()).is_ok() {
            tracing::debug!(order_id = %line.order_id(), batch = %batch.reference(), "line allocated");
            return Ok(batch.reference().clone());
        }
    }

    tracing::debug!(order_id = %line.order_id(), sku = %line.sku(), qty = line.qty(), "out of stock");
    Err(AllocationError::OutOfStock {
        sku: line.sku().clone(),
    })
}

/// Release `line` from whichever batch holds it.
pub fn deallocate(line: &OrderLine, batches: &mut [Batch]) -> Option<BatchRef> {
    let batch = batches.iter_mut().find(|b| b.is_allocated(line))?;
    batch.deallocate(line);
    Some(batch.reference().clone())
}

/// Sort batches into allocation order (highest priority first).
pub fn sort_by_priority(batches: &mut [Batch]) {
    batches.sort_by(|a, b| a.cmp_priority(b));
}
