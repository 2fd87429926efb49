use core::cmp::Ordering;
use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockline_core::{DomainError, DomainResult, Entity};

use crate::error::AllocationError;
use crate::ids::{BatchRef, Sku};
use crate::order_line::OrderLine;

/// Entity: a quantity of stock for one SKU, against which order lines are allocated.
///
/// A batch with no `eta` is already in the warehouse; otherwise it is a
/// shipment expected on that date. Identity is the `reference` alone.
///
/// Deserialized batches are rebuilt line by line through
/// [`Batch::try_allocate`], so a payload cannot bypass the allocation rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "BatchRecord")]
pub struct Batch {
    reference: BatchRef,
    sku: Sku,
    purchased_quantity: i64,
    eta: Option<NaiveDate>,
    allocations: HashSet<OrderLine>,
}

impl Batch {
    /// Create a batch with no allocations. No validation is performed.
    pub fn new(
        reference: impl Into<BatchRef>,
        sku: impl Into<Sku>,
        purchased_quantity: i64,
        eta: Option<NaiveDate>,
    ) -> Self {
        Self {
            reference: reference.into(),
            sku: sku.into(),
            purchased_quantity,
            eta,
            allocations: HashSet::new(),
        }
    }

    /// Create a batch, rejecting blank identifiers and negative quantities.
    pub fn try_new(
        reference: impl Into<BatchRef>,
        sku: impl Into<Sku>,
        purchased_quantity: i64,
        eta: Option<NaiveDate>,
    ) -> DomainResult<Self> {
        let batch = Self::new(reference, sku, purchased_quantity, eta);
        if batch.reference.is_blank() {
            return Err(DomainError::validation("reference cannot be empty"));
        }
        if batch.sku.is_blank() {
            return Err(DomainError::validation("sku cannot be empty"));
        }
        if batch.purchased_quantity < 0 {
            return Err(DomainError::validation(format!(
                "purchased quantity cannot be negative (got {})",
                batch.purchased_quantity
            )));
        }
        Ok(batch)
    }

    pub fn reference(&self) -> &BatchRef {
        &self.reference
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn purchased_quantity(&self) -> i64 {
        self.purchased_quantity
    }

    pub fn eta(&self) -> Option<NaiveDate> {
        self.eta
    }

    /// Lines currently allocated to this batch, in no particular order.
    pub fn allocations(&self) -> impl Iterator<Item = &OrderLine> {
        self.allocations.iter()
    }

    pub fn is_allocated(&self, line: &OrderLine) -> bool {
        self.allocations.contains(line)
    }

    pub fn allocated_quantity(&self) -> i64 {
        saturate(self.allocated_total())
    }

    pub fn available_quantity(&self) -> i64 {
        saturate(i128::from(self.purchased_quantity) - self.allocated_total())
    }

    /// Whether `line` fits: same SKU and enough available quantity.
    pub fn can_allocate(&self, line: &OrderLine) -> bool {
        self.check_allocatable(line).is_ok()
    }

    /// Allocate `line` if it fits; otherwise do nothing.
    ///
    /// Re-allocating a line that is already held is a no-op. Use
    /// [`Batch::try_allocate`] to learn why a line was refused.
    pub fn allocate(&mut self, line: OrderLine) {
        if let Err(err) = self.try_allocate(line) {
            tracing::debug!(batch = %self.reference, error = %err, "allocation skipped");
        }
    }

    /// Allocate `line`, reporting why it does not fit.
    pub fn try_allocate(&mut self, line: OrderLine) -> Result<(), AllocationError> {
        if self.allocations.contains(&line) {
            return Ok(());
        }
        self.check_allocatable(&line)?;
        self.allocations.insert(line);
        Ok(())
    }

    /// Release `line` if it is allocated here; otherwise do nothing.
    pub fn deallocate(&mut self, line: &OrderLine) {
        if let Err(err) = self.try_deallocate(line) {
            tracing::debug!(batch = %self.reference, error = %err, "deallocation skipped");
        }
    }

    /// Release `line`, reporting when it was never allocated here.
    pub fn try_deallocate(&mut self, line: &OrderLine) -> Result<(), AllocationError> {
        if !self.allocations.contains(line) {
            return Err(AllocationError::NotAllocated {
                order_id: line.order_id().clone(),
            });
        }
        self.check_totals(self.allocated_total() - i128::from(line.qty()), line)?;
        self.allocations.remove(line);
        Ok(())
    }

    /// True when this batch arrives strictly after `other`.
    ///
    /// A batch in stock is never later than anything, and any shipment is
    /// later than a batch in stock. Two in-stock batches are not later than
    /// each other.
    pub fn is_later_than(&self, other: &Batch) -> bool {
        match (self.eta, other.eta) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(mine), Some(theirs)) => mine > theirs,
        }
    }

    /// Allocation priority: in-stock first, then by ETA, then by reference.
    ///
    /// `Ordering::Less` means `self` should be allocated from before `other`.
    pub fn cmp_priority(&self, other: &Batch) -> Ordering {
        cmp_eta(self.eta, other.eta).then_with(|| self.reference.cmp(&other.reference))
    }

    fn check_allocatable(&self, line: &OrderLine) -> Result<(), AllocationError> {
        if line.sku() != &self.sku {
            return Err(AllocationError::SkuMismatch {
                batch_sku: self.sku.clone(),
                line_sku: line.sku().clone(),
            });
        }
        let available = self.available_quantity();
        if available < line.qty() {
            return Err(AllocationError::InsufficientStock {
                requested: line.qty(),
                available,
            });
        }
        self.check_totals(self.allocated_total() + i128::from(line.qty()), line)
    }

    fn allocated_total(&self) -> i128 {
        self.allocations.iter().map(|l| i128::from(l.qty())).sum()
    }

    /// Allocated and available quantities must both stay within `i64`.
    fn check_totals(&self, allocated: i128, line: &OrderLine) -> Result<(), AllocationError> {
        let available = i128::from(self.purchased_quantity) - allocated;
        if i64::try_from(allocated).is_err() || i64::try_from(available).is_err() {
            return Err(AllocationError::QuantityOverflow {
                order_id: line.order_id().clone(),
            });
        }
        Ok(())
    }
}

// Totals are kept within `i64` by `check_totals`, so this never clamps.
fn saturate(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

/// Wire shape of a [`Batch`]; allocations are replayed on the way in.
#[derive(Deserialize)]
struct BatchRecord {
    reference: BatchRef,
    sku: Sku,
    purchased_quantity: i64,
    eta: Option<NaiveDate>,
    #[serde(default)]
    allocations: Vec<OrderLine>,
}

impl TryFrom<BatchRecord> for Batch {
    type Error = AllocationError;

    fn try_from(record: BatchRecord) -> Result<Self, Self::Error> {
        let mut batch = Batch::new(
            record.reference,
            record.sku,
            record.purchased_quantity,
            record.eta,
        );
        let mut lines = record.allocations;
        // Smallest first: any set that leaves stock non-negative replays cleanly.
        lines.sort_by(|a, b| a.qty().cmp(&b.qty()).then_with(|| a.order_id().cmp(b.order_id())));
        for line in lines {
            batch.try_allocate(line)?;
        }
        Ok(batch)
    }
}

/// No ETA sorts before any date.
fn cmp_eta(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.cmp(&b),
    }
}

impl Entity for Batch {
    type Id = BatchRef;

    fn id(&self) -> &Self::Id {
        &self.reference
    }
}

impl PartialEq for Batch {
    fn eq(&self, other: &Self) -> bool {
        self.reference == other.reference
    }
}

impl Eq for Batch {}

impl core::hash::Hash for Batch {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.reference.hash(state);
    }
}

impl core::fmt::Display for Batch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "<Batch {}>", self.reference)
    }
}
