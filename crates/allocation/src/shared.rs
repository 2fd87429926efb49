//! A batch shared between threads.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::batch::Batch;
use crate::error::AllocationError;
use crate::ids::BatchRef;
use crate::order_line::OrderLine;

/// Shared handle to a [`Batch`] guarded by a single lock.
///
/// The fit check and the insert of an allocation happen under the same lock,
/// so concurrent callers can never over-allocate the batch.
#[derive(Debug, Clone)]
pub struct SharedBatch {
    reference: BatchRef,
    inner: Arc<Mutex<Batch>>,
}

impl SharedBatch {
    pub fn new(batch: Batch) -> Self {
        Self {
            reference: batch.reference().clone(),
            inner: Arc::new(Mutex::new(batch)),
        }
    }

    pub fn reference(&self) -> &BatchRef {
        &self.reference
    }

    pub fn allocate(&self, line: OrderLine) -> Result<(), AllocationError> {
        self.lock().try_allocate(line)
    }

    pub fn deallocate(&self, line: &OrderLine) -> Result<(), AllocationError> {
        self.lock().try_deallocate(line)
    }

    pub fn can_allocate(&self, line: &OrderLine) -> bool {
        self.lock().can_allocate(line)
    }

    pub fn available_quantity(&self) -> i64 {
        self.lock().available_quantity()
    }

    pub fn allocated_quantity(&self) -> i64 {
        self.lock().allocated_quantity()
    }

    /// Copy of the batch as it is right now.
    pub fn snapshot(&self) -> Batch {
        self.lock().clone()
    }

    // Every mutation is a single set insert/remove, so a poisoned batch is
    // still consistent.
    fn lock(&self) -> MutexGuard<'_, Batch> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Batch> for SharedBatch {
    fn from(batch: Batch) -> Self {
        Self::new(batch)
    }
}
