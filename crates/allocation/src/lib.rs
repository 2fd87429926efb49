//! Allocation domain module.
//!
//! Order lines are allocated against batches of stock. A batch accepts a line
//! when the SKUs match and it has enough unallocated quantity left; among
//! several batches, stock already in the warehouse is preferred over shipments,
//! and earlier shipments over later ones.
//!
//! Everything here is deterministic, in-memory domain logic (no IO, no storage).

pub mod batch;
pub mod error;
pub mod ids;
pub mod order_line;
pub mod selection;
pub mod shared;

pub use batch::Batch;
pub use error::AllocationError;
pub use ids::{BatchRef, OrderId, Sku};
pub use order_line::OrderLine;
pub use selection::{allocate, deallocate, sort_by_priority};
pub use shared::SharedBatch;
