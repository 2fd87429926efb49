//! End-to-end allocation scenarios through the public API.

use chrono::NaiveDate;

use stockline_allocation::{
    AllocationError, Batch, BatchRef, OrderLine, SharedBatch, allocate, deallocate,
    sort_by_priority,
};
use stockline_core::{DomainError, Entity};
use stockline_observability::{LogFormat, ObservabilityConfig};

fn init_logging() {
    stockline_observability::init_with(
        &ObservabilityConfig::default()
            .with_filter("stockline_allocation=debug")
            .with_format(LogFormat::Compact),
    );
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn single_batch_scenarios() {
    init_logging();

    let mut batch = Batch::new("batch-001", "RED-CHAIR", 20, None);
    let red = OrderLine::new("order-1", "RED-CHAIR", 2);
    let blue = OrderLine::new("order-2", "BLUE-CHAIR", 2);

    assert!(batch.can_allocate(&red));
    batch.allocate(red.clone());
    assert_eq!(batch.available_quantity(), 18);
    assert_eq!(batch.allocated_quantity(), 2);

    assert!(!batch.can_allocate(&blue));
    batch.allocate(blue);
    assert_eq!(batch.available_quantity(), 18);

    let small = Batch::new("batch-002", "RED-CHAIR", 2, None);
    assert!(!small.can_allocate(&OrderLine::new("order-3", "RED-CHAIR", 20)));

    batch.deallocate(&red);
    assert_eq!(batch.available_quantity(), 20);
    assert_eq!(batch.id(), &BatchRef::from("batch-001"));
}

#[test]
fn order_is_filled_across_batches_in_priority_order() {
    init_logging();

    let mut batches = vec![
        Batch::new("shipment-late", "LAMP", 10, Some(date(2024, 6, 1))),
        Batch::new("shipment-early", "LAMP", 10, Some(date(2024, 5, 1))),
        Batch::new("warehouse", "LAMP", 5, None),
    ];

    let first = OrderLine::new("order-1", "LAMP", 5);
    let second = OrderLine::new("order-2", "LAMP", 5);
    let third = OrderLine::new("order-3", "LAMP", 10);
    let fourth = OrderLine::new("order-4", "LAMP", 6);

    assert_eq!(allocate(&first, &mut batches), Ok(BatchRef::from("warehouse")));
    assert_eq!(allocate(&second, &mut batches), Ok(BatchRef::from("shipment-early")));
    assert_eq!(allocate(&third, &mut batches), Ok(BatchRef::from("shipment-late")));
    assert_eq!(
        allocate(&fourth, &mut batches),
        Err(AllocationError::OutOfStock { sku: "LAMP".into() })
    );

    assert_eq!(deallocate(&second, &mut batches), Some(BatchRef::from("shipment-early")));
    assert_eq!(allocate(&fourth, &mut batches), Ok(BatchRef::from("shipment-early")));

    sort_by_priority(&mut batches);
    let available: Vec<i64> = batches.iter().map(Batch::available_quantity).collect();
    assert_eq!(available, [0, 4, 0]);
}

#[test]
fn strict_errors_convert_to_domain_errors() {
    let mut batch = Batch::try_new("batch-001", "RED-CHAIR", 1, None).unwrap();
    let line = OrderLine::try_new("order-1", "RED-CHAIR", 5).unwrap();

    let err: DomainError = batch.try_allocate(line).unwrap_err().into();
    assert!(matches!(err, DomainError::InvariantViolation(_)));
}

#[test]
fn shared_batch_snapshot_reflects_allocations() {
    let shared = SharedBatch::new(Batch::new("batch-001", "RED-CHAIR", 3, None));
    shared.allocate(OrderLine::new("order-1", "RED-CHAIR", 3)).unwrap();

    let snapshot = shared.snapshot();
    assert_eq!(snapshot.available_quantity(), 0);
    assert_eq!(snapshot.allocations().count(), 1);
}
