//! Value object trait: equality by value, not identity.
//!
//! A value object has no long-lived identity. It is defined entirely by its
//! attributes: change any one of them and you have a different value.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Two instances
/// built from the same attributes are interchangeable, including as members of
/// a hashed collection.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: `OrderLine { order_id, sku, qty }`. Equal fields, equal line.
/// - **Entity**: `Batch { reference, .. }`. Same reference, same batch, even
///   after its allocations change.
///
/// ## Design Constraints
///
/// The trait requires:
/// - **Clone**: values are copied, never shared by reference
/// - **Eq + Hash**: values are compared and hashed over all of their attributes,
///   so they can be used as set members and map keys
/// - **Debug**: values show up in logs and test failures
///
/// ## Usage Pattern
///
/// ```
/// use stockline_core::ValueObject;
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Line {
///     sku: String,
///     qty: i64,
/// }
///
/// impl ValueObject for Line {}
///
/// let a = Line { sku: "RED-CHAIR".to_string(), qty: 5 };
/// let b = Line { sku: "RED-CHAIR".to_string(), qty: 5 };
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + Eq + core::hash::Hash + core::fmt::Debug {}
