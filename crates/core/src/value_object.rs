//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, so two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. A ticket
/// request for three adults is the same request wherever it appears in a
/// purchase; an amount of money is just its number of units.
///
/// ## Design Constraints
///
/// The trait requires:
/// - **Clone**: value objects are copied freely
/// - **PartialEq**: value objects are compared by their attribute values
/// - **Debug**: value objects show up in logs and test failures
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct TicketRequest {
///     category: TicketCategory,
///     quantity: i32,
/// }
///
/// impl ValueObject for TicketRequest {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
