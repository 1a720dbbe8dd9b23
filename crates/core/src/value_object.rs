//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity**. They are defined
//! entirely by their attribute values, so two item names with the same text are
//! the same item.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one. Constructors validate, so holding a value object means
/// holding a valid value.
///
/// ```ignore
/// let a = ItemName::parse("apple")?;
/// let b = ItemName::parse("apple")?;
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
