//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, missing items). File and serialization failures belong to the
/// persistence layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. blank item name, negative quantity).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// The named item is not stocked.
    #[error("item '{0}' not found in inventory")]
    NotFound(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn not_found(item: impl Into<String>) -> Self {
        Self::NotFound(item.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_item() {
        let err = DomainError::not_found("apple");
        assert_eq!(err.to_string(), "item 'apple' not found in inventory");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn validation_message_is_prefixed() {
        let err = DomainError::validation("quantity cannot be negative");
        assert_eq!(err.to_string(), "validation failed: quantity cannot be negative");
        assert!(err.is_validation());
    }
}
