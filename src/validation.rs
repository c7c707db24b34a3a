//! Input validation for allocation problems.
//!
//! Checks structural integrity of items before optimizing. Detects:
//! - Duplicate or empty item IDs
//! - Non-finite item values (NaN would poison ranking)
//! - Time-bound requirements with empty or inverted windows
//!
//! Capacity pools need no checks of their own: unit handles are assigned
//! by the pool and descriptors are opaque.

use std::collections::HashSet;

use crate::models::{Item, WeightDimension};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two items share the same ID.
    DuplicateId,
    /// An item has an empty ID.
    EmptyId,
    /// An item value is NaN or infinite.
    InvalidValue,
    /// A requirement occupies an empty or inverted time window.
    InvalidWindow,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the items of an allocation problem.
///
/// Checks:
/// 1. No empty item IDs
/// 2. No duplicate item IDs
/// 3. All item values are finite
/// 4. Every time-bound requirement spans a positive duration
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input<C, W>(items: &[Item<W>]) -> ValidationResult
where
    W: WeightDimension<C>,
{
    let mut errors = Vec::new();
    let mut item_ids = HashSet::new();

    for item in items {
        if item.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                "Item with empty ID",
            ));
        } else if !item_ids.insert(item.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate item ID: {}", item.id),
            ));
        }

        if !item.value.is_finite() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidValue,
                format!("Item '{}' has non-finite value {}", item.id, item.value),
            ));
        }

        for (idx, component) in item.total_weight.components().iter().enumerate() {
            if let Some(window) = component.time_window() {
                if window.is_empty() {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvalidWindow,
                        format!(
                            "Item '{}' requirement #{} has empty window [{}, {})",
                            item.id, idx, window.start_ms, window.end_ms
                        ),
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
