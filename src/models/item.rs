//! Item model.
//!
//! An item is a unit of work that may or may not be fulfilled: a project,
//! an order, a shift to staff. It carries a value and a composite
//! requirement. Fulfillment is all-or-nothing.
//!
//! # Value Convention
//! The sign convention is the caller's choice. Profit is usually positive;
//! an avoided loss (e.g. reputation damage) can also be expressed as a
//! positive value of fulfilling the item.

use serde::{Deserialize, Serialize};

use super::TotalWeight;

/// A candidate work item.
///
/// Items are identified by `id`, never by value: two items with equal
/// value and requirements are still distinct entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item<W> {
    /// Unique item identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Value gained when the item is fulfilled.
    pub value: f64,
    /// Requirement that must be fully covered to fulfill the item.
    pub total_weight: TotalWeight<W>,
}

impl<W> Item<W> {
    /// Creates an item with no requirements.
    pub fn new(id: impl Into<String>, value: f64) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            value,
            total_weight: TotalWeight::zero(),
        }
    }

    /// Sets the item name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Appends one requirement component.
    pub fn with_component(mut self, component: W) -> Self {
        self.total_weight.push(component);
        self
    }

    /// Replaces the whole requirement.
    pub fn with_weight(mut self, total_weight: TotalWeight<W>) -> Self {
        self.total_weight = total_weight;
        self
    }

    /// Whether the item has no requirements (always fulfilled).
    pub fn is_weight_zero(&self) -> bool {
        self.total_weight.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_builder() {
        let item: Item<&str> = Item::new("P1", 42.0)
            .with_name("Website relaunch")
            .with_component("java")
            .with_component("ux");

        assert_eq!(item.id, "P1");
        assert_eq!(item.name, "Website relaunch");
        assert!((item.value - 42.0).abs() < 1e-10);
        assert_eq!(item.total_weight.components(), &["java", "ux"]);
        assert!(!item.is_weight_zero());
    }

    #[test]
    fn test_zero_weight_item() {
        let item: Item<&str> = Item::new("free", 5.0);
        assert!(item.is_weight_zero());

        let replaced = Item::new("x", 1.0)
            .with_component("a")
            .with_weight(TotalWeight::zero());
        assert!(replaced.is_weight_zero());
    }
}
