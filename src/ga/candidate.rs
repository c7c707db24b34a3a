//! Candidate solution: which items are fulfilled and by which units.
//!
//! Items are addressed by their index in the input slice, so two items
//! with identical value and requirements remain distinct entries.

use std::collections::{BTreeSet, HashMap};

use crate::models::CapacityId;

/// Units serving one fulfilled item.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    /// Index of the item in the input slice.
    pub item: usize,
    /// Unit serving each requirement component, in component order.
    pub units: Vec<CapacityId>,
}

impl Allocation {
    /// Distinct units used by this item.
    pub fn capacities(&self) -> BTreeSet<CapacityId> {
        self.units.iter().copied().collect()
    }
}

/// One trial assignment built by the capacity matcher.
///
/// Only fully matched items are present; fitness is the plain sum of
/// their values (higher = better).
#[derive(Debug, Clone, Default)]
pub struct Candidate {
    allocations: Vec<Allocation>,
    /// item index → position in `allocations`.
    index: HashMap<usize, usize>,
    value: f64,
}

impl Candidate {
    /// Creates an empty candidate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a fulfilled item.
    ///
    /// Re-inserting an item that is already present is ignored.
    pub fn insert(&mut self, item: usize, value: f64, units: Vec<CapacityId>) {
        if self.index.contains_key(&item) {
            return;
        }
        self.index.insert(item, self.allocations.len());
        self.allocations.push(Allocation { item, units });
        self.value += value;
    }

    /// Whether the item is fulfilled in this candidate.
    #[inline]
    pub fn contains(&self, item: usize) -> bool {
        self.index.contains_key(&item)
    }

    /// Allocation of an item, if fulfilled.
    pub fn allocation(&self, item: usize) -> Option<&Allocation> {
        self.index.get(&item).map(|&pos| &self.allocations[pos])
    }

    /// Allocations in the order items were matched.
    pub fn allocations(&self) -> &[Allocation] {
        &self.allocations
    }

    /// Sum of fulfilled item values.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Number of fulfilled items.
    pub fn len(&self) -> usize {
        self.allocations.len()
    }

    /// Whether no item is fulfilled.
    pub fn is_empty(&self) -> bool {
        self.allocations.is_empty()
    }
}
