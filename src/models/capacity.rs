//! Capacity model.
//!
//! A capacity unit is an atomic, reusable capability offered to the
//! allocator (e.g., "this employee brings skill X on day 1"). Units are
//! reusable across requirements whose time windows do not overlap.
//!
//! The pool is an arena: units are addressed by [`CapacityId`], the index
//! at which they were added. The descriptor type `C` is opaque to the
//! engine; it is only ever inspected through
//! [`WeightDimension::is_satisfied_by`](super::WeightDimension::is_satisfied_by).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Handle of a capacity unit within its pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CapacityId(pub usize);

impl CapacityId {
    /// Position of the unit in its pool.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CapacityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cap#{}", self.0)
    }
}

/// A capacity unit: pool handle plus domain descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityUnit<C> {
    /// Handle within the owning pool.
    pub id: CapacityId,
    /// Domain-specific capability descriptor.
    pub dimension: C,
}

/// All capacity units available to one optimization run.
///
/// Immutable from the optimizer's point of view: usage is tracked per
/// candidate in a separate overlay, never on the pool itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityPool<C> {
    units: Vec<CapacityUnit<C>>,
}

impl<C> Default for CapacityPool<C> {
    fn default() -> Self {
        Self { units: Vec::new() }
    }
}

impl<C> CapacityPool<C> {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a unit (builder style).
    pub fn with_unit(mut self, dimension: C) -> Self {
        self.add(dimension);
        self
    }

    /// Adds a unit and returns its handle.
    pub fn add(&mut self, dimension: C) -> CapacityId {
        let id = CapacityId(self.units.len());
        self.units.push(CapacityUnit { id, dimension });
        id
    }

    /// Number of units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the pool has no units.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Looks up a unit by handle.
    pub fn get(&self, id: CapacityId) -> Option<&CapacityUnit<C>> {
        self.units.get(id.index())
    }

    /// Iterates units in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CapacityUnit<C>> {
        self.units.iter()
    }

    /// Units as a slice, indexable by [`CapacityId::index`].
    pub fn units(&self) -> &[CapacityUnit<C>] {
        &self.units
    }
}

impl<C: Clone> CapacityPool<C> {
    /// Returns a copy of this pool with one extra unit appended.
    ///
    /// Existing handles stay valid in the copy.
    pub fn extended_with(&self, dimension: C) -> Self {
        self.clone().with_unit(dimension)
    }
}

impl<C> FromIterator<C> for CapacityPool<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        let mut pool = Self::new();
        for dimension in iter {
            pool.add(dimension);
        }
        pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_assigns_sequential_ids() {
        let mut pool = CapacityPool::new();
        let a = pool.add("welder");
        let b = pool.add("painter");

        assert_eq!(a, CapacityId(0));
        assert_eq!(b, CapacityId(1));
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.get(b).map(|u| u.dimension), Some("painter"));
        assert!(pool.get(CapacityId(5)).is_none());
    }

    #[test]
    fn test_extended_with_leaves_original_untouched() {
        let pool: CapacityPool<&str> = ["a", "b"].into_iter().collect();
        let bigger = pool.extended_with("c");

        assert_eq!(pool.len(), 2);
        assert_eq!(bigger.len(), 3);
        assert_eq!(bigger.get(CapacityId(2)).map(|u| u.dimension), Some("c"));
        assert_eq!(bigger.get(CapacityId(0)), pool.get(CapacityId(0)));
    }

    #[test]
    fn test_empty_pool() {
        let pool: CapacityPool<u8> = CapacityPool::new();
        assert!(pool.is_empty());
        assert_eq!(pool.iter().count(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(CapacityId(3).to_string(), "cap#3");
    }
}
