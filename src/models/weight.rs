//! Weight (requirement) model.
//!
//! A weight component is one typed requirement of an item, e.g. "needs
//! skill X during day 3". The optimizer never looks inside components; it
//! only asks whether a capacity descriptor satisfies them and which time
//! window, if any, they occupy.
//!
//! Domains with several requirement kinds implement the trait on an enum
//! so that one item can mix them.

use serde::{Deserialize, Serialize};

use super::TimeWindow;

/// A single requirement that capacity descriptors of type `C` may satisfy.
pub trait WeightDimension<C> {
    /// Whether `capacity` can serve this requirement.
    fn is_satisfied_by(&self, capacity: &C) -> bool;

    /// Window occupied on the serving unit.
    ///
    /// `None` means the requirement is not time-exclusive: it never blocks
    /// the unit for other requirements.
    fn time_window(&self) -> Option<&TimeWindow>;
}

/// Ordered set of weight components making up an item's requirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalWeight<W> {
    components: Vec<W>,
}

impl<W> Default for TotalWeight<W> {
    fn default() -> Self {
        Self {
            components: Vec::new(),
        }
    }
}

impl<W> TotalWeight<W> {
    /// A weight with no components.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Creates a weight from components (order is preserved).
    pub fn of(components: Vec<W>) -> Self {
        Self { components }
    }

    /// Appends a component.
    pub fn push(&mut self, component: W) {
        self.components.push(component);
    }

    /// Components in declared order.
    pub fn components(&self) -> &[W] {
        &self.components
    }

    /// Whether there are no components.
    pub fn is_zero(&self) -> bool {
        self.components.is_empty()
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Same as [`is_zero`](Self::is_zero).
    pub fn is_empty(&self) -> bool {
        self.is_zero()
    }
}

impl<W> FromIterator<W> for TotalWeight<W> {
    fn from_iter<I: IntoIterator<Item = W>>(iter: I) -> Self {
        Self::of(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Needs a unit of at least the given strength; never time-bound.
    struct AtLeast(u32);

    impl WeightDimension<u32> for AtLeast {
        fn is_satisfied_by(&self, capacity: &u32) -> bool {
            *capacity >= self.0
        }

        fn time_window(&self) -> Option<&TimeWindow> {
            None
        }
    }

    #[test]
    fn test_custom_dimension() {
        let weight: TotalWeight<AtLeast> = [AtLeast(3), AtLeast(5)].into_iter().collect();
        assert_eq!(weight.len(), 2);
        assert!(weight.components()[0].is_satisfied_by(&4));
        assert!(!weight.components()[1].is_satisfied_by(&4));
        assert!(weight.components()[1].time_window().is_none());
    }

    #[test]
    fn test_zero_weight() {
        let mut weight: TotalWeight<AtLeast> = TotalWeight::zero();
        assert!(weight.is_zero());
        weight.push(AtLeast(1));
        assert!(!weight.is_zero());
    }
}
