//! First-fit capacity matcher.
//!
//! Turns an ordering of items into a concrete, feasible candidate.
//!
//! # Algorithm
//!
//! 1. Shuffle the pool's units (fresh order per candidate).
//! 2. For each item in order, for each requirement component in order:
//!    take the first unit that satisfies the component and, if the
//!    component is time-bound, whose committed windows do not overlap it.
//! 3. If any component finds no unit, drop the item; nothing is committed.
//! 4. Otherwise commit every component's window to its unit and record
//!    the allocation.
//!
//! Windows are committed only once the whole item matches, so one unit may
//! serve several simultaneous components of the same item (a person
//! bringing two skills at once).
//!
//! # Complexity
//! O(n * k * u) where n=items, k=components/item, u=pool size.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::trace;

use super::Candidate;
use crate::models::{CapacityId, CapacityPool, Item, TimeWindow, WeightDimension};

/// Per-candidate usage state: committed windows of each unit.
///
/// Indexed by unit position in the pool; the pool itself is never touched.
#[derive(Debug, Clone)]
struct UsageOverlay {
    used: Vec<Vec<TimeWindow>>,
}

impl UsageOverlay {
    fn new(units: usize) -> Self {
        Self {
            used: vec![Vec::new(); units],
        }
    }

    fn is_free(&self, unit: usize, window: &TimeWindow) -> bool {
        self.used[unit].iter().all(|w| !w.overlaps(window))
    }

    fn commit(&mut self, unit: usize, window: &TimeWindow) {
        self.used[unit].push(window.clone());
    }
}

/// Builds candidates from item orderings.
///
/// Borrows the run's read-only inputs; every call to [`build`](Self::build)
/// works on its own usage overlay.
pub struct CapacityMatcher<'a, C, W> {
    items: &'a [Item<W>],
    pool: &'a CapacityPool<C>,
}

impl<'a, C, W> CapacityMatcher<'a, C, W>
where
    W: WeightDimension<C>,
{
    /// Creates a matcher over the given items and pool.
    pub fn new(items: &'a [Item<W>], pool: &'a CapacityPool<C>) -> Self {
        Self { items, pool }
    }

    /// Matches items in `order` (indices into the item slice).
    ///
    /// Each item is skipped outright with probability `skip_chance`.
    pub fn build<R: Rng>(&self, order: &[usize], skip_chance: f64, rng: &mut R) -> Candidate {
        let mut units: Vec<usize> = (0..self.pool.len()).collect();
        units.shuffle(rng);

        let mut usage = UsageOverlay::new(self.pool.len());
        let mut candidate = Candidate::new();

        for &idx in order {
            if skip_chance > 0.0 && rng.random_bool(skip_chance) {
                continue;
            }
            let item = &self.items[idx];
            let Some(chosen) = self.match_item(item, &units, &usage) else {
                trace!(item = %item.id, "requirements not covered");
                continue;
            };

            for (unit, window) in &chosen {
                if let Some(window) = window {
                    usage.commit(*unit, window);
                }
            }
            let assigned = chosen.iter().map(|(unit, _)| CapacityId(*unit)).collect();
            candidate.insert(idx, item.value, assigned);
        }

        candidate
    }

    /// Picks a unit for every component, or `None` if any is uncovered.
    fn match_item<'i>(
        &self,
        item: &'i Item<W>,
        units: &[usize],
        usage: &UsageOverlay,
    ) -> Option<Vec<(usize, Option<&'i TimeWindow>)>> {
        let pool = self.pool.units();
        let components = item.total_weight.components();
        let mut chosen = Vec::with_capacity(components.len());

        for component in components {
            let window = component.time_window();
            let unit = units.iter().copied().find(|&u| {
                component.is_satisfied_by(&pool[u].dimension)
                    && window.map_or(true, |w| usage.is_free(u, w))
            })?;
            chosen.push((unit, window));
        }

        Some(chosen)
    }
}
