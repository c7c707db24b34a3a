//! Optimization result.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::Candidate;
use crate::models::{CapacityPool, CapacityUnit, Item};

/// Counters collected during one search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Breeding rounds completed.
    pub generations: usize,
    /// Candidates decoded by the matcher (initial population included).
    pub candidates_built: usize,
    /// Best survivor value after initialization, then after each generation.
    pub best_value_history: Vec<f64>,
}

/// Outcome of an optimization run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationResult<C, W> {
    /// Total value of all chosen items, zero-weight items included.
    pub value: f64,
    /// Chosen items: matched items in match order, then zero-weight items.
    pub chosen_items: Vec<Item<W>>,
    /// Units serving each matched item, keyed by item ID.
    ///
    /// Zero-weight items consume nothing and have no entry.
    pub item_to_capacities: HashMap<String, Vec<CapacityUnit<C>>>,
    /// Search counters.
    pub stats: SearchStats,
}

impl<C: Clone, W: Clone> OptimizationResult<C, W> {
    /// Assembles the result from the winning candidate.
    pub(crate) fn assemble(
        items: &[Item<W>],
        pool: &CapacityPool<C>,
        best: &Candidate,
        guaranteed: &[usize],
        stats: SearchStats,
    ) -> Self {
        let mut chosen_items = Vec::with_capacity(best.len() + guaranteed.len());
        let mut item_to_capacities = HashMap::with_capacity(best.len());

        for allocation in best.allocations() {
            let item = &items[allocation.item];
            let units = allocation
                .capacities()
                .into_iter()
                .filter_map(|id| pool.get(id).cloned())
                .collect();
            item_to_capacities.insert(item.id.clone(), units);
            chosen_items.push(item.clone());
        }

        let guaranteed_value: f64 = guaranteed.iter().map(|&idx| items[idx].value).sum();
        chosen_items.extend(guaranteed.iter().map(|&idx| items[idx].clone()));

        Self {
            value: best.value() + guaranteed_value,
            chosen_items,
            item_to_capacities,
            stats,
        }
    }
}

impl<C, W> OptimizationResult<C, W> {
    /// Number of chosen items.
    pub fn chosen_count(&self) -> usize {
        self.chosen_items.len()
    }

    /// Whether the item with `item_id` was chosen.
    pub fn is_chosen(&self, item_id: &str) -> bool {
        self.chosen_items.iter().any(|i| i.id == item_id)
    }

    /// Units serving an item, if it was matched.
    pub fn capacities_for(&self, item_id: &str) -> Option<&[CapacityUnit<C>]> {
        self.item_to_capacities.get(item_id).map(|v| v.as_slice())
    }
}
