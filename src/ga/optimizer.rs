//! Genetic optimizer.
//!
//! # Algorithm
//!
//! 1. Sort items (descending value by default). Build `population_size`
//!    candidates; before each, with probability `mutation_chance`, swap
//!    two positions of the running ordering. Keep the best `survivors`.
//! 2. Repeat `generations` times: refill the population with children of
//!    two uniformly drawn survivors (with replacement), then keep the best
//!    `survivors` of the whole population.
//! 3. The best survivor wins. Zero-weight items never enter the search;
//!    they are added to the result unconditionally.
//!
//! Termination is a fixed budget: no convergence check, no early exit.
//!
//! # Randomness
//!
//! An [`Optimizer`] holds configuration only. Every call owns a fresh
//! random source (seeded from the configuration, or from OS entropy), so
//! one optimizer may be shared across threads without synchronization.

use std::cmp::Ordering;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::operators::{crossover_order, swap_mutation};
use super::{Candidate, CapacityMatcher, OptimizationResult, OptimizerConfig, SearchStats};
use crate::error::OptimizeError;
use crate::models::{CapacityPool, Item, WeightDimension};
use crate::validation::validate_input;

/// Time-aware capacity allocation optimizer.
///
/// # Example
/// ```
/// use u_allocate::ga::{Optimizer, OptimizerConfig};
/// use u_allocate::models::{AvailableCapability, Capability, CapacityPool, Demand, Item, TimeWindow};
///
/// let java = Capability::skill("JAVA");
/// let items = vec![
///     Item::new("P1", 100.0).with_component(Demand::at(java.clone(), TimeWindow::day(1))),
///     Item::new("P2", 40.0).with_component(Demand::at(java.clone(), TimeWindow::day(1))),
/// ];
/// let pool = CapacityPool::new()
///     .with_unit(AvailableCapability::new("staszek", java.clone(), TimeWindow::day(1)));
///
/// let optimizer = Optimizer::new(OptimizerConfig::default().with_seed(1));
/// let extra = AvailableCapability::new("leon", java, TimeWindow::day(1));
/// let gain = optimizer.evaluate_acquisition(&items, &pool, extra, 3.0).unwrap();
/// assert_eq!(gain, 37.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Optimizer {
    config: OptimizerConfig,
}

impl Optimizer {
    /// Creates an optimizer with the given configuration.
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Optimizes with the default seeding order (descending value).
    pub fn optimize<C, W>(
        &self,
        items: &[Item<W>],
        pool: &CapacityPool<C>,
    ) -> Result<OptimizationResult<C, W>, OptimizeError>
    where
        C: Clone,
        W: WeightDimension<C> + Clone,
    {
        self.optimize_by(items, pool, by_value_descending)
    }

    /// Optimizes with a caller-defined seeding order.
    ///
    /// The comparator only shapes the initial population; any total order
    /// yields feasible results.
    pub fn optimize_by<C, W, F>(
        &self,
        items: &[Item<W>],
        pool: &CapacityPool<C>,
        compare: F,
    ) -> Result<OptimizationResult<C, W>, OptimizeError>
    where
        C: Clone,
        W: WeightDimension<C> + Clone,
        F: FnMut(&Item<W>, &Item<W>) -> Ordering,
    {
        let mut rng = match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        self.optimize_with_rng(items, pool, compare, &mut rng)
    }

    /// Optimizes drawing randomness from a caller-owned generator.
    ///
    /// The configured seed is ignored.
    pub fn optimize_with_rng<C, W, F, R>(
        &self,
        items: &[Item<W>],
        pool: &CapacityPool<C>,
        compare: F,
        rng: &mut R,
    ) -> Result<OptimizationResult<C, W>, OptimizeError>
    where
        C: Clone,
        W: WeightDimension<C> + Clone,
        F: FnMut(&Item<W>, &Item<W>) -> Ordering,
        R: Rng,
    {
        self.config.validate()?;
        validate_input::<C, W>(items)?;

        let (search, guaranteed): (Vec<usize>, Vec<usize>) =
            (0..items.len()).partition(|&idx| !items[idx].is_weight_zero());

        info!(
            items = items.len(),
            searched = search.len(),
            zero_weight = guaranteed.len(),
            capacity_units = pool.len(),
            "starting allocation search"
        );

        let matcher = CapacityMatcher::new(items, pool);
        let mut stats = SearchStats::default();

        let mut survivors = self.init_generation(&matcher, items, &search, compare, rng, &mut stats);
        stats.best_value_history.push(best_value(&survivors));

        for generation in 0..self.config.generations {
            survivors = self.next_generation(&matcher, items, &search, survivors, rng, &mut stats);
            stats.generations += 1;

            let best = best_value(&survivors);
            stats.best_value_history.push(best);
            debug!(generation, best, "generation complete");
        }

        let best = survivors.into_iter().next().unwrap_or_default();
        let result = OptimizationResult::assemble(items, pool, &best, &guaranteed, stats);

        info!(
            value = result.value,
            chosen = result.chosen_count(),
            candidates = result.stats.candidates_built,
            "allocation search finished"
        );
        Ok(result)
    }

    /// Marginal value of acquiring one more capacity unit at `price`.
    ///
    /// Runs two independent optimizations (without and with `unit`) and
    /// returns `(value_with - value_without) - price`.
    pub fn evaluate_acquisition<C, W>(
        &self,
        items: &[Item<W>],
        pool: &CapacityPool<C>,
        unit: C,
        price: f64,
    ) -> Result<f64, OptimizeError>
    where
        C: Clone,
        W: WeightDimension<C> + Clone,
    {
        if !price.is_finite() {
            return Err(OptimizeError::InvalidPrice(price));
        }

        let without = self.optimize(items, pool)?.value;
        let with = self.optimize(items, &pool.extended_with(unit))?.value;
        let gain = (with - without) - price;

        info!(without, with, price, gain, "acquisition evaluated");
        Ok(gain)
    }

    fn init_generation<C, W, F, R>(
        &self,
        matcher: &CapacityMatcher<'_, C, W>,
        items: &[Item<W>],
        search: &[usize],
        mut compare: F,
        rng: &mut R,
        stats: &mut SearchStats,
    ) -> Vec<Candidate>
    where
        W: WeightDimension<C>,
        F: FnMut(&Item<W>, &Item<W>) -> Ordering,
        R: Rng,
    {
        let mut order = search.to_vec();
        order.sort_by(|&a, &b| compare(&items[a], &items[b]));

        let mut population = Vec::with_capacity(self.config.population_size);
        for _ in 0..self.config.population_size {
            // Swaps accumulate: each candidate starts from the previous ordering.
            if rng.random_bool(self.config.mutation_chance) {
                swap_mutation(&mut order, rng);
            }
            population.push(matcher.build(&order, self.config.skip_chance, rng));
        }
        stats.candidates_built += population.len();

        self.select(population)
    }

    fn next_generation<C, W, R>(
        &self,
        matcher: &CapacityMatcher<'_, C, W>,
        items: &[Item<W>],
        search: &[usize],
        survivors: Vec<Candidate>,
        rng: &mut R,
        stats: &mut SearchStats,
    ) -> Vec<Candidate>
    where
        W: WeightDimension<C>,
        R: Rng,
    {
        let parents = survivors.len();
        let mut population = survivors;
        population.reserve(self.config.population_size.saturating_sub(parents));

        while population.len() < self.config.population_size {
            let first = rng.random_range(0..parents);
            let second = rng.random_range(0..parents);
            let order = crossover_order(
                &population[first],
                &population[second],
                items,
                search,
                self.config.mutation_chance,
                rng,
            );
            population.push(matcher.build(&order, 0.0, rng));
            stats.candidates_built += 1;
        }

        self.select(population)
    }

    /// Keeps the `survivors` best candidates (stable for equal values).
    fn select(&self, mut population: Vec<Candidate>) -> Vec<Candidate> {
        population.sort_by(|a, b| b.value().total_cmp(&a.value()));
        population.truncate(self.config.survivors);
        population
    }
}

/// Default seeding order: highest value first.
pub fn by_value_descending<W>(a: &Item<W>, b: &Item<W>) -> Ordering {
    b.value.total_cmp(&a.value)
}

fn best_value(survivors: &[Candidate]) -> f64 {
    survivors.first().map(Candidate::value).unwrap_or(0.0)
}
