//! Genetic search over item orderings.
//!
//! # Encoding
//!
//! A chromosome is a permutation of item indices. The [`CapacityMatcher`]
//! decodes it greedily (first-fit) into a [`Candidate`]: the items that
//! could be fully covered and the units covering them. Fitness is the sum
//! of fulfilled item values.
//!
//! # Submodules
//!
//! - [`operators`]: Swap / geometric mutation and bucket crossover
//!
//! # Reference
//! Falkenauer (1996), "A hybrid grouping genetic algorithm for bin packing"

mod candidate;
mod config;
mod matcher;
pub mod operators;
mod optimizer;
mod result;

pub use candidate::{Allocation, Candidate};
pub use config::OptimizerConfig;
pub use matcher::CapacityMatcher;
pub use optimizer::{Optimizer, by_value_descending};
pub use result::{OptimizationResult, SearchStats};
