//! Time-aware capacity allocation for the U-Engine ecosystem.
//!
//! Chooses which work items to fulfill from a finite pool of reusable,
//! time-exclusive capacity units so that total value is maximized. The
//! engine is domain-agnostic: skills, machines, rooms or licences plug in
//! through two small traits.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Item`, `TotalWeight`, `CapacityPool`,
//!   `CapacityUnit`, `TimeWindow`, and the skill-and-slot variant
//!   (`Demand`, `AvailableCapability`, `Capability`)
//! - **`ga`**: Capacity matcher, genetic operators and the `Optimizer`
//! - **`validation`**: Input integrity checks (duplicate IDs, bad values, bad windows)
//!
//! # Example
//!
//! ```
//! use u_allocate::ga::{Optimizer, OptimizerConfig};
//! use u_allocate::models::{AvailableCapability, Capability, CapacityPool, Demand, Item, TimeWindow};
//!
//! let day1 = TimeWindow::day(1);
//! let items = vec![
//!     Item::new("P1", 9.0).with_component(Demand::at(Capability::skill("JAVA"), day1.clone())),
//!     Item::new("P2", 99.0).with_component(Demand::at(Capability::skill("JAVA"), day1.clone())),
//! ];
//! let pool = CapacityPool::new()
//!     .with_unit(AvailableCapability::new("staszek", Capability::skill("JAVA"), day1));
//!
//! let optimizer = Optimizer::new(OptimizerConfig::default().with_seed(7));
//! let result = optimizer.optimize(&items, &pool).unwrap();
//! assert_eq!(result.value, 99.0);
//! ```
//!
//! # Architecture
//!
//! This crate sits at Layer 3 (Frameworks) in the U-Engine ecosystem. It
//! holds no persistence or scenario logic; callers translate projects,
//! employees and calendars into items and capacity units.

pub mod error;
pub mod ga;
pub mod models;
pub mod validation;

pub use error::{ConfigError, OptimizeError};
