//! Allocation domain models.
//!
//! Provides the core data types for describing what has to be fulfilled
//! (items and their weights) and what it can be fulfilled with (capacity
//! units). Domain-agnostic: any type can act as a capacity descriptor as
//! long as the weight components know how to test it.
//!
//! # Domain Mappings
//!
//! | u-allocate | Staffing | Manufacturing | Healthcare |
//! |------------|----------|---------------|------------|
//! | Item | Project | Order | Surgery |
//! | Weight component | Skill on a day | Machine hours | Room + surgeon slot |
//! | Capacity unit | Employee availability | Machine | Operating room |

mod capability;
mod capacity;
mod item;
mod weight;
mod window;

pub use capability::{AvailableCapability, Capability, CapabilityKind, Demand};
pub use capacity::{CapacityId, CapacityPool, CapacityUnit};
pub use item::Item;
pub use weight::{TotalWeight, WeightDimension};
pub use window::{DAY_MS, TimeWindow};
