//! Skill-and-slot allocation domain.
//!
//! The built-in variant of the weight/capacity abstraction: resources
//! (people, devices, rooms) offer capabilities during a window, and items
//! demand a capability, usually for a window of their own.
//!
//! # Mapping
//!
//! | u-allocate | Staffing | Equipment rental |
//! |------------|----------|------------------|
//! | Item | Project | Job |
//! | Demand | Skill needed on a day | Machine needed for a week |
//! | AvailableCapability | Employee free on a day | Machine in stock |

use serde::{Deserialize, Serialize};

use super::{TimeWindow, WeightDimension};

/// Classification of capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CapabilityKind {
    /// Know-how of a person (e.g., "JAVA-MID").
    Skill,
    /// Authorization (e.g., "REVIEWER").
    Permission,
    /// A physical or virtual asset (e.g., "EXCAVATOR", "GPU").
    Asset,
}

/// A named capability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capability {
    /// Capability name.
    pub name: String,
    /// Capability classification.
    pub kind: CapabilityKind,
}

impl Capability {
    /// Creates a capability.
    pub fn new(name: impl Into<String>, kind: CapabilityKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Creates a skill.
    pub fn skill(name: impl Into<String>) -> Self {
        Self::new(name, CapabilityKind::Skill)
    }

    /// Creates a permission.
    pub fn permission(name: impl Into<String>) -> Self {
        Self::new(name, CapabilityKind::Permission)
    }

    /// Creates an asset.
    pub fn asset(name: impl Into<String>) -> Self {
        Self::new(name, CapabilityKind::Asset)
    }
}

/// Capacity descriptor: a resource offering capabilities during a window.
///
/// All listed capabilities are offered simultaneously, so one unit can
/// serve a demand for any of them, but serving one blocks the unit for
/// the demanded window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailableCapability {
    /// Resource offering the capabilities.
    pub resource_id: String,
    /// Capabilities offered at the same time.
    pub capabilities: Vec<Capability>,
    /// When the resource is available.
    pub window: TimeWindow,
}

impl AvailableCapability {
    /// A resource offering a single capability.
    pub fn new(resource_id: impl Into<String>, capability: Capability, window: TimeWindow) -> Self {
        Self {
            resource_id: resource_id.into(),
            capabilities: vec![capability],
            window,
        }
    }

    /// A resource offering several capabilities at once.
    pub fn simultaneous(
        resource_id: impl Into<String>,
        capabilities: Vec<Capability>,
        window: TimeWindow,
    ) -> Self {
        Self {
            resource_id: resource_id.into(),
            capabilities,
            window,
        }
    }

    /// Whether the resource offers `capability`.
    pub fn can_perform(&self, capability: &Capability) -> bool {
        self.capabilities.contains(capability)
    }
}

/// Weight component: a capability needed, optionally for a window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Demand {
    /// Required capability.
    pub capability: Capability,
    /// Window the capability is needed for. `None` = not time-bound.
    pub window: Option<TimeWindow>,
}

impl Demand {
    /// Demand for `capability` during `window`.
    pub fn at(capability: Capability, window: TimeWindow) -> Self {
        Self {
            capability,
            window: Some(window),
        }
    }

    /// Demand for `capability` with no time restriction.
    pub fn anytime(capability: Capability) -> Self {
        Self {
            capability,
            window: None,
        }
    }
}

impl WeightDimension<AvailableCapability> for Demand {
    fn is_satisfied_by(&self, capacity: &AvailableCapability) -> bool {
        if !capacity.can_perform(&self.capability) {
            return false;
        }
        match &self.window {
            Some(window) => capacity.window.encloses(window),
            None => true,
        }
    }

    fn time_window(&self) -> Option<&TimeWindow> {
        self.window.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demand_requires_capability() {
        let java = Capability::skill("JAVA");
        let unit = AvailableCapability::new("staszek", java.clone(), TimeWindow::day(1));

        assert!(Demand::at(java.clone(), TimeWindow::day(1)).is_satisfied_by(&unit));
        assert!(!Demand::at(Capability::skill("PYTHON"), TimeWindow::day(1)).is_satisfied_by(&unit));
        // Same name, different kind.
        assert!(!Demand::at(Capability::asset("JAVA"), TimeWindow::day(1)).is_satisfied_by(&unit));
    }

    #[test]
    fn test_demand_window_must_fit_availability() {
        let java = Capability::skill("JAVA");
        let unit = AvailableCapability::new("leon", java.clone(), TimeWindow::days(1, 3));

        assert!(Demand::at(java.clone(), TimeWindow::day(2)).is_satisfied_by(&unit));
        assert!(Demand::at(java.clone(), TimeWindow::days(1, 3)).is_satisfied_by(&unit));
        assert!(!Demand::at(java.clone(), TimeWindow::days(3, 2)).is_satisfied_by(&unit));
        assert!(!Demand::at(java, TimeWindow::day(0)).is_satisfied_by(&unit));
    }

    #[test]
    fn test_anytime_demand_is_not_time_bound() {
        let excavator = Capability::asset("EXCAVATOR");
        let unit = AvailableCapability::new("depot", excavator.clone(), TimeWindow::day(9));
        let demand = Demand::anytime(excavator);

        assert!(demand.is_satisfied_by(&unit));
        assert!(demand.time_window().is_none());
    }

    #[test]
    fn test_simultaneous_capabilities() {
        let unit = AvailableCapability::simultaneous(
            "ania",
            vec![Capability::skill("KOPIARKA"), Capability::skill("KSERO")],
            TimeWindow::day(1),
        );

        assert!(unit.can_perform(&Capability::skill("KOPIARKA")));
        assert!(unit.can_perform(&Capability::skill("KSERO")));
        assert!(!unit.can_perform(&Capability::permission("KSERO")));
    }
}
