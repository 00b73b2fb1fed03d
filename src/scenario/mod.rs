//! Named fleet scenarios.
//!
//! A scenario fixes which vehicle types are enabled for a run. When a
//! class's designated covering type is excluded (scenarios without V2 or
//! V3), the cascading strategy must be used so that the class's volume can
//! be re-routed onto a remaining capable type; the aggregate strategy is
//! only valid for the full scenario.

use serde::{Deserialize, Serialize};

use crate::models::{FleetConfiguration, Strategy, VehicleTypeId};

/// One of the three fixed vehicle-type masks.
///
/// # Examples
///
/// ```
/// use u_fleet::models::VehicleTypeId;
/// use u_fleet::scenario::Scenario;
///
/// let fleet = Scenario::LargeAndSmall.fleet_configuration();
/// assert!(fleet.contains(VehicleTypeId::V1));
/// assert!(!fleet.contains(VehicleTypeId::V2));
/// assert!(fleet.contains(VehicleTypeId::V3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scenario {
    /// V1, V2, and V3 all enabled.
    AllTypes,
    /// V1 and V2 only.
    LargeAndMid,
    /// V1 and V3 only.
    LargeAndSmall,
}

impl Scenario {
    /// The enabled-type mask for this scenario.
    pub fn fleet_configuration(&self) -> FleetConfiguration {
        let enabled: &[VehicleTypeId] = match self {
            Scenario::AllTypes => &VehicleTypeId::ALL,
            Scenario::LargeAndMid => &[VehicleTypeId::V1, VehicleTypeId::V2],
            Scenario::LargeAndSmall => &[VehicleTypeId::V1, VehicleTypeId::V3],
        };
        // Masks are never empty, so construction cannot fail.
        FleetConfiguration::new(enabled.iter().copied())
            .unwrap_or_else(|_| FleetConfiguration::all_types())
    }

    /// Whether the given strategy can cover every class under this scenario.
    ///
    /// Aggregate pre-assigns each class to a fixed covering type, so it
    /// needs all three types; cascading works for any mask that keeps V1.
    pub fn supports(&self, strategy: Strategy) -> bool {
        match strategy {
            Strategy::Aggregate => *self == Scenario::AllTypes,
            Strategy::Cascading => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masks() {
        assert_eq!(Scenario::AllTypes.fleet_configuration().len(), 3);

        let mid = Scenario::LargeAndMid.fleet_configuration();
        assert!(mid.contains(VehicleTypeId::V1) && mid.contains(VehicleTypeId::V2));
        assert!(!mid.contains(VehicleTypeId::V3));

        let small = Scenario::LargeAndSmall.fleet_configuration();
        assert!(small.contains(VehicleTypeId::V1) && small.contains(VehicleTypeId::V3));
        assert!(!small.contains(VehicleTypeId::V2));
    }

    #[test]
    fn test_strategy_support() {
        assert!(Scenario::AllTypes.supports(Strategy::Aggregate));
        assert!(!Scenario::LargeAndMid.supports(Strategy::Aggregate));
        assert!(!Scenario::LargeAndSmall.supports(Strategy::Aggregate));
        for s in [Scenario::AllTypes, Scenario::LargeAndMid, Scenario::LargeAndSmall] {
            assert!(s.supports(Strategy::Cascading));
        }
    }
}
