//! Fleet configuration and the optimization instance.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{Demand, VehicleType, VehicleTypeId};
use crate::error::ConfigurationError;

/// The non-empty set of vehicle types enabled for one optimization run.
///
/// Determines which count variables exist in the formulation.
///
/// # Examples
///
/// ```
/// use u_fleet::models::{FleetConfiguration, VehicleTypeId};
///
/// let fleet = FleetConfiguration::new([VehicleTypeId::V1, VehicleTypeId::V3]).unwrap();
/// assert!(fleet.contains(VehicleTypeId::V1));
/// assert!(!fleet.contains(VehicleTypeId::V2));
/// assert!(FleetConfiguration::new([]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetConfiguration {
    enabled: BTreeSet<VehicleTypeId>,
}

impl FleetConfiguration {
    /// Creates a fleet configuration from the enabled types.
    ///
    /// Fails with [`ConfigurationError::EmptyFleet`] if no type is enabled,
    /// since no vehicle could then satisfy any demand.
    pub fn new(
        enabled: impl IntoIterator<Item = VehicleTypeId>,
    ) -> Result<Self, ConfigurationError> {
        let enabled: BTreeSet<VehicleTypeId> = enabled.into_iter().collect();
        if enabled.is_empty() {
            return Err(ConfigurationError::EmptyFleet);
        }
        Ok(Self { enabled })
    }

    /// All three types enabled.
    pub fn all_types() -> Self {
        Self {
            enabled: VehicleTypeId::ALL.into_iter().collect(),
        }
    }

    /// Returns `true` if the given type is enabled.
    pub fn contains(&self, id: VehicleTypeId) -> bool {
        self.enabled.contains(&id)
    }

    /// Enabled types in capability order, most capable first.
    pub fn iter(&self) -> impl Iterator<Item = VehicleTypeId> + '_ {
        self.enabled.iter().copied()
    }

    /// Number of enabled types.
    pub fn len(&self) -> usize {
        self.enabled.len()
    }

    /// Always `false`; an empty configuration cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty()
    }
}

/// Which MILP formulation to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Each class is covered in full by its designated type (V3 covers A,
    /// V2 covers B, V1 covers C); per-type count and weight rows only.
    /// Valid only when every demanded class's covering type is enabled.
    Aggregate,
    /// Explicit per-(class, type) assignment volumes, split by a fixed
    /// priority cascade (heaviest class first, most capable type first).
    /// Weight capacities are not modeled under this strategy.
    Cascading,
}

/// A fleet-wide distance bound: every deployed vehicle contributes a fixed
/// daily distance, and the fleet total may not exceed the cap. A scalar
/// linear constraint, not a routing computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceLimit {
    /// Distance contributed per deployed vehicle, km/day.
    pub per_vehicle_km: f64,
    /// Maximum total fleet distance, km/day.
    pub fleet_total_km: f64,
}

/// Optional fleet-wide constraints added to either strategy.
///
/// # Examples
///
/// ```
/// use u_fleet::models::{DistanceLimit, FleetLimits};
///
/// let limits = FleetLimits::new()
///     .with_max_drivers(10)
///     .with_distance_limit(DistanceLimit { per_vehicle_km: 200.0, fleet_total_km: 2000.0 })
///     .with_at_most_one_underutilized();
/// assert_eq!(limits.max_drivers(), Some(10));
/// assert!(limits.at_most_one_underutilized());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FleetLimits {
    max_drivers: Option<u32>,
    distance: Option<DistanceLimit>,
    at_most_one_underutilized: bool,
}

impl FleetLimits {
    /// No extra constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the total number of deployed vehicles (one driver each).
    pub fn with_max_drivers(mut self, max: u32) -> Self {
        self.max_drivers = Some(max);
        self
    }

    /// Adds the fleet-wide distance bound.
    pub fn with_distance_limit(mut self, limit: DistanceLimit) -> Self {
        self.distance = Some(limit);
        self
    }

    /// Allows at most one vehicle type to be left unused fleet-wide.
    pub fn with_at_most_one_underutilized(mut self) -> Self {
        self.at_most_one_underutilized = true;
        self
    }

    /// Driver cap, if configured.
    pub fn max_drivers(&self) -> Option<u32> {
        self.max_drivers
    }

    /// Distance bound, if configured.
    pub fn distance(&self) -> Option<DistanceLimit> {
        self.distance
    }

    /// Whether the at-most-one-underutilized constraint is active.
    pub fn at_most_one_underutilized(&self) -> bool {
        self.at_most_one_underutilized
    }
}

/// A complete, validated optimization problem.
///
/// Constructed fresh per request, consumed exactly once by
/// [`optimize`](crate::solver::optimize), and discarded afterwards. Only
/// records for enabled vehicle types are materialized.
///
/// # Examples
///
/// ```
/// use u_fleet::models::{
///     Demand, FleetConfiguration, OptimizationInstance, Strategy, VehicleType,
/// };
///
/// let instance = OptimizationInstance::new(
///     FleetConfiguration::all_types(),
///     VehicleType::defaults().to_vec(),
///     Demand::zero(),
///     Strategy::Aggregate,
/// )
/// .unwrap();
/// assert_eq!(instance.enabled_types().count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationInstance {
    fleet: FleetConfiguration,
    vehicle_types: Vec<VehicleType>,
    demand: Demand,
    strategy: Strategy,
    limits: FleetLimits,
}

impl OptimizationInstance {
    /// Creates an instance from a fleet configuration, vehicle records,
    /// demand, and strategy, with no extra fleet limits.
    ///
    /// Records for disabled types are dropped. Fails if an enabled type has
    /// no record or more than one, or if any kept record is invalid.
    pub fn new(
        fleet: FleetConfiguration,
        vehicle_types: Vec<VehicleType>,
        demand: Demand,
        strategy: Strategy,
    ) -> Result<Self, ConfigurationError> {
        let mut kept: Vec<VehicleType> = Vec::with_capacity(fleet.len());
        for v in vehicle_types {
            if !fleet.contains(v.id()) {
                continue;
            }
            if kept.iter().any(|k| k.id() == v.id()) {
                return Err(ConfigurationError::DuplicateVehicleType(v.id()));
            }
            v.validate()?;
            kept.push(v);
        }
        for id in fleet.iter() {
            if !kept.iter().any(|k| k.id() == id) {
                return Err(ConfigurationError::MissingVehicleType(id));
            }
        }
        kept.sort_by_key(|v| v.id());
        Ok(Self {
            fleet,
            vehicle_types: kept,
            demand,
            strategy,
            limits: FleetLimits::new(),
        })
    }

    /// Attaches extra fleet-wide limits.
    pub fn with_limits(mut self, limits: FleetLimits) -> Self {
        self.limits = limits;
        self
    }

    /// The enabled-type mask for this run.
    pub fn fleet(&self) -> &FleetConfiguration {
        &self.fleet
    }

    /// Per-class demand.
    pub fn demand(&self) -> &Demand {
        &self.demand
    }

    /// The chosen formulation strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Extra fleet-wide limits.
    pub fn limits(&self) -> &FleetLimits {
        &self.limits
    }

    /// The record for an enabled vehicle type.
    pub fn vehicle_type(&self, id: VehicleTypeId) -> Option<&VehicleType> {
        self.vehicle_types.iter().find(|v| v.id() == id)
    }

    /// Enabled vehicle records in capability order, most capable first.
    pub fn enabled_types(&self) -> impl Iterator<Item = &VehicleType> {
        self.vehicle_types.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fleet_configuration() {
        let fleet = FleetConfiguration::new([VehicleTypeId::V1, VehicleTypeId::V2]).unwrap();
        assert_eq!(fleet.len(), 2);
        assert!(fleet.contains(VehicleTypeId::V2));
        assert!(!fleet.contains(VehicleTypeId::V3));
        assert_eq!(
            fleet.iter().collect::<Vec<_>>(),
            vec![VehicleTypeId::V1, VehicleTypeId::V2]
        );
        assert_eq!(
            FleetConfiguration::new([]),
            Err(ConfigurationError::EmptyFleet)
        );
    }

    #[test]
    fn test_instance_drops_disabled_records() {
        let fleet = FleetConfiguration::new([VehicleTypeId::V1]).unwrap();
        let instance = OptimizationInstance::new(
            fleet,
            VehicleType::defaults().to_vec(),
            Demand::zero(),
            Strategy::Cascading,
        )
        .unwrap();
        assert_eq!(instance.enabled_types().count(), 1);
        assert!(instance.vehicle_type(VehicleTypeId::V2).is_none());
    }

    #[test]
    fn test_instance_missing_record() {
        let fleet = FleetConfiguration::all_types();
        let only_two = vec![
            VehicleType::new(VehicleTypeId::V1, 62.8156, 64),
            VehicleType::new(VehicleTypeId::V2, 33.0, 66),
        ];
        let err = OptimizationInstance::new(fleet, only_two, Demand::zero(), Strategy::Aggregate)
            .unwrap_err();
        assert_eq!(err, ConfigurationError::MissingVehicleType(VehicleTypeId::V3));
    }

    #[test]
    fn test_instance_duplicate_record() {
        let fleet = FleetConfiguration::new([VehicleTypeId::V1]).unwrap();
        let dup = vec![
            VehicleType::new(VehicleTypeId::V1, 62.8156, 64),
            VehicleType::new(VehicleTypeId::V1, 60.0, 64),
        ];
        let err =
            OptimizationInstance::new(fleet, dup, Demand::zero(), Strategy::Cascading).unwrap_err();
        assert_eq!(err, ConfigurationError::DuplicateVehicleType(VehicleTypeId::V1));
    }

    #[test]
    fn test_instance_rejects_invalid_record() {
        let fleet = FleetConfiguration::new([VehicleTypeId::V1]).unwrap();
        let bad = vec![VehicleType::new(VehicleTypeId::V1, -5.0, 64)];
        assert!(matches!(
            OptimizationInstance::new(fleet, bad, Demand::zero(), Strategy::Aggregate),
            Err(ConfigurationError::InvalidCost { .. })
        ));
    }

    #[test]
    fn test_limits_builder() {
        let limits = FleetLimits::new().with_max_drivers(7);
        assert_eq!(limits.max_drivers(), Some(7));
        assert!(limits.distance().is_none());
        assert!(!limits.at_most_one_underutilized());
    }
}
