//! Vehicle type with cost, capacity, and capability parameters.

use serde::{Deserialize, Serialize};

use super::DeliveryClass;
use crate::error::ConfigurationError;

/// Identifier of a vehicle type tier.
///
/// Ordering follows capability: V1 is the largest and most capable tier,
/// V3 the smallest. The cascading assignment strategy walks tiers in this
/// order when splitting class volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VehicleTypeId {
    /// Large tier, carries all classes (by convention a four-wheeler mini-truck).
    V1,
    /// Mid tier, carries classes A and B (a three-wheeler EV).
    V2,
    /// Small tier, carries class A only (a two-wheeler EV).
    V3,
}

impl VehicleTypeId {
    /// All tiers in capability order, most capable first.
    pub const ALL: [VehicleTypeId; 3] = [VehicleTypeId::V1, VehicleTypeId::V2, VehicleTypeId::V3];

    /// The conventional capability set for this tier.
    pub fn default_capability(&self) -> &'static [DeliveryClass] {
        match self {
            VehicleTypeId::V1 => &[DeliveryClass::A, DeliveryClass::B, DeliveryClass::C],
            VehicleTypeId::V2 => &[DeliveryClass::A, DeliveryClass::B],
            VehicleTypeId::V3 => &[DeliveryClass::A],
        }
    }
}

impl core::fmt::Display for VehicleTypeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            VehicleTypeId::V1 => write!(f, "V1"),
            VehicleTypeId::V2 => write!(f, "V2"),
            VehicleTypeId::V3 => write!(f, "V3"),
        }
    }
}

/// A fleet tier with its own cost, capacities, and capability set.
///
/// Immutable per optimization run. Capacities are per deployed vehicle per
/// day; the weight capacity is optional and only consulted by the aggregate
/// strategy.
///
/// # Examples
///
/// ```
/// use u_fleet::models::{DeliveryClass, VehicleType, VehicleTypeId};
///
/// let v = VehicleType::new(VehicleTypeId::V2, 33.0, 66)
///     .with_weight_capacity(500.0)
///     .with_max_available(4);
/// assert_eq!(v.id(), VehicleTypeId::V2);
/// assert_eq!(v.delivery_capacity_per_day(), 66);
/// assert!(v.can_carry(DeliveryClass::B));
/// assert!(!v.can_carry(DeliveryClass::C));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleType {
    id: VehicleTypeId,
    cost_per_day: f64,
    delivery_capacity_per_day: u32,
    weight_capacity_per_day: Option<f64>,
    capability: Vec<DeliveryClass>,
    max_available: Option<u32>,
}

impl VehicleType {
    /// Creates a vehicle type with the given tier, daily cost, and daily
    /// delivery capacity.
    ///
    /// Default: the tier's conventional capability set, no weight capacity,
    /// no availability cap.
    pub fn new(id: VehicleTypeId, cost_per_day: f64, delivery_capacity_per_day: u32) -> Self {
        Self {
            id,
            cost_per_day,
            delivery_capacity_per_day,
            weight_capacity_per_day: None,
            capability: id.default_capability().to_vec(),
            max_available: None,
        }
    }

    /// The three default tiers used by all scenarios unless overridden:
    /// V1 = 64 deliveries/day, 1000 kg/day, 62.8156/day;
    /// V2 = 66 deliveries/day, 500 kg/day, 33.0/day;
    /// V3 = 72 deliveries/day, 60 kg/day, 29.0536/day.
    pub fn defaults() -> [VehicleType; 3] {
        [
            VehicleType::new(VehicleTypeId::V1, 62.8156, 64).with_weight_capacity(1000.0),
            VehicleType::new(VehicleTypeId::V2, 33.0, 66).with_weight_capacity(500.0),
            VehicleType::new(VehicleTypeId::V3, 29.0536, 72).with_weight_capacity(60.0),
        ]
    }

    /// Sets the daily weight capacity in kg.
    pub fn with_weight_capacity(mut self, capacity: f64) -> Self {
        self.weight_capacity_per_day = Some(capacity);
        self
    }

    /// Replaces the capability set.
    pub fn with_capability(mut self, capability: Vec<DeliveryClass>) -> Self {
        self.capability = capability;
        self
    }

    /// Caps how many units of this type may be deployed.
    pub fn with_max_available(mut self, max: u32) -> Self {
        self.max_available = Some(max);
        self
    }

    /// Vehicle type tier.
    pub fn id(&self) -> VehicleTypeId {
        self.id
    }

    /// Cost per deployed vehicle per day.
    pub fn cost_per_day(&self) -> f64 {
        self.cost_per_day
    }

    /// Deliveries one vehicle can make per day.
    pub fn delivery_capacity_per_day(&self) -> u32 {
        self.delivery_capacity_per_day
    }

    /// Weight one vehicle can carry per day in kg, if modeled.
    pub fn weight_capacity_per_day(&self) -> Option<f64> {
        self.weight_capacity_per_day
    }

    /// The delivery classes this type may carry.
    pub fn capability(&self) -> &[DeliveryClass] {
        &self.capability
    }

    /// Upper bound on deployed units of this type, if any.
    pub fn max_available(&self) -> Option<u32> {
        self.max_available
    }

    /// Returns `true` if this type may carry the given class.
    pub fn can_carry(&self, class: DeliveryClass) -> bool {
        self.capability.contains(&class)
    }

    /// Validates the record.
    ///
    /// Cost must be finite and positive, delivery capacity non-zero, weight
    /// capacity (when present) finite and positive, and the capability set
    /// non-empty.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !self.cost_per_day.is_finite() || self.cost_per_day <= 0.0 {
            return Err(ConfigurationError::InvalidCost {
                id: self.id,
                cost: self.cost_per_day,
            });
        }
        if self.delivery_capacity_per_day == 0 {
            return Err(ConfigurationError::ZeroDeliveryCapacity { id: self.id });
        }
        if let Some(capacity) = self.weight_capacity_per_day {
            if !capacity.is_finite() || capacity <= 0.0 {
                return Err(ConfigurationError::InvalidWeightCapacity {
                    id: self.id,
                    capacity,
                });
            }
        }
        if self.capability.is_empty() {
            return Err(ConfigurationError::EmptyCapability { id: self.id });
        }
        Ok(())
    }
}
