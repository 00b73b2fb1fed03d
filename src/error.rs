//! Error types for instance construction and constraint building.
//!
//! Solver-side failures (infeasible, unbounded, not solved) are not errors;
//! they are reported as [`SolveStatus`](crate::models::SolveStatus) on the
//! result. Errors here are always detected before anything reaches the
//! solver.

use thiserror::Error;

use crate::models::{DeliveryClass, VehicleTypeId};

/// Invalid vehicle, fleet, or demand data, rejected at construction time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    /// The fleet configuration enables no vehicle type at all.
    #[error("fleet configuration enables no vehicle type")]
    EmptyFleet,
    /// An enabled vehicle type has no record in the instance.
    #[error("no vehicle record for enabled type {0}")]
    MissingVehicleType(VehicleTypeId),
    /// Two records were supplied for the same vehicle type.
    #[error("duplicate vehicle record for type {0}")]
    DuplicateVehicleType(VehicleTypeId),
    /// Cost per day must be a finite, positive number.
    #[error("vehicle type {id} has invalid cost per day: {cost}")]
    InvalidCost {
        /// Offending vehicle type.
        id: VehicleTypeId,
        /// The rejected value.
        cost: f64,
    },
    /// Delivery capacity must be at least one per day.
    #[error("vehicle type {id} has zero delivery capacity")]
    ZeroDeliveryCapacity {
        /// Offending vehicle type.
        id: VehicleTypeId,
    },
    /// Weight capacity, when modeled, must be finite and positive.
    #[error("vehicle type {id} has invalid weight capacity: {capacity}")]
    InvalidWeightCapacity {
        /// Offending vehicle type.
        id: VehicleTypeId,
        /// The rejected value.
        capacity: f64,
    },
    /// A vehicle type must be able to carry at least one delivery class.
    #[error("vehicle type {id} has an empty capability set")]
    EmptyCapability {
        /// Offending vehicle type.
        id: VehicleTypeId,
    },
    /// Class demand weight must be finite and non-negative.
    #[error("invalid total weight for demand: {weight}")]
    InvalidDemandWeight {
        /// The rejected value.
        weight: f64,
    },
}

/// A delivery class with non-zero demand has no capable enabled vehicle type.
///
/// Detected while building constraints, before any solve attempt. Distinct
/// from solver-reported infeasibility, where every class has somewhere to go
/// but the constraints are jointly unsatisfiable.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("class {class} has demand but no capable enabled vehicle type")]
pub struct InfeasibleConfigurationError {
    /// The delivery class that cannot be carried.
    pub class: DeliveryClass,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = ConfigurationError::InvalidCost {
            id: VehicleTypeId::V2,
            cost: -1.0,
        };
        assert_eq!(e.to_string(), "vehicle type V2 has invalid cost per day: -1");

        let e = InfeasibleConfigurationError {
            class: DeliveryClass::C,
        };
        assert!(e.to_string().contains("class C"));
    }
}
