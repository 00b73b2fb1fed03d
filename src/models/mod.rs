//! Domain model types for fleet allocation.
//!
//! Provides the core abstractions: weight-based delivery classes, vehicle
//! types with cost, capacity, and capability parameters, per-class demand,
//! the optimization instance consumed by the solver, and the typed result
//! it produces.

mod class;
mod demand;
mod instance;
mod result;
mod vehicle;

pub use class::DeliveryClass;
pub use demand::{ClassDemand, Demand};
pub use instance::{DistanceLimit, FleetConfiguration, FleetLimits, OptimizationInstance, Strategy};
pub use result::{FleetPlan, OptimizationResult, SolveStatus};
pub use vehicle::{VehicleType, VehicleTypeId};
