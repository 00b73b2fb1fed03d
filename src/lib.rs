//! # u-fleet
//!
//! Daily fleet allocation library. Buckets a batch of parcels into weight
//! classes, then solves a small mixed-integer linear program to decide how
//! many vehicles of each type to deploy so that every parcel is carried at
//! minimum total fleet cost.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (DeliveryClass, VehicleType, Demand, OptimizationInstance, FleetPlan)
//! - [`classify`] — Delivery classifier (raw parcel weights → per-class demand)
//! - [`scenario`] — Named fleet scenarios → enabled vehicle-type sets
//! - [`solver`] — MILP formulation, HiGHS adapter, and result projection
//! - [`error`] — Configuration and build-time error types
//!
//! ## Example
//!
//! ```
//! use u_fleet::models::{ClassDemand, Demand, OptimizationInstance, Strategy, VehicleType};
//! use u_fleet::scenario::Scenario;
//! use u_fleet::solver::optimize;
//!
//! let demand = Demand::new(
//!     ClassDemand::new(80, 153.0).unwrap(),
//!     ClassDemand::new(100, 1044.0).unwrap(),
//!     ClassDemand::new(10, 930.0).unwrap(),
//! );
//! let instance = OptimizationInstance::new(
//!     Scenario::AllTypes.fleet_configuration(),
//!     VehicleType::defaults().to_vec(),
//!     demand,
//!     Strategy::Aggregate,
//! )
//! .unwrap();
//!
//! let result = optimize(&instance).unwrap();
//! assert!(result.is_optimal());
//! ```

pub mod classify;
pub mod error;
pub mod models;
pub mod scenario;
pub mod solver;
