//! MILP formulation, solver adapter, and result projection.
//!
//! [`optimize`] builds the constraint rows for the instance's strategy,
//! hands them to HiGHS via `good_lp`, and projects the raw solution into a
//! typed [`OptimizationResult`].

mod adapter;
mod formulation;

use crate::error::InfeasibleConfigurationError;
use crate::models::{OptimizationInstance, OptimizationResult};

/// Solves one optimization instance end-to-end.
///
/// The instance is consumed conceptually: build constraints, solve, project,
/// discard. Structural infeasibility (a demanded class with no capable
/// enabled type) is returned as an error before any solve attempt;
/// solver-reported infeasibility comes back as a status on the result.
///
/// # Examples
///
/// ```
/// use u_fleet::models::{Demand, OptimizationInstance, Strategy, VehicleType};
/// use u_fleet::scenario::Scenario;
/// use u_fleet::solver::optimize;
///
/// let instance = OptimizationInstance::new(
///     Scenario::AllTypes.fleet_configuration(),
///     VehicleType::defaults().to_vec(),
///     Demand::zero(),
///     Strategy::Aggregate,
/// )
/// .unwrap();
///
/// let result = optimize(&instance).unwrap();
/// let plan = result.plan().unwrap();
/// assert_eq!(plan.total_vehicles(), 0.0);
/// assert_eq!(plan.total_cost(), 0.0);
/// ```
pub fn optimize(
    instance: &OptimizationInstance,
) -> Result<OptimizationResult, InfeasibleConfigurationError> {
    let formulation = formulation::build(instance)?;
    log::info!(
        "solving {:?} instance: {} vehicle types, {} parcels",
        instance.strategy(),
        instance.fleet().len(),
        instance.demand().total_count(),
    );
    Ok(adapter::solve(formulation))
}
