//! MILP formulation: decision variables and constraint rows.
//!
//! Translates an [`OptimizationInstance`] into a concrete objective and
//! constraint set over integer count variables (one per enabled vehicle
//! type) and, under the cascading strategy, continuous per-(class, type)
//! assignment variables. Structural infeasibility (a demanded class with no
//! capable enabled type) is caught here and never reaches the solver.

use std::collections::BTreeMap;

use good_lp::{constraint, variable, Constraint, Expression, ProblemVariables, Variable};

use crate::error::InfeasibleConfigurationError;
use crate::models::{DeliveryClass, OptimizationInstance, Strategy, VehicleType, VehicleTypeId};

/// An assembled problem, ready for the solver adapter.
pub(crate) struct Formulation {
    pub(crate) vars: ProblemVariables,
    pub(crate) objective: Expression,
    pub(crate) constraints: Vec<Constraint>,
    /// Integer deployment count per enabled type.
    pub(crate) counts: BTreeMap<VehicleTypeId, Variable>,
    /// Continuous assigned volume per modeled (class, type) pair.
    pub(crate) assignments: BTreeMap<(DeliveryClass, VehicleTypeId), Variable>,
}

// `ProblemVariables` has no `Debug` impl, so derive is unavailable.
impl std::fmt::Debug for Formulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Formulation")
            .field("objective", &self.objective)
            .field("counts", &self.counts)
            .field("assignments", &self.assignments)
            .finish_non_exhaustive()
    }
}

/// The type that covers a class in full under the aggregate strategy.
///
/// Mirrors capability priority: the smallest capable vehicle handles the
/// lightest class.
fn covering_type(class: DeliveryClass) -> VehicleTypeId {
    match class {
        DeliveryClass::A => VehicleTypeId::V3,
        DeliveryClass::B => VehicleTypeId::V2,
        DeliveryClass::C => VehicleTypeId::V1,
    }
}

/// Builds the objective and all constraint rows for the instance.
pub(crate) fn build(
    instance: &OptimizationInstance,
) -> Result<Formulation, InfeasibleConfigurationError> {
    let mut vars = ProblemVariables::new();

    let mut counts = BTreeMap::new();
    let mut objective = Expression::from(0.0);
    for vt in instance.enabled_types() {
        let count = vars.add(
            variable()
                .integer()
                .min(0.0)
                .name(format!("count_{}", vt.id())),
        );
        objective += vt.cost_per_day() * count;
        counts.insert(vt.id(), count);
    }

    let mut constraints = Vec::new();
    let mut assignments = BTreeMap::new();
    match instance.strategy() {
        Strategy::Aggregate => {
            build_aggregate(instance, &counts, &mut constraints)?;
        }
        Strategy::Cascading => {
            assignments = build_cascading(instance, &mut vars, &counts, &mut constraints)?;
        }
    }
    build_fleet_limits(instance, &mut vars, &counts, &mut constraints);

    Ok(Formulation {
        vars,
        objective,
        constraints,
        counts,
        assignments,
    })
}

/// Aggregate strategy: each class is covered in full by its designated type.
///
/// Per covering type, the deployed count must satisfy the class's parcel
/// count and, when the record models a weight capacity, its total weight.
fn build_aggregate(
    instance: &OptimizationInstance,
    counts: &BTreeMap<VehicleTypeId, Variable>,
    constraints: &mut Vec<Constraint>,
) -> Result<(), InfeasibleConfigurationError> {
    for class in DeliveryClass::ALL {
        let demand = instance.demand().class(class);
        if demand.is_zero() {
            continue;
        }
        let cover = covering_type(class);
        let vt = instance
            .vehicle_type(cover)
            .filter(|vt| vt.can_carry(class))
            .ok_or(InfeasibleConfigurationError { class })?;
        let count = counts[&cover];

        let capacity = f64::from(vt.delivery_capacity_per_day());
        constraints.push(constraint!(capacity * count >= f64::from(demand.count())));
        if let Some(weight_capacity) = vt.weight_capacity_per_day() {
            constraints.push(constraint!(weight_capacity * count >= demand.total_weight()));
        }
    }
    Ok(())
}

/// Cascading strategy: explicit per-(class, type) volumes with a fixed
/// priority split.
///
/// Classes are walked heaviest first, capable types most capable first.
/// Every capable type except the last is bounded by its remaining capacity
/// after heavier classes; the last capable type takes the forced balance,
/// so the split is fully determined. The cascade is a deterministic policy,
/// not an optimal packing: the objective only sees counts, and these rows
/// pin a single interpretable split among the many the solver would
/// otherwise be indifferent between.
fn build_cascading(
    instance: &OptimizationInstance,
    vars: &mut ProblemVariables,
    counts: &BTreeMap<VehicleTypeId, Variable>,
    constraints: &mut Vec<Constraint>,
) -> Result<BTreeMap<(DeliveryClass, VehicleTypeId), Variable>, InfeasibleConfigurationError> {
    let mut assignments: BTreeMap<(DeliveryClass, VehicleTypeId), Variable> = BTreeMap::new();

    // Capable enabled types per class, most capable first.
    let mut candidates: BTreeMap<DeliveryClass, Vec<&VehicleType>> = BTreeMap::new();
    for class in DeliveryClass::ALL {
        let capable: Vec<&VehicleType> = instance
            .enabled_types()
            .filter(|vt| vt.can_carry(class))
            .collect();
        if capable.is_empty() && instance.demand().class(class).count() > 0 {
            return Err(InfeasibleConfigurationError { class });
        }
        for vt in &capable {
            let var = vars.add(
                variable()
                    .min(0.0)
                    .name(format!("assign_{}_{}", class, vt.id())),
            );
            assignments.insert((class, vt.id()), var);
        }
        candidates.insert(class, capable);
    }

    // Full coverage per class: assigned volumes sum to the class count.
    for class in DeliveryClass::ALL {
        let capable = &candidates[&class];
        if capable.is_empty() {
            continue;
        }
        let total = capable
            .iter()
            .map(|vt| assignments[&(class, vt.id())])
            .fold(Expression::from(0.0), |acc, v| acc + v);
        let count = f64::from(instance.demand().class(class).count());
        constraints.push(constraint!(total == count));
    }

    // Capacity per type: deployed count must carry everything loaded on it.
    for vt in instance.enabled_types() {
        let loaded = DeliveryClass::ALL
            .iter()
            .filter_map(|&class| assignments.get(&(class, vt.id())))
            .fold(Expression::from(0.0), |acc, &v| acc + v);
        let capacity = f64::from(vt.delivery_capacity_per_day());
        constraints.push(constraint!(capacity * counts[&vt.id()] >= loaded));
    }

    // Priority cascade, heaviest class first.
    for class in DeliveryClass::CASCADE_ORDER {
        let capable = &candidates[&class];
        if capable.is_empty() {
            continue;
        }
        let count = f64::from(instance.demand().class(class).count());
        for (position, vt) in capable.iter().enumerate() {
            let assigned = assignments[&(class, vt.id())];
            if position + 1 == capable.len() {
                // Last capable type takes whatever earlier types left over.
                let placed_earlier = capable[..position]
                    .iter()
                    .map(|earlier| assignments[&(class, earlier.id())])
                    .fold(Expression::from(0.0), |acc, v| acc + v);
                constraints.push(constraint!(assigned + placed_earlier == count));
            } else {
                // Bounded by this type's capacity remaining after heavier classes.
                let heavier_load = DeliveryClass::CASCADE_ORDER
                    .iter()
                    .take_while(|&&c| c != class)
                    .filter_map(|&c| assignments.get(&(c, vt.id())))
                    .fold(Expression::from(0.0), |acc, &v| acc + v);
                let capacity = f64::from(vt.delivery_capacity_per_day());
                constraints
                    .push(constraint!(assigned <= capacity * counts[&vt.id()] - heavier_load));
            }
        }
    }

    Ok(assignments)
}

/// Optional fleet-wide rows: availability caps, driver cap, distance cap,
/// and the at-most-one-underutilized indicator set. All of these constrain
/// only count variables, so they apply under either strategy.
fn build_fleet_limits(
    instance: &OptimizationInstance,
    vars: &mut ProblemVariables,
    counts: &BTreeMap<VehicleTypeId, Variable>,
    constraints: &mut Vec<Constraint>,
) {
    for vt in instance.enabled_types() {
        if let Some(max) = vt.max_available() {
            constraints.push(constraint!(counts[&vt.id()] <= f64::from(max)));
        }
    }

    let limits = instance.limits();
    if let Some(max_drivers) = limits.max_drivers() {
        let total = counts
            .values()
            .fold(Expression::from(0.0), |acc, &v| acc + v);
        constraints.push(constraint!(total <= f64::from(max_drivers)));
    }
    if let Some(distance) = limits.distance() {
        let fleet_distance = counts
            .values()
            .fold(Expression::from(0.0), |acc, &v| acc + distance.per_vehicle_km * v);
        constraints.push(constraint!(fleet_distance <= distance.fleet_total_km));
    }
    if limits.at_most_one_underutilized() {
        // The indicator forces its type unused when set; the big-M must
        // exceed any count an optimal deployment can use, so it is derived
        // from the instance's own demand and capacity data.
        let big_m = underutilization_big_m(instance);
        let mut indicator_sum = Expression::from(0.0);
        for vt in instance.enabled_types() {
            let indicator = vars.add(
                variable()
                    .binary()
                    .name(format!("underutilized_{}", vt.id())),
            );
            constraints.push(constraint!(counts[&vt.id()] + big_m * indicator <= big_m));
            indicator_sum += indicator;
        }
        constraints.push(constraint!(indicator_sum <= 1.0));
    }
}

/// An instance-derived upper bound on any optimal per-type count, plus one.
///
/// Costs are positive, so an optimal solve never deploys more vehicles of a
/// type than the demand ceilings require; summing the per-class count and
/// weight ceilings over-estimates that need for every type.
fn underutilization_big_m(instance: &OptimizationInstance) -> f64 {
    let mut worst: f64 = 0.0;
    for vt in instance.enabled_types() {
        let mut bound = 0.0;
        for class in DeliveryClass::ALL {
            let demand = instance.demand().class(class);
            bound +=
                (f64::from(demand.count()) / f64::from(vt.delivery_capacity_per_day())).ceil();
            if let Some(weight_capacity) = vt.weight_capacity_per_day() {
                bound += (demand.total_weight() / weight_capacity).ceil();
            }
        }
        if let Some(max) = vt.max_available() {
            bound = bound.min(f64::from(max));
        }
        worst = worst.max(bound);
    }
    worst + 1.0
}
