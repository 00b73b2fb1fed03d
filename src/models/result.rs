//! Optimization result and solve status types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{DeliveryClass, VehicleTypeId};

/// Outcome category reported by the solver adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveStatus {
    /// An optimal deployment was found; the result carries a full plan.
    Optimal,
    /// The constraints are jointly unsatisfiable (e.g. availability caps
    /// too tight for demand).
    Infeasible,
    /// The problem is unbounded; indicates a malformed formulation.
    Unbounded,
    /// The solver gave up without a verdict.
    NotSolved,
}

impl core::fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SolveStatus::Optimal => write!(f, "Optimal"),
            SolveStatus::Infeasible => write!(f, "Infeasible"),
            SolveStatus::Unbounded => write!(f, "Unbounded"),
            SolveStatus::NotSolved => write!(f, "NotSolved"),
        }
    }
}

/// The deployment an optimal solve produced.
///
/// Vehicle counts are integral after tolerance rounding; a count that came
/// back from the solver with residue beyond tolerance is surfaced raw
/// rather than masked. Assignments are present only under the cascading
/// strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetPlan {
    vehicle_counts: BTreeMap<VehicleTypeId, f64>,
    assignments: BTreeMap<(DeliveryClass, VehicleTypeId), f64>,
    total_cost: f64,
}

impl FleetPlan {
    /// Creates a plan from projected variable values.
    pub fn new(
        vehicle_counts: BTreeMap<VehicleTypeId, f64>,
        assignments: BTreeMap<(DeliveryClass, VehicleTypeId), f64>,
        total_cost: f64,
    ) -> Self {
        Self {
            vehicle_counts,
            assignments,
            total_cost,
        }
    }

    /// Deployed vehicles of the given type; zero for disabled types.
    pub fn vehicle_count(&self, id: VehicleTypeId) -> f64 {
        self.vehicle_counts.get(&id).copied().unwrap_or(0.0)
    }

    /// All per-type counts in capability order.
    pub fn vehicle_counts(&self) -> &BTreeMap<VehicleTypeId, f64> {
        &self.vehicle_counts
    }

    /// Delivery volume of a class assigned to a type, if that pair was
    /// modeled (cascading strategy only).
    pub fn assigned(&self, class: DeliveryClass, id: VehicleTypeId) -> Option<f64> {
        self.assignments.get(&(class, id)).copied()
    }

    /// All modeled per-(class, type) volumes.
    pub fn assignments(&self) -> &BTreeMap<(DeliveryClass, VehicleTypeId), f64> {
        &self.assignments
    }

    /// Total volume of a class across all types it was assigned to.
    pub fn assigned_total(&self, class: DeliveryClass) -> f64 {
        self.assignments
            .iter()
            .filter(|((c, _), _)| *c == class)
            .map(|(_, v)| v)
            .sum()
    }

    /// Total deployed vehicles across all types.
    pub fn total_vehicles(&self) -> f64 {
        self.vehicle_counts.values().sum()
    }

    /// The solver's objective value: Σ cost_per_day × vehicle_count.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }
}

/// Result of one optimization request.
///
/// Either fully optimal with a populated [`FleetPlan`], or a bare
/// non-optimal status. Partial results are never produced.
///
/// # Examples
///
/// ```
/// use u_fleet::models::{OptimizationResult, SolveStatus};
///
/// let r = OptimizationResult::not_optimal(SolveStatus::Infeasible);
/// assert!(!r.is_optimal());
/// assert!(r.plan().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    status: SolveStatus,
    plan: Option<FleetPlan>,
}

impl OptimizationResult {
    /// An optimal result with its plan.
    pub fn optimal(plan: FleetPlan) -> Self {
        Self {
            status: SolveStatus::Optimal,
            plan: Some(plan),
        }
    }

    /// A result that carries only a non-optimal status.
    pub fn not_optimal(status: SolveStatus) -> Self {
        debug_assert!(status != SolveStatus::Optimal);
        Self { status, plan: None }
    }

    /// The solve status.
    pub fn status(&self) -> SolveStatus {
        self.status
    }

    /// The plan, present iff the status is [`SolveStatus::Optimal`].
    pub fn plan(&self) -> Option<&FleetPlan> {
        self.plan.as_ref()
    }

    /// Returns `true` if an optimal plan was found.
    pub fn is_optimal(&self) -> bool {
        self.status == SolveStatus::Optimal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_accessors() {
        let mut counts = BTreeMap::new();
        counts.insert(VehicleTypeId::V1, 1.0);
        counts.insert(VehicleTypeId::V2, 3.0);
        let mut assignments = BTreeMap::new();
        assignments.insert((DeliveryClass::C, VehicleTypeId::V1), 10.0);
        assignments.insert((DeliveryClass::B, VehicleTypeId::V1), 54.0);
        assignments.insert((DeliveryClass::B, VehicleTypeId::V2), 46.0);

        let plan = FleetPlan::new(counts, assignments, 161.8156);
        assert_eq!(plan.vehicle_count(VehicleTypeId::V1), 1.0);
        assert_eq!(plan.vehicle_count(VehicleTypeId::V3), 0.0);
        assert_eq!(plan.assigned(DeliveryClass::C, VehicleTypeId::V1), Some(10.0));
        assert_eq!(plan.assigned(DeliveryClass::C, VehicleTypeId::V2), None);
        assert!((plan.assigned_total(DeliveryClass::B) - 100.0).abs() < 1e-10);
        assert_eq!(plan.total_vehicles(), 4.0);
        assert_eq!(plan.total_cost(), 161.8156);
    }

    #[test]
    fn test_result_shapes() {
        let plan = FleetPlan::new(BTreeMap::new(), BTreeMap::new(), 0.0);
        let ok = OptimizationResult::optimal(plan);
        assert!(ok.is_optimal());
        assert!(ok.plan().is_some());
        assert_eq!(ok.status(), SolveStatus::Optimal);

        let bad = OptimizationResult::not_optimal(SolveStatus::NotSolved);
        assert!(!bad.is_optimal());
        assert!(bad.plan().is_none());
        assert_eq!(bad.status().to_string(), "NotSolved");
    }
}
