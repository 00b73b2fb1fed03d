//! Thin pass-through to the MILP solver and result projection.
//!
//! Hands the assembled formulation to HiGHS via `good_lp`, maps solver
//! outcomes onto [`SolveStatus`], and projects raw variable values into a
//! typed [`FleetPlan`]. No algorithmic content lives here.

use std::collections::BTreeMap;

use good_lp::{default_solver, ResolutionError, Solution, SolverModel};

use crate::models::{FleetPlan, OptimizationResult, SolveStatus};

use super::formulation::Formulation;

/// Residue allowed on an integer variable before the raw value is surfaced
/// instead of the rounded one.
const INT_TOLERANCE: f64 = 1e-5;

/// Solves the formulation and projects the outcome.
///
/// Solver failure modes are surfaced as the corresponding status, never
/// silently defaulted; a plan is produced only for an optimal solve.
pub(crate) fn solve(formulation: Formulation) -> OptimizationResult {
    let Formulation {
        vars,
        objective,
        constraints,
        counts,
        assignments,
    } = formulation;

    let mut model = vars.minimise(&objective).using(default_solver);
    for row in constraints {
        model = model.with(row);
    }

    match model.solve() {
        Ok(solution) => {
            let mut projected_counts = BTreeMap::new();
            for (id, var) in &counts {
                let raw = solution.value(*var);
                projected_counts.insert(*id, project_integer(raw, &format!("count_{id}")));
            }
            let mut projected_assignments = BTreeMap::new();
            for (&(class, id), var) in &assignments {
                projected_assignments.insert((class, id), clamp_residue(solution.value(*var)));
            }
            // The objective value is the solver's own, never recomputed.
            let total_cost = solution.eval(&objective);
            OptimizationResult::optimal(FleetPlan::new(
                projected_counts,
                projected_assignments,
                total_cost,
            ))
        }
        Err(ResolutionError::Infeasible) => {
            log::info!("solver reported infeasible constraints");
            OptimizationResult::not_optimal(SolveStatus::Infeasible)
        }
        Err(ResolutionError::Unbounded) => {
            log::warn!("solver reported an unbounded problem");
            OptimizationResult::not_optimal(SolveStatus::Unbounded)
        }
        Err(err) => {
            log::error!("solver gave up without a verdict: {err}");
            OptimizationResult::not_optimal(SolveStatus::NotSolved)
        }
    }
}

/// Rounds an integer variable's value when its residue is within solver
/// tolerance. A larger residue is an adapter correctness bug; it is logged
/// and the raw value surfaced unmodified rather than masked.
fn project_integer(raw: f64, name: &str) -> f64 {
    let rounded = raw.round();
    if (raw - rounded).abs() <= INT_TOLERANCE {
        rounded.max(0.0)
    } else {
        log::warn!("integer variable {name} returned with residue beyond tolerance: {raw}");
        raw
    }
}

/// Clears sub-tolerance negative residue on a continuous variable bounded
/// below by zero.
fn clamp_residue(raw: f64) -> f64 {
    if raw < 0.0 && raw >= -INT_TOLERANCE {
        0.0
    } else {
        raw
    }
}
