//! Iterative solver for the rated efficiency that reproduces a seasonal rating.
//!
//! The forward seasonal calculation rises monotonically with the nominal rated
//! efficiency, so bisection over a bracketing interval converges on the
//! efficiency whose seasonal metric matches the nameplate target.

mod config;
mod problem;

pub use config::SolverConfig;

use twine_core::Model;
use twine_solvers::equation::bisection;

use crate::support::constraint::{Constrained, StrictlyPositive};

use super::{RatingError, SeasonalPerformance};

use problem::TargetMetric;

/// A nominal efficiency and the seasonal performance it produces.
#[derive(Debug, Clone, PartialEq)]
pub struct RatedEfficiency {
    /// Net EER (Btu/Wh) or COP of the highest speed.
    pub nominal: f64,

    /// Seasonal performance at `nominal`.
    pub performance: SeasonalPerformance,

    /// Iteration count performed by the solver.
    pub iters: usize,
}

/// Solves for the nominal efficiency whose seasonal metric equals `target`.
///
/// Both ends of `bracket` are evaluated first. A target the bracket cannot
/// reach is reported as [`RatingError::TargetOutOfRange`] without iterating.
///
/// # Errors
///
/// Returns [`RatingError::TargetOutOfRange`] if the target lies outside the
/// bracket's seasonal metrics, [`RatingError::ConvergenceFailure`] naming
/// `equipment` if the iteration limit is reached, or any error raised by the
/// model.
pub fn solve_rated_efficiency<M>(
    target: Constrained<f64, StrictlyPositive>,
    model: &M,
    bracket: [f64; 2],
    config: &SolverConfig,
    equipment: &str,
) -> Result<RatedEfficiency, RatingError>
where
    M: Model<Input = f64, Output = SeasonalPerformance, Error = RatingError>,
{
    let target = target.into_inner();
    let [lo, hi] = bracket;

    let at_lo = model.call(&lo)?;
    let at_hi = model.call(&hi)?;

    for (nominal, performance) in [(lo, &at_lo), (hi, &at_hi)] {
        if (performance.metric - target).abs() <= config.metric_tol {
            return Ok(RatedEfficiency {
                nominal,
                performance: performance.clone(),
                iters: 0,
            });
        }
    }

    if (at_lo.metric - target).signum() == (at_hi.metric - target).signum() {
        return Err(RatingError::TargetOutOfRange {
            target,
            achievable: [at_lo.metric, at_hi.metric],
        });
    }

    let problem = TargetMetric::new(target);

    let solution = bisection::solve(
        model,
        &problem,
        [lo, hi],
        &config.bisection(),
        |_event: &bisection::Event<'_, _, _>| -> Option<bisection::Action> { None },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(RatingError::ConvergenceFailure {
            equipment: equipment.to_owned(),
            residual: solution.residual,
            iters: solution.iters,
        });
    }

    Ok(RatedEfficiency {
        nominal: solution.x,
        performance: solution.snapshot.output,
        iters: solution.iters,
    })
}
