//! Search for the arterial pressure at which GFR falls to a given value.
//!
//! Bisects MAP inside a caller-supplied bracket until the selected GFR
//! (regulated or unregulated) matches the target.

mod config;
mod error;
mod problem;

pub use config::CriticalPressureConfig;
pub use error::CriticalPressureError;

use tracing::debug;
use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Pressure, VolumeRate},
    pressure::millimeter_of_mercury,
};

use crate::{
    models::renal::hemodynamics::HemodynamicsInput, support::units::milliliter_per_minute,
};

use super::{AutoregulationConfig, AutoregulationPoint, regulated_point};

use problem::{CriticalGfrProblem, PointModel};

/// Which GFR the critical pressure search follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Regulation {
    /// Follow the autoregulated GFR.
    Intact,

    /// Follow GFR with the baseline resistances held fixed.
    Impaired,
}

impl Regulation {
    pub(super) fn gfr(self, point: &AutoregulationPoint) -> VolumeRate {
        match self {
            Self::Intact => point.regulated.gfr,
            Self::Impaired => point.unregulated.gfr,
        }
    }
}

/// Finds the MAP inside `bracket` at which GFR equals `target_gfr`.
///
/// # Errors
///
/// Returns [`CriticalPressureError`] if GFR does not cross the target between
/// the bracket edges or the bisection solver fails to converge within the
/// configured iteration limit.
pub(in crate::models::renal::autoregulation) fn critical_pressure(
    target_gfr: VolumeRate,
    regulation: Regulation,
    bracket: [Pressure; 2],
    baseline: &HemodynamicsInput,
    config: &AutoregulationConfig,
    solver: &CriticalPressureConfig,
) -> Result<AutoregulationPoint, CriticalPressureError> {
    let model = PointModel::new(baseline, config);
    let problem = CriticalGfrProblem::new(target_gfr, regulation);

    let [low, high] = bracket;
    let low_point = regulated_point(low, baseline, config);
    let high_point = regulated_point(high, baseline, config);
    let low_residual = problem.residual(&low_point);
    let high_residual = problem.residual(&high_point);

    if low_residual == 0.0 {
        return Ok(low_point);
    }
    if high_residual == 0.0 {
        return Ok(high_point);
    }
    if low_residual.is_nan()
        || high_residual.is_nan()
        || low_residual.signum() == high_residual.signum()
    {
        return Err(CriticalPressureError::NotBracketed {
            target: target_gfr,
            low: regulation.gfr(&low_point),
            high: regulation.gfr(&high_point),
        });
    }

    let solution = bisection::solve_unobserved(
        &model,
        &problem,
        [
            low.get::<millimeter_of_mercury>(),
            high.get::<millimeter_of_mercury>(),
        ],
        &solver.bisection(),
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(CriticalPressureError::MaxIters {
            residual: VolumeRate::new::<milliliter_per_minute>(solution.residual),
            iters: solution.iters,
        });
    }

    let point = solution.snapshot.output;
    debug!(
        map_mmhg = point.map.get::<millimeter_of_mercury>(),
        iters = solution.iters,
        "critical pressure converged"
    );
    Ok(point)
}
