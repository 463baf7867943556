use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::VolumeRate;

/// Errors that can occur while searching for a critical pressure.
#[derive(Debug, Error)]
pub enum CriticalPressureError {
    /// GFR does not cross the target between the bracket edges.
    #[error("target GFR {target:?} is not bracketed: {low:?} at the low edge, {high:?} at the high edge")]
    NotBracketed {
        target: VolumeRate,
        low: VolumeRate,
        high: VolumeRate,
    },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best GFR residual achieved.
        residual: VolumeRate,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
