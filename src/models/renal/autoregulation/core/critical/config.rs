use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Pressure, VolumeRate},
    pressure::millimeter_of_mercury,
};

use crate::support::units::milliliter_per_minute;

/// Solver configuration for the critical pressure search.
#[derive(Debug, Clone, Copy)]
pub struct CriticalPressureConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the MAP search variable.
    pub map_tol: Pressure,

    /// Absolute tolerance on the GFR residual (achieved - target).
    pub gfr_tol: VolumeRate,
}

impl Default for CriticalPressureConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            map_tol: Pressure::new::<millimeter_of_mercury>(1e-9),
            gfr_tol: VolumeRate::new::<milliliter_per_minute>(1e-9),
        }
    }
}

impl CriticalPressureConfig {
    /// Converts this configuration into a bisection solver configuration.
    ///
    /// The solver works in mmHg and mL/min.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.map_tol.get::<millimeter_of_mercury>(),
            x_rel_tol: 0.0,
            residual_tol: self.gfr_tol.get::<milliliter_per_minute>(),
        }
    }
}
