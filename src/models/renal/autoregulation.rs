//! Renal autoregulation model.
//!
//! [`Autoregulation`] holds a baseline input and evaluates regulated and
//! unregulated flows at any mean arterial pressure. It implements
//! [`twine_core::Model`] for a single pressure, and provides curve sweeps and
//! a critical pressure search on top of that.
//!
//! # Example
//!
//! ```
//! use twine_renal::models::renal::{
//!     autoregulation::{Autoregulation, MapSweep},
//!     hemodynamics::HemodynamicsInput,
//! };
//!
//! let model = Autoregulation::new(HemodynamicsInput::baseline());
//! let curve = model.curve(&MapSweep::default().to_vec());
//! assert_eq!(curve.len(), 60);
//! ```

mod core;

use std::convert::Infallible;

use twine_core::Model;
use uom::si::f64::{Pressure, VolumeRate};

pub use self::core::{
    AutoregulationConfig, AutoregulationPoint, CriticalPressureConfig, CriticalPressureError,
    Curve, Flows, MapSweep, Plateau, PlateauError, Regulation, autoregulation_curve,
    autoregulation_curve_with, regulated_point,
};

use crate::models::renal::hemodynamics::HemodynamicsInput;

/// Autoregulated kidney around a fixed baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Autoregulation {
    baseline: HemodynamicsInput,
    config: AutoregulationConfig,
}

impl Autoregulation {
    /// Creates a model with the default plateau, targets and damping.
    #[must_use]
    pub fn new(baseline: HemodynamicsInput) -> Self {
        Self::with_config(baseline, AutoregulationConfig::default())
    }

    #[must_use]
    pub fn with_config(baseline: HemodynamicsInput, config: AutoregulationConfig) -> Self {
        Self { baseline, config }
    }

    #[must_use]
    pub fn baseline(&self) -> &HemodynamicsInput {
        &self.baseline
    }

    #[must_use]
    pub fn config(&self) -> &AutoregulationConfig {
        &self.config
    }

    /// Regulated and unregulated flows at one pressure.
    #[must_use]
    pub fn point(&self, map: Pressure) -> AutoregulationPoint {
        regulated_point(map, &self.baseline, &self.config)
    }

    /// Regulated GFR and RPF for each sample, in order.
    #[must_use]
    pub fn curve(&self, map_samples: &[Pressure]) -> Curve {
        autoregulation_curve_with(map_samples, &self.baseline, &self.config)
    }

    /// Regulated and unregulated flows for every sample of a sweep.
    #[must_use]
    pub fn sweep(&self, sweep: &MapSweep) -> Vec<AutoregulationPoint> {
        sweep.samples().map(|map| self.point(map)).collect()
    }

    /// Finds the MAP inside `bracket` at which GFR falls to `target_gfr`.
    ///
    /// # Errors
    ///
    /// Returns [`CriticalPressureError`] if the target is not bracketed or the
    /// solver fails to converge.
    pub fn critical_pressure(
        &self,
        target_gfr: VolumeRate,
        regulation: Regulation,
        bracket: [Pressure; 2],
        solver: &CriticalPressureConfig,
    ) -> Result<AutoregulationPoint, CriticalPressureError> {
        self::core::critical_pressure(
            target_gfr,
            regulation,
            bracket,
            &self.baseline,
            &self.config,
            solver,
        )
    }
}

impl Model for Autoregulation {
    type Input = Pressure;
    type Output = AutoregulationPoint;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.point(*input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Ratio, pressure::millimeter_of_mercury, ratio::ratio};

    use crate::support::units::milliliter_per_minute;

    fn mmhg(value: f64) -> Pressure {
        Pressure::new::<millimeter_of_mercury>(value)
    }

    #[test]
    fn model_call_matches_point() {
        let model = Autoregulation::new(HemodynamicsInput::baseline());
        let map = mmhg(65.0);
        assert_eq!(model.call(&map).unwrap(), model.point(map));
    }

    #[test]
    fn sweep_and_curve_agree() {
        let model = Autoregulation::new(HemodynamicsInput::baseline());
        let sweep = MapSweep::new(mmhg(40.0), mmhg(220.0), 19);

        let points = model.sweep(&sweep);
        let curve = model.curve(&sweep.to_vec());

        assert_eq!(points.len(), curve.len());
        for (point, (gfr, rpf)) in points.iter().zip(curve.gfr.iter().zip(&curve.rpf)) {
            assert_eq!(point.regulated.gfr, *gfr);
            assert_eq!(point.regulated.rpf, *rpf);
        }
    }

    #[test]
    fn narrower_plateau_changes_shape() {
        let config = AutoregulationConfig {
            plateau: Plateau::new(mmhg(90.0), mmhg(160.0)).unwrap(),
            ..AutoregulationConfig::default()
        };
        let baseline = HemodynamicsInput::baseline()
            .with_re(Ratio::new::<ratio>(1.2))
            .unwrap();
        let wide = Autoregulation::new(baseline);
        let narrow = Autoregulation::with_config(baseline, config);

        // 85 mmHg is on the default plateau but below the narrow one.
        let map = mmhg(85.0);
        assert!(wide.config().plateau.contains(map));
        assert!(!narrow.config().plateau.contains(map));
        assert_ne!(
            wide.point(map).regulated.gfr.get::<milliliter_per_minute>(),
            narrow.point(map).regulated.gfr.get::<milliliter_per_minute>()
        );
    }

    #[test]
    fn critical_pressure_through_model() {
        let model = Autoregulation::new(HemodynamicsInput::baseline());
        let point = model
            .critical_pressure(
                VolumeRate::new::<milliliter_per_minute>(60.0),
                Regulation::Impaired,
                [mmhg(40.0), mmhg(220.0)],
                &CriticalPressureConfig::default(),
            )
            .unwrap();
        assert!(point.map > mmhg(70.0) && point.map < mmhg(85.0));
    }
}
