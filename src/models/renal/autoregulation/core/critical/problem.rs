//! Problem formulation for the critical pressure search.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    f64::{Pressure, VolumeRate},
    pressure::millimeter_of_mercury,
};

use crate::{
    models::renal::{
        autoregulation::core::{AutoregulationConfig, AutoregulationPoint, regulated_point},
        hemodynamics::HemodynamicsInput,
    },
    support::units::milliliter_per_minute,
};

use super::Regulation;

/// Model adapter exposing MAP as the sole input.
pub(super) struct PointModel<'a> {
    baseline: &'a HemodynamicsInput,
    config: &'a AutoregulationConfig,
}

impl<'a> PointModel<'a> {
    pub(super) fn new(baseline: &'a HemodynamicsInput, config: &'a AutoregulationConfig) -> Self {
        Self { baseline, config }
    }
}

impl Model for PointModel<'_> {
    type Input = Pressure;
    type Output = AutoregulationPoint;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(regulated_point(*input, self.baseline, self.config))
    }
}

/// Equation problem for matching a target GFR.
///
/// Computes the residual as `achieved_gfr - target_gfr` in mL/min.
pub(super) struct CriticalGfrProblem {
    target: VolumeRate,
    regulation: Regulation,
}

impl CriticalGfrProblem {
    pub(super) fn new(target: VolumeRate, regulation: Regulation) -> Self {
        Self { target, regulation }
    }

    pub(super) fn residual(&self, point: &AutoregulationPoint) -> f64 {
        let achieved = self.regulation.gfr(point).get::<milliliter_per_minute>();
        achieved - self.target.get::<milliliter_per_minute>()
    }
}

impl EquationProblem<1> for CriticalGfrProblem {
    type Input = Pressure;
    type Output = AutoregulationPoint;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(Pressure::new::<millimeter_of_mercury>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([self.residual(output)])
    }
}
