//! Named hemodynamic scenarios and baseline comparisons.
//!
//! A [`Scenario`] is a labelled [`HemodynamicsInput`]. The built-in sets are
//! single-parameter perturbations of the baseline kidney
//! ([`Scenario::quick_presets`]) and worksheet clinical cases
//! ([`Scenario::clinical_cases`]). [`compare`] evaluates scenarios and reports
//! which way each output moved relative to a baseline.

mod compare;
mod presets;

pub use compare::{Comparison, Trend, Trends, compare, compare_with};

use crate::models::renal::hemodynamics::{HemodynamicsInput, HemodynamicsOutput, compute};

/// A labelled set of hemodynamic inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
    pub input: HemodynamicsInput,
}

impl Scenario {
    #[must_use]
    pub fn new(name: &'static str, description: &'static str, input: HemodynamicsInput) -> Self {
        Self {
            name,
            description,
            input,
        }
    }

    /// The baseline kidney followed by seven single-parameter perturbations.
    #[must_use]
    pub fn quick_presets() -> Vec<Self> {
        presets::quick()
    }

    /// Worksheet clinical cases.
    #[must_use]
    pub fn clinical_cases() -> Vec<Self> {
        presets::clinical()
    }

    /// Looks up a built-in scenario by name, quick presets first.
    #[must_use]
    pub fn find(name: &str) -> Option<Self> {
        presets::quick()
            .into_iter()
            .chain(presets::clinical())
            .find(|scenario| scenario.name.eq_ignore_ascii_case(name))
    }

    /// Evaluates the scenario with the default calibration.
    #[must_use]
    pub fn compute(&self) -> HemodynamicsOutput {
        compute(&self.input)
    }
}
