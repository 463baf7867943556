use std::fmt;

use tracing::debug;
use uom::si::{
    f64::{Pressure, VolumeRate},
    pressure::millimeter_of_mercury,
    ratio::percent,
};

use crate::{
    models::renal::hemodynamics::{
        HemodynamicsConfig, HemodynamicsInput, HemodynamicsOutput, compute_with,
    },
    support::units::milliliter_per_minute,
};

use super::Scenario;

/// Relative change below which a metric counts as unchanged.
const RELATIVE_TOLERANCE: f64 = 1e-9;

/// Direction of change of one metric against the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trend {
    Increased,
    Decreased,
    Unchanged,
}

impl Trend {
    /// Classifies the change from `before` to `after`.
    #[must_use]
    pub fn between(before: f64, after: f64) -> Self {
        let scale = before.abs().max(after.abs()).max(1.0);
        let delta = after - before;
        if delta.abs() <= RELATIVE_TOLERANCE * scale {
            Self::Unchanged
        } else if delta > 0.0 {
            Self::Increased
        } else {
            Self::Decreased
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Increased => "↑",
            Self::Decreased => "↓",
            Self::Unchanged => "→",
        })
    }
}

/// Per-metric trends, one field per [`HemodynamicsOutput`] field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Trends {
    pub pgc: Trend,
    pub nfp: Trend,
    pub gfr: Trend,
    pub rbf: Trend,
    pub rpf: Trend,
    pub ff: Trend,
}

impl Trends {
    #[must_use]
    pub fn between(before: &HemodynamicsOutput, after: &HemodynamicsOutput) -> Self {
        let mmhg = |before: Pressure, after: Pressure| {
            Trend::between(
                before.get::<millimeter_of_mercury>(),
                after.get::<millimeter_of_mercury>(),
            )
        };
        let ml_min = |before: VolumeRate, after: VolumeRate| {
            Trend::between(
                before.get::<milliliter_per_minute>(),
                after.get::<milliliter_per_minute>(),
            )
        };

        Self {
            pgc: mmhg(before.pgc, after.pgc),
            nfp: mmhg(before.nfp, after.nfp),
            gfr: ml_min(before.gfr, after.gfr),
            rbf: ml_min(before.rbf, after.rbf),
            rpf: ml_min(before.rpf, after.rpf),
            ff: Trend::between(before.ff.get::<percent>(), after.ff.get::<percent>()),
        }
    }
}

/// One evaluated scenario and how it differs from the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub scenario: Scenario,
    pub output: HemodynamicsOutput,
    pub trends: Trends,
}

/// Evaluates each scenario against `baseline` with the default calibration.
#[must_use]
pub fn compare(scenarios: &[Scenario], baseline: &HemodynamicsInput) -> Vec<Comparison> {
    compare_with(scenarios, baseline, &HemodynamicsConfig::default())
}

/// Evaluates each scenario against `baseline` with an explicit calibration.
///
/// Rows follow the order of `scenarios`.
#[must_use]
pub fn compare_with(
    scenarios: &[Scenario],
    baseline: &HemodynamicsInput,
    config: &HemodynamicsConfig,
) -> Vec<Comparison> {
    let reference = compute_with(baseline, config);
    debug!(scenarios = scenarios.len(), "comparing scenarios");

    scenarios
        .iter()
        .map(|scenario| {
            let output = compute_with(&scenario.input, config);
            Comparison {
                scenario: *scenario,
                output,
                trends: Trends::between(&reference, &output),
            }
        })
        .collect()
}
