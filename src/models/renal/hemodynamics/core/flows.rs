//! Renal flows derived from pressures and arteriolar resistance.

use tracing::warn;
use uom::si::{
    f64::{Pressure, Ratio, VolumeRate},
    pressure::millimeter_of_mercury,
    ratio::{percent, ratio},
};

use crate::support::units::{
    UltrafiltrationCoefficient, UltrafiltrationUnits, milliliter_per_minute,
};

use super::{HemodynamicsConfig, HemodynamicsInput};

/// Total arteriolar resistance `Ra + Re`, floored to stay a safe divisor.
pub(super) fn total_resistance(input: &HemodynamicsInput, config: &HemodynamicsConfig) -> f64 {
    let total = input.ra().get::<ratio>() + input.re().get::<ratio>();
    let floor = config.min_resistance.get::<ratio>();
    if total < floor || total.is_nan() {
        warn!(total, floor, "arteriolar resistance below floor");
        return floor;
    }
    total
}

/// Glomerular filtration rate, zero whenever the net pressure opposes filtration.
pub(super) fn filtration_rate(
    kf: UltrafiltrationCoefficient,
    nfp: Pressure,
    config: &HemodynamicsConfig,
) -> VolumeRate {
    let gfr = config.kf_scale.get::<ratio>()
        * kf.get_ml_per_min_per_mmhg()
        * nfp.get::<millimeter_of_mercury>();
    VolumeRate::new::<milliliter_per_minute>(gfr.max(0.0))
}

/// Renal plasma flow, proportional to `MAP / (Ra + Re)`.
///
/// Scaled so the reference pressure and resistance give the reference flow.
pub(super) fn plasma_flow(input: &HemodynamicsInput, config: &HemodynamicsConfig) -> VolumeRate {
    let reference_conductance = config.reference_map.get::<millimeter_of_mercury>()
        / config.reference_resistance.get::<ratio>();
    let conductance =
        input.map().get::<millimeter_of_mercury>() / total_resistance(input, config);

    let rpf = config.reference_rpf.get::<milliliter_per_minute>() * conductance
        / reference_conductance;
    VolumeRate::new::<milliliter_per_minute>(rpf.max(0.0))
}

/// Renal blood flow from plasma flow and hematocrit: `RBF = RPF / (1 - Hct)`.
pub(super) fn blood_flow(rpf: VolumeRate, hct: Ratio, config: &HemodynamicsConfig) -> VolumeRate {
    let plasma_fraction = 1.0 - hct.get::<ratio>();
    let floor = config.min_plasma_fraction.get::<ratio>();
    let plasma_fraction = if plasma_fraction < floor || plasma_fraction.is_nan() {
        warn!(plasma_fraction, floor, "plasma fraction below floor");
        floor
    } else {
        plasma_fraction
    };
    VolumeRate::new::<milliliter_per_minute>(
        rpf.get::<milliliter_per_minute>() / plasma_fraction,
    )
}

/// Filtration fraction `GFR / RPF`, or zero when there is no plasma flow.
pub(super) fn filtration_fraction(gfr: VolumeRate, rpf: VolumeRate) -> Ratio {
    let rpf = rpf.get::<milliliter_per_minute>();
    if rpf > 0.0 {
        Ratio::new::<percent>(100.0 * gfr.get::<milliliter_per_minute>() / rpf)
    } else {
        Ratio::new::<percent>(0.0)
    }
}
