use uom::si::{
    f64::{Pressure, Ratio, VolumeRate},
    pressure::millimeter_of_mercury,
    ratio::ratio,
};

use crate::support::units::milliliter_per_minute;

/// Calibration constants for the hemodynamics calculator.
///
/// The defaults are tuned so the textbook normal kidney (MAP 100 mmHg,
/// Ra = Re = 1, Pbs 10 mmHg, πgc 25 mmHg, Kf 12 mL/min/mmHg, Hct 45 %)
/// gives Pgc 55 mmHg, NFP 20 mmHg, GFR 120 mL/min and RPF 650 mL/min.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HemodynamicsConfig {
    /// Glomerular pressure added to the arterial contribution.
    pub pgc_offset: Pressure,

    /// Fraction of the efferent share of MAP that reaches the glomerulus.
    pub pgc_gain: Ratio,

    /// Lower edge of the glomerular pressure band (inclusive).
    pub pgc_min: Pressure,

    /// Upper edge of the glomerular pressure band (inclusive).
    pub pgc_max: Pressure,

    /// Fraction of the nominal Kf that filters at the afferent-end NFP.
    ///
    /// Oncotic pressure rises along the capillary as plasma is filtered, so
    /// only part of the capillary length sees the full net pressure.
    pub kf_scale: Ratio,

    /// Plasma flow at the reference pressure and resistance.
    pub reference_rpf: VolumeRate,

    /// Arterial pressure at which [`Self::reference_rpf`] is produced.
    pub reference_map: Pressure,

    /// Total arteriolar resistance at which [`Self::reference_rpf`] is produced.
    pub reference_resistance: Ratio,

    /// Floor applied to `Ra + Re` before dividing by it.
    pub min_resistance: Ratio,

    /// Floor applied to the plasma fraction `1 - Hct` before dividing by it.
    pub min_plasma_fraction: Ratio,
}

impl Default for HemodynamicsConfig {
    fn default() -> Self {
        Self {
            pgc_offset: Pressure::new::<millimeter_of_mercury>(10.0),
            pgc_gain: Ratio::new::<ratio>(0.9),
            pgc_min: Pressure::new::<millimeter_of_mercury>(35.0),
            pgc_max: Pressure::new::<millimeter_of_mercury>(99.0),
            kf_scale: Ratio::new::<ratio>(0.5),
            reference_rpf: VolumeRate::new::<milliliter_per_minute>(650.0),
            reference_map: Pressure::new::<millimeter_of_mercury>(100.0),
            reference_resistance: Ratio::new::<ratio>(2.0),
            min_resistance: Ratio::new::<ratio>(1e-6),
            min_plasma_fraction: Ratio::new::<ratio>(0.01),
        }
    }
}
