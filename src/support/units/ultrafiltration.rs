use uom::si::{
    f64::{Pressure, VolumeRate},
    pressure::millimeter_of_mercury,
};

use super::{UltrafiltrationCoefficient, milliliter_per_minute};

/// Clinical-unit conversions for [`UltrafiltrationCoefficient`].
///
/// Kf is quoted in mL/min/mmHg everywhere in renal physiology, but that unit
/// has no definition in [`uom`], so conversions go through a 1 mmHg reference.
pub trait UltrafiltrationUnits: Sized {
    /// Creates a coefficient from a value in mL/min/mmHg.
    fn from_ml_per_min_per_mmhg(value: f64) -> Self;

    /// Returns the coefficient in mL/min/mmHg.
    fn get_ml_per_min_per_mmhg(&self) -> f64;
}

impl UltrafiltrationUnits for UltrafiltrationCoefficient {
    fn from_ml_per_min_per_mmhg(value: f64) -> Self {
        VolumeRate::new::<milliliter_per_minute>(value) / one_mmhg()
    }

    fn get_ml_per_min_per_mmhg(&self) -> f64 {
        let flow: VolumeRate = *self * one_mmhg();
        flow.get::<milliliter_per_minute>()
    }
}

fn one_mmhg() -> Pressure {
    Pressure::new::<millimeter_of_mercury>(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn clinical_units_survive_conversion() {
        let kf = UltrafiltrationCoefficient::from_ml_per_min_per_mmhg(12.0);
        assert_relative_eq!(kf.get_ml_per_min_per_mmhg(), 12.0, epsilon = 1e-12);
    }

    #[test]
    fn coefficient_times_pressure_is_flow() {
        let kf = UltrafiltrationCoefficient::from_ml_per_min_per_mmhg(6.0);
        let nfp = Pressure::new::<millimeter_of_mercury>(20.0);
        let gfr: VolumeRate = kf * nfp;
        assert_relative_eq!(gfr.get::<milliliter_per_minute>(), 120.0, epsilon = 1e-9);
    }
}
