use crate::support::{
    constraint::{
        Constrained, Constraint, NonNegative, StrictlyPositive, UnitIntervalUpperOpen,
    },
    units::{UltrafiltrationCoefficient, UltrafiltrationUnits},
};
use uom::si::{
    f64::{Pressure, Ratio},
    pressure::millimeter_of_mercury,
    ratio::{percent, ratio},
};

use super::{InputError, Parameter};

/// Physiological inputs to the hemodynamics calculator.
///
/// Resistances are relative units (1.0 is a normal arteriole).
/// Hematocrit is a [`Ratio`], so 45 % is `Ratio::new::<percent>(45.0)`.
///
/// Values are fixed once built. Use the `with_*` methods to derive a
/// modified copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HemodynamicsInput {
    map: Pressure,
    ra: Ratio,
    re: Ratio,
    pbs: Pressure,
    pi_gc: Pressure,
    kf: UltrafiltrationCoefficient,
    hct: Ratio,
}

impl HemodynamicsInput {
    /// Constructs a validated input.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] naming the first parameter that is infinite,
    /// `NaN`, or outside its physical range:
    ///
    /// - pressures (`map`, `pbs`, `pi_gc`) and `kf` must be non-negative,
    /// - resistances (`ra`, `re`) must be strictly positive,
    /// - `hct` must lie in `[0, 100)` percent.
    pub fn new(
        map: Pressure,
        ra: Ratio,
        re: Ratio,
        pbs: Pressure,
        pi_gc: Pressure,
        kf: UltrafiltrationCoefficient,
        hct: Ratio,
    ) -> Result<Self, InputError> {
        Ok(Self {
            map: check_map(map)?,
            ra: check::<_, StrictlyPositive>(Parameter::AfferentResistance, ra, ra.get::<ratio>())?,
            re: check::<_, StrictlyPositive>(Parameter::EfferentResistance, re, re.get::<ratio>())?,
            pbs: check::<_, NonNegative>(Parameter::BowmanPressure, pbs, mmhg(pbs))?,
            pi_gc: check::<_, NonNegative>(Parameter::OncoticPressure, pi_gc, mmhg(pi_gc))?,
            kf: check::<_, NonNegative>(
                Parameter::UltrafiltrationCoefficient,
                kf,
                kf.get_ml_per_min_per_mmhg(),
            )?,
            hct: check::<_, UnitIntervalUpperOpen>(Parameter::Hematocrit, hct, hct.get::<ratio>())?,
        })
    }

    /// Constructs an input from clinical-unit scalars.
    ///
    /// Pressures are in mmHg, Kf in mL/min/mmHg and hematocrit in percent.
    ///
    /// # Errors
    ///
    /// Same as [`HemodynamicsInput::new`].
    pub fn from_clinical(
        map_mmhg: f64,
        ra: f64,
        re: f64,
        pbs_mmhg: f64,
        pi_gc_mmhg: f64,
        kf_ml_per_min_per_mmhg: f64,
        hct_percent: f64,
    ) -> Result<Self, InputError> {
        Self::new(
            Pressure::new::<millimeter_of_mercury>(map_mmhg),
            Ratio::new::<ratio>(ra),
            Ratio::new::<ratio>(re),
            Pressure::new::<millimeter_of_mercury>(pbs_mmhg),
            Pressure::new::<millimeter_of_mercury>(pi_gc_mmhg),
            UltrafiltrationCoefficient::from_ml_per_min_per_mmhg(kf_ml_per_min_per_mmhg),
            Ratio::new::<percent>(hct_percent),
        )
    }

    /// Constructs an input without validation.
    ///
    /// # Warning
    ///
    /// Non-physical values are not rejected. The calculator still guards its
    /// denominators, but results for such inputs are degenerate.
    #[must_use]
    pub fn new_unchecked(
        map: Pressure,
        ra: Ratio,
        re: Ratio,
        pbs: Pressure,
        pi_gc: Pressure,
        kf: UltrafiltrationCoefficient,
        hct: Ratio,
    ) -> Self {
        Self {
            map,
            ra,
            re,
            pbs,
            pi_gc,
            kf,
            hct,
        }
    }

    /// The normal kidney used as the reference for every preset.
    ///
    /// MAP 100 mmHg, Ra 1.0, Re 1.0, Pbs 10 mmHg, πgc 25 mmHg,
    /// Kf 12 mL/min/mmHg, Hct 45 %.
    #[must_use]
    pub fn baseline() -> Self {
        Self::new_unchecked(
            Pressure::new::<millimeter_of_mercury>(100.0),
            Ratio::new::<ratio>(1.0),
            Ratio::new::<ratio>(1.0),
            Pressure::new::<millimeter_of_mercury>(10.0),
            Pressure::new::<millimeter_of_mercury>(25.0),
            UltrafiltrationCoefficient::from_ml_per_min_per_mmhg(12.0),
            Ratio::new::<percent>(45.0),
        )
    }

    /// Mean arterial pressure.
    #[must_use]
    pub fn map(&self) -> Pressure {
        self.map
    }

    /// Afferent arteriolar resistance.
    #[must_use]
    pub fn ra(&self) -> Ratio {
        self.ra
    }

    /// Efferent arteriolar resistance.
    #[must_use]
    pub fn re(&self) -> Ratio {
        self.re
    }

    /// Bowman's capsule hydrostatic pressure.
    #[must_use]
    pub fn pbs(&self) -> Pressure {
        self.pbs
    }

    /// Glomerular capillary oncotic pressure.
    #[must_use]
    pub fn pi_gc(&self) -> Pressure {
        self.pi_gc
    }

    /// Ultrafiltration coefficient.
    #[must_use]
    pub fn kf(&self) -> UltrafiltrationCoefficient {
        self.kf
    }

    /// Hematocrit.
    #[must_use]
    pub fn hct(&self) -> Ratio {
        self.hct
    }

    /// Returns a copy with a different mean arterial pressure.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if `map` is negative or not finite.
    pub fn with_map(self, map: Pressure) -> Result<Self, InputError> {
        Ok(Self {
            map: check_map(map)?,
            ..self
        })
    }

    /// Returns a copy with a different afferent resistance.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if `ra` is not strictly positive and finite.
    pub fn with_ra(self, ra: Ratio) -> Result<Self, InputError> {
        let ra = check::<_, StrictlyPositive>(Parameter::AfferentResistance, ra, ra.get::<ratio>())?;
        Ok(Self { ra, ..self })
    }

    /// Returns a copy with a different efferent resistance.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if `re` is not strictly positive and finite.
    pub fn with_re(self, re: Ratio) -> Result<Self, InputError> {
        let re = check::<_, StrictlyPositive>(Parameter::EfferentResistance, re, re.get::<ratio>())?;
        Ok(Self { re, ..self })
    }

    /// Returns a copy with a different Bowman's capsule pressure.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if `pbs` is negative or not finite.
    pub fn with_pbs(self, pbs: Pressure) -> Result<Self, InputError> {
        let pbs = check::<_, NonNegative>(Parameter::BowmanPressure, pbs, mmhg(pbs))?;
        Ok(Self { pbs, ..self })
    }

    /// Returns a copy with a different glomerular oncotic pressure.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if `pi_gc` is negative or not finite.
    pub fn with_pi_gc(self, pi_gc: Pressure) -> Result<Self, InputError> {
        let pi_gc = check::<_, NonNegative>(Parameter::OncoticPressure, pi_gc, mmhg(pi_gc))?;
        Ok(Self { pi_gc, ..self })
    }

    /// Returns a copy with a different ultrafiltration coefficient.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if `kf` is negative or not finite.
    pub fn with_kf(self, kf: UltrafiltrationCoefficient) -> Result<Self, InputError> {
        let kf = check::<_, NonNegative>(
            Parameter::UltrafiltrationCoefficient,
            kf,
            kf.get_ml_per_min_per_mmhg(),
        )?;
        Ok(Self { kf, ..self })
    }

    /// Returns a copy with a different hematocrit.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if `hct` lies outside `[0, 100)` percent.
    pub fn with_hct(self, hct: Ratio) -> Result<Self, InputError> {
        let hct =
            check::<_, UnitIntervalUpperOpen>(Parameter::Hematocrit, hct, hct.get::<ratio>())?;
        Ok(Self { hct, ..self })
    }

    /// Returns a copy with a different MAP, skipping validation.
    ///
    /// MAP sweeps may run over any range; the calculator clamps what it derives.
    #[must_use]
    pub(crate) fn with_map_unchecked(self, map: Pressure) -> Self {
        Self { map, ..self }
    }
}

impl Default for HemodynamicsInput {
    fn default() -> Self {
        Self::baseline()
    }
}

fn check_map(map: Pressure) -> Result<Pressure, InputError> {
    check::<_, NonNegative>(Parameter::MeanArterialPressure, map, mmhg(map))
}

/// Rejects infinite values, then applies the constraint `C`.
///
/// `raw` is the value as a plain float, used only for the finiteness check.
fn check<T, C: Constraint<T>>(parameter: Parameter, value: T, raw: f64) -> Result<T, InputError> {
    if raw.is_infinite() {
        return Err(InputError::NotFinite { parameter });
    }
    Constrained::<T, C>::new(value)
        .map(Constrained::into_inner)
        .map_err(|source| InputError::OutOfRange { parameter, source })
}

fn mmhg(pressure: Pressure) -> f64 {
    pressure.get::<millimeter_of_mercury>()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::constraint::ConstraintError;

    #[test]
    fn baseline_matches_clinical_constructor() {
        let built = HemodynamicsInput::from_clinical(100.0, 1.0, 1.0, 10.0, 25.0, 12.0, 45.0)
            .expect("baseline values are physical");
        let baseline = HemodynamicsInput::baseline();

        assert_relative_eq!(mmhg(built.map()), mmhg(baseline.map()));
        assert_relative_eq!(built.hct().get::<percent>(), 45.0, epsilon = 1e-12);
        assert_relative_eq!(
            built.kf().get_ml_per_min_per_mmhg(),
            baseline.kf().get_ml_per_min_per_mmhg(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn rejects_non_positive_resistance() {
        let err = HemodynamicsInput::from_clinical(100.0, 0.0, 1.0, 10.0, 25.0, 12.0, 45.0)
            .unwrap_err();
        assert_eq!(
            err,
            InputError::OutOfRange {
                parameter: Parameter::AfferentResistance,
                source: ConstraintError::Zero,
            }
        );

        let err = HemodynamicsInput::from_clinical(100.0, 1.0, -2.0, 10.0, 25.0, 12.0, 45.0)
            .unwrap_err();
        assert_eq!(err.parameter(), Parameter::EfferentResistance);
    }

    #[test]
    fn rejects_full_hematocrit() {
        let err = HemodynamicsInput::from_clinical(100.0, 1.0, 1.0, 10.0, 25.0, 12.0, 100.0)
            .unwrap_err();
        assert_eq!(
            err,
            InputError::OutOfRange {
                parameter: Parameter::Hematocrit,
                source: ConstraintError::AboveMaximum,
            }
        );
    }

    #[test]
    fn rejects_non_finite_values() {
        let err = HemodynamicsInput::from_clinical(f64::INFINITY, 1.0, 1.0, 10.0, 25.0, 12.0, 45.0)
            .unwrap_err();
        assert_eq!(
            err,
            InputError::NotFinite {
                parameter: Parameter::MeanArterialPressure
            }
        );

        let err = HemodynamicsInput::from_clinical(100.0, 1.0, 1.0, 10.0, f64::NAN, 12.0, 45.0)
            .unwrap_err();
        assert_eq!(
            err,
            InputError::OutOfRange {
                parameter: Parameter::OncoticPressure,
                source: ConstraintError::NotANumber,
            }
        );
    }

    #[test]
    fn with_methods_replace_one_field() {
        let baseline = HemodynamicsInput::baseline();
        let obstructed = baseline
            .with_pbs(Pressure::new::<millimeter_of_mercury>(25.0))
            .unwrap();

        assert_relative_eq!(mmhg(obstructed.pbs()), 25.0, epsilon = 1e-12);
        assert_eq!(obstructed.map(), baseline.map());
        assert_eq!(obstructed.pi_gc(), baseline.pi_gc());

        assert!(baseline.with_hct(Ratio::new::<percent>(120.0)).is_err());
        assert!(baseline.with_ra(Ratio::new::<ratio>(0.0)).is_err());
    }

    #[test]
    fn error_messages_name_the_parameter() {
        let err = HemodynamicsInput::baseline()
            .with_kf(UltrafiltrationCoefficient::from_ml_per_min_per_mmhg(-1.0))
            .unwrap_err();
        assert_eq!(err.to_string(), "ultrafiltration coefficient is out of range");
    }
}
