//! Closed-form glomerular hemodynamics.
//!
//! The calculator maps seven physiological inputs to six outputs in a fixed
//! sequence: glomerular pressure from the arteriolar resistance split, net
//! filtration pressure from the Starling balance, GFR from Kf, plasma flow
//! from total resistance, then blood flow and filtration fraction.
//!
//! Nothing here fails. Derived pressures are clamped and every denominator is
//! floored, so extreme inputs give saturated numbers instead of errors.

mod config;
mod error;
mod flows;
mod input;
mod output;
mod pressures;

pub use config::HemodynamicsConfig;
pub use error::{InputError, Parameter};
pub use input::HemodynamicsInput;
pub use output::{FiltrationFractionStatus, GfrCategory, HemodynamicsOutput};

/// Computes hemodynamic outputs with the default calibration.
#[must_use]
pub fn compute(input: &HemodynamicsInput) -> HemodynamicsOutput {
    compute_with(input, &HemodynamicsConfig::default())
}

/// Computes hemodynamic outputs with an explicit calibration.
#[must_use]
pub fn compute_with(input: &HemodynamicsInput, config: &HemodynamicsConfig) -> HemodynamicsOutput {
    let pgc = pressures::glomerular_pressure(input, config);
    let nfp = pressures::net_filtration_pressure(pgc, input.pbs(), input.pi_gc());
    let gfr = flows::filtration_rate(input.kf(), nfp, config);
    let rpf = flows::plasma_flow(input, config);
    let rbf = flows::blood_flow(rpf, input.hct(), config);
    let ff = flows::filtration_fraction(gfr, rpf);

    HemodynamicsOutput {
        pgc,
        nfp,
        gfr,
        rbf,
        rpf,
        ff,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Pressure, Ratio},
        pressure::millimeter_of_mercury,
        ratio::{percent, ratio},
    };

    use crate::support::units::{
        UltrafiltrationCoefficient, UltrafiltrationUnits, milliliter_per_minute,
    };

    fn mmhg(value: f64) -> Pressure {
        Pressure::new::<millimeter_of_mercury>(value)
    }

    fn gfr(output: &HemodynamicsOutput) -> f64 {
        output.gfr.get::<milliliter_per_minute>()
    }

    fn nfp(output: &HemodynamicsOutput) -> f64 {
        output.nfp.get::<millimeter_of_mercury>()
    }

    #[test]
    fn textbook_example() {
        let out = compute(&HemodynamicsInput::baseline());

        assert_relative_eq!(out.pgc.get::<millimeter_of_mercury>(), 55.0, epsilon = 1e-9);
        assert_relative_eq!(nfp(&out), 20.0, epsilon = 1e-9);
        assert_relative_eq!(gfr(&out), 120.0, epsilon = 1e-9);
    }

    #[test]
    fn baseline_is_in_normal_ranges() {
        let out = compute(&HemodynamicsInput::baseline());

        let rpf = out.rpf.get::<milliliter_per_minute>();
        let ff = out.ff.get::<percent>();
        assert!((118.0..=130.0).contains(&gfr(&out)));
        assert!((600.0..=700.0).contains(&rpf));
        assert!((16.0..=21.0).contains(&ff));

        assert_eq!(out.gfr_category(), GfrCategory::Normal);
        assert_eq!(
            out.filtration_fraction_status(),
            FiltrationFractionStatus::Normal
        );
    }

    #[test]
    fn gfr_never_decreases_with_kf() {
        let baseline = HemodynamicsInput::baseline();
        let mut last = 0.0;
        for kf in [2.0, 5.0, 8.0, 12.0, 16.0, 20.0] {
            let input = baseline
                .with_kf(UltrafiltrationCoefficient::from_ml_per_min_per_mmhg(kf))
                .unwrap();
            let next = gfr(&compute(&input));
            assert!(next >= last);
            last = next;
        }
    }

    #[test]
    fn gfr_is_zero_without_net_filtration_pressure() {
        // Pgc 55 against Pbs 30 and πgc 35 leaves NFP at -10 mmHg.
        let input = HemodynamicsInput::baseline()
            .with_pbs(mmhg(30.0))
            .and_then(|input| input.with_pi_gc(mmhg(35.0)))
            .unwrap();
        let out = compute(&input);

        assert!(nfp(&out) <= 0.0);
        assert_eq!(gfr(&out), 0.0);
        assert_eq!(out.ff.get::<percent>(), 0.0);
    }

    #[test]
    fn zero_pressure_has_no_flow_and_no_nan() {
        let input = HemodynamicsInput::baseline().with_map(mmhg(0.0)).unwrap();
        let out = compute(&input);

        assert_eq!(out.rpf.get::<milliliter_per_minute>(), 0.0);
        assert_eq!(out.ff.get::<percent>(), 0.0);
        assert!(!out.rbf.get::<milliliter_per_minute>().is_nan());
    }

    #[test]
    fn blood_and_plasma_flow_agree() {
        for hct in [20.0, 35.0, 45.0, 60.0] {
            let input = HemodynamicsInput::baseline()
                .with_hct(Ratio::new::<percent>(hct))
                .unwrap();
            let out = compute(&input);

            assert_relative_eq!(
                out.rbf.get::<milliliter_per_minute>() * (1.0 - hct / 100.0),
                out.rpf.get::<milliliter_per_minute>(),
                max_relative = 1e-6
            );
        }
    }

    #[test]
    fn pgc_rises_with_efferent_resistance_until_ceiling() {
        let baseline = HemodynamicsInput::baseline();
        let mut last = 0.0;
        for re in [0.5, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0] {
            let input = baseline.with_re(Ratio::new::<ratio>(re)).unwrap();
            let pgc = compute(&input).pgc.get::<millimeter_of_mercury>();
            assert!(pgc > last);
            last = pgc;
        }

        let saturated = baseline
            .with_map(mmhg(200.0))
            .and_then(|input| input.with_re(Ratio::new::<ratio>(6.0)))
            .unwrap();
        assert_relative_eq!(
            compute(&saturated).pgc.get::<millimeter_of_mercury>(),
            99.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn bowman_pressure_opposes_filtration() {
        let baseline = HemodynamicsInput::baseline();
        let mut last_nfp = f64::INFINITY;
        let mut last_gfr = f64::INFINITY;
        for pbs in [5.0, 10.0, 15.0, 25.0, 40.0] {
            let out = compute(&baseline.with_pbs(mmhg(pbs)).unwrap());
            assert!(nfp(&out) < last_nfp);
            assert!(gfr(&out) <= last_gfr);
            last_nfp = nfp(&out);
            last_gfr = gfr(&out);
        }
    }

    #[test]
    fn obstruction_lowers_filtration() {
        let baseline = compute(&HemodynamicsInput::baseline());
        let obstructed = compute(&HemodynamicsInput::baseline().with_pbs(mmhg(25.0)).unwrap());

        assert!(nfp(&obstructed) < nfp(&baseline));
        assert!(gfr(&obstructed) < gfr(&baseline));
    }

    #[test]
    fn low_oncotic_pressure_raises_filtration() {
        let baseline = compute(&HemodynamicsInput::baseline());
        let nephrotic = compute(
            &HemodynamicsInput::baseline()
                .with_pi_gc(mmhg(15.0))
                .unwrap(),
        );

        assert!(nfp(&nephrotic) > nfp(&baseline));
        assert!(gfr(&nephrotic) > gfr(&baseline));
    }

    #[test]
    fn degenerate_inputs_stay_numeric() {
        let input = HemodynamicsInput::new_unchecked(
            mmhg(100.0),
            Ratio::new::<ratio>(-1.0),
            Ratio::new::<ratio>(1.0),
            mmhg(10.0),
            mmhg(25.0),
            UltrafiltrationCoefficient::from_ml_per_min_per_mmhg(12.0),
            Ratio::new::<percent>(100.0),
        );
        let out = compute(&input);

        assert!(out.pgc.get::<millimeter_of_mercury>().is_finite());
        assert!(out.rpf.get::<milliliter_per_minute>().is_finite());
        assert!(out.rbf.get::<milliliter_per_minute>().is_finite());
        assert!(out.ff.get::<percent>().is_finite());
    }

    #[test]
    fn calibration_is_adjustable() {
        let config = HemodynamicsConfig {
            kf_scale: Ratio::new::<ratio>(1.0),
            ..HemodynamicsConfig::default()
        };
        let out = compute_with(&HemodynamicsInput::baseline(), &config);
        assert_relative_eq!(gfr(&out), 240.0, epsilon = 1e-9);
    }
}
