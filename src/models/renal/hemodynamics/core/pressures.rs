//! Starling pressures across the glomerular membrane.

use tracing::debug;
use uom::si::{f64::Pressure, pressure::millimeter_of_mercury, ratio::ratio};

use super::{HemodynamicsConfig, HemodynamicsInput, flows::total_resistance};

/// Glomerular capillary hydrostatic pressure.
///
/// The glomerulus sits between the two arterioles, so it sees the efferent
/// share `Re / (Ra + Re)` of arterial pressure. The result is clamped to the
/// configured band.
pub(super) fn glomerular_pressure(
    input: &HemodynamicsInput,
    config: &HemodynamicsConfig,
) -> Pressure {
    let efferent_share = input.re().get::<ratio>() / total_resistance(input, config);
    let raw = config.pgc_offset.get::<millimeter_of_mercury>()
        + config.pgc_gain.get::<ratio>()
            * input.map().get::<millimeter_of_mercury>()
            * efferent_share;

    let min = config.pgc_min.get::<millimeter_of_mercury>();
    let max = config.pgc_max.get::<millimeter_of_mercury>();
    let clamped = raw.max(min).min(max);
    if clamped != raw {
        debug!(pgc_mmhg = raw, min, max, "glomerular pressure clamped to band");
    }

    Pressure::new::<millimeter_of_mercury>(clamped)
}

/// Net filtration pressure, with Bowman's space oncotic pressure taken as zero.
pub(super) fn net_filtration_pressure(pgc: Pressure, pbs: Pressure, pi_gc: Pressure) -> Pressure {
    pgc - pbs - pi_gc
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::Ratio, ratio::ratio};

    fn pgc(input: &HemodynamicsInput) -> f64 {
        glomerular_pressure(input, &HemodynamicsConfig::default()).get::<millimeter_of_mercury>()
    }

    #[test]
    fn baseline_pressure() {
        assert_relative_eq!(pgc(&HemodynamicsInput::baseline()), 55.0, epsilon = 1e-9);
    }

    #[test]
    fn efferent_constriction_raises_pressure() {
        let baseline = HemodynamicsInput::baseline();
        let mut last = pgc(&baseline);
        for re in [1.2, 1.5, 2.0, 2.5, 3.0] {
            let constricted = baseline.with_re(Ratio::new::<ratio>(re)).unwrap();
            let next = pgc(&constricted);
            assert!(next > last, "Re {re}: {next} should exceed {last}");
            last = next;
        }
    }

    #[test]
    fn pressure_stays_in_band() {
        let baseline = HemodynamicsInput::baseline();

        let high = baseline
            .with_map(Pressure::new::<millimeter_of_mercury>(220.0))
            .and_then(|input| input.with_re(Ratio::new::<ratio>(6.0)))
            .unwrap();
        assert_relative_eq!(pgc(&high), 99.0, epsilon = 1e-9);

        let low = baseline
            .with_map(Pressure::new::<millimeter_of_mercury>(40.0))
            .and_then(|input| input.with_ra(Ratio::new::<ratio>(5.0)))
            .unwrap();
        assert_relative_eq!(pgc(&low), 35.0, epsilon = 1e-9);
    }

    #[test]
    fn net_pressure_subtracts_opposing_forces() {
        let nfp = net_filtration_pressure(
            Pressure::new::<millimeter_of_mercury>(55.0),
            Pressure::new::<millimeter_of_mercury>(10.0),
            Pressure::new::<millimeter_of_mercury>(25.0),
        );
        assert_relative_eq!(nfp.get::<millimeter_of_mercury>(), 20.0, epsilon = 1e-9);
    }
}
