//! Autoregulated GFR and RPF across arterial pressure.
//!
//! Each MAP sample is first run through the hemodynamics calculator with the
//! baseline resistances held fixed, giving the flows the kidney would see with
//! no regulation at all. On the plateau the regulated flows sit at the target
//! flows plus a damped share of how far the unregulated flows have moved from
//! their value at the reference pressure. Off the
//! plateau, the regulated value at the nearest edge hands over to the
//! unregulated value with a weight of `exp(-distance / decay)`, so the curve
//! is continuous at both edges.

mod config;
mod critical;
mod sweep;

pub use config::{AutoregulationConfig, Plateau, PlateauError};
pub use critical::{CriticalPressureConfig, CriticalPressureError, Regulation};
pub use sweep::MapSweep;

pub(super) use critical::critical_pressure;

use tracing::debug;
use uom::si::{
    f64::{Pressure, Ratio, VolumeRate},
    pressure::millimeter_of_mercury,
    ratio::ratio,
};

use crate::{
    models::renal::hemodynamics::{HemodynamicsInput, compute_with},
    support::units::milliliter_per_minute,
};

/// Glomerular filtration rate and renal plasma flow at one pressure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flows {
    pub gfr: VolumeRate,
    pub rpf: VolumeRate,
}

/// Regulated and unregulated flows at one MAP sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoregulationPoint {
    pub map: Pressure,

    /// Flows with autoregulation active.
    pub regulated: Flows,

    /// Flows with the baseline resistances held fixed.
    pub unregulated: Flows,
}

/// Parallel GFR and RPF sequences, one entry per MAP sample.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Curve {
    pub gfr: Vec<VolumeRate>,
    pub rpf: Vec<VolumeRate>,
}

impl Curve {
    #[must_use]
    pub fn len(&self) -> usize {
        self.gfr.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gfr.is_empty()
    }
}

impl FromIterator<Flows> for Curve {
    fn from_iter<I: IntoIterator<Item = Flows>>(iter: I) -> Self {
        let (gfr, rpf) = iter.into_iter().map(|flows| (flows.gfr, flows.rpf)).unzip();
        Self { gfr, rpf }
    }
}

/// Computes the autoregulated curve with the default configuration.
#[must_use]
pub fn autoregulation_curve(map_samples: &[Pressure], baseline: &HemodynamicsInput) -> Curve {
    autoregulation_curve_with(map_samples, baseline, &AutoregulationConfig::default())
}

/// Computes the autoregulated curve with an explicit configuration.
///
/// The result has the same length and order as `map_samples`.
#[must_use]
pub fn autoregulation_curve_with(
    map_samples: &[Pressure],
    baseline: &HemodynamicsInput,
    config: &AutoregulationConfig,
) -> Curve {
    debug!(samples = map_samples.len(), "computing autoregulation curve");
    map_samples
        .iter()
        .map(|&map| regulated_point(map, baseline, config).regulated)
        .collect()
}

/// Computes regulated and unregulated flows at a single MAP.
#[must_use]
pub fn regulated_point(
    map: Pressure,
    baseline: &HemodynamicsInput,
    config: &AutoregulationConfig,
) -> AutoregulationPoint {
    let unregulated = unregulated_flows(map, baseline, config);
    let reference = unregulated_flows(config.reference_map, baseline, config);

    let regulated = if config.plateau.contains(map) {
        damp(unregulated, reference, config)
    } else {
        let edge = config.plateau.nearest_edge(map);
        let at_edge = damp(unregulated_flows(edge, baseline, config), reference, config);

        let distance = (map - edge).get::<millimeter_of_mercury>().abs();
        let decay = config.decay.as_ref().get::<millimeter_of_mercury>();
        let weight = (-distance / decay).exp();

        Flows {
            gfr: blend(at_edge.gfr, unregulated.gfr, weight),
            rpf: blend(at_edge.rpf, unregulated.rpf, weight),
        }
    };

    AutoregulationPoint {
        map,
        regulated,
        unregulated,
    }
}

fn unregulated_flows(
    map: Pressure,
    baseline: &HemodynamicsInput,
    config: &AutoregulationConfig,
) -> Flows {
    let output = compute_with(&baseline.with_map_unchecked(map), &config.hemodynamics);
    Flows {
        gfr: output.gfr,
        rpf: output.rpf,
    }
}

/// Holds flows at the targets, keeping a damped share of their deviation
/// from the reference flows.
fn damp(flows: Flows, reference: Flows, config: &AutoregulationConfig) -> Flows {
    Flows {
        gfr: damped(
            config.target.gfr,
            flows.gfr - reference.gfr,
            *config.gfr_damping.as_ref(),
        ),
        rpf: damped(
            config.target.rpf,
            flows.rpf - reference.rpf,
            *config.rpf_damping.as_ref(),
        ),
    }
}

fn damped(target: VolumeRate, deviation: VolumeRate, damping: Ratio) -> VolumeRate {
    let target = target.get::<milliliter_per_minute>();
    let deviation = deviation.get::<milliliter_per_minute>();
    VolumeRate::new::<milliliter_per_minute>(target + damping.get::<ratio>() * deviation)
}

/// `weight * a + (1 - weight) * b`.
fn blend(a: VolumeRate, b: VolumeRate, weight: f64) -> VolumeRate {
    let a = a.get::<milliliter_per_minute>();
    let b = b.get::<milliliter_per_minute>();
    VolumeRate::new::<milliliter_per_minute>(weight * a + (1.0 - weight) * b)
}
