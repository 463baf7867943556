use thiserror::Error;
use uom::si::{
    f64::{Pressure, Ratio, VolumeRate},
    pressure::millimeter_of_mercury,
    ratio::ratio,
};

use crate::{
    models::renal::hemodynamics::HemodynamicsConfig,
    support::{
        constraint::{Constrained, StrictlyPositive, UnitInterval},
        units::milliliter_per_minute,
    },
};

use super::Flows;

/// Shape of the autoregulated pressure-flow curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoregulationConfig {
    /// Pressure band over which flows are held near their targets.
    pub plateau: Plateau,

    /// Flows the kidney defends inside the plateau.
    pub target: Flows,

    /// Set point at which the regulated flows equal `target`.
    ///
    /// Deviations are measured from the baseline's unregulated flows at this
    /// pressure, so the baseline resistances do not shift the plateau level.
    pub reference_map: Pressure,

    /// Share of the unregulated GFR deviation that survives regulation.
    pub gfr_damping: Constrained<Ratio, UnitInterval>,

    /// Share of the unregulated RPF deviation that survives regulation.
    pub rpf_damping: Constrained<Ratio, UnitInterval>,

    /// Distance from the plateau over which regulation fades by a factor of `e`.
    pub decay: Constrained<Pressure, StrictlyPositive>,

    /// Calibration of the underlying hemodynamics calculator.
    pub hemodynamics: HemodynamicsConfig,
}

impl Default for AutoregulationConfig {
    fn default() -> Self {
        Self {
            plateau: Plateau::default(),
            target: Flows {
                gfr: VolumeRate::new::<milliliter_per_minute>(120.0),
                rpf: VolumeRate::new::<milliliter_per_minute>(650.0),
            },
            reference_map: Pressure::new::<millimeter_of_mercury>(100.0),
            gfr_damping: UnitInterval::new(Ratio::new::<ratio>(0.15))
                .expect("0.15 lies in the unit interval"),
            rpf_damping: UnitInterval::new(Ratio::new::<ratio>(0.25))
                .expect("0.25 lies in the unit interval"),
            decay: StrictlyPositive::new(Pressure::new::<millimeter_of_mercury>(25.0))
                .expect("25 mmHg is positive"),
            hemodynamics: HemodynamicsConfig::default(),
        }
    }
}

/// Closed MAP band `[lower, upper]` of the autoregulatory plateau.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plateau {
    lower: Pressure,
    upper: Pressure,
}

/// Errors that can occur while building a [`Plateau`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PlateauError {
    #[error("plateau edges must be finite")]
    NotFinite,

    #[error("plateau lower edge {lower:?} is above upper edge {upper:?}")]
    Inverted { lower: Pressure, upper: Pressure },
}

impl Plateau {
    /// Constructs a plateau from its edges.
    ///
    /// # Errors
    ///
    /// Returns a [`PlateauError`] if either edge is not finite or if
    /// `lower > upper`.
    pub fn new(lower: Pressure, upper: Pressure) -> Result<Self, PlateauError> {
        if !lower.get::<millimeter_of_mercury>().is_finite()
            || !upper.get::<millimeter_of_mercury>().is_finite()
        {
            return Err(PlateauError::NotFinite);
        }
        if lower > upper {
            return Err(PlateauError::Inverted { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    #[must_use]
    pub fn lower(&self) -> Pressure {
        self.lower
    }

    #[must_use]
    pub fn upper(&self) -> Pressure {
        self.upper
    }

    /// Whether `map` lies on the plateau. Both edges belong to it.
    #[must_use]
    pub fn contains(&self, map: Pressure) -> bool {
        self.lower <= map && map <= self.upper
    }

    /// The edge closest to a pressure off the plateau.
    pub(super) fn nearest_edge(&self, map: Pressure) -> Pressure {
        if map < self.lower {
            self.lower
        } else {
            self.upper
        }
    }
}

impl Default for Plateau {
    fn default() -> Self {
        Self {
            lower: Pressure::new::<millimeter_of_mercury>(80.0),
            upper: Pressure::new::<millimeter_of_mercury>(180.0),
        }
    }
}
