use uom::si::{
    f64::{Pressure, Ratio, VolumeRate},
    ratio::percent,
};

use crate::support::units::milliliter_per_minute;

/// Derived hemodynamic quantities for one [`HemodynamicsInput`](super::HemodynamicsInput).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HemodynamicsOutput {
    /// Glomerular capillary hydrostatic pressure.
    pub pgc: Pressure,

    /// Net filtration pressure.
    pub nfp: Pressure,

    /// Glomerular filtration rate.
    pub gfr: VolumeRate,

    /// Renal blood flow.
    pub rbf: VolumeRate,

    /// Renal plasma flow.
    pub rpf: VolumeRate,

    /// Filtration fraction, `GFR / RPF`.
    pub ff: Ratio,
}

impl HemodynamicsOutput {
    /// Classifies the filtration rate into a chronic kidney disease band.
    #[must_use]
    pub fn gfr_category(&self) -> GfrCategory {
        GfrCategory::from_gfr(self.gfr)
    }

    /// Classifies the filtration fraction against the normal 16–20 % range.
    #[must_use]
    pub fn filtration_fraction_status(&self) -> FiltrationFractionStatus {
        FiltrationFractionStatus::from_ff(self.ff)
    }
}

/// GFR bands used for chronic kidney disease staging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GfrCategory {
    /// 90 mL/min or more.
    Normal,
    /// 60–89 mL/min (stage 2).
    MildlyDecreased,
    /// 30–59 mL/min (stage 3).
    ModeratelyDecreased,
    /// 15–29 mL/min (stage 4).
    SeverelyDecreased,
    /// Below 15 mL/min (stage 5).
    KidneyFailure,
}

impl GfrCategory {
    #[must_use]
    pub fn from_gfr(gfr: VolumeRate) -> Self {
        match gfr.get::<milliliter_per_minute>() {
            g if g >= 90.0 => Self::Normal,
            g if g >= 60.0 => Self::MildlyDecreased,
            g if g >= 30.0 => Self::ModeratelyDecreased,
            g if g >= 15.0 => Self::SeverelyDecreased,
            _ => Self::KidneyFailure,
        }
    }

    /// CKD stage number, 1 through 5.
    #[must_use]
    pub fn stage(self) -> u8 {
        match self {
            Self::Normal => 1,
            Self::MildlyDecreased => 2,
            Self::ModeratelyDecreased => 3,
            Self::SeverelyDecreased => 4,
            Self::KidneyFailure => 5,
        }
    }
}

/// Filtration fraction relative to the normal 16–20 % range.
///
/// A high fraction points to efferent constriction; a low one to afferent
/// constriction, obstruction or raised oncotic pressure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FiltrationFractionStatus {
    Low,
    Normal,
    High,
}

impl FiltrationFractionStatus {
    #[must_use]
    pub fn from_ff(ff: Ratio) -> Self {
        let ff = ff.get::<percent>();
        if ff < 16.0 {
            Self::Low
        } else if ff > 20.0 {
            Self::High
        } else {
            Self::Normal
        }
    }
}
