//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical quantities. Pressures are
//! [`Pressure`](uom::si::f64::Pressure) (usually read in mmHg), flows are
//! [`VolumeRate`](uom::si::f64::VolumeRate) (usually read in mL/min), and
//! relative resistances, hematocrit and filtration fraction are
//! [`Ratio`](uom::si::f64::Ratio).
//!
//! `uom` stops at mL/s and L/min, so [`milliliter_per_minute`] is defined here
//! for GFR and renal plasma flow.
//!
//! ## Ultrafiltration coefficient
//!
//! [`uom`] has no quantity for a flow per unit pressure, so this module
//! defines [`UltrafiltrationCoefficient`] and the [`UltrafiltrationUnits`]
//! extension trait for reading and writing it in clinical units:
//!
//! ```
//! use twine_renal::support::units::{
//!     UltrafiltrationCoefficient, UltrafiltrationUnits, milliliter_per_minute,
//! };
//! use uom::si::{f64::Pressure, pressure::millimeter_of_mercury};
//!
//! let kf = UltrafiltrationCoefficient::from_ml_per_min_per_mmhg(12.0);
//! let flow = kf * Pressure::new::<millimeter_of_mercury>(10.0);
//! assert!((flow.get::<milliliter_per_minute>() - 120.0).abs() < 1e-9);
//! ```

mod quantities;
mod ultrafiltration;
mod volume_rate;

pub use quantities::UltrafiltrationCoefficient;
pub use ultrafiltration::UltrafiltrationUnits;
pub use volume_rate::milliliter_per_minute;
