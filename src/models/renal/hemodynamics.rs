//! Glomerular hemodynamics model.
//!
//! [`Hemodynamics`] adapts the calculator in the internal `core` module to
//! [`twine_core::Model`]. The free functions [`compute`] and
//! [`compute_with`] expose the same calculation without the trait.
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_renal::{
//!     models::renal::hemodynamics::{Hemodynamics, HemodynamicsInput},
//!     support::units::milliliter_per_minute,
//! };
//!
//! let model = Hemodynamics::default();
//! let output = model.call(&HemodynamicsInput::baseline()).unwrap();
//! assert!((output.gfr.get::<milliliter_per_minute>() - 120.0).abs() < 1e-9);
//! ```

mod core;

use std::convert::Infallible;

use twine_core::Model;

pub use self::core::{
    FiltrationFractionStatus, GfrCategory, HemodynamicsConfig, HemodynamicsInput,
    HemodynamicsOutput, InputError, Parameter, compute, compute_with,
};

/// Hemodynamics calculator with a fixed calibration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Hemodynamics {
    config: HemodynamicsConfig,
}

impl Hemodynamics {
    #[must_use]
    pub fn new(config: HemodynamicsConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &HemodynamicsConfig {
        &self.config
    }
}

impl Model for Hemodynamics {
    type Input = HemodynamicsInput;
    type Output = HemodynamicsOutput;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(compute_with(input, &self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Ratio, ratio::ratio};

    #[test]
    fn model_matches_free_function() {
        let input = HemodynamicsInput::baseline()
            .with_re(Ratio::new::<ratio>(2.5))
            .unwrap();
        let model = Hemodynamics::default();

        assert_eq!(model.call(&input).unwrap(), compute(&input));
    }

    #[test]
    fn types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Hemodynamics>();
        assert_send_sync::<HemodynamicsInput>();
        assert_send_sync::<HemodynamicsOutput>();
        assert_send_sync::<InputError>();
    }
}
