//! Numeric constraints checked once, at construction.
//!
//! Physiological inputs have hard limits that no slider setting should cross:
//! resistances must be positive, pressures cannot be negative, and hematocrit
//! must stay below 100 %. The types here encode those limits so a value that
//! made it through construction never needs to be checked again.
//!
//! # Provided constraints
//!
//! - [`NonNegative`]: Zero or greater
//! - [`StrictlyPositive`]: Greater than zero
//! - [`UnitInterval`]: Closed unit interval `0 ≤ x ≤ 1`
//! - [`UnitIntervalUpperOpen`]: Upper-open unit interval `0 ≤ x < 1`
//!
//! Each marker is used with the generic [`Constrained<T, C>`] wrapper,
//! where `C` is the marker type implementing [`Constraint<T>`].
//! Each marker also provides an associated `new()` constructor
//! (e.g., `StrictlyPositive::new(25.0)`).
//!
//! # Example
//!
//! ```
//! use twine_renal::support::constraint::{NonNegative, UnitIntervalUpperOpen};
//! use uom::si::{
//!     f64::{Pressure, Ratio},
//!     pressure::millimeter_of_mercury,
//!     ratio::percent,
//! };
//!
//! let pbs = NonNegative::new(Pressure::new::<millimeter_of_mercury>(10.0)).unwrap();
//! assert!((pbs.into_inner().get::<millimeter_of_mercury>() - 10.0).abs() < 1e-12);
//!
//! // A hematocrit of 100 % would leave no plasma.
//! assert!(UnitIntervalUpperOpen::new(Ratio::new::<percent>(100.0)).is_err());
//! ```

mod non_negative;
mod strictly_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;
pub use unit_interval::{UnitBounds, UnitInterval, UnitIntervalUpperOpen};

/// A numeric invariant checked when a [`Constrained`] value is built.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// Why a value failed its [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value that has passed the constraint `C`.
///
/// # Example
///
/// ```
/// use twine_renal::support::constraint::{Constrained, StrictlyPositive};
///
/// let ra = Constrained::<f64, StrictlyPositive>::new(1.5).unwrap();
/// assert_eq!(ra.into_inner(), 1.5);
/// assert!(Constrained::<f64, StrictlyPositive>::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` against `C` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
