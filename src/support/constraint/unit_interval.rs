use std::cmp::Ordering;

use uom::si::{f64::Ratio, ratio::ratio};

use super::{Constrained, Constraint, ConstraintError};

/// Supplies 0 and 1 for types used with the unit interval constraints.
///
/// Implementations should ensure that `zero() ≤ one()` under the type's
/// `PartialOrd` so the interval is well-formed.
pub trait UnitBounds: PartialOrd {
    fn zero() -> Self;
    fn one() -> Self;
}

impl UnitBounds for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
}

impl UnitBounds for Ratio {
    fn zero() -> Self {
        Ratio::new::<ratio>(0.0)
    }
    fn one() -> Self {
        Ratio::new::<ratio>(1.0)
    }
}

/// Marker type enforcing the closed unit interval: `0 ≤ x ≤ 1`.
///
/// Used for blending weights such as the autoregulation damping factors.
///
/// ```
/// use twine_renal::support::constraint::UnitInterval;
/// use uom::si::{f64::Ratio, ratio::percent};
///
/// let damping = UnitInterval::new(Ratio::new::<percent>(15.0)).unwrap();
/// assert!((damping.into_inner().get::<percent>() - 15.0).abs() < 1e-12);
///
/// assert!(UnitInterval::new(1.0).is_ok());
/// assert!(UnitInterval::new(1.0001).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitInterval;

impl UnitInterval {
    /// Constructs `Constrained<T, UnitInterval>` if 0 ≤ value ≤ 1.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: UnitBounds>(value: T) -> Result<Constrained<T, UnitInterval>, ConstraintError> {
        Constrained::<T, UnitInterval>::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for UnitInterval {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}

/// Marker type enforcing the upper-open unit interval: `0 ≤ x < 1`.
///
/// Hematocrit uses this constraint: at 100 % there is no plasma left to carry
/// a filtration fraction, and the plasma-to-blood conversion divides by zero.
///
/// ```
/// use twine_renal::support::constraint::UnitIntervalUpperOpen;
/// use uom::si::{f64::Ratio, ratio::percent};
///
/// assert!(UnitIntervalUpperOpen::new(Ratio::new::<percent>(45.0)).is_ok());
/// assert!(UnitIntervalUpperOpen::new(Ratio::new::<percent>(100.0)).is_err());
/// assert!(UnitIntervalUpperOpen::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitIntervalUpperOpen;

impl UnitIntervalUpperOpen {
    /// Constructs `Constrained<T, UnitIntervalUpperOpen>` if 0 ≤ value < 1.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than or equal to one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: UnitBounds>(
        value: T,
    ) -> Result<Constrained<T, UnitIntervalUpperOpen>, ConstraintError> {
        Constrained::<T, UnitIntervalUpperOpen>::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for UnitIntervalUpperOpen {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater | Ordering::Equal)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::ratio::percent;

    #[test]
    fn closed_includes_both_ends() {
        assert!(UnitInterval::new(0.0).is_ok());
        assert!(UnitInterval::new(1.0).is_ok());
        assert!(UnitInterval::new(Ratio::new::<percent>(25.0)).is_ok());
    }

    #[test]
    fn closed_out_of_range() {
        assert_eq!(UnitInterval::new(-1e-15), Err(ConstraintError::BelowMinimum));
        assert_eq!(
            UnitInterval::new(1.0 + 1e-15),
            Err(ConstraintError::AboveMaximum)
        );
        assert_eq!(
            UnitInterval::new(f64::INFINITY),
            Err(ConstraintError::AboveMaximum)
        );
        assert_eq!(UnitInterval::new(f64::NAN), Err(ConstraintError::NotANumber));
    }

    #[test]
    fn upper_open_excludes_one() {
        assert!(UnitIntervalUpperOpen::new(0.0).is_ok());
        assert!(UnitIntervalUpperOpen::new(Ratio::new::<percent>(60.0)).is_ok());
        assert!(UnitIntervalUpperOpen::new(Ratio::new::<percent>(99.9)).is_ok());
        assert_eq!(
            UnitIntervalUpperOpen::new(Ratio::new::<percent>(100.0)),
            Err(ConstraintError::AboveMaximum)
        );
        assert_eq!(
            UnitIntervalUpperOpen::new(Ratio::new::<percent>(-1.0)),
            Err(ConstraintError::BelowMinimum)
        );
    }
}
