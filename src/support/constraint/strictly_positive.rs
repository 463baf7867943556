use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is greater than zero.
///
/// Arteriolar resistances and the autoregulation decay constant use this
/// constraint, since both end up in a denominator.
///
/// # Examples
///
/// ```
/// use twine_renal::support::constraint::{Constrained, StrictlyPositive};
///
/// let re = Constrained::<_, StrictlyPositive>::new(2.5).unwrap();
/// assert_eq!(re.into_inner(), 2.5);
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{Pressure, Ratio},
        pressure::millimeter_of_mercury,
        ratio::ratio,
    };

    #[test]
    fn floats() {
        assert!(Constrained::<f64, StrictlyPositive>::new(1.0).is_ok());
        assert!(StrictlyPositive::new(0.1).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-5.0), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn resistances() {
        assert!(StrictlyPositive::new(Ratio::new::<ratio>(0.5)).is_ok());
        assert!(StrictlyPositive::new(Ratio::new::<ratio>(0.0)).is_err());
        assert!(StrictlyPositive::new(Ratio::new::<ratio>(-1.0)).is_err());
    }

    #[test]
    fn decay_constants() {
        let decay = Pressure::new::<millimeter_of_mercury>(25.0);
        assert!(StrictlyPositive::new(decay).is_ok());

        let decay = Pressure::new::<millimeter_of_mercury>(0.0);
        assert!(StrictlyPositive::new(decay).is_err());
    }
}
