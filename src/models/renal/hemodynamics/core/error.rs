use std::fmt;

use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Identifies one field of a [`HemodynamicsInput`](super::HemodynamicsInput).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    MeanArterialPressure,
    AfferentResistance,
    EfferentResistance,
    BowmanPressure,
    OncoticPressure,
    UltrafiltrationCoefficient,
    Hematocrit,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MeanArterialPressure => "mean arterial pressure",
            Self::AfferentResistance => "afferent arteriolar resistance",
            Self::EfferentResistance => "efferent arteriolar resistance",
            Self::BowmanPressure => "Bowman's capsule pressure",
            Self::OncoticPressure => "glomerular oncotic pressure",
            Self::UltrafiltrationCoefficient => "ultrafiltration coefficient",
            Self::Hematocrit => "hematocrit",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while building a hemodynamics input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// The value is infinite.
    #[error("{parameter} must be finite")]
    NotFinite { parameter: Parameter },

    /// The value violates the parameter's physical range.
    #[error("{parameter} is out of range")]
    OutOfRange {
        parameter: Parameter,
        #[source]
        source: ConstraintError,
    },
}

impl InputError {
    /// Returns the parameter that failed validation.
    #[must_use]
    pub fn parameter(&self) -> Parameter {
        match self {
            Self::NotFinite { parameter } | Self::OutOfRange { parameter, .. } => *parameter,
        }
    }
}
