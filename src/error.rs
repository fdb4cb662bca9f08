use core::fmt;

use thiserror::Error;

/// Which end of the polynomial a coefficient error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CoefficientPosition {
    /// Coefficient of the highest-degree term.
    Leading,
    /// Constant term.
    Trailing,
}

impl fmt::Display for CoefficientPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoefficientPosition::Leading => write!(f, "leading"),
            CoefficientPosition::Trailing => write!(f, "trailing"),
        }
    }
}

/// Invalid input for a division run.
///
/// Finding no rational roots is not an error: it is an `Ok` result with an
/// empty root list.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DivisionError {
    #[error("polynomial has no coefficients")]
    EmptyPolynomial,

    #[error("coefficient {index} is not a finite number")]
    NonFiniteCoefficient { index: usize },

    #[error("{position} coefficient {value} is not an integer")]
    NonIntegerCoefficient {
        position: CoefficientPosition,
        value: f64,
    },

    #[error("leading coefficient is zero")]
    ZeroLeadingCoefficient,

    #[error("trailing coefficient is zero")]
    ZeroTrailingCoefficient,

    #[error("degree {degree} exceeds the configured maximum of {max}")]
    DegreeTooLarge { degree: usize, max: usize },
}
