use core::fmt;

use crate::algebra::ring::Ring;
use crate::error::{CoefficientPosition, DivisionError};
use crate::structures::candidates::{generate_candidates, Candidate};

/// Polynomial with coefficients in a ring `T`.
///
/// Coefficients are stored in descending order of degree:
/// `coeffs[0]` is the coefficient of `x^n` and `coeffs[n]` is the constant
/// term. This is the order a synthetic-division table is written in.
///
/// There is always at least one coefficient. Leading zeros are kept: the
/// length fixes the degree the caller asked for, even when the leading
/// coefficient happens to be zero.
#[derive(Clone, PartialEq, Debug)]
pub struct Polynomial<T> {
    coeffs: Vec<T>,
}

impl<T: Ring> Polynomial<T> {
    /// Create a polynomial from coefficients in descending order of degree.
    ///
    /// # Errors
    ///
    /// Returns `DivisionError::EmptyPolynomial` for an empty vector and
    /// `DivisionError::NonFiniteCoefficient` for a NaN or infinite coefficient.
    ///
    /// # Example
    ///
    /// ```
    /// use synthdiv::Polynomial;
    ///
    /// // x^2 - 3x + 2
    /// let p = Polynomial::new(vec![1.0, -3.0, 2.0]).unwrap();
    /// assert_eq!(p.degree(), 2);
    /// assert_eq!(p.to_string(), "x^2 - 3x + 2");
    /// ```
    pub fn new(coeffs: Vec<T>) -> Result<Self, DivisionError> {
        if coeffs.is_empty() {
            return Err(DivisionError::EmptyPolynomial);
        }
        if let Some(index) = coeffs.iter().position(|c| !c.is_finite()) {
            return Err(DivisionError::NonFiniteCoefficient { index });
        }
        Ok(Self { coeffs })
    }

    /// Create a polynomial from integer coefficients in descending order.
    ///
    /// # Example
    ///
    /// ```
    /// use synthdiv::{Polynomial, Ratio};
    ///
    /// let p = Polynomial::<Ratio>::from_integers(&[2, -3]).unwrap();
    /// assert_eq!(p.leading(), Ratio::integer(2));
    /// ```
    pub fn from_integers(coeffs: &[i64]) -> Result<Self, DivisionError> {
        Self::new(coeffs.iter().map(|&c| T::from_i64(c)).collect())
    }

    /// The all-zero polynomial of the given degree, as a blank form starts.
    pub fn with_degree(degree: usize) -> Self {
        Self {
            coeffs: vec![T::ZERO; degree + 1],
        }
    }

    /// Build from a non-empty slice of already validated coefficients.
    pub(crate) fn from_validated(coeffs: &[T]) -> Self {
        debug_assert!(!coeffs.is_empty());
        Self {
            coeffs: coeffs.to_vec(),
        }
    }

    /// Number of coefficients, `degree + 1`.
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Nominal degree, `len - 1`, counting leading zeros.
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Coefficient of the highest-degree term.
    pub fn leading(&self) -> T {
        self.coeffs[0]
    }

    /// Constant term.
    pub fn trailing(&self) -> T {
        self.coeffs[self.coeffs.len() - 1]
    }

    /// Check if every coefficient is zero.
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(Ring::is_zero)
    }

    /// Coefficients in descending order of degree.
    pub fn coefficients(&self) -> &[T] {
        &self.coeffs
    }

    pub fn into_coefficients(self) -> Vec<T> {
        self.coeffs
    }

    /// Evaluate the polynomial at a point using Horner's method.
    ///
    /// # Example
    ///
    /// ```
    /// use synthdiv::Polynomial;
    ///
    /// // x^3 + 1
    /// let p = Polynomial::new(vec![1.0, 0.0, 0.0, 1.0]).unwrap();
    /// assert_eq!(p.eval(-1.0), 0.0);
    /// assert_eq!(p.eval(2.0), 9.0);
    /// ```
    pub fn eval(&self, x: T) -> T {
        self.coeffs
            .iter()
            .skip(1)
            .fold(self.coeffs[0], |acc, &c| acc * x + c)
    }

    /// Candidate rational roots, in trial order.
    ///
    /// # Errors
    ///
    /// Returns `DivisionError::NonIntegerCoefficient` if the leading or the
    /// trailing coefficient is not an integer, since only integers have a
    /// factor list.
    pub fn candidates(&self) -> Result<Vec<Candidate>, DivisionError> {
        let leading = self.integer_at(CoefficientPosition::Leading)?;
        let trailing = self.integer_at(CoefficientPosition::Trailing)?;
        Ok(generate_candidates(leading, trailing))
    }

    pub(crate) fn integer_at(&self, position: CoefficientPosition) -> Result<i64, DivisionError> {
        let value = match position {
            CoefficientPosition::Leading => self.leading(),
            CoefficientPosition::Trailing => self.trailing(),
        };
        value
            .to_i64()
            .ok_or(DivisionError::NonIntegerCoefficient {
                position,
                value: value.to_f64(),
            })
    }
}

impl<T: Ring + fmt::Display> fmt::Display for Polynomial<T> {
    /// Readable form: `2x^3 - x + 5`. Zero terms are skipped and unit
    /// coefficients are elided except on the constant term.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degree = self.degree();
        let mut first = true;

        for (i, &coeff) in self.coeffs.iter().enumerate() {
            if coeff.is_zero() {
                continue;
            }

            let exp = degree - i;
            let negative = coeff.is_negative();
            let magnitude = if negative { -coeff } else { coeff };

            match (first, negative) {
                (true, true) => write!(f, "-")?,
                (true, false) => {}
                (false, true) => write!(f, " - ")?,
                (false, false) => write!(f, " + ")?,
            }
            first = false;

            if exp == 0 || magnitude != T::ONE {
                write!(f, "{}", magnitude)?;
            }
            match exp {
                0 => {}
                1 => write!(f, "x")?,
                _ => write!(f, "x^{}", exp)?,
            }
        }

        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Polynomial<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Serialize as the plain coefficient vector
        self.coeffs.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Polynomial<T>
where
    T: Ring + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let coeffs = Vec::<T>::deserialize(deserializer)?;
        Self::new(coeffs).map_err(serde::de::Error::custom)
    }
}
