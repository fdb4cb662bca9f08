//! Rational-root candidates from the Rational Root Theorem.

use core::fmt;
use core::num::NonZeroI64;

use crate::algebra::field::Field;
use crate::structures::factors::factors_of;
use crate::structures::ratio::Ratio;

const ONE: NonZeroI64 = match NonZeroI64::new(1) {
    Some(one) => one,
    None => unreachable!(),
};

/// A proposed root `numerator / denominator`.
///
/// The numerator is a factor of the trailing coefficient and the denominator
/// a factor of the leading coefficient. The pair is kept exactly as generated
/// (`2/2` stays `2/2`), so the candidate list mirrors the factor enumeration.
/// Equality compares the pair, not the value; use [`Candidate::ratio`] for
/// numeric comparisons.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    numerator: i64,
    denominator: NonZeroI64,
}

impl Candidate {
    /// Returns `None` if `denominator` is zero.
    pub fn new(numerator: i64, denominator: i64) -> Option<Self> {
        Some(Self {
            numerator,
            denominator: NonZeroI64::new(denominator)?,
        })
    }

    /// The candidate `n / 1`.
    pub const fn integer(n: i64) -> Self {
        Self {
            numerator: n,
            denominator: ONE,
        }
    }

    pub const fn numerator(&self) -> i64 {
        self.numerator
    }

    pub const fn denominator(&self) -> i64 {
        self.denominator.get()
    }

    /// The candidate as a divisor in the scalar type `T`.
    ///
    /// # Example
    ///
    /// ```
    /// use synthdiv::{Candidate, Ratio};
    ///
    /// let c = Candidate::new(3, -2).unwrap();
    /// assert_eq!(c.value::<f64>(), -1.5);
    /// assert_eq!(c.value::<Ratio>(), Ratio::new(-3, 2).unwrap());
    /// ```
    pub fn value<T: Field>(&self) -> T {
        T::from_ratio(self.numerator, self.denominator)
    }

    /// Exact value in lowest terms.
    pub fn ratio(&self) -> Ratio {
        self.value::<Ratio>()
    }
}

impl fmt::Display for Candidate {
    /// Shows the reduced value: `2/2` displays as `1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.ratio(), f)
    }
}

/// Candidate roots for a polynomial with the given leading and trailing
/// coefficients.
///
/// The outer loop runs over the trailing-coefficient factors and the inner
/// loop over the leading-coefficient factors. That order is the trial order of
/// the division engine. Values are neither sorted nor deduplicated. If either
/// coefficient is zero the list is empty.
///
/// # Example
///
/// ```
/// use synthdiv::{generate_candidates, Candidate};
///
/// // 2x - 3: trailing factors ±1, ±3 over leading factors ±1, ±2
/// let candidates = generate_candidates(2, -3);
/// assert_eq!(candidates.len(), 16);
/// assert_eq!(candidates[0], Candidate::new(1, 1).unwrap());
/// assert_eq!(candidates[1], Candidate::new(1, -1).unwrap());
/// assert!(candidates.contains(&Candidate::new(3, 2).unwrap()));
/// ```
pub fn generate_candidates(leading: i64, trailing: i64) -> Vec<Candidate> {
    let lead_factors = factors_of(leading);
    let trail_factors = factors_of(trailing);

    let mut candidates = Vec::with_capacity(lead_factors.len() * trail_factors.len());
    for &t in &trail_factors {
        for &l in &lead_factors {
            if let Some(denominator) = NonZeroI64::new(l) {
                candidates.push(Candidate {
                    numerator: t,
                    denominator,
                });
            }
        }
    }
    candidates
}
