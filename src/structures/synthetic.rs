//! Synthetic division by rational-root candidates, with deflation.
//!
//! A run enumerates the candidates of the input polynomial once, then tries
//! them in order against the working polynomial. Every candidate that leaves
//! a zero remainder is recorded as a root together with the full division
//! table, and the working polynomial is replaced by the quotient.

use core::fmt;

use tracing::{debug, trace};

use crate::algebra::field::Field;
use crate::algebra::ring::Ring;
use crate::error::DivisionError;
use crate::options::{DivisionOptions, ZeroCoefficientPolicy};
use crate::structures::candidates::Candidate;
use crate::structures::poly::Polynomial;

/// One successful division, as written in a synthetic-division table.
///
/// `coefficients`, `multiplications` and `results` have equal length.
/// `multiplications[0]` is always `None`, since the leading coefficient is
/// brought down unchanged. The last entry of `results` is the remainder; the
/// others are the quotient coefficients. Steps built by hand or deserialized
/// may break these rules, so the accessors below never index blindly.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DivisionStep<T> {
    pub divisor: Candidate,
    /// Working polynomial before this division.
    pub coefficients: Vec<T>,
    pub multiplications: Vec<Option<T>>,
    pub results: Vec<T>,
}

impl<T: Ring> DivisionStep<T> {
    /// Last entry of `results`, or `None` for an empty step.
    pub fn remainder(&self) -> Option<T> {
        self.results.last().copied()
    }

    /// Quotient coefficients: `results` without the remainder.
    pub fn quotient(&self) -> &[T] {
        self.results.split_last().map_or(&[], |(_, quotient)| quotient)
    }
}

impl<T: fmt::Display> fmt::Display for DivisionStep<T> {
    /// Three-row table headed by the divisor:
    ///
    /// ```text
    /// 1 |  1 -3  2
    ///   |     1 -2
    ///   +---------
    ///      1 -2  0
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let divisor = self.divisor.to_string();
        let top: Vec<String> = self.coefficients.iter().map(ToString::to_string).collect();
        let middle: Vec<String> = self
            .multiplications
            .iter()
            .map(|m| m.as_ref().map(ToString::to_string).unwrap_or_default())
            .collect();
        let bottom: Vec<String> = self.results.iter().map(ToString::to_string).collect();

        let width = top
            .iter()
            .chain(&middle)
            .chain(&bottom)
            .map(String::len)
            .max()
            .unwrap_or(0);
        let pad = divisor.len();

        let row = |f: &mut fmt::Formatter<'_>, cells: &[String]| -> fmt::Result {
            for cell in cells {
                write!(f, " {:>width$}", cell, width = width)?;
            }
            Ok(())
        };

        write!(f, "{} |", divisor)?;
        row(f, &top[..])?;
        write!(f, "\n{:pad$} |", "", pad = pad)?;
        row(f, &middle[..])?;
        write!(
            f,
            "\n{:pad$} +{}",
            "",
            "-".repeat(top.len() * (width + 1)),
            pad = pad
        )?;
        write!(f, "\n{:pad$}  ", "", pad = pad)?;
        row(f, &bottom[..])
    }
}

/// Outcome of a full run.
///
/// `roots[k]` is the divisor of `steps[k]`. `quotient` is the working
/// polynomial left once every candidate has been tried.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "T: serde::Serialize",
        deserialize = "T: Ring + serde::Deserialize<'de>"
    ))
)]
pub struct Division<T> {
    pub roots: Vec<Candidate>,
    pub steps: Vec<DivisionStep<T>>,
    pub quotient: Polynomial<T>,
}

impl<T: Field> Division<T> {
    /// Confirmed roots as scalars, in confirmation order.
    pub fn root_values(&self) -> Vec<T> {
        self.roots.iter().map(Candidate::value::<T>).collect()
    }

    pub fn has_roots(&self) -> bool {
        !self.roots.is_empty()
    }
}

/// Divide `coefficients` by `(x - divisor)` with the Horner scheme.
///
/// Returns `(multiplications, results)`, both as long as `coefficients`:
/// `results[0] = c[0]`, and for `i >= 1`,
/// `multiplications[i] = divisor * results[i - 1]` and
/// `results[i] = c[i] + multiplications[i]`.
///
/// Returns `None` if an intermediate value leaves the range of `T`. That
/// only happens for bounded exact scalars such as [`Ratio`]; floats
/// overflow to infinity instead.
///
/// [`Ratio`]: crate::Ratio
///
/// # Example
///
/// ```
/// use synthdiv::{synthetic_divide, Ratio};
///
/// // (x^2 - 3x + 2) / (x - 1) = x - 2, remainder 0
/// let (products, results) = synthetic_divide(&[1.0, -3.0, 2.0], 1.0).unwrap();
/// assert_eq!(products, vec![None, Some(1.0), Some(-2.0)]);
/// assert_eq!(results, vec![1.0, -2.0, 0.0]);
///
/// // 100000^4 does not fit in i64
/// let big = [1, 0, 0, 0, 0].map(Ratio::integer);
/// assert!(synthetic_divide(&big, Ratio::integer(100_000)).is_none());
/// ```
pub fn synthetic_divide<T: Ring>(
    coefficients: &[T],
    divisor: T,
) -> Option<(Vec<Option<T>>, Vec<T>)> {
    let mut multiplications = Vec::with_capacity(coefficients.len());
    let mut results = Vec::with_capacity(coefficients.len());

    let Some((&first, rest)) = coefficients.split_first() else {
        return Some((multiplications, results));
    };

    multiplications.push(None);
    results.push(first);
    let mut running = first;
    for &c in rest {
        let product = divisor.checked_mul(running)?;
        running = c.checked_add(product)?;
        multiplications.push(Some(product));
        results.push(running);
    }

    Some((multiplications, results))
}

/// Finds rational roots by trial synthetic division and deflation.
///
/// The engine holds only configuration; each call to [`divide`] is an
/// independent run.
///
/// [`divide`]: SyntheticDivisionEngine::divide
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntheticDivisionEngine {
    options: DivisionOptions,
}

impl SyntheticDivisionEngine {
    pub fn new(options: DivisionOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DivisionOptions {
        &self.options
    }

    /// Run the trial-and-deflate loop over `poly`.
    ///
    /// Candidates come from `poly` itself and are fixed for the whole run.
    /// Each one is tried against the current working polynomial, which loses
    /// one degree per confirmed root. Duplicate candidate values are tried
    /// again. A trial whose arithmetic overflows the scalar type is logged
    /// and counts as a rejected candidate; the run goes on with the next one.
    ///
    /// # Errors
    ///
    /// - `DegreeTooLarge` if `poly` exceeds `max_degree`.
    /// - `ZeroLeadingCoefficient` / `ZeroTrailingCoefficient` under
    ///   [`ZeroCoefficientPolicy::Reject`].
    /// - `NonIntegerCoefficient` if the leading or trailing coefficient
    ///   has no factor list.
    ///
    /// # Example
    ///
    /// ```
    /// use synthdiv::{Polynomial, SyntheticDivisionEngine};
    ///
    /// // x^2 - 4
    /// let poly = Polynomial::new(vec![1.0, 0.0, -4.0]).unwrap();
    /// let division = SyntheticDivisionEngine::default().divide(&poly).unwrap();
    ///
    /// assert_eq!(division.root_values(), vec![2.0, -2.0]);
    /// assert_eq!(division.steps.len(), 2);
    /// assert_eq!(division.quotient.coefficients(), &[1.0]);
    /// ```
    pub fn divide<T: Field>(&self, poly: &Polynomial<T>) -> Result<Division<T>, DivisionError> {
        let degree = poly.degree();
        if let Some(max) = self.options.max_degree {
            if degree > max {
                return Err(DivisionError::DegreeTooLarge { degree, max });
            }
        }

        if poly.leading().is_zero() || poly.trailing().is_zero() {
            return match self.options.zero_policy {
                ZeroCoefficientPolicy::Reject if poly.leading().is_zero() => {
                    Err(DivisionError::ZeroLeadingCoefficient)
                }
                ZeroCoefficientPolicy::Reject => Err(DivisionError::ZeroTrailingCoefficient),
                ZeroCoefficientPolicy::NoCandidates => {
                    debug!(degree, "zero end coefficient, no candidates to try");
                    Ok(Division {
                        roots: Vec::new(),
                        steps: Vec::new(),
                        quotient: poly.clone(),
                    })
                }
            };
        }

        let candidates = poly.candidates()?;
        debug!(
            degree,
            candidates = candidates.len(),
            "starting synthetic division run"
        );

        let mut current = poly.coefficients().to_vec();
        let mut roots = Vec::new();
        let mut steps = Vec::new();

        for candidate in candidates {
            let Some((multiplications, results)) =
                synthetic_divide(&current, candidate.value::<T>())
            else {
                debug!(divisor = %candidate, "trial overflowed, candidate rejected");
                continue;
            };
            let Some(&remainder) = results.last() else {
                continue;
            };

            if !self.options.root_test.accepts(remainder) {
                trace!(divisor = %candidate, ?remainder, "candidate rejected");
                continue;
            }

            trace!(divisor = %candidate, working_degree = current.len() - 1, "root confirmed");
            // A constant working polynomial has nothing left to deflate.
            let quotient_len = (results.len() - 1).max(1);
            let next = results[..quotient_len].to_vec();
            steps.push(DivisionStep {
                divisor: candidate,
                coefficients: core::mem::replace(&mut current, next),
                multiplications,
                results,
            });
            roots.push(candidate);
        }

        debug!(roots = roots.len(), "synthetic division run finished");
        Ok(Division {
            roots,
            steps,
            quotient: Polynomial::from_validated(&current),
        })
    }
}

/// Run [`SyntheticDivisionEngine::divide`] with default options.
pub fn divide<T: Field>(poly: &Polynomial<T>) -> Result<Division<T>, DivisionError> {
    SyntheticDivisionEngine::default().divide(poly)
}
