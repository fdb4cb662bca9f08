//! Run configuration for the synthetic division engine.

use crate::algebra::ring::Ring;

/// What a zero leading or trailing coefficient means.
///
/// Zero has no factor list, so such a polynomial produces no candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ZeroCoefficientPolicy {
    /// Fail with `ZeroLeadingCoefficient` or `ZeroTrailingCoefficient`.
    #[default]
    Reject,
    /// Run with an empty candidate list and report no roots.
    NoCandidates,
}

/// How a remainder is judged to be zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RootTest {
    /// Remainder must compare equal to zero. With `f64` this only detects
    /// roots whose division is exact, which holds for integer roots of
    /// integer polynomials.
    #[default]
    Exact,
    /// Remainder magnitude must be at most the given bound.
    Tolerance(f64),
}

impl RootTest {
    pub fn accepts<T: Ring>(&self, remainder: T) -> bool {
        match *self {
            RootTest::Exact => remainder.is_zero(),
            RootTest::Tolerance(eps) => remainder.to_f64().abs() <= eps,
        }
    }
}

/// Options for [`SyntheticDivisionEngine`](crate::SyntheticDivisionEngine).
///
/// # Example
///
/// ```
/// use synthdiv::{DivisionOptions, RootTest, ZeroCoefficientPolicy};
///
/// let options = DivisionOptions::default()
///     .with_zero_policy(ZeroCoefficientPolicy::NoCandidates)
///     .with_root_test(RootTest::Tolerance(1e-9))
///     .with_max_degree(10);
/// assert_eq!(options.max_degree, Some(10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DivisionOptions {
    pub zero_policy: ZeroCoefficientPolicy,
    pub root_test: RootTest,
    /// Largest accepted degree, unbounded when `None`.
    pub max_degree: Option<usize>,
}

impl DivisionOptions {
    pub fn with_zero_policy(mut self, zero_policy: ZeroCoefficientPolicy) -> Self {
        self.zero_policy = zero_policy;
        self
    }

    pub fn with_root_test(mut self, root_test: RootTest) -> Self {
        self.root_test = root_test;
        self
    }

    pub fn with_max_degree(mut self, max_degree: usize) -> Self {
        self.max_degree = Some(max_degree);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::ratio::Ratio;

    #[test]
    fn defaults() {
        let options = DivisionOptions::default();
        assert_eq!(options.zero_policy, ZeroCoefficientPolicy::Reject);
        assert_eq!(options.root_test, RootTest::Exact);
        assert_eq!(options.max_degree, None);
    }

    #[test]
    fn exact_test_has_no_slack() {
        assert!(RootTest::Exact.accepts(0.0));
        assert!(RootTest::Exact.accepts(-0.0));
        assert!(!RootTest::Exact.accepts(1e-300));
        assert!(RootTest::Exact.accepts(Ratio::ZERO));
    }

    #[test]
    fn tolerance_test() {
        let test = RootTest::Tolerance(1e-9);
        assert!(test.accepts(1e-12));
        assert!(test.accepts(-1e-12));
        assert!(!test.accepts(1e-6));
        assert!(!test.accepts(Ratio::new(1, 1000).unwrap()));
    }
}
