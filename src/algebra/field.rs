use core::num::NonZeroI64;

use super::ring::Ring;

/// A field of polynomial coefficients.
///
/// Extends `Ring` with the embedding of integer ratios, which is how
/// rational-root candidates become divisors.
pub trait Field: Ring {
    /// The element `numerator / denominator`.
    fn from_ratio(numerator: i64, denominator: NonZeroI64) -> Self;
}

impl Field for f64 {
    /// Plain floating division, so `3/2` is `1.5` and `1/3` rounds once.
    #[inline]
    fn from_ratio(numerator: i64, denominator: NonZeroI64) -> Self {
        numerator as f64 / denominator.get() as f64
    }
}
