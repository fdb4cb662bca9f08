use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

/// A commutative ring of polynomial coefficients.
///
/// This trait assumes:
/// - (R, +) is an abelian group with identity ZERO
/// - (R, ·) is a monoid with identity ONE
/// - multiplication distributes over addition.
///
/// `f64` only satisfies these laws approximately. Integer-valued inputs with
/// integer roots stay exact, which is all the division engine relies on.
pub trait Ring:
    Sized
    + Copy
    + PartialEq
    + fmt::Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;

    /// Exact comparison against `ZERO`, with no tolerance.
    #[inline]
    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// `self + rhs`, or `None` if the sum leaves the representable range.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// `self * rhs`, or `None` if the product leaves the representable range.
    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// Embed an integer.
    fn from_i64(n: i64) -> Self;

    /// The integer this element equals, if it is integral and fits in `i64`.
    fn to_i64(&self) -> Option<i64>;

    /// Nearest `f64`, used for tolerance checks and sign decisions.
    fn to_f64(&self) -> f64;

    /// Whether the element is an actual number (always true for exact types).
    #[inline]
    fn is_finite(&self) -> bool {
        true
    }

    #[inline]
    fn is_negative(&self) -> bool {
        self.to_f64() < 0.0
    }
}

impl Ring for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    /// Floats saturate to infinity instead of failing.
    #[inline]
    fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(self + rhs)
    }

    #[inline]
    fn checked_mul(self, rhs: Self) -> Option<Self> {
        Some(self * rhs)
    }

    #[inline]
    fn from_i64(n: i64) -> Self {
        n as f64
    }

    fn to_i64(&self) -> Option<i64> {
        // 2^63 itself is excluded, it would saturate on the cast.
        if self.fract() == 0.0 && (i64::MIN as f64..i64::MAX as f64).contains(self) {
            Some(*self as i64)
        } else {
            None
        }
    }

    #[inline]
    fn to_f64(&self) -> f64 {
        *self
    }

    #[inline]
    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_zero_is_zero() {
        assert!((-0.0f64).is_zero());
        assert!(!(-0.0f64).is_negative());
    }

    #[test]
    fn integral_floats() {
        assert_eq!(3.0f64.to_i64(), Some(3));
        assert_eq!((-12.0f64).to_i64(), Some(-12));
        assert_eq!(2.5f64.to_i64(), None);
        assert_eq!(f64::NAN.to_i64(), None);
        assert_eq!(f64::INFINITY.to_i64(), None);
        assert_eq!(1e19f64.to_i64(), None);
    }

    #[test]
    fn float_checked_ops_never_fail() {
        assert_eq!(2.0f64.checked_add(3.0), Some(5.0));
        assert_eq!(f64::MAX.checked_mul(2.0), Some(f64::INFINITY));
    }

    #[test]
    fn finiteness() {
        assert!(Ring::is_finite(&1.0f64));
        assert!(!Ring::is_finite(&f64::NAN));
        assert!(!Ring::is_finite(&f64::NEG_INFINITY));
    }
}
