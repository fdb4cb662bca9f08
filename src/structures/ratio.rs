use core::cmp::Ordering;
use core::fmt;
use core::num::NonZeroI64;
use core::ops::{Add, Mul, Neg, Sub};

use crate::algebra::field::Field;
use crate::algebra::ring::Ring;
use crate::utils::gcd;

/// Exact rational number `num / den` with `i64` parts.
///
/// Always stored in lowest terms with a positive denominator, so structural
/// equality is numeric equality. Arithmetic is carried out in `i128` and
/// reduced before narrowing back.
///
/// # Panics
///
/// The arithmetic operators panic if a reduced result does not fit in `i64`,
/// the same way integer operators do on overflow. [`Ring::checked_add`] and
/// [`Ring::checked_mul`] return `None` instead.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Ratio {
    num: i64,
    den: i64,
}

impl Ratio {
    /// Create `num / den` in lowest terms.
    ///
    /// Returns `None` if `den` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use synthdiv::Ratio;
    ///
    /// let r = Ratio::new(4, -6).unwrap();
    /// assert_eq!(r.numer(), -2);
    /// assert_eq!(r.denom(), 3);
    /// assert!(Ratio::new(1, 0).is_none());
    /// ```
    pub fn new(num: i64, den: i64) -> Option<Self> {
        let den = NonZeroI64::new(den)?;
        Some(Self::reduce(num as i128, den.get() as i128))
    }

    /// Create the integer `n`.
    pub const fn integer(n: i64) -> Self {
        Self { num: n, den: 1 }
    }

    /// Numerator in lowest terms.
    pub const fn numer(&self) -> i64 {
        self.num
    }

    /// Denominator in lowest terms, always positive.
    pub const fn denom(&self) -> i64 {
        self.den
    }

    pub const fn is_integer(&self) -> bool {
        self.den == 1
    }

    /// `num / den` in lowest terms, or `None` if it does not fit in `i64`.
    fn checked_reduce(num: i128, den: i128) -> Option<Self> {
        debug_assert!(den != 0, "zero denominator");
        let g = gcd(num, den).max(1);
        let (mut num, mut den) = (num / g, den / g);
        if den < 0 {
            num = -num;
            den = -den;
        }
        Some(Self {
            num: i64::try_from(num).ok()?,
            den: i64::try_from(den).ok()?,
        })
    }

    fn reduce(num: i128, den: i128) -> Self {
        Self::checked_reduce(num, den)
            .unwrap_or_else(|| panic!("rational arithmetic overflowed i64: {num}/{den}"))
    }

    // i64 * i64 and the sum of two such products both fit in i128.
    fn sum_parts(self, rhs: Self) -> (i128, i128) {
        (
            self.num as i128 * rhs.den as i128 + rhs.num as i128 * self.den as i128,
            self.den as i128 * rhs.den as i128,
        )
    }

    fn product_parts(self, rhs: Self) -> (i128, i128) {
        (
            self.num as i128 * rhs.num as i128,
            self.den as i128 * rhs.den as i128,
        )
    }
}

impl Ring for Ratio {
    const ZERO: Self = Self::integer(0);
    const ONE: Self = Self::integer(1);

    fn checked_add(self, rhs: Self) -> Option<Self> {
        let (num, den) = self.sum_parts(rhs);
        Self::checked_reduce(num, den)
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        let (num, den) = self.product_parts(rhs);
        Self::checked_reduce(num, den)
    }

    #[inline]
    fn from_i64(n: i64) -> Self {
        Self::integer(n)
    }

    #[inline]
    fn to_i64(&self) -> Option<i64> {
        self.is_integer().then_some(self.num)
    }

    #[inline]
    fn to_f64(&self) -> f64 {
        self.num as f64 / self.den as f64
    }

    #[inline]
    fn is_negative(&self) -> bool {
        self.num < 0
    }
}

impl Field for Ratio {
    fn from_ratio(numerator: i64, denominator: NonZeroI64) -> Self {
        Self::reduce(numerator as i128, denominator.get() as i128)
    }
}

impl From<i64> for Ratio {
    fn from(n: i64) -> Self {
        Self::integer(n)
    }
}

impl Add for Ratio {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let (num, den) = self.sum_parts(rhs);
        Self::reduce(num, den)
    }
}

impl Sub for Ratio {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl Mul for Ratio {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let (num, den) = self.product_parts(rhs);
        Self::reduce(num, den)
    }
}

impl Neg for Ratio {
    type Output = Self;

    fn neg(self) -> Self {
        Self::reduce(-(self.num as i128), self.den as i128)
    }
}

impl PartialOrd for Ratio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ratio {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross-multiplying keeps the order.
        let lhs = self.num as i128 * other.den as i128;
        let rhs = other.num as i128 * self.den as i128;
        lhs.cmp(&rhs)
    }
}

impl fmt::Debug for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = if self.is_integer() {
            self.num.to_string()
        } else {
            format!("{}/{}", self.num, self.den)
        };
        f.pad(&text)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Ratio {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Serialize as a [numerator, denominator] pair
        (self.num, self.den).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Ratio {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (num, den) = <(i64, i64)>::deserialize(deserializer)?;
        Self::new(num, den).ok_or_else(|| serde::de::Error::custom("zero denominator"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(num: i64, den: i64) -> Ratio {
        Ratio::new(num, den).unwrap()
    }

    #[test]
    fn new_reduces_and_normalizes_sign() {
        assert_eq!(r(2, 4), r(1, 2));
        assert_eq!(r(3, -6), r(-1, 2));
        assert_eq!(r(-3, -6), r(1, 2));
        assert_eq!(r(0, -5), Ratio::ZERO);
        assert_eq!(r(0, -5).denom(), 1);
    }

    #[test]
    fn arithmetic() {
        assert_eq!(r(1, 2) + r(1, 3), r(5, 6));
        assert_eq!(r(1, 2) - r(1, 3), r(1, 6));
        assert_eq!(r(2, 3) * r(3, 4), r(1, 2));
        assert_eq!(-r(2, 3), r(-2, 3));
    }

    #[test]
    fn checked_arithmetic() {
        assert_eq!(r(1, 2).checked_add(r(1, 3)), Some(r(5, 6)));
        assert_eq!(r(2, 3).checked_mul(r(3, 4)), Some(r(1, 2)));
        assert_eq!(Ratio::integer(i64::MAX).checked_add(Ratio::ONE), None);
        assert_eq!(
            Ratio::integer(100_000_000_000).checked_mul(Ratio::integer(1_000_000_000)),
            None
        );
        // Reduction can bring a wide intermediate back into range
        let big = Ratio::new(i64::MAX, 2).unwrap();
        assert_eq!(big.checked_mul(r(2, i64::MAX)), Some(Ratio::ONE));
    }

    #[test]
    fn integer_conversion() {
        assert_eq!(r(6, 3).to_i64(), Some(2));
        assert_eq!(r(3, 2).to_i64(), None);
        assert_eq!(r(3, 2).to_f64(), 1.5);
    }

    #[test]
    fn ordering() {
        assert!(r(1, 3) < r(1, 2));
        assert!(r(-1, 2) < r(-1, 3));
        assert_eq!(r(2, 4).cmp(&r(1, 2)), Ordering::Equal);
    }

    #[test]
    fn display() {
        assert_eq!(r(3, 2).to_string(), "3/2");
        assert_eq!(r(-4, 2).to_string(), "-2");
        assert_eq!(format!("{:>5}", r(1, 2)), "  1/2");
    }

    #[test]
    #[should_panic(expected = "overflowed")]
    fn overflow_panics() {
        let _ = Ratio::integer(i64::MAX) + Ratio::ONE;
    }
}
