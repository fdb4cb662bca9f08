//! Coercion of raw form entries into coefficients.
//!
//! A coefficient form hands over free text. Entries are read the lenient way
//! a browser number field is: the longest numeric prefix counts, and a blank
//! or unreadable entry is 0. This happens here, before a [`Polynomial`] is
//! built, so the division engine only ever sees finite numbers.

use crate::error::DivisionError;
use crate::structures::poly::Polynomial;

/// Parse one entry: leading whitespace is skipped, the longest prefix that
/// reads as a decimal number is used, and anything else becomes `0.0`.
///
/// # Example
///
/// ```
/// use synthdiv::input::parse_entry;
///
/// assert_eq!(parse_entry(" -3 "), -3.0);
/// assert_eq!(parse_entry("2.5x"), 2.5);
/// assert_eq!(parse_entry(""), 0.0);
/// assert_eq!(parse_entry("abc"), 0.0);
/// ```
pub fn parse_entry(entry: &str) -> f64 {
    let text = entry.trim_start();
    let prefix = &text[..numeric_prefix_len(text)];
    prefix
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Length in bytes of the longest prefix of the form
/// `[+-]digits[.digits][(e|E)[+-]digits]` with at least one mantissa digit.
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let int_end = digits_from(i);
    let mut mantissa_digits = int_end - i;
    i = int_end;

    if bytes.get(i) == Some(&b'.') {
        let frac_end = digits_from(i + 1);
        mantissa_digits += frac_end - (i + 1);
        i = frac_end;
    }
    if mantissa_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_end = digits_from(j);
        if exp_end > j {
            i = exp_end;
        }
    }
    i
}

/// Coerce a full row of entries, highest degree first, into a polynomial.
///
/// # Errors
///
/// Returns `DivisionError::EmptyPolynomial` if `entries` is empty.
///
/// # Example
///
/// ```
/// use synthdiv::input::coefficients_from_entries;
///
/// let poly = coefficients_from_entries(&["1", "", "-4"]).unwrap();
/// assert_eq!(poly.coefficients(), &[1.0, 0.0, -4.0]);
/// ```
pub fn coefficients_from_entries<S: AsRef<str>>(
    entries: &[S],
) -> Result<Polynomial<f64>, DivisionError> {
    Polynomial::new(entries.iter().map(|e| parse_entry(e.as_ref())).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_numbers() {
        assert_eq!(parse_entry("7"), 7.0);
        assert_eq!(parse_entry("-12"), -12.0);
        assert_eq!(parse_entry("+4"), 4.0);
        assert_eq!(parse_entry("0.25"), 0.25);
        assert_eq!(parse_entry(".5"), 0.5);
        assert_eq!(parse_entry("5."), 5.0);
        assert_eq!(parse_entry("1e3"), 1000.0);
        assert_eq!(parse_entry("-2.5E-1"), -0.25);
    }

    #[test]
    fn numeric_prefix() {
        assert_eq!(parse_entry("3abc"), 3.0);
        assert_eq!(parse_entry("4x^2"), 4.0);
        assert_eq!(parse_entry("1e"), 1.0);
        assert_eq!(parse_entry("2e+"), 2.0);
        assert_eq!(parse_entry("1.2.3"), 1.2);
    }

    #[test]
    fn unreadable_is_zero() {
        assert_eq!(parse_entry(""), 0.0);
        assert_eq!(parse_entry("   "), 0.0);
        assert_eq!(parse_entry("-"), 0.0);
        assert_eq!(parse_entry("."), 0.0);
        assert_eq!(parse_entry("x"), 0.0);
        assert_eq!(parse_entry("NaN"), 0.0);
        assert_eq!(parse_entry("Infinity"), 0.0);
    }

    #[test]
    fn overflowing_exponent_is_zero() {
        assert_eq!(parse_entry("1e400"), 0.0);
    }

    #[test]
    fn whole_row() {
        let poly = coefficients_from_entries(&["2", " ", "oops", "-3"]).unwrap();
        assert_eq!(poly.coefficients(), &[2.0, 0.0, 0.0, -3.0]);

        let owned = vec![String::from("1"), String::from("1")];
        assert_eq!(
            coefficients_from_entries(&owned).unwrap().coefficients(),
            &[1.0, 1.0]
        );
    }

    #[test]
    fn empty_row() {
        assert_eq!(
            coefficients_from_entries::<&str>(&[]),
            Err(DivisionError::EmptyPolynomial)
        );
    }
}
