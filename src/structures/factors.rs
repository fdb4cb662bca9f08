//! Signed integer divisors, the raw material of rational-root candidates.

/// All signed divisors of `n`, in the order candidates are built from them.
///
/// Positive divisors come in ascending order, each followed by its negation,
/// so the result is closed under negation. `factors_of(0)` is empty: zero
/// has no finite divisor list, and callers decide what a zero coefficient
/// means. For `i64::MIN` the divisor `2^63` is left out, since it has no
/// `i64` negation.
///
/// Divisors are found in pairs `(i, |n| / i)` with `i <= sqrt(|n|)`, so
/// enumeration takes `O(sqrt |n|)` steps.
///
/// # Example
///
/// ```
/// use synthdiv::factors_of;
///
/// assert_eq!(factors_of(6), vec![1, -1, 2, -2, 3, -3, 6, -6]);
/// assert_eq!(factors_of(-4), vec![1, -1, 2, -2, 4, -4]);
/// assert!(factors_of(0).is_empty());
/// ```
pub fn factors_of(n: i64) -> Vec<i64> {
    let magnitude = n.unsigned_abs();
    let mut small = Vec::new();
    let mut large = Vec::new();

    // `i <= m / i` is `i * i <= m` without overflow.
    let mut i = 1u64;
    while i <= magnitude / i {
        if magnitude % i == 0 {
            small.push(i);
            let pair = magnitude / i;
            if pair != i {
                large.push(pair);
            }
        }
        i += 1;
    }

    small
        .into_iter()
        .chain(large.into_iter().rev())
        .filter_map(|d| i64::try_from(d).ok())
        .flat_map(|d| [d, -d])
        .collect()
}
