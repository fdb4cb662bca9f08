/// Greatest common divisor of two integers, always non-negative.
///
/// `gcd(0, 0)` is 0.
pub const fn gcd(a: i128, b: i128) -> i128 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a as i128
}
