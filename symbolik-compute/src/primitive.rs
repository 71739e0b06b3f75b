//! Integer helpers.

/// Returns the greatest common divisor of `a` and `b`, computed with the Euclidean algorithm.
///
/// The result is always non-negative, and `gcd(a, 0) = |a|`. It is returned as a [`u64`], since
/// `gcd(i64::MIN, 0)` does not fit in an [`i64`].
pub fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Returns true if `a` is evenly divisible by `b`.
///
/// Nothing is divisible by zero.
pub fn is_divisible(a: i64, b: i64) -> bool {
    b != 0 && gcd(a, b) == b.unsigned_abs()
}
