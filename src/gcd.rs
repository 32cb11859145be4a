// ============================================================================
// GCD / LCM
// Integer helpers backing fraction normalization
// ============================================================================

/// Euclidean GCD on unsigned magnitudes.
///
/// `gcd_u64(0, x) == x` and `gcd_u64(0, 0) == 0`; callers that divide by
/// the result must guard the all-zero case themselves.
#[inline]
pub(crate) const fn gcd_u64(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let temp = a;
        a = b;
        b = temp % b;
    }
    a
}

/// Euclidean GCD on u128 magnitudes, for reducing cross-multiplication
/// products before they are checked back into i64 range.
#[inline]
pub(crate) const fn gcd_u128(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let temp = a;
        a = b;
        b = temp % b;
    }
    a
}

/// Greatest common divisor of two signed integers.
///
/// Operates on absolute values and always returns a non-negative result:
/// `gcd(-6, 2) == 2`.
///
/// # Panics
/// Panics for the single input pair `(i64::MIN, i64::MIN)` (and
/// `(i64::MIN, 0)` / `(0, i64::MIN)`), whose GCD magnitude 2^63 does not
/// fit in an i64.
#[inline]
pub fn gcd(a: i64, b: i64) -> i64 {
    let g = gcd_u64(a.unsigned_abs(), b.unsigned_abs());
    i64::try_from(g).expect("gcd magnitude exceeds i64::MAX")
}

/// Least common multiple of two signed integers.
///
/// Uses the closed form `|a * b| / gcd(a, b)` and always returns a
/// non-negative result: `lcm(-3, 2) == 6`. `lcm(0, x) == 0`.
///
/// # Panics
/// Panics if the result does not fit in an i64.
#[inline]
pub fn lcm(a: i64, b: i64) -> i64 {
    if a == 0 || b == 0 {
        return 0;
    }
    let g = gcd_u64(a.unsigned_abs(), b.unsigned_abs());
    let m = (a.unsigned_abs() / g)
        .checked_mul(b.unsigned_abs())
        .expect("lcm magnitude exceeds u64::MAX");
    i64::try_from(m).expect("lcm magnitude exceeds i64::MAX")
}
