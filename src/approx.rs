// ============================================================================
// Decimal → Fraction Reconstruction
// Two iterative approximations: continued-fraction convergents ("closest")
// and a Stern-Brocot mediant search ("simplest")
// ============================================================================

use crate::errors::{FractionError, FractionResult};
use crate::fraction::Fraction;
use tracing::trace;

/// Resolve the optional accuracy against the default and reject anything
/// outside the open interval (0, 1). A NaN accuracy fails the range check.
fn validated_accuracy(accuracy: Option<f64>) -> FractionResult<f64> {
    let accuracy = accuracy.unwrap_or(Fraction::DEFAULT_ACCURACY);
    if accuracy > 0.0 && accuracy < 1.0 {
        Ok(accuracy)
    } else {
        Err(FractionError::AccuracyOutOfRange)
    }
}

/// Continued-fraction reconstruction (Richards' method).
///
/// Builds successive convergents of the fractional part via the recurrence
/// `den_k = floor(z_k) * den_{k-1} + den_{k-2}` until the convergent falls
/// inside the error window. `accuracy` is a relative bound, converted to an
/// absolute window of `|value| * accuracy` (or `accuracy` itself when the
/// target is zero). Favors minimal error over minimal denominator.
pub(crate) fn closest_parts(value: f64, accuracy: Option<f64>) -> FractionResult<(i64, i64)> {
    if !value.is_finite() {
        return Err(FractionError::NonFiniteValue);
    }
    let accuracy = validated_accuracy(accuracy)?;

    let sign: i64 = if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    };
    let value = value.abs();

    let max_error = if sign == 0 { accuracy } else { value * accuracy };

    let integer_part = value.floor() as i64;
    let value = value - integer_part as f64;

    // fractional part indistinguishable from 0 or 1 at this tolerance
    if value < max_error {
        return Ok((sign * integer_part, 1));
    }
    if 1.0 - max_error < value {
        return Ok((sign * (integer_part + 1), 1));
    }

    let mut z = value;
    let mut previous_denominator: i64 = 0;
    let mut denominator: i64 = 1;
    let mut numerator_part: i64;

    loop {
        // z starts in (0, 1), so the first reciprocal is well-defined and
        // every later z is > 1; an integer z exits through the loop check
        // before it can be fed back in.
        z = 1.0 / (z - z.trunc());
        let quotient = z.trunc() as i64;
        let next = denominator
            .checked_mul(quotient)
            .and_then(|v| v.checked_add(previous_denominator))
            .ok_or(FractionError::Overflow)?;
        previous_denominator = denominator;
        denominator = next;
        numerator_part = (value * denominator as f64).round() as i64;

        let error = (value - numerator_part as f64 / denominator as f64).abs();
        trace!(denominator, numerator_part, error, "closest convergent");

        if error <= max_error || z == z.trunc() {
            break;
        }
    }

    let numerator = integer_part
        .checked_mul(denominator)
        .and_then(|v| v.checked_add(numerator_part))
        .ok_or(FractionError::Overflow)?;
    Ok((sign * numerator, denominator))
}

/// Stern-Brocot / Farey mediant reconstruction.
///
/// Narrows a pair of continued-fraction accumulators `(b, d)` by integer
/// quotients until the window `fractional ± accuracy` brackets a rational,
/// converging on the one with the smallest denominator inside the window.
/// Favors minimal denominator over minimal error.
pub(crate) fn simplest_parts(value: f64, accuracy: Option<f64>) -> FractionResult<(i64, i64)> {
    if !value.is_finite() {
        return Err(FractionError::NonFiniteValue);
    }
    let accuracy = validated_accuracy(accuracy)?;

    let sign: i64 = if value < 0.0 { -1 } else { 1 };
    let value = value.abs();
    let integer_part = value as i64;
    let value = value - integer_part as f64;

    // window poking below 0 or above 1 collapses to a whole number
    let minimal_value = value - accuracy;
    if minimal_value < 0.0 {
        return Ok((sign * integer_part, 1));
    }
    let maximum_value = value + accuracy;
    if maximum_value > 1.0 {
        return Ok((sign * (integer_part + 1), 1));
    }

    let mut b: i64 = 1;
    let mut d: i64 = (1.0 / maximum_value) as i64;
    let mut left_n = minimal_value;
    let mut left_d = 1.0 - d as f64 * minimal_value;
    let mut right_n = 1.0 - d as f64 * maximum_value;
    let mut right_d = maximum_value;

    loop {
        if left_n < left_d {
            break;
        }
        let quotient = (left_n / left_d) as i64;
        b += quotient * d;
        left_n -= quotient as f64 * left_d;
        right_d -= quotient as f64 * right_n;
        trace!(b, d, "simplest descent, left step");

        if right_n < right_d {
            break;
        }
        let quotient = (right_n / right_d) as i64;
        d += quotient * b;
        left_d -= quotient as f64 * left_n;
        right_n -= quotient as f64 * right_d;
        trace!(b, d, "simplest descent, right step");
    }

    let denominator = b + d;
    let numerator_part = (value * denominator as f64 + 0.5) as i64;
    let numerator = integer_part
        .checked_mul(denominator)
        .and_then(|v| v.checked_add(numerator_part))
        .ok_or(FractionError::Overflow)?;
    Ok((sign * numerator, denominator))
}

impl Fraction {
    /// Reconstruct a fraction from a decimal value using continued-fraction
    /// convergents. Minimizes the error from `value`, at the cost of a
    /// potentially larger denominator than [`Fraction::simplest_from_f64`].
    ///
    /// `accuracy` is a relative-error bound in (0, 1) exclusive;
    /// [`Fraction::DEFAULT_ACCURACY`] when `None`.
    ///
    /// # Errors
    /// Returns `NonFiniteValue` for NaN or infinite input,
    /// `AccuracyOutOfRange` for an accuracy outside (0, 1), and `Overflow`
    /// if a convergent denominator leaves i64 range before converging.
    ///
    /// # Example
    /// ```
    /// use exact_fraction::Fraction;
    ///
    /// let pi = Fraction::closest_from_f64(3.14159, Some(1e-4))?;
    /// assert_eq!(pi.to_string(), "333/106");
    /// # Ok::<(), exact_fraction::FractionError>(())
    /// ```
    pub fn closest_from_f64(value: f64, accuracy: Option<f64>) -> FractionResult<Self> {
        // convergents are already coprime, skip the GCD pass
        let (numerator, denominator) = closest_parts(value, accuracy)?;
        Self::new_unsimplified(numerator, denominator)
    }

    /// Reconstruct a fraction from a decimal value using a Stern-Brocot
    /// mediant search. Finds the rational with the smallest denominator
    /// inside the tolerance window, trading error for simplicity.
    ///
    /// `accuracy` bounds the window around the value's fractional part;
    /// [`Fraction::DEFAULT_ACCURACY`] when `None`.
    ///
    /// # Errors
    /// Returns `NonFiniteValue` for NaN or infinite input and
    /// `AccuracyOutOfRange` for an accuracy outside (0, 1).
    pub fn simplest_from_f64(value: f64, accuracy: Option<f64>) -> FractionResult<Self> {
        let (numerator, denominator) = simplest_parts(value, accuracy)?;
        Self::new(numerator, denominator)
    }

    /// Reconstruct a fraction from a decimal value.
    ///
    /// Dispatches to [`Fraction::simplest_from_f64`] when `simple` is true,
    /// otherwise to [`Fraction::closest_from_f64`].
    pub fn from_f64(value: f64, accuracy: Option<f64>, simple: bool) -> FractionResult<Self> {
        if simple {
            Self::simplest_from_f64(value, accuracy)
        } else {
            Self::closest_from_f64(value, accuracy)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closest_pi() {
        let f = Fraction::closest_from_f64(3.14159, Some(1e-4)).unwrap();
        assert_eq!(f.to_string(), "333/106");
    }

    #[test]
    fn test_simplest_pi() {
        let f = Fraction::simplest_from_f64(3.14159, Some(1e-4)).unwrap();
        assert_eq!(f.to_string(), "333/106");
    }

    #[test]
    fn test_methods_diverge_on_same_input() {
        // closest minimizes error, simplest minimizes the denominator
        let closest = Fraction::closest_from_f64(0.333, Some(1e-4)).unwrap();
        let simplest = Fraction::simplest_from_f64(0.333, Some(1e-4)).unwrap();
        assert_eq!(closest.to_string(), "333/1000");
        assert_eq!(simplest.to_string(), "257/772");
    }

    #[test]
    fn test_default_accuracy() {
        let f = Fraction::closest_from_f64(0.5, None).unwrap();
        assert_eq!(f.to_string(), "1/2");

        let g = Fraction::simplest_from_f64(0.5, None).unwrap();
        assert_eq!(g.to_string(), "1/2");
    }

    #[test]
    fn test_sign_handling() {
        let f = Fraction::closest_from_f64(-0.5, None).unwrap();
        assert_eq!(f.to_string(), "-1/2");

        let g = Fraction::simplest_from_f64(-2.5, None).unwrap();
        assert_eq!(g.to_string(), "-5/2");
    }

    #[test]
    fn test_zero_target() {
        assert_eq!(
            Fraction::closest_from_f64(0.0, None).unwrap(),
            Fraction::ZERO
        );
        assert_eq!(
            Fraction::simplest_from_f64(0.0, None).unwrap(),
            Fraction::ZERO
        );
    }

    #[test]
    fn test_near_integer_shortcuts() {
        // fractional remainder inside the window collapses to n or n+1
        let f = Fraction::closest_from_f64(5.0004, Some(1e-3)).unwrap();
        assert_eq!(f.to_string(), "5/1");

        let g = Fraction::closest_from_f64(4.9997, Some(1e-3)).unwrap();
        assert_eq!(g.to_string(), "5/1");
    }

    #[test]
    fn test_simplest_recovers_a_third() {
        let f = Fraction::simplest_from_f64(0.333333333, Some(1e-9)).unwrap();
        assert_eq!(f.to_string(), "1/3");
    }

    #[test]
    fn test_non_finite_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(
                Fraction::closest_from_f64(bad, None),
                Err(FractionError::NonFiniteValue)
            );
            assert_eq!(
                Fraction::simplest_from_f64(bad, None),
                Err(FractionError::NonFiniteValue)
            );
        }
    }

    #[test]
    fn test_accuracy_out_of_range_rejected() {
        for bad in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            assert_eq!(
                Fraction::closest_from_f64(0.5, Some(bad)),
                Err(FractionError::AccuracyOutOfRange)
            );
            assert_eq!(
                Fraction::simplest_from_f64(0.5, Some(bad)),
                Err(FractionError::AccuracyOutOfRange)
            );
        }
    }

    #[test]
    fn test_from_f64_dispatch() {
        let simple = Fraction::from_f64(0.333, Some(1e-4), true).unwrap();
        assert_eq!(simple.to_string(), "257/772");

        let close = Fraction::from_f64(0.333, Some(1e-4), false).unwrap();
        assert_eq!(close.to_string(), "333/1000");
    }

    #[test]
    fn test_relative_error_within_tolerance() {
        let targets = [0.1, 0.25, 0.333, 1.75, 3.14159, -2.675, 10.125, 99.99];
        let accuracies = [1e-1, 1e-2, 1e-3, 1e-4, 1e-6];

        for &value in &targets {
            for &accuracy in &accuracies {
                for simple in [true, false] {
                    let f = Fraction::from_f64(value, Some(accuracy), simple).unwrap();
                    let err = (f.to_f64() - value).abs() / 1f64.max(value.abs());
                    assert!(
                        err <= accuracy,
                        "value={} accuracy={} simple={} got {} (err {})",
                        value,
                        accuracy,
                        simple,
                        f,
                        err
                    );
                }
            }
        }
    }

    #[test]
    fn test_exact_terminating_decimals() {
        let f = Fraction::closest_from_f64(0.75, None).unwrap();
        assert_eq!(f.to_string(), "3/4");

        let g = Fraction::simplest_from_f64(1.5, None).unwrap();
        assert_eq!(g.to_string(), "3/2");
    }
}
