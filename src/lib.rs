// ============================================================================
// Exact Fraction Library
// Exact rational arithmetic with decimal-to-fraction reconstruction
// ============================================================================

//! # Exact Fraction
//!
//! An exact rational number type: a signed i64 numerator over a positive
//! i64 denominator, for applications that need non-lossy arithmetic instead
//! of floating-point approximation.
//!
//! ## Features
//!
//! - **Canonical normalization** - GCD reduction with the sign always kept
//!   in the numerator, plus an explicit unsimplified escape hatch
//! - **Checked arithmetic** - i128 intermediates; overflow surfaces as an
//!   error instead of wrapping
//! - **Exact comparison** - i128 cross-multiplication, immune to the
//!   precision loss of comparing by floating-point value
//! - **Decimal reconstruction** - rebuild a fraction from an `f64` under a
//!   caller-chosen tolerance, by continued-fraction convergents (closest)
//!   or Stern-Brocot mediant search (simplest)
//! - **Fraction notation parsing** - `"3/4"`, `"2÷7"`, mixed numbers like
//!   `"-2 1/2"`
//!
//! ## Example
//!
//! ```rust
//! use exact_fraction::prelude::*;
//!
//! let half: Fraction = "1/2".parse()?;
//! let third = Fraction::new(2, 6)?;                    // reduced to 1/3
//! assert_eq!(half.checked_add(third)?.to_string(), "5/6");
//!
//! // Rebuild a fraction from a decimal under a relative-error tolerance
//! let pi = Fraction::closest_from_f64(3.14159, Some(1e-4))?;
//! assert_eq!(pi.to_string(), "333/106");
//! # Ok::<(), FractionError>(())
//! ```

pub mod approx;
pub mod errors;
pub mod fraction;
pub mod gcd;
pub mod parse;

pub use errors::{FractionError, FractionResult};
pub use fraction::Fraction;
pub use gcd::{gcd, lcm};

// Re-exports for convenience
pub mod prelude {
    pub use crate::errors::{FractionError, FractionResult};
    pub use crate::fraction::Fraction;
    pub use crate::gcd::{gcd, lcm};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_parse_compute_format() {
        let recipe: Fraction = "1 1/2".parse().unwrap();
        let batch = Fraction::new(3, 4).unwrap();
        let total = recipe.checked_mul(batch).unwrap();
        assert_eq!(total.to_string(), "9/8");

        let remainder = total.checked_sub(Fraction::ONE).unwrap();
        assert_eq!(remainder.to_string(), "1/8");
    }

    #[test]
    fn test_reconstruct_then_refine() {
        // a coarse tolerance gives a simpler fraction than a tight one
        let coarse = Fraction::simplest_from_f64(3.14159, Some(1e-2)).unwrap();
        let fine = Fraction::simplest_from_f64(3.14159, Some(1e-4)).unwrap();
        assert_eq!(coarse.to_string(), "22/7");
        assert_eq!(fine.to_string(), "333/106");
        assert!(coarse.denominator() < fine.denominator());
    }

    #[test]
    fn test_error_kinds_at_the_boundary() {
        assert_eq!(
            "5/0".parse::<Fraction>(),
            Err(FractionError::ZeroDenominator)
        );
        assert_eq!(
            Fraction::ONE.checked_div(Fraction::ZERO),
            Err(FractionError::DivideByZero)
        );
        assert_eq!(
            Fraction::closest_from_f64(f64::NAN, None),
            Err(FractionError::NonFiniteValue)
        );
    }

    #[test]
    fn test_gcd_lcm_surface() {
        assert_eq!(gcd(1, 2), 1);
        assert_eq!(gcd(6, 2), 2);
        assert_eq!(gcd(-6, 2), 2);
        assert_eq!(lcm(1, 2), 2);
        assert_eq!(lcm(6, 2), 6);
        assert_eq!(lcm(-3, 2), 6);
    }
}
