// ============================================================================
// Fraction Value Type
// Exact rational arithmetic on a signed numerator / positive denominator
// ============================================================================

use crate::errors::{FractionError, FractionResult};
use crate::gcd::{gcd_u128, gcd_u64};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Exact rational number stored as `numerator / denominator`.
///
/// Invariants, enforced at every construction site:
/// - the denominator is never zero (`ZeroDenominator` error otherwise)
/// - the denominator is always positive (sign lives in the numerator)
/// - with the default constructors the fraction is in lowest terms;
///   [`Fraction::new_unsimplified`] skips the GCD reduction but still
///   enforces the two denominator rules
///
/// Values are immutable: every operation returns a new `Fraction`.
///
/// # Example
/// ```
/// use exact_fraction::Fraction;
///
/// let half = Fraction::new(10, 20)?;             // reduced to 1/2
/// let third = Fraction::new(1, 3)?;
/// let sum = half.checked_add(third)?;            // 5/6
/// assert_eq!(sum.to_string(), "5/6");
/// # Ok::<(), exact_fraction::FractionError>(())
/// ```
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    /// Zero value (0/1)
    pub const ZERO: Self = Self {
        numerator: 0,
        denominator: 1,
    };

    /// One (1/1)
    pub const ONE: Self = Self {
        numerator: 1,
        denominator: 1,
    };

    /// Relative-error bound used by the decimal reconstruction methods
    /// when the caller does not supply one.
    pub const DEFAULT_ACCURACY: f64 = 1e-3;

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a fraction reduced to lowest terms.
    ///
    /// The sign is normalized into the numerator: `new(3, -9)` yields `-1/3`.
    ///
    /// # Errors
    /// Returns `ZeroDenominator` if `denominator` is 0, or `Overflow` if a
    /// normalized field magnitude does not fit in an i64 (only reachable
    /// with `i64::MIN` inputs that do not reduce).
    #[inline]
    pub fn new(numerator: i64, denominator: i64) -> FractionResult<Self> {
        Self::new_with(numerator, denominator, true)
    }

    /// Create a fraction without reducing it to lowest terms.
    ///
    /// Escape hatch for callers that want to defer normalization cost.
    /// The denominator invariants (nonzero, positive after construction)
    /// still hold; only the GCD reduction is skipped.
    #[inline]
    pub fn new_unsimplified(numerator: i64, denominator: i64) -> FractionResult<Self> {
        Self::new_with(numerator, denominator, false)
    }

    /// Create a whole-number fraction `value/1`.
    #[inline]
    pub const fn from_integer(value: i64) -> Self {
        Self {
            numerator: value,
            denominator: 1,
        }
    }

    pub(crate) fn new_with(
        numerator: i64,
        denominator: i64,
        simplify: bool,
    ) -> FractionResult<Self> {
        if denominator == 0 {
            return Err(FractionError::ZeroDenominator);
        }

        let negative = (numerator < 0) != (denominator < 0);
        let mut num_mag = numerator.unsigned_abs();
        let mut den_mag = denominator.unsigned_abs();

        if simplify {
            // denominator != 0 guarantees g >= 1
            let g = gcd_u64(num_mag, den_mag);
            num_mag /= g;
            den_mag /= g;
        }

        let num = i64::try_from(num_mag).map_err(|_| FractionError::Overflow)?;
        let den = i64::try_from(den_mag).map_err(|_| FractionError::Overflow)?;

        Ok(Self {
            numerator: if negative { -num } else { num },
            denominator: den,
        })
    }

    /// Reduce an i128 numerator/denominator pair (from cross-multiplication)
    /// back into i64 range. `denominator` must be nonzero.
    fn from_i128(numerator: i128, denominator: i128) -> FractionResult<Self> {
        debug_assert!(denominator != 0);

        let negative = (numerator < 0) != (denominator < 0);
        let mut num_mag = numerator.unsigned_abs();
        let mut den_mag = denominator.unsigned_abs();

        let g = gcd_u128(num_mag, den_mag);
        num_mag /= g;
        den_mag /= g;

        let num = i64::try_from(num_mag).map_err(|_| FractionError::Overflow)?;
        let den = i64::try_from(den_mag).map_err(|_| FractionError::Overflow)?;

        Ok(Self {
            numerator: if negative { -num } else { num },
            denominator: den,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The signed numerator.
    #[inline]
    pub const fn numerator(self) -> i64 {
        self.numerator
    }

    /// The denominator; always positive.
    #[inline]
    pub const fn denominator(self) -> i64 {
        self.denominator
    }

    /// The fraction's value as a floating-point number.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Check if the value is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.numerator == 0
    }

    /// Check if the value is positive.
    #[inline]
    pub const fn is_positive(self) -> bool {
        self.numerator > 0
    }

    /// Check if the value is negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.numerator < 0
    }

    /// Absolute value.
    ///
    /// # Errors
    /// Returns `Overflow` for a numerator of `i64::MIN`, whose magnitude
    /// has no i64 representation.
    #[inline]
    pub fn abs(self) -> FractionResult<Self> {
        if self.numerator == i64::MIN {
            Err(FractionError::Overflow)
        } else {
            Ok(Self {
                numerator: self.numerator.abs(),
                denominator: self.denominator,
            })
        }
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition: `(a.num * b.den + b.num * a.den) / (a.den * b.den)`,
    /// reduced to lowest terms.
    ///
    /// Cross-multiplication is carried out in i128, so only the final
    /// reduced result can overflow.
    ///
    /// # Errors
    /// Returns `Overflow` if the reduced result is out of i64 range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> FractionResult<Self> {
        let num = (self.numerator as i128) * (rhs.denominator as i128)
            + (rhs.numerator as i128) * (self.denominator as i128);
        let den = (self.denominator as i128) * (rhs.denominator as i128);
        Self::from_i128(num, den)
    }

    /// Checked subtraction, defined as `self + (-rhs)`.
    ///
    /// # Errors
    /// Returns `Overflow` if the reduced result is out of i64 range.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> FractionResult<Self> {
        self.checked_add(rhs.negated()?)
    }

    /// Checked multiplication, reduced to lowest terms.
    ///
    /// # Errors
    /// Returns `Overflow` if the reduced result is out of i64 range.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> FractionResult<Self> {
        let num = (self.numerator as i128) * (rhs.numerator as i128);
        let den = (self.denominator as i128) * (rhs.denominator as i128);
        Self::from_i128(num, den)
    }

    /// Checked division: multiply by the divisor's reciprocal.
    ///
    /// The zero check is on the divisor's numerator, never on its
    /// floating-point value.
    ///
    /// # Errors
    /// Returns `DivideByZero` if `rhs` is the zero fraction, or `Overflow`
    /// if the reduced result is out of i64 range.
    #[inline]
    pub fn checked_div(self, rhs: Self) -> FractionResult<Self> {
        if rhs.numerator == 0 {
            return Err(FractionError::DivideByZero);
        }
        let num = (self.numerator as i128) * (rhs.denominator as i128);
        let den = (self.denominator as i128) * (rhs.numerator as i128);
        Self::from_i128(num, den)
    }

    /// Add exactly one whole unit: `(num + den) / den`.
    ///
    /// Equivalent to `self.checked_add(Fraction::ONE)`.
    ///
    /// # Errors
    /// Returns `Overflow` if the new numerator is out of i64 range.
    #[inline]
    pub fn incremented(self) -> FractionResult<Self> {
        let numerator = self
            .numerator
            .checked_add(self.denominator)
            .ok_or(FractionError::Overflow)?;
        Self::new(numerator, self.denominator)
    }

    /// Subtract exactly one whole unit: `(num - den) / den`.
    ///
    /// Equivalent to `self.checked_sub(Fraction::ONE)`.
    ///
    /// # Errors
    /// Returns `Overflow` if the new numerator is out of i64 range.
    #[inline]
    pub fn decremented(self) -> FractionResult<Self> {
        let numerator = self
            .numerator
            .checked_sub(self.denominator)
            .ok_or(FractionError::Overflow)?;
        Self::new(numerator, self.denominator)
    }

    /// Negation. Preserves lowest-terms status, so no re-normalization runs.
    ///
    /// # Errors
    /// Returns `Overflow` for a numerator of `i64::MIN`.
    #[inline]
    pub fn negated(self) -> FractionResult<Self> {
        let numerator = self
            .numerator
            .checked_neg()
            .ok_or(FractionError::Overflow)?;
        Ok(Self {
            numerator,
            denominator: self.denominator,
        })
    }

    /// Multiplicative inverse: `den / num`, with the sign re-normalized
    /// into the numerator.
    ///
    /// # Errors
    /// Returns `DivideByZero` if the fraction is zero.
    #[inline]
    pub fn reciprocal(self) -> FractionResult<Self> {
        if self.numerator == 0 {
            return Err(FractionError::DivideByZero);
        }
        Self::new_with(self.denominator, self.numerator, false)
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Exact three-way comparison via i128 cross-multiplication.
    ///
    /// The denominators are always positive, so `a/b < c/d` iff
    /// `a*d < c*b`; widening to i128 makes the products exact for all
    /// i64 operands, with none of the precision loss a floating-point
    /// comparison would carry.
    #[inline]
    fn cross_cmp(self, other: Self) -> Ordering {
        let lhs = (self.numerator as i128) * (other.denominator as i128);
        let rhs = (other.numerator as i128) * (self.denominator as i128);
        lhs.cmp(&rhs)
    }

    /// Compare the fraction's value against a raw floating-point number.
    ///
    /// Distinct from [`PartialEq`] on purpose: equality against a float is
    /// a different, lossier question than equality between two exact
    /// rationals, so it gets its own name instead of an overload.
    #[inline]
    pub fn eq_f64(self, other: f64) -> bool {
        self.to_f64() == other
    }

    /// Returns the minimum of two values.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if self.cross_cmp(other) == Ordering::Greater {
            other
        } else {
            self
        }
    }

    /// Returns the maximum of two values.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if self.cross_cmp(other) == Ordering::Less {
            other
        } else {
            self
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Fraction {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

// Equality is value equality, not field equality: an unsimplified 15/20
// compares equal to 3/4, keeping PartialEq consistent with Ord.
impl PartialEq for Fraction {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cross_cmp(*other) == Ordering::Equal
    }
}

impl Eq for Fraction {}

impl PartialOrd for Fraction {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cross_cmp(*other))
    }
}

impl Ord for Fraction {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.cross_cmp(*other)
    }
}

// Hash the reduced form so equal values hash alike even when one side
// was constructed unsimplified.
impl Hash for Fraction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let g = gcd_u64(self.numerator.unsigned_abs(), self.denominator.unsigned_abs());
        (self.numerator / g as i64).hash(state);
        (self.denominator / g as i64).hash(state);
    }
}

impl Neg for Fraction {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negated().expect("Fraction negation overflow")
    }
}

// Infallible operator sugar (panics on overflow - use checked_* in production)
impl Add for Fraction {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("Fraction addition overflow")
    }
}

impl Sub for Fraction {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).expect("Fraction subtraction overflow")
    }
}

impl Mul for Fraction {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs).expect("Fraction multiplication overflow")
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fraction({}, value={})", self, self.to_f64())
    }
}

/// Canonical `"N/D"` form. Whole numbers keep the denominator: `3/1`.
impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl Fraction {
    /// Convert from `rust_decimal::Decimal`, exactly.
    ///
    /// A decimal is `mantissa / 10^scale`, which reduces to a fraction
    /// with no rounding. Intended for API boundaries (parsing user input).
    ///
    /// # Errors
    /// Returns `Overflow` if the reduced fraction is out of i64 range.
    pub fn from_decimal(d: rust_decimal::Decimal) -> FractionResult<Self> {
        let denominator = 10i128.pow(d.scale());
        Self::from_i128(d.mantissa(), denominator)
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// Intended for display/debugging only: non-terminating expansions
    /// such as 1/3 round at Decimal's precision limit.
    pub fn to_decimal(self) -> rust_decimal::Decimal {
        rust_decimal::Decimal::from(self.numerator) / rust_decimal::Decimal::from(self.denominator)
    }
}

// ============================================================================
// Serde (validating deserialization)
// ============================================================================

// Deserialization runs through the validating constructor so a serialized
// payload cannot smuggle in a zero or negative denominator.
#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Fraction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            numerator: i64,
            denominator: i64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Fraction::new_unsimplified(raw.numerator, raw.denominator)
            .map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
