// ============================================================================
// Fraction Errors
// Error types for exact rational arithmetic operations
// ============================================================================

use std::fmt;

/// Errors that can occur during fraction construction and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FractionError {
    /// Constructed with a zero denominator
    ZeroDenominator,
    /// Divided by a fraction whose numerator is zero
    DivideByZero,
    /// Intermediate or final i64 value out of range
    Overflow,
    /// Reconstruction target was NaN or infinite
    NonFiniteValue,
    /// Reconstruction accuracy outside the open interval (0, 1)
    AccuracyOutOfRange,
    /// Input text could not be parsed as a fraction
    Unparseable(String),
}

impl fmt::Display for FractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FractionError::ZeroDenominator => {
                write!(f, "denominator cannot be zero")
            },
            FractionError::DivideByZero => write!(f, "division by a zero fraction"),
            FractionError::Overflow => {
                write!(f, "arithmetic overflow: result out of i64 range")
            },
            FractionError::NonFiniteValue => {
                write!(f, "decimal value must be finite and well-defined")
            },
            FractionError::AccuracyOutOfRange => {
                write!(f, "accuracy must be between 0 and 1, exclusive")
            },
            FractionError::Unparseable(input) => {
                write!(f, "could not parse fraction from input: {}", input)
            },
        }
    }
}

impl std::error::Error for FractionError {}

/// Result type alias for fraction operations
pub type FractionResult<T> = Result<T, FractionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            FractionError::ZeroDenominator.to_string(),
            "denominator cannot be zero"
        );
        assert_eq!(
            FractionError::DivideByZero.to_string(),
            "division by a zero fraction"
        );
        assert_eq!(
            FractionError::Unparseable("xy/z".to_string()).to_string(),
            "could not parse fraction from input: xy/z"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(FractionError::Overflow, FractionError::Overflow);
        assert_ne!(FractionError::Overflow, FractionError::DivideByZero);
    }
}
