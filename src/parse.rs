// ============================================================================
// String Parsing
// Mixed-number ("2 1/2") and single-token ("3/4", "2÷7") fraction notation
// ============================================================================

use crate::errors::{FractionError, FractionResult};
use crate::fraction::Fraction;

impl Fraction {
    /// Parse fraction text, controlling whether the result is reduced.
    ///
    /// Two shapes are accepted:
    /// - a single token: `"3/4"`, `"2÷7"`, `"3/-9"`
    /// - a mixed number: an integer token followed by a fraction token,
    ///   e.g. `"1 1/2"`. A negative integer part subtracts the fractional
    ///   part, so `"-2 1/2"` means -2 - 1/2 = -5/2.
    ///
    /// # Errors
    /// Returns `Unparseable` (naming the offending input) for any other
    /// shape, including embedded `+`/`-` separators like `"2+1/2"`.
    pub fn parse_with(text: &str, simplify: bool) -> FractionResult<Self> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.len() == 2 {
            if let Ok(integer) = tokens[0].parse::<i64>() {
                let integer_part = Self::from_integer(integer);
                let fractional_part = parse_single_token(tokens[1], true)?;
                return if integer < 0 {
                    integer_part.checked_sub(fractional_part)
                } else {
                    integer_part.checked_add(fractional_part)
                };
            }
        }

        parse_single_token(text, simplify)
    }
}

/// Parse one `numerator/denominator` token, splitting on `/` or `÷`.
fn parse_single_token(token: &str, simplify: bool) -> FractionResult<Fraction> {
    let parts: Vec<&str> = token
        .split(['/', '÷'])
        .filter(|part| !part.is_empty())
        .collect();

    if let [numerator, denominator] = parts[..] {
        if let (Ok(numerator), Ok(denominator)) =
            (numerator.trim().parse::<i64>(), denominator.trim().parse::<i64>())
        {
            return Fraction::new_with(numerator, denominator, simplify);
        }
    }

    Err(FractionError::Unparseable(token.to_string()))
}

impl std::str::FromStr for Fraction {
    type Err = FractionError;

    /// Parse with simplification enabled; see [`Fraction::parse_with`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Fraction::parse_with(s, true)
    }
}
