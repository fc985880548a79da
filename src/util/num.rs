use std::borrow::Cow;

use crate::error::CalcError;

/// Smallest decimal exponent printed without exponent notation.
pub const MIN_FIXED_EXPONENT: i32 = -4;
/// Decimal exponent from which results switch to exponent notation.
pub const MAX_FIXED_EXPONENT: i32 = 16;

/// Parses user supplied text as a finite operand.
///
/// Surrounding whitespace is ignored. Accepted forms are the usual decimal
/// literals: an optional sign, digits with an optional fractional part and an
/// optional exponent (`3.5`, `-2`, `.5`, `5.`, `1e3`). A single `_` may
/// separate two digits (`1_000`).
///
/// ## Errors
/// Returns `CalcError::InvalidNumber` carrying the trimmed input if the text is
/// not a number, or if it does not denote a finite value (`inf`, `nan`,
/// `1e400`).
///
/// ## Example
/// ```
/// use quickcalc::{error::CalcError, util::num::parse_operand};
///
/// assert_eq!(parse_operand(" 3.5 ").unwrap(), 3.5);
/// assert_eq!(parse_operand("1_000").unwrap(), 1000.0);
///
/// let err = parse_operand("abc").unwrap_err();
/// assert_eq!(err, CalcError::InvalidNumber { input: "abc".to_string() });
/// ```
pub fn parse_operand(text: &str) -> Result<f64, CalcError> {
    let trimmed = text.trim();
    let invalid = || CalcError::InvalidNumber { input: trimmed.to_string() };

    let literal = strip_digit_separators(trimmed).ok_or_else(invalid)?;
    let value = literal.parse::<f64>().map_err(|_| invalid())?;

    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(value)
}

/// Removes `_` separators that sit between two ASCII digits.
///
/// Returns `None` if any underscore is misplaced (leading, trailing, doubled,
/// or next to a non-digit).
fn strip_digit_separators(text: &str) -> Option<Cow<'_, str>> {
    if !text.contains('_') {
        return Some(Cow::Borrowed(text));
    }

    let bytes = text.as_bytes();
    let mut stripped = String::with_capacity(text.len());

    for (i, &byte) in bytes.iter().enumerate() {
        if byte == b'_' {
            let before = i.checked_sub(1).map(|j| bytes[j]);
            let after = bytes.get(i + 1).copied();
            if !before.is_some_and(|b| b.is_ascii_digit()) || !after.is_some_and(|b| b.is_ascii_digit()) {
                return None;
            }
        } else {
            stripped.push(char::from(byte));
        }
    }

    Some(Cow::Owned(stripped))
}

/// Formats a result the way the calculator prints it.
///
/// Finite values use the shortest representation that reads back to the same
/// `f64`. Integral values keep a trailing `.0`. Magnitudes below `1e-4` or at
/// least `1e16` are written in exponent notation with a signed, two digit
/// exponent. Non-finite values print as `inf`, `-inf` and `nan`.
///
/// ## Example
/// ```
/// use quickcalc::util::num::format_number;
///
/// assert_eq!(format_number(8.0), "8.0");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(1e20), "1e+20");
/// assert_eq!(format_number(0.000015), "1.5e-05");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{value:e}");
    if let Some((mantissa, exponent)) = scientific.split_once('e')
       && let Ok(exponent) = exponent.parse::<i32>()
       && value != 0.0
       && !(MIN_FIXED_EXPONENT..MAX_FIXED_EXPONENT).contains(&exponent)
    {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs());
    }

    let fixed = value.to_string();
    if fixed.contains('.') { fixed } else { format!("{fixed}.0") }
}
