//! Leading significant digit extraction.
//!
//! The leading significant digit of a number is its first non-zero decimal
//! digit, ignoring sign, leading zeros and the decimal point. `-0.0456`
//! therefore leads with `4`, not `-` or `0`.

use crate::error::{BenfordError, Result};
use crate::types::{Digit, ObservedValue};

/// Characters that may precede the first significant digit.
fn is_insignificant(c: char) -> bool {
    matches!(c, '+' | '-' | '0' | '.') || c.is_whitespace()
}

/// Extract the leading significant digit of a value.
///
/// Numbers are rendered in their canonical decimal form first (Rust's
/// `Display` for `f64` never uses exponent notation, so `1e-7` renders as
/// `0.0000001`). Text is inspected as given.
///
/// # Errors
///
/// [`BenfordError::NoSignificantDigit`] when the value is zero, empty,
/// non-finite, or does not start with a number.
///
/// # Example
///
/// ```
/// use benford_core::{leading_digit, ObservedValue};
///
/// let d = leading_digit(&ObservedValue::Numeric(0.0456)).unwrap();
/// assert_eq!(d.get(), 4);
/// ```
pub fn leading_digit(value: &ObservedValue) -> Result<Digit> {
    match value {
        ObservedValue::Numeric(v) => leading_digit_of_number(*v),
        ObservedValue::Text(s) => leading_digit_of_str(s),
    }
}

/// Leading significant digit of a floating-point number.
pub fn leading_digit_of_number(value: f64) -> Result<Digit> {
    if !value.is_finite() || value == 0.0 {
        return Err(BenfordError::NoSignificantDigit {
            value: value.to_string(),
        });
    }
    leading_digit_of_str(&value.to_string())
}

/// Leading significant digit of a numeric string.
///
/// Skips any prefix made of signs, zeros, decimal points and whitespace,
/// then requires the next character to be `1..=9`.
pub fn leading_digit_of_str(s: &str) -> Result<Digit> {
    s.chars()
        .find(|&c| !is_insignificant(c))
        .and_then(Digit::from_char)
        .ok_or_else(|| BenfordError::NoSignificantDigit {
            value: s.to_string(),
        })
}
