//! Constants used throughout the crate.

/// Number of possible leading significant digits (1 through 9).
pub const DIGIT_COUNT: usize = 9;

/// Leading digits in the order every count and proportion sequence uses.
pub const DIGITS: [u8; DIGIT_COUNT] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

/// Benford proportions for leading digits 1 through 9.
///
/// These are `log10(1 + 1/d)` rounded to three decimals.
pub const BENFORD_PROPORTIONS: [f64; DIGIT_COUNT] =
    [0.301, 0.176, 0.125, 0.097, 0.079, 0.067, 0.058, 0.051, 0.046];

/// Default significance level: a p-value below 0.05 flags the data.
pub const DEFAULT_SIGNIFICANCE_LEVEL: f64 = 0.05;
