//! First-digit frequency counting.

use serde::{Deserialize, Serialize};

use crate::constants::{DIGITS, DIGIT_COUNT};
use crate::digits::leading_digit;
use crate::error::Result;
use crate::types::{Digit, ObservedValue};

/// Observed count per leading digit, ordered digit 1 first.
///
/// All nine buckets are always present, so the counts line up position by
/// position with [`BENFORD_PROPORTIONS`](crate::constants::BENFORD_PROPORTIONS)
/// and with [`expected_counts`](crate::expected::expected_counts).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DigitCounts([u64; DIGIT_COUNT]);

impl DigitCounts {
    /// Wrap raw counts, digit 1 first.
    pub fn from_array(counts: [u64; DIGIT_COUNT]) -> Self {
        Self(counts)
    }

    /// Count for a single digit.
    pub fn get(&self, digit: Digit) -> u64 {
        self.0[digit.index()]
    }

    /// Add one occurrence of `digit`.
    pub fn record(&mut self, digit: Digit) {
        self.0[digit.index()] += 1;
    }

    /// Counts as a slice, digit 1 first.
    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    /// Counts as floating-point frequencies for the goodness-of-fit test.
    pub fn to_frequencies(&self) -> [f64; DIGIT_COUNT] {
        self.0.map(|c| c as f64)
    }

    /// Total number of observations.
    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    /// Share of each digit in the total, or all zeros when empty.
    pub fn proportions(&self) -> [f64; DIGIT_COUNT] {
        let total = self.total();
        if total == 0 {
            return [0.0; DIGIT_COUNT];
        }
        self.0.map(|c| c as f64 / total as f64)
    }

    /// Iterate over `(digit, count)` pairs in digit order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        DIGITS.iter().copied().zip(self.0.iter().copied())
    }
}

/// Tally the leading significant digit of every value.
///
/// The input is only borrowed. Counting stops at the first value without a
/// leading digit and that error is returned as is.
///
/// # Example
///
/// ```
/// use benford_core::{count_first_digits, ObservedValue};
///
/// let values: Vec<ObservedValue> = vec![123.into(), 0.0456.into(), "789".into(), (-55).into()];
/// let counts = count_first_digits(&values).unwrap();
/// assert_eq!(counts.as_slice(), &[1, 0, 0, 1, 1, 0, 1, 0, 0]);
/// ```
pub fn count_first_digits<'a, I>(values: I) -> Result<DigitCounts>
where
    I: IntoIterator<Item = &'a ObservedValue>,
{
    let mut counts = DigitCounts::default();
    for value in values {
        counts.record(leading_digit(value)?);
    }
    Ok(counts)
}
