//! Pearson's chi-squared goodness-of-fit test.

use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::error::{BenfordError, Result};
use crate::result::TestResult;

/// Compare observed frequencies against expected frequencies.
///
/// The statistic is `sum((observed[i] - expected[i])^2 / expected[i])` with
/// `len - 1` degrees of freedom, and the p-value is its upper-tail
/// probability under the chi-squared distribution.
///
/// Unlike some implementations this does not require the two sequences to
/// share the same total; rounded expected counts rarely do.
///
/// # Errors
///
/// - [`BenfordError::LengthMismatch`] if the sequences differ in length
/// - [`BenfordError::TooFewCategories`] for fewer than two categories
/// - [`BenfordError::InvalidFrequency`] for a negative or non-finite entry
/// - [`BenfordError::DegenerateExpectedValue`] for a zero expected frequency
pub fn chi_squared_test(observed: &[f64], expected: &[f64]) -> Result<TestResult> {
    if observed.len() != expected.len() {
        return Err(BenfordError::LengthMismatch {
            observed: observed.len(),
            expected: expected.len(),
        });
    }
    if observed.len() < 2 {
        return Err(BenfordError::TooFewCategories {
            got: observed.len(),
        });
    }

    let mut statistic = 0.0;
    for (index, (&o, &e)) in observed.iter().zip(expected).enumerate() {
        check_frequency(index, o)?;
        check_frequency(index, e)?;
        if e == 0.0 {
            return Err(BenfordError::DegenerateExpectedValue { index });
        }
        let diff = o - e;
        statistic += diff * diff / e;
    }

    let degrees_of_freedom = observed.len() - 1;
    let distribution = ChiSquared::new(degrees_of_freedom as f64)
        .map_err(|e| BenfordError::Distribution(e.to_string()))?;

    // sf(0) is exactly 1; skip the incomplete gamma evaluation.
    let p_value = if statistic == 0.0 {
        1.0
    } else {
        distribution.sf(statistic).clamp(0.0, 1.0)
    };

    Ok(TestResult {
        statistic,
        p_value,
        degrees_of_freedom,
    })
}

fn check_frequency(index: usize, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(BenfordError::InvalidFrequency { index, value })
    }
}
