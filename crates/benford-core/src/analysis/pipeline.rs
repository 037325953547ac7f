//! End-to-end first-digit analysis.

use crate::counts::{count_first_digits, DigitCounts};
use crate::error::{BenfordError, Result};
use crate::expected::expected_counts;
use crate::result::BenfordReport;
use crate::types::ObservedValue;

use super::chi_squared::chi_squared_test;

/// Run the full pipeline over a column of values.
///
/// Leading digits are counted, expected Benford counts are derived from
/// the number of values, and the two are compared with a chi-squared test.
///
/// # Errors
///
/// - [`BenfordError::InvalidSignificanceLevel`] unless `0 < significance_level < 1`
/// - [`BenfordError::NoSignificantDigit`] for the first value without a leading digit
/// - [`BenfordError::NoData`] for an empty column
/// - [`BenfordError::DegenerateExpectedValue`] when the column is so short
///   that some expected count rounds to zero (fewer than 11 values)
///
/// # Example
///
/// ```
/// use benford_core::{analyze, ObservedValue};
///
/// let values: Vec<ObservedValue> = (1..=5000)
///     .map(|i| ObservedValue::from(1.0017f64.powi(i)))
///     .collect();
/// let report = analyze(&values, 0.05).unwrap();
/// assert_eq!(report.total(), 5000);
/// ```
pub fn analyze(values: &[ObservedValue], significance_level: f64) -> Result<BenfordReport> {
    let counts = count_first_digits(values)?;
    analyze_counts(counts, significance_level)
}

/// Run the pipeline from already tallied digit counts.
pub fn analyze_counts(counts: DigitCounts, significance_level: f64) -> Result<BenfordReport> {
    check_significance_level(significance_level)?;

    let total = counts.total();
    if total == 0 {
        return Err(BenfordError::NoData);
    }

    let expected = expected_counts(total);
    let test = chi_squared_test(&counts.to_frequencies(), &expected)?;

    tracing::debug!(
        total,
        statistic = test.statistic,
        p_value = test.p_value,
        "first-digit analysis complete"
    );

    Ok(BenfordReport::new(counts, expected, test, significance_level))
}

fn check_significance_level(alpha: f64) -> Result<()> {
    if alpha > 0.0 && alpha < 1.0 {
        Ok(())
    } else {
        Err(BenfordError::InvalidSignificanceLevel(alpha))
    }
}
