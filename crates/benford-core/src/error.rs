//! Error types for the first-digit analysis pipeline.

use thiserror::Error;

/// Errors raised by the core pipeline.
///
/// Every stage fails fast: the first error is returned to the caller
/// unchanged and no partial result is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BenfordError {
    /// A value is neither numeric nor text (e.g. a boolean or date cell).
    #[error("Wrong data format: {kind}")]
    InvalidValueKind {
        /// Name of the offending value kind.
        kind: String,
    },

    /// A value has no leading digit in 1..=9 (zero, empty, non-numeric text).
    #[error("No significant leading digit in value '{value}'")]
    NoSignificantDigit {
        /// The value as it was seen by the extractor.
        value: String,
    },

    /// An expected frequency of zero makes the statistic undefined.
    #[error("Expected frequency at index {index} is zero; the chi-squared statistic is undefined")]
    DegenerateExpectedValue {
        /// Position of the zero frequency (digit 1 is index 0).
        index: usize,
    },

    /// A frequency is negative or not finite.
    #[error("Invalid frequency {value} at index {index}")]
    InvalidFrequency {
        /// Position of the bad frequency.
        index: usize,
        /// The frequency itself.
        value: f64,
    },

    /// Observed and expected sequences differ in length.
    #[error("Observed has {observed} categories but expected has {expected}")]
    LengthMismatch {
        /// Length of the observed sequence.
        observed: usize,
        /// Length of the expected sequence.
        expected: usize,
    },

    /// Fewer than two categories leaves no degrees of freedom.
    #[error("At least 2 categories are required, got {got}")]
    TooFewCategories {
        /// Number of categories supplied.
        got: usize,
    },

    /// The dataset contained no values.
    #[error("No values to analyse")]
    NoData,

    /// A significance level outside the open interval (0, 1).
    #[error("Significance level must be in (0, 1), got {0}")]
    InvalidSignificanceLevel(f64),

    /// The reference distribution could not be constructed.
    #[error("Chi-squared distribution error: {0}")]
    Distribution(String),
}

/// Result alias for the core pipeline.
pub type Result<T> = core::result::Result<T, BenfordError>;
