//! Core first-digit analysis for Benford's Law screening.
//!
//! This crate contains the statistical pipeline and nothing that touches
//! the filesystem:
//!
//! 1. [`leading_digit`] derives the leading significant digit (1-9) of a value
//! 2. [`count_first_digits`] tallies those digits into [`DigitCounts`]
//! 3. [`expected_counts`] derives Benford-expected counts from the total
//! 4. [`chi_squared_test`] compares observed and expected counts
//!
//! [`analyze`] chains the four steps and returns a [`BenfordReport`].
//!
//! # Usage
//!
//! This crate is typically used through the main `benford` crate, which
//! provides file loading, batch processing and chart output.
//!
//! ```
//! use benford_core::{analyze_counts, DigitCounts, Verdict};
//!
//! let counts = DigitCounts::from_array([301, 176, 125, 97, 79, 67, 58, 51, 46]);
//! let report = analyze_counts(counts, 0.05).unwrap();
//! assert_eq!(report.verdict, Verdict::Conforms);
//! println!("{}", report.test.summary_line());
//! ```

#![warn(missing_docs)]

pub mod analysis;
pub mod colors;
pub mod constants;
pub mod counts;
pub mod digits;
pub mod error;
pub mod expected;
pub mod formatting;
pub mod result;
pub mod types;

// Re-export commonly used items at crate root
pub use analysis::{analyze, analyze_counts, chi_squared_test};
pub use constants::{BENFORD_PROPORTIONS, DEFAULT_SIGNIFICANCE_LEVEL, DIGITS, DIGIT_COUNT};
pub use counts::{count_first_digits, DigitCounts};
pub use digits::leading_digit;
pub use error::BenfordError;
pub use expected::expected_counts;
pub use result::{BenfordReport, TestResult, Verdict};
pub use types::{Digit, ObservedValue};
