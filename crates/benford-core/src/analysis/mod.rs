//! Goodness-of-fit testing and the end-to-end analysis pipeline.
//!
//! - `chi_squared`: Pearson's chi-squared test of observed against expected counts
//! - `pipeline`: values to digit counts to expected counts to report

mod chi_squared;
mod pipeline;

pub use chi_squared::chi_squared_test;
pub use pipeline::{analyze, analyze_counts};
