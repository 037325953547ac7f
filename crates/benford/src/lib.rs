//! # benford
//!
//! Screen numeric data for fabrication with Benford's Law.
//!
//! In many naturally occurring collections of numbers the leading
//! significant digit is small far more often than large: about 30% of
//! values start with 1, under 5% with 9. Invented numbers tend to spread
//! their leading digits more evenly. This crate reads the first column of a
//! file, tallies the leading digits, and compares them with the Benford
//! distribution using Pearson's chi-squared test, reporting:
//! - the chi-squared statistic (8 degrees of freedom)
//! - its p-value, and a verdict at a configurable significance level
//! - observed against Benford proportions, as a table and optional PNG chart
//!
//! A low p-value is a reason to look closer, not proof of fraud.
//!
//! ## Quick Start
//!
//! ```ignore
//! use benford::{analyze_file, Config};
//! use std::path::Path;
//!
//! let report = analyze_file(Path::new("expenses.csv"), &Config::default())?;
//! println!("{}", report.test.summary_line());
//! ```
//!
//! The statistical pipeline itself lives in `benford-core` and is
//! re-exported here.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;

pub mod batch;
pub mod data;
pub mod output;

use std::path::{Path, PathBuf};

use thiserror::Error;

pub use batch::{run_batch, run_paths, BatchSummary, FileOutcome};
pub use config::{Config, OutputFormat};
pub use data::{load_dataset, DataError, Dataset, InputFormat, LoadOptions};
pub use output::PlotError;

// Re-export the core pipeline for convenience
pub use benford_core::{
    analyze, analyze_counts, chi_squared_test, count_first_digits, expected_counts,
    leading_digit, BenfordError, BenfordReport, Digit, DigitCounts, ObservedValue, TestResult,
    Verdict, BENFORD_PROPORTIONS,
};

/// Errors from analysing files.
#[derive(Debug, Error)]
pub enum Error {
    /// The file could not be loaded.
    #[error(transparent)]
    Data(#[from] DataError),

    /// The values could not be analysed.
    #[error(transparent)]
    Analysis(#[from] BenfordError),

    /// The chart could not be written.
    #[error(transparent)]
    Plot(#[from] PlotError),

    /// The report could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration is invalid.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A batch directory could not be listed.
    #[error("Cannot read directory {}: {source}", path.display())]
    Directory {
        /// The directory.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },
}

impl Error {
    /// Whether this error concerns a single input file.
    ///
    /// Batch runs record per-item errors and continue; any other error
    /// stops the batch.
    pub fn is_per_item(&self) -> bool {
        match self {
            Error::Data(_) | Error::Analysis(_) | Error::Plot(_) | Error::Json(_) => true,
            Error::Config(_) | Error::Directory { .. } => false,
        }
    }
}

/// Load a file and run the first-digit analysis.
///
/// No chart is drawn here; see [`plot_report`].
///
/// # Errors
///
/// The first error of loading or analysis. A file with no values fails
/// with [`BenfordError::NoData`] rather than reaching the chi-squared test.
pub fn analyze_file(path: &Path, config: &Config) -> Result<BenfordReport, Error> {
    config.validate().map_err(Error::Config)?;

    let dataset = load_dataset(path, &config.load_options())?;
    let report = analyze(&dataset.values, config.significance_level)?
        .with_source(path.display().to_string());
    Ok(report)
}

/// Write the chart for `report` if [`Config::plot_dir`] is set.
///
/// Returns the chart's path, or `None` when charts are disabled.
pub fn plot_report(
    report: &BenfordReport,
    input: &Path,
    config: &Config,
) -> Result<Option<PathBuf>, Error> {
    let Some(dir) = &config.plot_dir else {
        return Ok(None);
    };
    let path = output::chart_path(dir, input);
    output::write_chart(&report.observed_proportions, &path)?;
    Ok(Some(path))
}
