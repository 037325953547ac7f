//! Configuration for first-digit analysis runs.

use std::path::PathBuf;

use benford_core::DEFAULT_SIGNIFICANCE_LEVEL;
use serde::{Deserialize, Serialize};

use crate::data::LoadOptions;

/// Report format written by the command-line tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Colored human-readable report with a digit table.
    #[default]
    Text,
    /// Pretty-printed JSON report.
    Json,
}

/// Configuration options for analysing files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// p-value below which the data is flagged as deviating.
    ///
    /// Default: 0.05.
    pub significance_level: f64,

    /// Whether the first row of the input is a header and must be skipped.
    ///
    /// Default: false.
    pub has_header: bool,

    /// Field delimiter for delimited text files.
    ///
    /// Only the first field of every row is read. Default: `,`.
    pub delimiter: char,

    /// Directory to write a PNG chart into, one per analysed file.
    ///
    /// Default: None (no charts).
    pub plot_dir: Option<PathBuf>,

    /// Report format.
    ///
    /// Default: [`OutputFormat::Text`].
    pub output_format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            significance_level: DEFAULT_SIGNIFICANCE_LEVEL,
            has_header: false,
            delimiter: ',',
            plot_dir: None,
            output_format: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Set the significance level.
    pub fn significance_level(mut self, alpha: f64) -> Self {
        assert!(alpha > 0.0 && alpha < 1.0, "significance_level must be in (0, 1)");
        self.significance_level = alpha;
        self
    }

    /// Treat the first row as a header.
    pub fn has_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Set the field delimiter for delimited text.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        assert!(
            !is_numeric_char(delimiter),
            "delimiter must not be a digit, sign or decimal point"
        );
        self.delimiter = delimiter;
        self
    }

    /// Write a PNG chart per analysed file into `dir`.
    pub fn plot_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.plot_dir = Some(dir.into());
        self
    }

    /// Set the report format.
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Loader options derived from this configuration.
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            has_header: self.has_header,
            delimiter: self.delimiter,
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error message for the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.significance_level > 0.0 && self.significance_level < 1.0) {
            return Err(format!(
                "significance_level must be in (0, 1), got {}",
                self.significance_level
            ));
        }
        if is_numeric_char(self.delimiter) {
            return Err(format!(
                "delimiter '{}' would split numbers; use a non-numeric character",
                self.delimiter
            ));
        }
        Ok(())
    }
}

fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '.')
}
