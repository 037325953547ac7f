//! Loading the analysed column from files.
//!
//! # Supported Formats
//!
//! - **Delimited text** (`.csv`, `.txt`): first field of every non-blank line
//! - **Spreadsheets** (`.xls`, `.xlsx`): first used column of the first sheet
//!
//! Any other extension is rejected with [`DataError::UnsupportedFormat`].
//! No header is required; set [`LoadOptions::has_header`] to skip one.
//!
//! # Example
//!
//! ```ignore
//! use benford::data::{load_dataset, LoadOptions};
//! use std::path::Path;
//!
//! let data = load_dataset(Path::new("payments.csv"), &LoadOptions::default())?;
//! println!("Loaded {} values", data.len());
//! ```

mod csv;
mod spreadsheet;

pub use csv::{load_delimited, parse_delimited};
pub use spreadsheet::load_spreadsheet;

use std::fmt;
use std::path::Path;

use benford_core::{BenfordError, ObservedValue};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during data loading.
#[derive(Debug, Error)]
pub enum DataError {
    /// IO error reading file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file extension is not a supported input format.
    #[error("Cannot process file format: {extension}")]
    UnsupportedFormat {
        /// The extension as found, including the leading dot (empty if none).
        extension: String,
    },

    /// Malformed delimited text at a specific line.
    #[error("Parse error at line {line}: {message}")]
    Parse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Description of the parse error.
        message: String,
    },

    /// The spreadsheet could not be opened or read.
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    /// The workbook has no worksheet.
    #[error("Workbook contains no worksheets")]
    EmptyWorkbook,

    /// A cell holds something that is neither a number nor text.
    #[error("Row {row}: {source}")]
    InvalidValue {
        /// Row of the offending value (1-indexed).
        row: usize,
        /// Always [`BenfordError::InvalidValueKind`].
        source: BenfordError,
    },
}

/// Options controlling how a column is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Skip the first row.
    pub has_header: bool,
    /// Field delimiter for delimited text.
    pub delimiter: char,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            has_header: false,
            delimiter: ',',
        }
    }
}

/// Input file format, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputFormat {
    /// Delimited text (`.csv`, `.txt`).
    Delimited,
    /// Excel workbook (`.xls`, `.xlsx`).
    Spreadsheet,
}

impl InputFormat {
    /// Determine the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, DataError> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "csv" | "txt" => Ok(InputFormat::Delimited),
            "xls" | "xlsx" => Ok(InputFormat::Spreadsheet),
            _ => Err(DataError::UnsupportedFormat {
                extension: if extension.is_empty() {
                    String::new()
                } else {
                    format!(".{}", extension)
                },
            }),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFormat::Delimited => write!(f, "delimited text"),
            InputFormat::Spreadsheet => write!(f, "spreadsheet"),
        }
    }
}

/// A loaded column of values.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// The values in file order.
    pub values: Vec<ObservedValue>,

    /// Optional metadata about the data source.
    pub metadata: Option<DataMetadata>,
}

impl Dataset {
    /// Create a dataset from values.
    pub fn new(values: Vec<ObservedValue>) -> Self {
        Self {
            values,
            metadata: None,
        }
    }

    /// Create a dataset with metadata.
    pub fn with_metadata(values: Vec<ObservedValue>, metadata: DataMetadata) -> Self {
        Self {
            values,
            metadata: Some(metadata),
        }
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Source identifier, if known.
    pub fn source(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|m| m.source.as_deref())
    }
}

/// Metadata about the data source.
#[derive(Debug, Clone, Default)]
pub struct DataMetadata {
    /// Original filename or identifier.
    pub source: Option<String>,

    /// Format the values were read from.
    pub format: Option<InputFormat>,
}

/// Load the first column of a delimited-text or spreadsheet file.
///
/// # Errors
///
/// [`DataError::UnsupportedFormat`] for unknown extensions, otherwise any
/// error of the format-specific loader.
pub fn load_dataset(path: &Path, options: &LoadOptions) -> Result<Dataset, DataError> {
    let format = InputFormat::from_path(path)?;
    let values = match format {
        InputFormat::Delimited => load_delimited(path, options)?,
        InputFormat::Spreadsheet => load_spreadsheet(path, options)?,
    };

    tracing::debug!(
        path = %path.display(),
        %format,
        values = values.len(),
        "loaded dataset"
    );

    let metadata = DataMetadata {
        source: Some(path.display().to_string()),
        format: Some(format),
    };
    Ok(Dataset::with_metadata(values, metadata))
}

/// Turn a raw text field into a value.
///
/// Decimal and exponent forms become [`ObservedValue::Numeric`]. Integers
/// stay [`ObservedValue::Text`] so that digits beyond `f64` precision are
/// not rounded away, as does anything that is not a number.
pub(crate) fn classify_field(field: &str, row: usize) -> Result<ObservedValue, DataError> {
    let field = field.trim();
    if field.is_empty() {
        return Err(invalid_kind(row, "empty"));
    }
    if is_integer(field) {
        return Ok(ObservedValue::Text(field.to_string()));
    }
    Ok(match field.parse::<f64>() {
        Ok(v) => ObservedValue::Numeric(v),
        Err(_) => ObservedValue::Text(field.to_string()),
    })
}

fn is_integer(field: &str) -> bool {
    let digits = field.strip_prefix(&['+', '-'][..]).unwrap_or(field);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// A value of a kind the pipeline cannot take, at `row`.
pub(crate) fn invalid_kind(row: usize, kind: &str) -> DataError {
    DataError::InvalidValue {
        row,
        source: BenfordError::InvalidValueKind {
            kind: kind.to_string(),
        },
    }
}
