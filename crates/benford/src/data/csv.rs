//! Delimited text parsing.
//!
//! Only the first field of each line is read; the rest of the line is
//! ignored. Fields may be wrapped in double quotes, with `""` standing for
//! a literal quote.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use benford_core::ObservedValue;

use super::{classify_field, DataError, LoadOptions};

/// Load the first column of a delimited text file.
///
/// # Example file content
/// ```csv
/// 1067.42
/// 531.29
/// "10,510"
/// -0.0345
/// ```
///
/// # Errors
/// Returns `DataError` if the file cannot be read, has an unterminated quote,
/// or a non-blank line has an empty first field.
pub fn load_delimited(path: &Path, options: &LoadOptions) -> Result<Vec<ObservedValue>, DataError> {
    let file = File::open(path)?;
    parse_delimited(BufReader::new(file), options)
}

/// Parse the first column of delimited text from any buffered reader.
pub fn parse_delimited<R: BufRead>(
    reader: R,
    options: &LoadOptions,
) -> Result<Vec<ObservedValue>, DataError> {
    let mut values = Vec::new();
    let mut header_pending = options.has_header;

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        let line = if line_num == 0 {
            line.trim_start_matches('\u{feff}')
        } else {
            line.as_str()
        };

        // Skip blank lines
        if line.trim().is_empty() {
            continue;
        }

        if header_pending {
            header_pending = false;
            continue;
        }

        let field = first_field(line, options.delimiter).map_err(|message| DataError::Parse {
            line: line_num + 1,
            message,
        })?;
        values.push(classify_field(&field, line_num + 1)?);
    }

    Ok(values)
}

/// Extract the first field of a line, unquoting it if needed.
fn first_field(line: &str, delimiter: char) -> Result<String, String> {
    let trimmed = line.trim_start();
    let Some(quoted) = trimmed.strip_prefix('"') else {
        let end = line.find(delimiter).unwrap_or(line.len());
        return Ok(line[..end].to_string());
    };

    let mut field = String::new();
    let mut chars = quoted.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '"' {
            if chars.peek() == Some(&'"') {
                chars.next();
                field.push('"');
            } else {
                return Ok(field);
            }
        } else {
            field.push(c);
        }
    }
    Err("unterminated quoted field".to_string())
}
