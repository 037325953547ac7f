//! Spreadsheet loading via `calamine`.

use std::path::Path;

use benford_core::ObservedValue;
use calamine::{open_workbook_auto, Data, Range, Reader};

use super::{classify_field, invalid_kind, DataError, LoadOptions};

/// Load the first used column of the first worksheet.
///
/// Float cells become numbers and integer cells keep every digit as text.
/// Text cells are classified like delimited text fields. Rows that are
/// entirely empty are skipped.
///
/// # Errors
/// Returns `DataError` if the workbook cannot be opened, has no sheets, or
/// the column holds a boolean, date, error or empty cell.
pub fn load_spreadsheet(path: &Path, options: &LoadOptions) -> Result<Vec<ObservedValue>, DataError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(DataError::EmptyWorkbook)??;
    values_from_range(&range, options)
}

/// Extract the first column of a cell range.
pub(crate) fn values_from_range(
    range: &Range<Data>,
    options: &LoadOptions,
) -> Result<Vec<ObservedValue>, DataError> {
    let first_row = range.start().map_or(0, |(row, _)| row as usize);
    let mut values = Vec::new();
    let mut header_pending = options.has_header;

    for (offset, cells) in range.rows().enumerate() {
        let row = first_row + offset + 1;

        if cells.iter().all(|c| matches!(c, Data::Empty)) {
            continue;
        }

        if header_pending {
            header_pending = false;
            continue;
        }

        let value = match &cells[0] {
            Data::Int(i) => ObservedValue::from(*i),
            Data::Float(f) => ObservedValue::Numeric(*f),
            Data::String(s) => classify_field(s, row)?,
            other => return Err(invalid_kind(row, cell_kind(other))),
        };
        values.push(value);
    }

    Ok(values)
}

fn cell_kind(cell: &Data) -> &'static str {
    match cell {
        Data::Int(_) | Data::Float(_) => "number",
        Data::String(_) => "text",
        Data::Bool(_) => "boolean",
        Data::DateTime(_) | Data::DateTimeIso(_) => "date",
        Data::DurationIso(_) => "duration",
        Data::Error(_) => "cell error",
        Data::Empty => "empty",
    }
}
