//! Output formatting for analysis reports.

mod json;
mod plot;
mod terminal;

pub use json::to_json_pretty;
pub use plot::{chart_path, write_chart, PlotError, CHART_TITLE};
pub use terminal::{format_batch_summary, format_report};

use benford_core::BenfordReport;

use crate::{Error, OutputFormat};

/// Render one report in the requested format.
///
/// # Errors
///
/// [`Error::Json`] if the report cannot be serialized.
pub fn render_report(report: &BenfordReport, format: OutputFormat) -> Result<String, Error> {
    match format {
        OutputFormat::Text => Ok(format_report(report)),
        OutputFormat::Json => Ok(to_json_pretty(report)?),
    }
}
