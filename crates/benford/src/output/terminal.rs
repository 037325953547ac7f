//! Terminal output formatting with colors.
//!
//! Single reports are formatted by `benford-core`; this module adds the
//! batch summary.

use colored::Colorize;

use benford_core::formatting::{format_count, format_verdict_short, SEPARATOR};
use benford_core::BenfordReport;

use crate::batch::{BatchSummary, FileOutcome};

/// Format a report for human-readable terminal output.
pub fn format_report(report: &BenfordReport) -> String {
    benford_core::formatting::format_report(report)
}

/// Format the end-of-batch summary.
///
/// # Example output
///
/// ```text
/// ──────────────────────────────────────────────────────────────
///   Batch: 3 files, 2 analysed, 1 failed
///
///     ✓ data/census.csv       conforms (chi2 = 4.12, p = 0.84610)
///     ✓ data/ledger.xlsx      deviates (chi2 = 31.90, p = 0.00010)
///     ✗ data/notes.json       Cannot process file format: .json
/// ──────────────────────────────────────────────────────────────
/// ```
pub fn format_batch_summary(summary: &BatchSummary) -> String {
    let mut out = String::new();
    out.push_str(SEPARATOR);
    out.push('\n');

    let failed = if summary.failed() > 0 {
        format!("{} failed", summary.failed()).red().to_string()
    } else {
        format!("{} failed", summary.failed())
    };
    out.push_str(&format!(
        "  {}: {} files, {} analysed, {}\n",
        "Batch".bold(),
        format_count(summary.outcomes.len() as u64),
        format_count(summary.analysed() as u64),
        failed
    ));

    if !summary.outcomes.is_empty() {
        out.push('\n');
    }

    let width = summary
        .outcomes
        .iter()
        .map(|o| o.path().display().to_string().chars().count())
        .max()
        .unwrap_or(0);

    for outcome in &summary.outcomes {
        let path = outcome.path().display().to_string();
        match outcome {
            FileOutcome::Analysed {
                report,
                chart_error,
                ..
            } => {
                out.push_str(&format!(
                    "    {} {:<width$}  {}\n",
                    "\u{2713}".green(),
                    path,
                    format_verdict_short(report),
                    width = width
                ));
                if let Some(error) = chart_error {
                    out.push_str(&format!(
                        "      {:<width$}  {}\n",
                        "",
                        format!("chart not written: {}", error).yellow(),
                        width = width
                    ));
                }
            }
            FileOutcome::Failed { error, .. } => {
                out.push_str(&format!(
                    "    {} {:<width$}  {}\n",
                    "\u{2717}".red(),
                    path,
                    error,
                    width = width
                ));
            }
        }
    }

    out.push_str(SEPARATOR);
    out
}
