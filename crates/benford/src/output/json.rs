//! Machine-readable reports.
//!
//! A report serializes with its digit arrays in digit order (digit 1
//! first) and the verdict as `"Conforms"` or `"Deviates"`, so downstream
//! tooling can re-run thresholds without re-reading the source file.

use benford_core::BenfordReport;

/// Render a report as indented JSON, one document per analysed file.
pub fn to_json_pretty(report: &BenfordReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
