//! Formatting helpers for report display.
//!
//! When stdout is a terminal the output carries ANSI color codes via the
//! `colored` crate.

use std::fmt::Write;

use crate::colors::Style;
use crate::constants::DIGITS;
use crate::result::{BenfordReport, Verdict};

/// Separator line used in output.
pub const SEPARATOR: &str = "──────────────────────────────────────────────────────────────";

/// Width in characters of a bar representing a proportion of 0.5.
const HALF_BAR_WIDTH: usize = 40;

/// Format a report for human-readable terminal output.
///
/// # Example output
///
/// ```text
/// benford: data/sales.csv
/// ──────────────────────────────────────────────────────────────
///
///   ✓ Consistent with Benford's Law
///
///     Values analysed: 1,000
///     Chi-Squared Test Statistic: [3.21]	p-value: [0.92036]
///     Significance level: 0.05 (df = 8)
///
///   Digit  Observed  Expected  Proportion
///     1       304       301      0.304 ████████████████████████▎ │
///   ...
/// ──────────────────────────────────────────────────────────────
/// ```
pub fn format_report(report: &BenfordReport) -> String {
    let mut out = String::new();

    match &report.source {
        Some(source) => writeln!(out, "benford: {}", source).unwrap(),
        None => writeln!(out, "benford").unwrap(),
    }
    writeln!(out, "{}", SEPARATOR).unwrap();
    writeln!(out).unwrap();

    let (style, mark) = match report.verdict {
        Verdict::Conforms => (Style::Conforms, '\u{2713}'),
        Verdict::Deviates => (Style::Deviates, '\u{26A0}'),
    };
    writeln!(out, "  {}", style.paint(&format!("{} {}", mark, report.verdict))).unwrap();
    writeln!(out).unwrap();

    writeln!(out, "    Values analysed: {}", format_count(report.total())).unwrap();
    writeln!(out, "    {}", report.test.summary_line()).unwrap();
    writeln!(
        out,
        "    Significance level: {} (df = {})",
        report.significance_level, report.test.degrees_of_freedom
    )
    .unwrap();
    writeln!(out).unwrap();

    format_digit_table(&mut out, report);

    writeln!(out).unwrap();
    writeln!(out, "{}", SEPARATOR).unwrap();
    write!(
        out,
        "{}",
        Style::Note.paint("Bars: observed proportion. \u{2502}: Benford proportion.")
    )
    .unwrap();

    out
}

/// Per-digit table with a bar chart of observed against Benford proportions.
fn format_digit_table(out: &mut String, report: &BenfordReport) {
    writeln!(
        out,
        "  {}",
        Style::Heading.paint("Digit  Observed  Expected  Proportion")
    )
    .unwrap();

    for (i, &digit) in DIGITS.iter().enumerate() {
        let observed = report.observed.as_slice()[i];
        let expected = report.expected[i];
        let proportion = report.observed_proportions[i];
        let benford = report.benford_proportions[i];

        let bar = proportion_bar(proportion, benford);
        let bar = if proportion >= benford {
            Style::AtOrAboveBenford.paint(&bar)
        } else {
            Style::BelowBenford.paint(&bar)
        };

        writeln!(
            out,
            "    {}  {:>8}  {:>8}     {:.3} {}",
            digit, observed, expected, proportion, bar
        )
        .unwrap();
    }
}

/// Render a proportion as a bar with a marker at the Benford proportion.
///
/// The marker is placed after the bar when it falls beyond the bar's end.
pub fn proportion_bar(proportion: f64, benford: f64) -> String {
    let scale = (HALF_BAR_WIDTH * 2) as f64;
    let filled = (proportion.clamp(0.0, 1.0) * scale).round() as usize;
    let marker = (benford.clamp(0.0, 1.0) * scale).round() as usize;
    let width = filled.max(marker + 1);

    (0..width)
        .map(|i| {
            if i == marker {
                '\u{2502}'
            } else if i < filled {
                '\u{2588}'
            } else {
                ' '
            }
        })
        .collect()
}

/// Format a count with thousands separators.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// One-line colored verdict for batch listings.
pub fn format_verdict_short(report: &BenfordReport) -> String {
    let verdict = match report.verdict {
        Verdict::Conforms => Style::ConformsWord.paint("conforms"),
        Verdict::Deviates => Style::DeviatesWord.paint("deviates"),
    };
    format!(
        "{} (chi2 = {:.2}, p = {:.5})",
        verdict, report.test.statistic, report.test.p_value
    )
}
