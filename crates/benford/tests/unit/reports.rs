//! Rendering of reports and batch summaries.

use benford::output::{format_batch_summary, format_report, render_report};
use benford::{plot_report, run_batch, Config, FileOutcome, OutputFormat};
use std::fs;

fn write_benford(path: &std::path::Path) {
    let counts = [301, 176, 125, 97, 79, 67, 58, 51, 46];
    let mut text = String::new();
    for (i, &count) in counts.iter().enumerate() {
        for k in 0..count {
            text.push_str(&format!("{}.{}\n", i + 1, k));
        }
    }
    fs::write(path, text).unwrap();
}

#[test]
fn text_report_contains_summary_line() {
    colored::control::set_override(false);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.csv");
    write_benford(&path);

    let report = benford::analyze_file(&path, &Config::default()).unwrap();
    let text = format_report(&report);

    assert!(text.contains("Chi-Squared Test Statistic: [0.00]\tp-value: [1.00000]"));
    assert!(text.contains("ledger.csv"));
}

#[test]
fn json_report_is_machine_readable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.csv");
    write_benford(&path);

    let report = benford::analyze_file(&path, &Config::default()).unwrap();
    let json = render_report(&report, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["observed"][0], 301);
    assert_eq!(value["test"]["degrees_of_freedom"], 8);
    assert_eq!(value["expected"].as_array().unwrap().len(), 9);
}

#[test]
fn batch_summary_lists_every_file() {
    colored::control::set_override(false);
    let dir = tempfile::tempdir().unwrap();
    write_benford(&dir.path().join("a.csv"));
    fs::write(dir.path().join("b.pdf"), "%PDF").unwrap();

    let mut printed = 0;
    let summary = run_batch(dir.path(), &Config::default(), |outcome| {
        if let FileOutcome::Analysed { .. } = outcome {
            printed += 1;
        }
    })
    .unwrap();
    assert_eq!(printed, 1);

    let text = format_batch_summary(&summary);
    assert!(text.contains("Batch: 2 files, 1 analysed, 1 failed"));
    assert!(text.contains("Cannot process file format: .pdf"));
}

#[test]
fn chart_written_next_to_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.csv");
    write_benford(&path);
    let config = Config::new().plot_dir(dir.path().join("charts"));

    let report = benford::analyze_file(&path, &config).unwrap();
    let chart = plot_report(&report, &path, &config).unwrap().unwrap();

    assert_eq!(chart, dir.path().join("charts").join("ledger.png"));
    assert!(fs::metadata(&chart).unwrap().len() > 0);
}

#[test]
fn no_chart_without_plot_dir() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.csv");
    write_benford(&path);

    let report = benford::analyze_file(&path, &Config::default()).unwrap();
    assert_eq!(plot_report(&report, &path, &Config::default()).unwrap(), None);
}
