//! End-to-end tests from file to report.

use benford::{analyze_file, BenfordError, Config, DataError, Digit, Error, Verdict};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn digit(d: u8) -> Digit {
    Digit::new(d).unwrap()
}

/// Write one value per line, `counts[d - 1]` values leading with digit `d`.
fn write_counts(dir: &TempDir, name: &str, counts: [usize; 9]) -> PathBuf {
    let mut text = String::new();
    for (i, &count) in counts.iter().enumerate() {
        for k in 0..count {
            // Mix integers, decimals and negatives with the same leading digit
            let line = match k % 3 {
                0 => format!("{}{}", i + 1, k),
                1 => format!("0.00{}{}", i + 1, k),
                _ => format!("-{}.{}", i + 1, k),
            };
            text.push_str(&line);
            text.push('\n');
        }
    }
    write_file(dir, name, &text)
}

fn write_file(dir: &TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn benford_distributed_file_conforms() {
    let dir = TempDir::new().unwrap();
    let path = write_counts(&dir, "ledger.csv", [301, 176, 125, 97, 79, 67, 58, 51, 46]);

    let report = analyze_file(&path, &Config::default()).unwrap();

    assert_eq!(report.total(), 1000);
    assert_eq!(report.expected, [301.0, 176.0, 125.0, 97.0, 79.0, 67.0, 58.0, 51.0, 46.0]);
    assert!(report.test.statistic < 1e-9);
    assert!((report.test.p_value - 1.0).abs() < 1e-9);
    assert_eq!(report.test.degrees_of_freedom, 8);
    assert_eq!(report.verdict, Verdict::Conforms);
    assert_eq!(report.source.as_deref(), Some(path.display().to_string().as_str()));
}

#[test]
fn single_digit_file_deviates() {
    let dir = TempDir::new().unwrap();
    let path = write_counts(&dir, "nines.csv", [0, 0, 0, 0, 0, 0, 0, 0, 1000]);

    let report = analyze_file(&path, &Config::default()).unwrap();

    assert_eq!(report.observed.get(digit(9)), 1000);
    assert!(report.test.statistic > 1000.0);
    assert!(report.test.p_value < 1e-10);
    assert_eq!(report.verdict, Verdict::Deviates);
}

#[test]
fn uniform_digits_deviate() {
    let dir = TempDir::new().unwrap();
    let path = write_counts(&dir, "uniform.txt", [111; 9]);

    let report = analyze_file(&path, &Config::default()).unwrap();

    assert_eq!(report.total(), 999);
    assert!(report.test.p_value < 0.05);
    assert_eq!(report.verdict, Verdict::Deviates);
}

#[test]
fn significance_level_decides_verdict() {
    let dir = TempDir::new().unwrap();
    // Mild deviation from Benford
    let path = write_counts(&dir, "mild.csv", [285, 180, 130, 100, 80, 70, 60, 50, 45]);

    let lenient = analyze_file(&path, &Config::new().significance_level(0.001)).unwrap();
    let p = lenient.test.p_value;
    assert_eq!(lenient.verdict, Verdict::from_p_value(p, 0.001));

    let strict = analyze_file(&path, &Config::new().significance_level(0.999)).unwrap();
    assert_eq!(strict.test.p_value, p);
    assert_eq!(strict.verdict, Verdict::from_p_value(p, 0.999));
}

#[test]
fn header_row_is_skipped_when_declared() {
    let dir = TempDir::new().unwrap();
    let mut text = String::from("amount,memo\n");
    for d in 1..=9 {
        for k in 0..20 {
            text.push_str(&format!("{}{},x\n", d, k));
        }
    }
    let path = write_file(&dir, "with_header.csv", &text);

    let err = analyze_file(&path, &Config::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::Analysis(BenfordError::NoSignificantDigit { .. })
    ));

    let report = analyze_file(&path, &Config::new().has_header(true)).unwrap();
    assert_eq!(report.total(), 180);
}

#[test]
fn semicolon_delimited_file() {
    let dir = TempDir::new().unwrap();
    let mut text = String::new();
    for d in 1..=9 {
        for _ in 0..(10 - d) * 5 {
            text.push_str(&format!("{}00;2\n", d));
        }
    }
    let path = write_file(&dir, "export.txt", &text);

    let report = analyze_file(&path, &Config::new().delimiter(';')).unwrap();
    assert_eq!(report.observed.get(digit(1)), 45);
    assert_eq!(report.observed.get(digit(9)), 5);
}

#[test]
fn too_few_values_is_degenerate() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "tiny.csv", "12\n250\n31\n4.5\n0.09\n");

    let err = analyze_file(&path, &Config::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::Analysis(BenfordError::DegenerateExpectedValue { .. })
    ));
    assert!(err.is_per_item());
}

#[test]
fn empty_file_has_no_data() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "empty.csv", "\n\n");

    let err = analyze_file(&path, &Config::default()).unwrap_err();
    assert!(matches!(err, Error::Analysis(BenfordError::NoData)));
}

#[test]
fn zero_value_fails_whole_file() {
    let dir = TempDir::new().unwrap();
    let mut text = "123\n".repeat(50);
    text.push_str("0\n");
    let path = write_file(&dir, "zero.csv", &text);

    let err = analyze_file(&path, &Config::default()).unwrap_err();
    match err {
        Error::Analysis(BenfordError::NoSignificantDigit { value }) => assert_eq!(value, "0"),
        other => panic!("Expected NoSignificantDigit, got {other:?}"),
    }
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "values.json", "[1, 2, 3]");

    let err = analyze_file(&path, &Config::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::Data(DataError::UnsupportedFormat { ref extension }) if extension == ".json"
    ));
    assert_eq!(err.to_string(), "Cannot process file format: .json");
}

#[test]
fn missing_file_is_io_error() {
    let err = analyze_file(Path::new("/nonexistent/ledger.csv"), &Config::default()).unwrap_err();
    assert!(matches!(err, Error::Data(DataError::Io(_))));
    assert!(err.is_per_item());
}
