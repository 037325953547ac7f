//! Tests for configuration validation.
//!
//! Builder methods panic on invalid values; configurations assembled field
//! by field are rejected when a run starts.

use benford::{analyze_file, Config, Error};
use std::path::Path;

// =============================================================================
// SIGNIFICANCE LEVEL
// =============================================================================

#[test]
#[should_panic(expected = "significance_level must be in (0, 1)")]
fn significance_level_zero_panics() {
    let _ = Config::new().significance_level(0.0);
}

#[test]
#[should_panic(expected = "significance_level must be in (0, 1)")]
fn significance_level_one_panics() {
    let _ = Config::new().significance_level(1.0);
}

#[test]
fn significance_level_small_valid() {
    let config = Config::new().significance_level(0.001);
    assert_eq!(config.significance_level, 0.001);
    assert!(config.validate().is_ok());
}

#[test]
fn invalid_significance_level_rejected_before_loading() {
    let mut config = Config::default();
    config.significance_level = -0.5;
    // The file does not exist; validation must fail first
    let err = analyze_file(Path::new("/nonexistent/values.csv"), &config).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert!(!err.is_per_item());
}

// =============================================================================
// DELIMITER
// =============================================================================

#[test]
#[should_panic(expected = "delimiter must not be a digit")]
fn digit_delimiter_panics() {
    let _ = Config::new().delimiter('7');
}

#[test]
fn common_delimiters_valid() {
    for delimiter in [',', ';', '\t', '|'] {
        assert!(Config::new().delimiter(delimiter).validate().is_ok());
    }
}

#[test]
fn decimal_point_delimiter_rejected() {
    let mut config = Config::default();
    config.delimiter = '.';
    let message = config.validate().unwrap_err();
    assert!(message.contains("'.'"), "unexpected message: {message}");
}
