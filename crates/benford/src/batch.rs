//! Batch analysis of every file in a directory.
//!
//! Each file is analysed independently. A failing file is logged and
//! recorded, and the batch moves on. Only errors that concern the batch
//! as a whole (an unreadable directory, an invalid configuration) stop it.

use std::fs;
use std::path::{Path, PathBuf};

use benford_core::BenfordReport;

use crate::data::DataError;
use crate::{analyze_file, plot_report, Config, Error};

/// Result of analysing one file in a batch.
#[derive(Debug, Clone)]
pub enum FileOutcome {
    /// The file was analysed.
    Analysed {
        /// The analysed file.
        path: PathBuf,
        /// Its report.
        report: Box<BenfordReport>,
        /// Why the chart could not be written, if one was requested.
        chart_error: Option<String>,
    },
    /// The file could not be analysed.
    Failed {
        /// The file that failed.
        path: PathBuf,
        /// Rendered error message.
        error: String,
    },
}

impl FileOutcome {
    /// The file this outcome is about.
    pub fn path(&self) -> &Path {
        match self {
            FileOutcome::Analysed { path, .. } | FileOutcome::Failed { path, .. } => path,
        }
    }

    /// The report, if the file was analysed.
    pub fn report(&self) -> Option<&BenfordReport> {
        match self {
            FileOutcome::Analysed { report, .. } => Some(report),
            FileOutcome::Failed { .. } => None,
        }
    }
}

/// Outcomes of a batch run, in processing order.
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    /// One outcome per file.
    pub outcomes: Vec<FileOutcome>,
}

impl BatchSummary {
    /// Number of files analysed successfully.
    pub fn analysed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.report().is_some()).count()
    }

    /// Number of files that failed.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.analysed()
    }

    /// Reports of the analysed files.
    pub fn reports(&self) -> impl Iterator<Item = &BenfordReport> {
        self.outcomes.iter().filter_map(FileOutcome::report)
    }
}

/// Analyse every regular file directly inside `dir`, in file name order.
///
/// `on_file` is called after each file, so callers can print results as
/// they arrive.
///
/// # Errors
///
/// [`Error::Config`] for an invalid configuration and [`Error::Directory`]
/// if `dir` cannot be listed. Per-file failures are recorded in the
/// summary instead.
pub fn run_batch<F>(dir: &Path, config: &Config, mut on_file: F) -> Result<BatchSummary, Error>
where
    F: FnMut(&FileOutcome),
{
    config.validate().map_err(Error::Config)?;

    let mut summary = BatchSummary::default();
    for file in list_files(dir)? {
        analyze_into(file, config, &mut on_file, &mut summary)?;
    }
    log_summary(&summary);
    Ok(summary)
}

/// Analyse a mix of files and directories, appending to `summary`.
///
/// Directories are expanded to the regular files they contain (not
/// recursively); anything else is analysed as a file. A path that does not
/// exist is recorded as a failed file.
///
/// # Errors
///
/// As [`run_batch`], for each directory given.
pub fn run_paths<F>(
    paths: &[PathBuf],
    config: &Config,
    mut on_file: F,
    summary: &mut BatchSummary,
) -> Result<(), Error>
where
    F: FnMut(&FileOutcome),
{
    config.validate().map_err(Error::Config)?;

    for path in paths {
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => {
                for file in list_files(path)? {
                    analyze_into(file, config, &mut on_file, summary)?;
                }
            }
            Ok(_) => analyze_into(path.clone(), config, &mut on_file, summary)?,
            Err(source) => {
                let error = Error::Data(DataError::Io(source));
                record(fail(path.clone(), &error), &mut on_file, summary);
            }
        }
    }

    log_summary(summary);
    Ok(())
}

/// Analyse one file and record the outcome.
///
/// A chart that cannot be written is logged and kept next to the report;
/// the analysis itself still counts as done.
fn analyze_into<F>(
    file: PathBuf,
    config: &Config,
    on_file: &mut F,
    summary: &mut BatchSummary,
) -> Result<(), Error>
where
    F: FnMut(&FileOutcome),
{
    tracing::info!(path = %file.display(), "testing");
    let outcome = match analyze_file(&file, config) {
        Ok(report) => {
            let chart_error = match plot_report(&report, &file, config) {
                Ok(_) => None,
                Err(error) => {
                    tracing::warn!(path = %file.display(), %error, "chart not written");
                    Some(error.to_string())
                }
            };
            FileOutcome::Analysed {
                path: file,
                report: Box::new(report),
                chart_error,
            }
        }
        Err(error) if error.is_per_item() => fail(file, &error),
        Err(error) => return Err(error),
    };
    record(outcome, on_file, summary);
    Ok(())
}

fn fail(path: PathBuf, error: &Error) -> FileOutcome {
    tracing::warn!(path = %path.display(), %error, "analysis failed");
    FileOutcome::Failed {
        path,
        error: error.to_string(),
    }
}

fn record<F>(outcome: FileOutcome, on_file: &mut F, summary: &mut BatchSummary)
where
    F: FnMut(&FileOutcome),
{
    on_file(&outcome);
    summary.outcomes.push(outcome);
}

fn log_summary(summary: &BatchSummary) {
    tracing::info!(
        analysed = summary.analysed(),
        failed = summary.failed(),
        "batch complete"
    );
}

/// Regular files directly inside `dir`, sorted by path.
fn list_files(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let directory_error = |source| Error::Directory {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(directory_error)? {
        let path = entry.map_err(directory_error)?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_benford_csv(path: &Path) {
        let counts = [301, 176, 125, 97, 79, 67, 58, 51, 46];
        let mut text = String::new();
        for (i, &count) in counts.iter().enumerate() {
            for k in 0..count {
                text.push_str(&format!("{}{}\n", i + 1, k % 100));
            }
        }
        fs::write(path, text).unwrap();
    }

    #[test]
    fn test_batch_continues_after_failures() {
        let dir = tempfile::tempdir().unwrap();
        write_benford_csv(&dir.path().join("a_good.csv"));
        fs::write(dir.path().join("b_notes.json"), "{}").unwrap();
        fs::write(dir.path().join("c_bad.csv"), "12\nabc\n").unwrap();
        fs::create_dir(dir.path().join("d_subdir")).unwrap();

        let mut seen = Vec::new();
        let summary = run_batch(dir.path(), &Config::default(), |o| {
            seen.push(o.path().file_name().unwrap().to_string_lossy().into_owned())
        })
        .unwrap();

        assert_eq!(seen, vec!["a_good.csv", "b_notes.json", "c_bad.csv"]);
        assert_eq!(summary.analysed(), 1);
        assert_eq!(summary.failed(), 2);

        let report = summary.reports().next().unwrap();
        assert_eq!(report.total(), 1000);
        assert!(report.test.statistic < 1e-9);

        match &summary.outcomes[1] {
            FileOutcome::Failed { error, .. } => {
                assert_eq!(error, "Cannot process file format: .json")
            }
            other => panic!("Expected failure, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_directory_aborts() {
        let result = run_batch(
            Path::new("/nonexistent/benford-data"),
            &Config::default(),
            |_| {},
        );
        assert!(matches!(result, Err(Error::Directory { .. })));
    }

    #[test]
    fn test_invalid_config_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.significance_level = 2.0;
        let result = run_batch(dir.path(), &config, |_| {});
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_run_paths_mixes_files_and_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        write_benford_csv(&nested.join("x.csv"));
        let single = dir.path().join("y.txt");
        write_benford_csv(&single);

        let mut summary = BatchSummary::default();
        run_paths(&[nested, single], &Config::default(), |_| {}, &mut summary).unwrap();
        assert_eq!(summary.analysed(), 2);
        assert_eq!(summary.failed(), 0);
    }

    #[test]
    fn test_missing_path_is_recorded_as_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-ledger");

        let mut summary = BatchSummary::default();
        run_paths(&[missing.clone()], &Config::default(), |_| {}, &mut summary).unwrap();

        assert_eq!(summary.failed(), 1);
        match &summary.outcomes[0] {
            FileOutcome::Failed { path, error } => {
                assert_eq!(path, &missing);
                assert!(error.starts_with("IO error:"), "unexpected error: {error}");
            }
            other => panic!("Expected failure, got {other:?}"),
        }
    }

    #[test]
    fn test_chart_failure_keeps_report() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("data");
        fs::create_dir(&data_dir).unwrap();
        write_benford_csv(&data_dir.join("ledger.csv"));
        // A regular file where the chart directory should be
        let blocked = dir.path().join("charts");
        fs::write(&blocked, "").unwrap();

        let config = Config::new().plot_dir(blocked.clone());
        let summary = run_batch(&data_dir, &config, |_| {}).unwrap();

        assert_eq!(summary.analysed(), 1);
        match &summary.outcomes[0] {
            FileOutcome::Analysed {
                report,
                chart_error,
                ..
            } => {
                assert_eq!(report.total(), 1000);
                let message = chart_error.as_deref().unwrap();
                assert!(message.starts_with("Failed to create output directory"));
            }
            other => panic!("Expected analysed file, got {other:?}"),
        }
    }
}
