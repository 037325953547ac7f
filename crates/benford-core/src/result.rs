//! Result types for first-digit analysis.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{BENFORD_PROPORTIONS, DIGIT_COUNT};
use crate::counts::DigitCounts;

/// Outcome of a chi-squared goodness-of-fit test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    /// Pearson's chi-squared statistic, `sum((o - e)^2 / e)`.
    pub statistic: f64,

    /// Upper-tail probability of `statistic` under the null hypothesis.
    pub p_value: f64,

    /// Degrees of freedom: number of categories minus one.
    pub degrees_of_freedom: usize,
}

impl TestResult {
    /// Summary line with the statistic at 2 and the p-value at 5 decimals.
    pub fn summary_line(&self) -> String {
        format!(
            "Chi-Squared Test Statistic: [{:.2}]\tp-value: [{:.5}]",
            self.statistic, self.p_value
        )
    }
}

/// Whether the first digits are consistent with Benford's Law.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// p-value at or above the significance level.
    Conforms,
    /// p-value below the significance level; the data merits a closer look.
    Deviates,
}

impl Verdict {
    /// Compare a p-value against a significance level.
    pub fn from_p_value(p_value: f64, significance_level: f64) -> Self {
        if p_value < significance_level {
            Verdict::Deviates
        } else {
            Verdict::Conforms
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Conforms => write!(f, "Consistent with Benford's Law"),
            Verdict::Deviates => write!(f, "Deviates from Benford's Law"),
        }
    }
}

/// Full report of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenfordReport {
    /// Where the values came from (usually a file path).
    pub source: Option<String>,

    /// Observed count per leading digit, digit 1 first.
    pub observed: DigitCounts,

    /// Expected count per leading digit, digit 1 first.
    pub expected: [f64; DIGIT_COUNT],

    /// Observed share of each leading digit.
    pub observed_proportions: [f64; DIGIT_COUNT],

    /// Reference Benford proportions.
    pub benford_proportions: [f64; DIGIT_COUNT],

    /// Goodness-of-fit test outcome.
    pub test: TestResult,

    /// Significance level the verdict was taken at.
    pub significance_level: f64,

    /// Verdict at `significance_level`.
    pub verdict: Verdict,
}

impl BenfordReport {
    /// Assemble a report from the pipeline outputs.
    pub fn new(
        observed: DigitCounts,
        expected: [f64; DIGIT_COUNT],
        test: TestResult,
        significance_level: f64,
    ) -> Self {
        Self {
            source: None,
            observed,
            expected,
            observed_proportions: observed.proportions(),
            benford_proportions: BENFORD_PROPORTIONS,
            test,
            significance_level,
            verdict: Verdict::from_p_value(test.p_value, significance_level),
        }
    }

    /// Attach the data source.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Number of values analysed.
    pub fn total(&self) -> u64 {
        self.observed.total()
    }
}
