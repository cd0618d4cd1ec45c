//! Types for two-sample test results

use std::fmt;

use serde::{Deserialize, Serialize};

/// Alternative hypothesis of a two-sample test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alternative {
    /// The distributions differ
    #[default]
    TwoSided,
    /// The first sample tends to be smaller
    Less,
    /// The first sample tends to be larger
    Greater,
}

/// Which rank test produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RankTest {
    /// Wilcoxon rank-sum z test, no tie or continuity correction
    RankSum,
    /// Mann-Whitney U with tie and continuity correction
    MannWhitney,
}

impl RankTest {
    /// Get the name of the test
    pub fn name(&self) -> &'static str {
        match self {
            Self::RankSum => "Wilcoxon rank-sum",
            Self::MannWhitney => "Mann-Whitney U",
        }
    }
}

impl Default for RankTest {
    fn default() -> Self {
        Self::RankSum
    }
}

/// Outcome of a two-sample test
#[derive(Debug, Clone, PartialEq)]
pub struct TestResult {
    /// Test that produced the result
    pub test: RankTest,
    /// Test statistic (z for rank-sum, U of the first sample for Mann-Whitney)
    pub statistic: f64,
    /// p-value under the chosen alternative
    pub p_value: f64,
    /// Alternative hypothesis
    pub alternative: Alternative,
    /// Sample sizes (first, second)
    pub sample_sizes: (usize, usize),
}

impl TestResult {
    /// Check significance at level `alpha`
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }

    /// p-value rounded to `decimals` places, as shown in figure titles
    pub fn rounded_p_value(&self, decimals: i32) -> f64 {
        let scale = 10f64.powi(decimals);
        (self.p_value * scale).round() / scale
    }

    /// Copy of this result with an adjusted p-value
    pub fn with_p_value(&self, p_value: f64) -> Self {
        Self {
            p_value,
            ..self.clone()
        }
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: statistic={:.4}, p={:.4} (n1={}, n2={})",
            self.test.name(),
            self.statistic,
            self.p_value,
            self.sample_sizes.0,
            self.sample_sizes.1
        )
    }
}
