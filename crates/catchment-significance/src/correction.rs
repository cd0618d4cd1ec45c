//! Multiple-comparison correction of p-values

use serde::{Deserialize, Serialize};

use crate::types::TestResult;

/// Correction applied to each p-value of a family of comparisons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "kebab-case")]
pub enum Correction {
    /// Report raw p-values
    #[default]
    None,
    /// Multiply by the number of comparisons, capped at one
    Bonferroni { comparisons: usize },
}

impl Correction {
    /// Adjust a single p-value
    pub fn adjust(&self, p_value: f64) -> f64 {
        match *self {
            Self::None => p_value,
            Self::Bonferroni { comparisons } => bonferroni(p_value, comparisons),
        }
    }

    /// Adjust the p-value of a test result
    pub fn apply(&self, result: &TestResult) -> TestResult {
        result.with_p_value(self.adjust(result.p_value))
    }
}

/// Bonferroni-adjusted p-value for `comparisons` simultaneous tests
pub fn bonferroni(p_value: f64, comparisons: usize) -> f64 {
    (p_value * comparisons.max(1) as f64).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Alternative, RankTest};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_bonferroni() {
        assert_abs_diff_eq!(bonferroni(0.01, 15), 0.15, epsilon = 1e-12);
        assert_eq!(bonferroni(0.2, 11), 1.0);
        assert_eq!(bonferroni(0.2, 0), 0.2);
    }

    #[test]
    fn test_apply_keeps_statistic() {
        let raw = TestResult {
            test: RankTest::RankSum,
            statistic: -2.1,
            p_value: 0.03,
            alternative: Alternative::TwoSided,
            sample_sizes: (10, 10),
        };
        let adjusted = Correction::Bonferroni { comparisons: 11 }.apply(&raw);
        assert_abs_diff_eq!(adjusted.p_value, 0.33, epsilon = 1e-12);
        assert_eq!(adjusted.statistic, raw.statistic);
        assert_eq!(Correction::None.apply(&raw), raw);
    }
}
