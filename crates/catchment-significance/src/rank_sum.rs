//! Wilcoxon rank-sum test
//!
//! Large-sample form of the rank-sum test. With `R1` the rank sum of the
//! first sample in the pooled data (ties get average ranks):
//!
//! ```text
//! z = (R1 - n1 (n1 + n2 + 1) / 2) / sqrt(n1 n2 (n1 + n2 + 1) / 12)
//! ```
//!
//! No tie or continuity correction is applied; use [`MannWhitneyU`] for that.
//!
//! [`MannWhitneyU`]: crate::MannWhitneyU

use catchment_core::{math::average_ranks, Result};
use tracing::debug;

use crate::normal::{check_samples, normal_p_value};
use crate::traits::TwoSampleTest;
use crate::types::{Alternative, RankTest, TestResult};

/// Wilcoxon rank-sum test with normal approximation
#[derive(Debug, Clone, Copy, Default)]
pub struct WilcoxonRankSum {
    alternative: Alternative,
}

impl WilcoxonRankSum {
    /// Create a two-sided test
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the alternative hypothesis
    pub fn with_alternative(mut self, alternative: Alternative) -> Self {
        self.alternative = alternative;
        self
    }
}

impl TwoSampleTest for WilcoxonRankSum {
    fn name(&self) -> &str {
        RankTest::RankSum.name()
    }

    fn alternative(&self) -> Alternative {
        self.alternative
    }

    fn test(&self, first: &[f64], second: &[f64]) -> Result<TestResult> {
        check_samples(first, second)?;

        let n1 = first.len();
        let n2 = second.len();
        let pooled: Vec<f64> = first.iter().chain(second).copied().collect();
        let ranks = average_ranks(&pooled)?;
        let rank_sum: f64 = ranks[..n1].iter().sum();

        let (n1f, n2f) = (n1 as f64, n2 as f64);
        let expected = n1f * (n1f + n2f + 1.0) / 2.0;
        let std_dev = (n1f * n2f * (n1f + n2f + 1.0) / 12.0).sqrt();
        let z = (rank_sum - expected) / std_dev;
        let p_value = normal_p_value(z, self.alternative)?;

        debug!(n1, n2, rank_sum, z, p_value, "rank-sum test");
        Ok(TestResult {
            test: RankTest::RankSum,
            statistic: z,
            p_value,
            alternative: self.alternative,
            sample_sizes: (n1, n2),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_separated_samples() {
        // ranks of first sample: 1, 2, 3 -> R1 = 6, expected 10.5, sd = sqrt(5.25)
        let result = WilcoxonRankSum::new()
            .test(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0])
            .unwrap();
        let z = (6.0 - 10.5) / 5.25f64.sqrt();
        assert_abs_diff_eq!(result.statistic, z, epsilon = 1e-12);
        assert_abs_diff_eq!(result.p_value, 0.049534613435626706, epsilon = 1e-9);
        assert_eq!(result.sample_sizes, (3, 3));
    }

    #[test]
    fn test_identical_samples() {
        let result = WilcoxonRankSum::new()
            .test(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0])
            .unwrap();
        assert_abs_diff_eq!(result.statistic, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.p_value, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_antisymmetric_statistic() {
        let a = [0.3, 1.7, 2.2, 5.0, 0.9];
        let b = [2.5, 3.1, 4.4, 1.0];
        let ab = WilcoxonRankSum::new().test(&a, &b).unwrap();
        let ba = WilcoxonRankSum::new().test(&b, &a).unwrap();
        assert_abs_diff_eq!(ab.statistic, -ba.statistic, epsilon = 1e-12);
        assert_abs_diff_eq!(ab.p_value, ba.p_value, epsilon = 1e-12);
    }

    #[test]
    fn test_one_sided_alternatives() {
        let low = [1.0, 2.0, 3.0, 4.0];
        let high = [5.0, 6.0, 7.0, 8.0];
        let less = WilcoxonRankSum::new()
            .with_alternative(Alternative::Less)
            .test(&low, &high)
            .unwrap();
        let greater = WilcoxonRankSum::new()
            .with_alternative(Alternative::Greater)
            .test(&low, &high)
            .unwrap();
        assert!(less.p_value < 0.05);
        assert!(greater.p_value > 0.95);
        assert_abs_diff_eq!(less.p_value + greater.p_value, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_groups() {
        let test = WilcoxonRankSum::new();
        assert!(test.test(&[], &[1.0, 2.0]).is_err());
        assert!(test.test(&[1.0, 2.0], &[]).is_err());
    }
}
