//! Two-sample rank tests for attribute comparisons
//!
//! Attribute distributions of the "simple" and "complex" catchment groups are
//! compared without assuming normality:
//!
//! - **Wilcoxon rank-sum** ([`WilcoxonRankSum`]): the plain large-sample z test
//! - **Mann-Whitney U** ([`MannWhitneyU`]): tie-corrected variance with a
//!   continuity correction
//!
//! Both report two-sided p-values by default, and a [`Correction`] can adjust
//! them for the number of attributes compared.
//!
//! # Example
//!
//! ```rust
//! use catchment_significance::{rank_sum, TwoSampleTest};
//!
//! let simple = vec![112.0, 98.5, 130.2, 101.7];
//! let complex = vec![210.4, 180.9, 199.0, 250.3, 176.1];
//!
//! let result = rank_sum().test(&simple, &complex).unwrap();
//! assert!(result.statistic < 0.0);
//! println!("p = {:.3}", result.p_value);
//! ```

mod correction;
mod mann_whitney;
mod normal;
mod rank_sum;
mod traits;
mod types;

// Re-exports
pub use correction::{bonferroni, Correction};
pub use mann_whitney::MannWhitneyU;
pub use rank_sum::WilcoxonRankSum;
pub use traits::TwoSampleTest;
pub use types::{Alternative, RankTest, TestResult};

// Convenience constructors
pub fn rank_sum() -> WilcoxonRankSum {
    WilcoxonRankSum::new()
}

pub fn mann_whitney() -> MannWhitneyU {
    MannWhitneyU::new()
}

/// Two-sided test for a configured method
pub fn rank_test(method: RankTest) -> Box<dyn TwoSampleTest + Send + Sync> {
    match method {
        RankTest::RankSum => Box::new(WilcoxonRankSum::new()),
        RankTest::MannWhitney => Box::new(MannWhitneyU::new()),
    }
}
