//! Core traits for two-sample tests

use catchment_core::Result;

use crate::types::{Alternative, TestResult};

/// Non-parametric test for a distributional difference between two samples
pub trait TwoSampleTest {
    /// Get the name of this test
    fn name(&self) -> &str;

    /// Alternative hypothesis the test evaluates
    fn alternative(&self) -> Alternative;

    /// Test `first` against `second`
    fn test(&self, first: &[f64], second: &[f64]) -> Result<TestResult>;
}
