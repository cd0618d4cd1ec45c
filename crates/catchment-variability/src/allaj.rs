//! Allaj's variability measure for categorical data
//!
//! From "Two Simple Measures of Variability for Categorical Data" (Allaj, 2017):
//!
//! ```text
//! v = 1 - sqrt(sum_i p_i^2)
//! ```
//!
//! where `p_i` is the relative frequency of category `i`. The measure is 0 when
//! every observation falls in one category and grows towards `1 - 1/sqrt(k)`
//! as `k` categories become equally frequent.

use catchment_core::{is_missing, Result};

use crate::traits::{VariabilityMeasure, VariabilityMeasureProperties};

/// Allaj's root-sum-of-squares variability measure
#[derive(Debug, Clone, Copy, Default)]
pub struct AllajVariability;

impl AllajVariability {
    /// Create a new estimator
    pub fn new() -> Self {
        Self
    }
}

impl VariabilityMeasureProperties for AllajVariability {
    fn name(&self) -> &str {
        "allaj"
    }

    fn upper_bound(&self, k: usize) -> f64 {
        if k == 0 {
            return 0.0;
        }
        1.0 - 1.0 / (k as f64).sqrt()
    }
}

impl VariabilityMeasure for AllajVariability {
    fn from_frequencies(&self, relative_frequencies: &[f64]) -> f64 {
        let sum_squares: f64 = relative_frequencies.iter().map(|p| p * p).sum();
        // rounding can push a single-category sum a hair above one
        (1.0 - sum_squares.sqrt()).max(0.0)
    }
}

/// Allaj variability of a list of observations, `None` marking missing values
pub fn categorical_variability<T, I>(observations: I) -> Result<f64>
where
    T: Ord,
    I: IntoIterator<Item = Option<T>>,
{
    AllajVariability.measure(observations)
}

/// Allaj variability of raw text cells, treating missing markers (`nan`, empty, ...) as missing
pub fn categorical_variability_of_cells<'a, I>(cells: I) -> Result<f64>
where
    I: IntoIterator<Item = &'a str>,
{
    categorical_variability(
        cells
            .into_iter()
            .map(|cell| (!is_missing(cell)).then(|| cell.trim())),
    )
}
