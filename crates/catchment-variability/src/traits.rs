//! Core traits for categorical variability measures

use std::collections::BTreeMap;

use catchment_core::{Error, Result};

/// Intrinsic properties of a variability measure
pub trait VariabilityMeasureProperties {
    /// Get the name of this measure
    fn name(&self) -> &str;

    /// Largest value the measure can take for `k` distinct categories
    fn upper_bound(&self, k: usize) -> f64;
}

/// Dispersion measure for categorical observations
///
/// Implementors only define the measure on relative frequencies; counting
/// categories and discarding missing observations is shared.
pub trait VariabilityMeasure: VariabilityMeasureProperties {
    /// Measure computed from relative frequencies summing to one
    fn from_frequencies(&self, relative_frequencies: &[f64]) -> f64;

    /// Measure a list of observations, `None` marking a missing value
    ///
    /// Fails with `InsufficientData` when nothing is left after removing
    /// missing values.
    fn measure<T, I>(&self, observations: I) -> Result<f64>
    where
        T: Ord,
        I: IntoIterator<Item = Option<T>>,
    {
        let frequencies = relative_frequencies(observations)?;
        Ok(self.from_frequencies(&frequencies))
    }
}

/// Relative frequency of every distinct non-missing category
///
/// Frequencies are returned in canonical (sorted) category order.
pub fn relative_frequencies<T, I>(observations: I) -> Result<Vec<f64>>
where
    T: Ord,
    I: IntoIterator<Item = Option<T>>,
{
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    let mut total = 0usize;
    for category in observations.into_iter().flatten() {
        *counts.entry(category).or_insert(0) += 1;
        total += 1;
    }
    if total == 0 {
        return Err(Error::empty_input("relative frequencies"));
    }
    Ok(counts
        .into_values()
        .map(|count| count as f64 / total as f64)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_frequencies_ignore_missing() {
        let freqs = relative_frequencies(vec![Some("b"), None, Some("a"), Some("b"), Some("b")])
            .unwrap();
        assert_eq!(freqs, vec![0.25, 0.75]);
    }

    #[test]
    fn test_relative_frequencies_empty() {
        let result = relative_frequencies::<&str, _>(vec![None, None]);
        assert!(matches!(
            result,
            Err(Error::InsufficientData { expected: 1, actual: 0, .. })
        ));
    }
}
