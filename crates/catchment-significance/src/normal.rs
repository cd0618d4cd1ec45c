//! Standard normal p-values for large-sample rank statistics

use catchment_core::{Error, Result};
use statrs::distribution::{ContinuousCDF, Normal};

use crate::types::Alternative;

/// p-value of a standard normal statistic `z` under `alternative`
pub(crate) fn normal_p_value(z: f64, alternative: Alternative) -> Result<f64> {
    if !z.is_finite() {
        return Err(Error::non_finite("z statistic"));
    }
    let p = match alternative {
        Alternative::TwoSided => 2.0 * standard_normal_sf(z.abs())?,
        Alternative::Greater => standard_normal_sf(z)?,
        Alternative::Less => standard_normal_sf(-z)?,
    };
    Ok(p.clamp(0.0, 1.0))
}

/// Survival function `P(Z > z)` of the standard normal
pub(crate) fn standard_normal_sf(z: f64) -> Result<f64> {
    let normal = Normal::new(0.0, 1.0).map_err(|e| {
        Error::Computation(format!("Failed to create normal distribution: {e}"))
    })?;
    // cdf(-z) avoids cancellation in the upper tail
    Ok(normal.cdf(-z))
}

/// Check that both samples are non-empty and finite
pub(crate) fn check_samples(first: &[f64], second: &[f64]) -> Result<()> {
    for sample in [first, second] {
        if sample.is_empty() {
            return Err(Error::empty_input("rank test sample"));
        }
        if sample.iter().any(|x| !x.is_finite()) {
            return Err(Error::non_finite("test sample"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_two_sided_reference_values() {
        assert_abs_diff_eq!(normal_p_value(0.0, Alternative::TwoSided).unwrap(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(normal_p_value(1.959964, Alternative::TwoSided).unwrap(), 0.05, epsilon = 1e-6);
        assert_abs_diff_eq!(normal_p_value(-1.959964, Alternative::TwoSided).unwrap(), 0.05, epsilon = 1e-6);
    }

    #[test]
    fn test_one_sided() {
        let greater = normal_p_value(1.644854, Alternative::Greater).unwrap();
        let less = normal_p_value(1.644854, Alternative::Less).unwrap();
        assert_abs_diff_eq!(greater, 0.05, epsilon = 1e-6);
        assert_abs_diff_eq!(less, 0.95, epsilon = 1e-6);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(normal_p_value(f64::NAN, Alternative::TwoSided).is_err());
        assert!(check_samples(&[], &[1.0]).is_err());
        assert!(check_samples(&[1.0], &[f64::INFINITY]).is_err());
        assert!(check_samples(&[1.0], &[2.0]).is_ok());
    }
}
