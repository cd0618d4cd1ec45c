//! Numeric helpers shared across the catchment analysis crates

use crate::{Error, Result};

/// Arithmetic mean of a non-empty sample
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(Error::empty_input("mean"));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Mean of the present values; `Ok(None)` when every value is missing
///
/// A present NaN or infinity is an error rather than a skipped cell.
pub fn mean_present<'a, I>(values: I) -> Result<Option<f64>>
where
    I: IntoIterator<Item = &'a Option<f64>>,
{
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values.into_iter().flatten() {
        if !value.is_finite() {
            return Err(Error::non_finite("averaged values"));
        }
        sum += value;
        count += 1;
    }
    Ok((count > 0).then(|| sum / count as f64))
}

/// Sorted copy of a sample, rejecting NaN and infinities
pub fn sorted_finite(values: &[f64]) -> Result<Vec<f64>> {
    if values.iter().any(|x| !x.is_finite()) {
        return Err(Error::non_finite("sample"));
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(sorted)
}

/// Quantile of sorted data by linear interpolation between order statistics
///
/// With `h = (n - 1) p` the result is `x[floor(h)] + (h - floor(h)) (x[floor(h) + 1] - x[floor(h)])`.
pub fn linear_quantile_sorted(sorted: &[f64], p: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::invalid_quantile(p));
    }
    let n = sorted.len();
    if n == 0 {
        return Err(Error::empty_input("quantile"));
    }

    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    if lo + 1 >= n {
        return Ok(sorted[n - 1]);
    }
    let frac = h - lo as f64;
    Ok(sorted[lo] + frac * (sorted[lo + 1] - sorted[lo]))
}

/// Quantile of unsorted data by linear interpolation
pub fn linear_quantile(values: &[f64], p: f64) -> Result<f64> {
    let sorted = sorted_finite(values)?;
    linear_quantile_sorted(&sorted, p)
}

/// 1-based ranks with ties assigned their average rank
pub fn average_ranks(values: &[f64]) -> Result<Vec<f64>> {
    if values.iter().any(|x| x.is_nan()) {
        return Err(Error::non_finite("ranked sample"));
    }
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = vec![0.0; values.len()];
    let mut start = 0;
    while start < order.len() {
        let mut end = start + 1;
        while end < order.len() && values[order[end]] == values[order[start]] {
            end += 1;
        }
        // positions start..end share ranks start+1..=end
        let shared = (start + 1 + end) as f64 / 2.0;
        for &idx in &order[start..end] {
            ranks[idx] = shared;
        }
        start = end;
    }
    Ok(ranks)
}

/// Sizes of the groups of tied values (groups of one included)
pub fn tie_group_sizes(values: &[f64]) -> Result<Vec<usize>> {
    let sorted = sorted_finite(values)?;
    let mut sizes = Vec::new();
    let mut start = 0;
    while start < sorted.len() {
        let mut end = start + 1;
        while end < sorted.len() && sorted[end] == sorted[start] {
            end += 1;
        }
        sizes.push(end - start);
        start = end;
    }
    Ok(sizes)
}
