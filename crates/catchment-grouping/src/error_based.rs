//! Error-based selection: identifiers with extreme mean least-squares error

use catchment_core::{
    math::{linear_quantile, mean_present},
    Axis, BehaviorLabel, Error, ErrorTable, Result,
};
use tracing::{debug, instrument};

use crate::policy::{GroupAssignment, SelectionPolicy};

/// Mean error of every identifier of `axis`, missing cells skipped
///
/// Identifiers without any error value are left out; a non-finite error is
/// an error.
pub fn mean_errors(errors: &ErrorTable, axis: Axis) -> Result<Vec<(String, f64)>> {
    let mut means = Vec::new();
    for lane in errors.lanes(axis) {
        if let Some(mean) = mean_present(lane.cells.iter().copied())? {
            means.push((lane.id.to_string(), mean));
        }
    }
    Ok(means)
}

/// Split identifiers at the `quantile` and `1 - quantile` quantiles of their mean errors
///
/// Means strictly below the lower cut are "simple", means strictly above the
/// upper cut are "complex"; everything in between stays unassigned.
#[instrument(skip(errors))]
pub fn select_by_error(errors: &ErrorTable, axis: Axis, quantile: f64) -> Result<GroupAssignment> {
    let policy = SelectionPolicy::ErrorBased { quantile };
    policy.validate()?;

    let means = mean_errors(errors, axis)?;
    if means.is_empty() {
        return Err(Error::empty_input("error-based selection"));
    }

    let values: Vec<f64> = means.iter().map(|(_, mean)| *mean).collect();
    let lower = linear_quantile(&values, quantile)?;
    let upper = linear_quantile(&values, 1.0 - quantile)?;
    debug!(axis = %axis, lower, upper, identifiers = means.len(), "error quantile cuts");

    let simple: Vec<String> = means
        .iter()
        .filter(|(_, mean)| *mean < lower)
        .map(|(id, _)| id.clone())
        .collect();
    let complex: Vec<String> = means
        .iter()
        .filter(|(_, mean)| *mean > upper)
        .map(|(id, _)| id.clone())
        .collect();

    GroupAssignment::new(
        axis,
        policy,
        vec![
            (BehaviorLabel::Simple, simple),
            (BehaviorLabel::Complex, complex),
        ],
    )
}
