//! Per-identifier variability scores over a ratings table

use catchment_core::{Axis, Error, Lane, Result, Table};
use tracing::{debug, instrument, warn};

use crate::traits::VariabilityMeasure;

/// Variability score of every identifier along one axis
#[derive(Debug, Clone, PartialEq)]
pub struct VariabilityScores {
    axis: Axis,
    entries: Vec<(String, f64)>,
}

impl VariabilityScores {
    /// Create from `(identifier, score)` pairs
    pub fn new(axis: Axis, entries: Vec<(String, f64)>) -> Self {
        Self { axis, entries }
    }

    /// Axis the identifiers belong to
    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Score of one identifier
    pub fn get(&self, id: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, score)| *score)
    }

    /// Scores in table order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|(id, score)| (id.as_str(), *score))
    }

    /// Identifiers ordered from most homogeneous to most dispersed
    ///
    /// Equal scores keep table order.
    pub fn ascending(&self) -> Vec<(&str, f64)> {
        let mut sorted: Vec<_> = self.iter().collect();
        sorted.sort_by(|a, b| a.1.total_cmp(&b.1));
        sorted
    }
}

/// Score every row of `table`
pub fn row_scores<T, M>(table: &Table<Option<T>>, measure: &M) -> Result<VariabilityScores>
where
    T: Ord + Sync,
    M: VariabilityMeasure + Sync,
{
    scores_for_axis(table, table.row_axis(), measure)
}

/// Score every column of `table`
pub fn column_scores<T, M>(table: &Table<Option<T>>, measure: &M) -> Result<VariabilityScores>
where
    T: Ord + Sync,
    M: VariabilityMeasure + Sync,
{
    scores_for_axis(table, table.column_axis(), measure)
}

/// Score every identifier of `axis`, whichever way the table is oriented
///
/// Identifiers whose cells are all missing have no defined score; they are
/// logged and left out of the result.
#[instrument(skip(table, measure), fields(measure = measure.name()))]
pub fn scores_for_axis<T, M>(
    table: &Table<Option<T>>,
    axis: Axis,
    measure: &M,
) -> Result<VariabilityScores>
where
    T: Ord + Sync,
    M: VariabilityMeasure + Sync,
{
    let lanes = table.lanes(axis);
    let results = measure_lanes(&lanes, measure);

    let mut entries = Vec::with_capacity(results.len());
    for (id, result) in results {
        match result {
            Ok(score) => entries.push((id.to_string(), score)),
            Err(Error::InsufficientData { .. }) => {
                warn!(axis = %axis, id, "no non-missing ratings, skipping variability");
            }
            Err(e) => return Err(e),
        }
    }
    debug!(axis = %axis, scored = entries.len(), total = lanes.len(), "computed variability");
    Ok(VariabilityScores::new(axis, entries))
}

#[cfg(not(feature = "parallel"))]
fn measure_lanes<'a, T, M>(lanes: &[Lane<'a, Option<T>>], measure: &M) -> Vec<(&'a str, Result<f64>)>
where
    T: Ord,
    M: VariabilityMeasure,
{
    lanes
        .iter()
        .map(|lane| (lane.id, measure.measure(lane.cells.iter().copied().map(Option::as_ref))))
        .collect()
}

#[cfg(feature = "parallel")]
fn measure_lanes<'a, T, M>(lanes: &[Lane<'a, Option<T>>], measure: &M) -> Vec<(&'a str, Result<f64>)>
where
    T: Ord + Sync,
    M: VariabilityMeasure + Sync,
{
    use rayon::prelude::*;

    lanes
        .par_iter()
        .map(|lane| (lane.id, measure.measure(lane.cells.iter().copied().map(Option::as_ref))))
        .collect()
}
