//! Mode-based selection: most homogeneous identifiers per predominant label

use std::collections::BTreeMap;

use catchment_core::{Axis, BehaviorLabel, RatingsTable, Result};
use catchment_variability::VariabilityScores;
use tracing::{debug, instrument, warn};

use crate::policy::{GroupAssignment, SelectionPolicy};

/// Most frequent label of a list of ratings
///
/// Ties resolve to the label that sorts first (`Simple` before `Complex`).
/// Returns `None` when every rating is missing.
pub fn predominant_label<'a, I>(ratings: I) -> Option<BehaviorLabel>
where
    I: IntoIterator<Item = &'a Option<BehaviorLabel>>,
{
    let mut counts: BTreeMap<BehaviorLabel, usize> = BTreeMap::new();
    for label in ratings.into_iter().flatten() {
        *counts.entry(*label).or_insert(0) += 1;
    }

    let mut best: Option<(BehaviorLabel, usize)> = None;
    for (label, count) in counts {
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((label, count));
        }
    }
    best.map(|(label, _)| label)
}

/// Predominant label of every identifier of `axis` that has one
pub fn predominant_labels(ratings: &RatingsTable, axis: Axis) -> Vec<(String, BehaviorLabel)> {
    ratings
        .lanes(axis)
        .into_iter()
        .filter_map(|lane| {
            let mode = predominant_label(lane.cells.iter().copied());
            if mode.is_none() {
                debug!(axis = %axis, id = lane.id, "no ratings, no predominant label");
            }
            mode.map(|label| (lane.id.to_string(), label))
        })
        .collect()
}

/// Keep, for every label that is predominant somewhere, the `per_group`
/// identifiers with the lowest variability
#[instrument(skip(ratings, variability))]
pub fn select_by_mode(
    ratings: &RatingsTable,
    axis: Axis,
    variability: &VariabilityScores,
    per_group: usize,
) -> Result<GroupAssignment> {
    let modes = predominant_labels(ratings, axis);

    let mut groups = Vec::new();
    for label in BehaviorLabel::ALL {
        let mut candidates: Vec<(&str, f64)> = Vec::new();
        for (id, mode) in &modes {
            if *mode != label {
                continue;
            }
            match variability.get(id) {
                Some(score) => candidates.push((id.as_str(), score)),
                None => warn!(axis = %axis, id = id.as_str(), "no variability score, not selectable"),
            }
        }
        if candidates.is_empty() {
            debug!(axis = %axis, label = %label, "label is never predominant");
            continue;
        }

        // stable: equal scores keep table order
        candidates.sort_by(|a, b| a.1.total_cmp(&b.1));
        let selected: Vec<String> = candidates
            .into_iter()
            .take(per_group)
            .map(|(id, _)| id.to_string())
            .collect();
        debug!(axis = %axis, label = %label, ids = ?selected, "most homogeneous identifiers");
        groups.push((label, selected));
    }

    GroupAssignment::new(axis, SelectionPolicy::ModeBased { per_group }, groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catchment_core::BehaviorLabel::{Complex, Simple};
    use catchment_core::Table;
    use catchment_variability::{scores_for_axis, AllajVariability};

    #[test]
    fn test_predominant_label() {
        assert_eq!(predominant_label(&[Some(Simple), Some(Complex), Some(Complex)]), Some(Complex));
        assert_eq!(predominant_label(&[Some(Complex), None, Some(Simple)]), Some(Simple));
        assert_eq!(predominant_label(&[None, None]), None);
    }

    fn ratings() -> RatingsTable {
        // rows: years, columns: catchments a..e
        Table::new(
            Axis::Year,
            vec!["1990".into(), "1991".into(), "1992".into(), "1993".into()],
            vec!["a".into(), "b".into(), "c".into(), "d".into(), "e".into()],
            vec![
                Some(Simple), Some(Simple), Some(Complex), Some(Complex), None,
                Some(Simple), Some(Simple), Some(Complex), Some(Complex), None,
                Some(Simple), Some(Complex), Some(Complex), Some(Simple), None,
                Some(Simple), Some(Simple), Some(Complex), Some(Complex), None,
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_select_most_homogeneous() {
        let ratings = ratings();
        let scores = scores_for_axis(&ratings, Axis::Catchment, &AllajVariability).unwrap();
        let assignment = select_by_mode(&ratings, Axis::Catchment, &scores, 1).unwrap();

        // a is always simple, c always complex; b and d are mixed
        assert_eq!(assignment.group(Simple), &["a".to_string()]);
        assert_eq!(assignment.group(Complex), &["c".to_string()]);
        assert_eq!(assignment.policy(), SelectionPolicy::ModeBased { per_group: 1 });
    }

    #[test]
    fn test_group_size_caps_selection() {
        let ratings = ratings();
        let scores = scores_for_axis(&ratings, Axis::Catchment, &AllajVariability).unwrap();
        let assignment = select_by_mode(&ratings, Axis::Catchment, &scores, 10).unwrap();

        assert_eq!(assignment.group(Simple), &["a".to_string(), "b".to_string()]);
        assert_eq!(assignment.group(Complex), &["c".to_string(), "d".to_string()]);
        // e has no ratings and is never selected
        assert_eq!(assignment.total(), 4);
    }

    #[test]
    fn test_year_axis() {
        let ratings = ratings();
        let scores = scores_for_axis(&ratings, Axis::Year, &AllajVariability).unwrap();
        let assignment = select_by_mode(&ratings, Axis::Year, &scores, 3).unwrap();

        // every year ties 2:2, so the mode is simple everywhere
        assert_eq!(assignment.group(Simple).len(), 3);
        assert!(assignment.group(Complex).is_empty());
        assert!(!assignment.has_both_groups());
    }
}
