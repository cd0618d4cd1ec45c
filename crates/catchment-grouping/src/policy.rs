//! Selection policies and the resulting group assignment

use std::collections::HashSet;

use catchment_core::{Axis, BehaviorLabel, Error, ErrorTable, RatingsTable, Result};
use catchment_variability::{scores_for_axis, AllajVariability};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error_based::select_by_error;
use crate::mode::select_by_mode;

/// How identifiers are picked for the "simple" and "complex" groups
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "kebab-case")]
pub enum SelectionPolicy {
    /// Keep the `per_group` most homogeneous identifiers of each predominant label
    ModeBased { per_group: usize },
    /// Keep identifiers whose mean error lies below the `quantile` or above the
    /// `1 - quantile` quantile of all mean errors
    ErrorBased { quantile: f64 },
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self::ErrorBased { quantile: 0.2 }
    }
}

impl SelectionPolicy {
    /// Get the name of this policy
    pub fn name(&self) -> &'static str {
        match self {
            Self::ModeBased { .. } => "mode-based",
            Self::ErrorBased { .. } => "error-based",
        }
    }

    /// Check the policy parameter
    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::ModeBased { per_group } if per_group == 0 => Err(Error::InvalidParameter(
                "mode-based selection needs at least one identifier per group".to_string(),
            )),
            Self::ErrorBased { quantile } if !(quantile > 0.0 && quantile <= 0.5) => {
                Err(Error::InvalidParameter(format!(
                    "error quantile {quantile} must be in (0, 0.5]"
                )))
            }
            _ => Ok(()),
        }
    }

    /// Partition the identifiers of `axis` into behaviour groups
    ///
    /// Mode-based selection scores the Allaj variability of `ratings`;
    /// error-based selection only reads `errors`.
    pub fn select(
        &self,
        axis: Axis,
        ratings: &RatingsTable,
        errors: &ErrorTable,
    ) -> Result<GroupAssignment> {
        self.validate()?;
        let assignment = match *self {
            Self::ModeBased { per_group } => {
                let variability = scores_for_axis(ratings, axis, &AllajVariability)?;
                select_by_mode(ratings, axis, &variability, per_group)?
            }
            Self::ErrorBased { quantile } => select_by_error(errors, axis, quantile)?,
        };
        info!(
            axis = %axis,
            policy = self.name(),
            simple = assignment.group(BehaviorLabel::Simple).len(),
            complex = assignment.group(BehaviorLabel::Complex).len(),
            "selected groups"
        );
        Ok(assignment)
    }
}

/// Identifiers assigned to each behaviour label
///
/// Groups are listed in canonical label order and never share identifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupAssignment {
    axis: Axis,
    policy: SelectionPolicy,
    groups: Vec<(BehaviorLabel, Vec<String>)>,
}

impl GroupAssignment {
    /// Create an assignment, rejecting identifiers that appear in two groups
    pub fn new(
        axis: Axis,
        policy: SelectionPolicy,
        mut groups: Vec<(BehaviorLabel, Vec<String>)>,
    ) -> Result<Self> {
        groups.sort_by_key(|(label, _)| *label);
        let mut seen = HashSet::new();
        for (label, ids) in &groups {
            for id in ids {
                if !seen.insert(id.as_str()) {
                    return Err(Error::InvalidInput(format!(
                        "identifier '{id}' assigned twice (last to {label})"
                    )));
                }
            }
        }
        Ok(Self {
            axis,
            policy,
            groups,
        })
    }

    /// Axis the identifiers belong to
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Policy that produced the assignment
    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// Identifiers of one group (empty when the label was never predominant)
    pub fn group(&self, label: BehaviorLabel) -> &[String] {
        self.groups
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, ids)| ids.as_slice())
            .unwrap_or(&[])
    }

    /// Groups in canonical label order
    pub fn groups(&self) -> impl Iterator<Item = (BehaviorLabel, &[String])> + '_ {
        self.groups.iter().map(|(label, ids)| (*label, ids.as_slice()))
    }

    /// Number of selected identifiers over all groups
    pub fn total(&self) -> usize {
        self.groups.iter().map(|(_, ids)| ids.len()).sum()
    }

    /// Check whether both behaviour groups have members
    pub fn has_both_groups(&self) -> bool {
        BehaviorLabel::ALL
            .iter()
            .all(|label| !self.group(*label).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        assert!(SelectionPolicy::ErrorBased { quantile: 0.2 }.validate().is_ok());
        assert!(SelectionPolicy::ErrorBased { quantile: 0.5 }.validate().is_ok());
        assert!(SelectionPolicy::ErrorBased { quantile: 0.0 }.validate().is_err());
        assert!(SelectionPolicy::ErrorBased { quantile: 0.7 }.validate().is_err());
        assert!(SelectionPolicy::ErrorBased { quantile: f64::NAN }.validate().is_err());
        assert!(SelectionPolicy::ModeBased { per_group: 0 }.validate().is_err());
        assert!(SelectionPolicy::ModeBased { per_group: 10 }.validate().is_ok());
    }

    #[test]
    fn test_policy_serde() {
        let policy: SelectionPolicy =
            serde_json::from_str(r#"{"policy": "mode-based", "per_group": 5}"#).unwrap();
        assert_eq!(policy, SelectionPolicy::ModeBased { per_group: 5 });
        assert_eq!(SelectionPolicy::default(), SelectionPolicy::ErrorBased { quantile: 0.2 });
    }

    #[test]
    fn test_error_based_selection_ignores_ratings() {
        use catchment_core::Table;

        // ratings of unrelated years, all missing
        let ratings: RatingsTable = Table::new(
            Axis::Year,
            vec!["2050".into()],
            vec!["x".into(), "y".into()],
            vec![None, None],
        )
        .unwrap();
        let errors: ErrorTable = Table::from_rows(
            Axis::Catchment,
            vec!["1990".into()],
            (1..=5).map(|i| (i.to_string(), vec![Some(i as f64)])),
        )
        .unwrap();

        let policy = SelectionPolicy::ErrorBased { quantile: 0.2 };
        let assignment = policy.select(Axis::Catchment, &ratings, &errors).unwrap();
        assert_eq!(assignment.group(BehaviorLabel::Simple), &["1".to_string()]);
        assert_eq!(assignment.group(BehaviorLabel::Complex), &["5".to_string()]);
    }

    #[test]
    fn test_assignment_rejects_overlap() {
        let result = GroupAssignment::new(
            Axis::Catchment,
            SelectionPolicy::default(),
            vec![
                (BehaviorLabel::Complex, vec!["1".into()]),
                (BehaviorLabel::Simple, vec!["1".into(), "2".into()]),
            ],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_assignment_accessors() {
        let assignment = GroupAssignment::new(
            Axis::Year,
            SelectionPolicy::default(),
            vec![
                (BehaviorLabel::Complex, vec!["1999".into()]),
                (BehaviorLabel::Simple, vec!["1990".into(), "1991".into()]),
            ],
        )
        .unwrap();

        let labels: Vec<_> = assignment.groups().map(|(l, _)| l).collect();
        assert_eq!(labels, vec![BehaviorLabel::Simple, BehaviorLabel::Complex]);
        assert_eq!(assignment.group(BehaviorLabel::Complex), &["1999".to_string()]);
        assert_eq!(assignment.total(), 3);
        assert!(assignment.has_both_groups());
    }
}
