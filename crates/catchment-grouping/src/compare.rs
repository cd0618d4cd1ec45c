//! Per-attribute comparison of the behaviour groups

use std::collections::BTreeSet;

use catchment_core::{
    Attribute, AttributeValues, AttributesTable, BehaviorLabel, Error, Result,
};
use catchment_significance::{rank_sum, Correction, TestResult, TwoSampleTest};
use tracing::{debug, instrument, warn};

use crate::policy::GroupAssignment;

/// Smallest group size for which a rank test is run
pub const MIN_TEST_SAMPLES: usize = 2;

/// Continuous attribute: values per group and the rank test between them
#[derive(Debug, Clone, PartialEq)]
pub struct ContinuousComparison {
    pub attribute: String,
    /// Values per group, in canonical label order
    pub groups: Vec<(BehaviorLabel, Vec<f64>)>,
    /// Simple-versus-complex test; `None` when a group was too small
    pub test: Option<TestResult>,
}

/// Categorical attribute: category counts per group
#[derive(Debug, Clone, PartialEq)]
pub struct CategoricalComparison {
    pub attribute: String,
    /// Categories in lexicographic order
    pub categories: Vec<String>,
    /// Count of every category per group, in canonical label order
    pub counts: Vec<(BehaviorLabel, Vec<usize>)>,
}

/// Result of comparing one attribute between the groups
#[derive(Debug, Clone, PartialEq)]
pub enum Comparison {
    Continuous(ContinuousComparison),
    Categorical(CategoricalComparison),
    /// Nothing to compare, e.g. a group without values for this attribute
    Skipped { attribute: String, reason: String },
}

impl Comparison {
    /// Name of the compared attribute
    pub fn attribute(&self) -> &str {
        match self {
            Self::Continuous(c) => &c.attribute,
            Self::Categorical(c) => &c.attribute,
            Self::Skipped { attribute, .. } => attribute,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }
}

impl ContinuousComparison {
    /// Values of one group
    pub fn values(&self, label: BehaviorLabel) -> &[f64] {
        self.groups
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, values)| values.as_slice())
            .unwrap_or(&[])
    }
}

/// Compares attributes between the groups of a [`GroupAssignment`]
pub struct AttributeComparator {
    test: Box<dyn TwoSampleTest + Send + Sync>,
    correction: Correction,
    min_test_samples: usize,
}

impl AttributeComparator {
    /// Create a comparator using `test` for continuous attributes
    pub fn new(test: Box<dyn TwoSampleTest + Send + Sync>) -> Self {
        Self {
            test,
            correction: Correction::None,
            min_test_samples: MIN_TEST_SAMPLES,
        }
    }

    /// Adjust p-values for multiple comparisons
    pub fn with_correction(mut self, correction: Correction) -> Self {
        self.correction = correction;
        self
    }

    /// Change the smallest group size that is tested (at least one)
    pub fn with_min_test_samples(mut self, min_test_samples: usize) -> Self {
        self.min_test_samples = min_test_samples.max(1);
        self
    }

    /// Compare every attribute of `attributes`
    pub fn compare_all(
        &self,
        assignment: &GroupAssignment,
        attributes: &AttributesTable,
    ) -> Result<Vec<Comparison>> {
        attributes
            .attributes()
            .iter()
            .map(|attribute| self.compare(assignment, attributes, attribute))
            .collect()
    }

    /// Compare one attribute of `attributes` between the selected groups
    #[instrument(skip(self, assignment, attributes, attribute), fields(attribute = %attribute.name))]
    pub fn compare(
        &self,
        assignment: &GroupAssignment,
        attributes: &AttributesTable,
        attribute: &Attribute,
    ) -> Result<Comparison> {
        if assignment.axis() != attributes.axis() {
            return Err(Error::InvalidInput(format!(
                "groups are per {} but attributes are per {}",
                assignment.axis(),
                attributes.axis()
            )));
        }
        // positions below index into the attribute's own values
        if attribute.values.len() != attributes.ids().len() {
            return Err(Error::size_mismatch(
                attributes.ids().len(),
                attribute.values.len(),
                &format!("attribute '{}'", attribute.name),
            ));
        }

        let mut rows = Vec::with_capacity(BehaviorLabel::ALL.len());
        for label in BehaviorLabel::ALL {
            let positions: Vec<usize> = assignment
                .group(label)
                .iter()
                .filter_map(|id| {
                    let position = attributes.position(id);
                    if position.is_none() {
                        warn!(id = id.as_str(), "selected identifier has no attributes");
                    }
                    position
                })
                .collect();
            if positions.is_empty() {
                return Ok(skipped(attribute, format!("no {label} identifiers with attributes")));
            }
            rows.push((label, positions));
        }

        match &attribute.values {
            AttributeValues::Continuous(values) => self.compare_continuous(attribute, values, &rows),
            AttributeValues::Categorical(values) => Ok(compare_categorical(attribute, values, &rows)),
        }
    }

    fn compare_continuous(
        &self,
        attribute: &Attribute,
        values: &[Option<f64>],
        rows: &[(BehaviorLabel, Vec<usize>)],
    ) -> Result<Comparison> {
        let mut groups = Vec::with_capacity(rows.len());
        for (label, positions) in rows {
            let present: Vec<f64> = positions
                .iter()
                .filter_map(|&p| values[p])
                .filter(|v| v.is_finite())
                .collect();
            if present.is_empty() {
                return Ok(skipped(attribute, format!("no {label} values")));
            }
            groups.push((*label, present));
        }

        let comparison = ContinuousComparison {
            attribute: attribute.name.clone(),
            groups,
            test: None,
        };
        let simple = comparison.values(BehaviorLabel::Simple);
        let complex = comparison.values(BehaviorLabel::Complex);

        let test = if simple.len() < self.min_test_samples || complex.len() < self.min_test_samples {
            debug!(
                simple = simple.len(),
                complex = complex.len(),
                "groups too small for a rank test"
            );
            None
        } else {
            let raw = self.test.test(simple, complex)?;
            Some(self.correction.apply(&raw))
        };

        Ok(Comparison::Continuous(ContinuousComparison { test, ..comparison }))
    }
}

impl Default for AttributeComparator {
    fn default() -> Self {
        Self::new(Box::new(rank_sum()))
    }
}

fn compare_categorical(
    attribute: &Attribute,
    values: &[Option<String>],
    rows: &[(BehaviorLabel, Vec<usize>)],
) -> Comparison {
    let categories: Vec<String> = rows
        .iter()
        .flat_map(|(_, positions)| positions.iter().filter_map(|&p| values[p].clone()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut counts = Vec::with_capacity(rows.len());
    for (label, positions) in rows {
        let mut per_category = vec![0usize; categories.len()];
        for value in positions.iter().filter_map(|&p| values[p].as_ref()) {
            if let Ok(index) = categories.binary_search(value) {
                per_category[index] += 1;
            }
        }
        if per_category.iter().sum::<usize>() == 0 {
            return skipped(attribute, format!("no {label} values"));
        }
        counts.push((*label, per_category));
    }

    Comparison::Categorical(CategoricalComparison {
        attribute: attribute.name.clone(),
        categories,
        counts,
    })
}

fn skipped(attribute: &Attribute, reason: String) -> Comparison {
    warn!(attribute = %attribute.name, %reason, "skipping attribute");
    Comparison::Skipped {
        attribute: attribute.name.clone(),
        reason,
    }
}
