//! Explicit figure descriptions built from attribute comparisons
//!
//! A [`Figure`] carries everything needed to draw one chart: its title, its
//! output file name and the summarised data. Building it does no drawing, so
//! figures can be inspected in tests and handed to any
//! [`ComparisonVisualizer`](crate::ComparisonVisualizer).

use catchment_core::math::{linear_quantile_sorted, sorted_finite};
use catchment_core::{Axis, BehaviorLabel, Result};
use catchment_grouping::{
    CategoricalComparison, Comparison, ContinuousComparison, GroupAssignment, SelectionPolicy,
};

/// Whisker reach in multiples of the interquartile range
pub const WHISKER_IQR: f64 = 1.5;

/// Decimals of the p-value shown in titles
pub const P_VALUE_DECIMALS: i32 = 3;

/// Five-number box-plot summary of one group
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSummary {
    pub label: BehaviorLabel,
    pub n: usize,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Smallest value within `q1 - 1.5 IQR`
    pub whisker_low: f64,
    /// Largest value within `q3 + 1.5 IQR`
    pub whisker_high: f64,
    /// Values beyond the whiskers
    pub outliers: Vec<f64>,
}

impl BoxSummary {
    /// Summarise a non-empty sample
    pub fn from_values(label: BehaviorLabel, values: &[f64]) -> Result<Self> {
        let sorted = sorted_finite(values)?;
        let q1 = linear_quantile_sorted(&sorted, 0.25)?;
        let median = linear_quantile_sorted(&sorted, 0.5)?;
        let q3 = linear_quantile_sorted(&sorted, 0.75)?;
        let reach = WHISKER_IQR * (q3 - q1);

        let inside = |v: &&f64| **v >= q1 - reach && **v <= q3 + reach;
        let whisker_low = sorted.iter().find(inside).copied().unwrap_or(q1);
        let whisker_high = sorted.iter().rev().find(inside).copied().unwrap_or(q3);
        let outliers = sorted
            .iter()
            .filter(|v| **v < whisker_low || **v > whisker_high)
            .copied()
            .collect();

        Ok(Self {
            label,
            n: sorted.len(),
            q1,
            median,
            q3,
            whisker_low,
            whisker_high,
            outliers,
        })
    }

    /// Smallest drawn value
    pub fn min(&self) -> f64 {
        self.outliers.iter().copied().fold(self.whisker_low, f64::min)
    }

    /// Largest drawn value
    pub fn max(&self) -> f64 {
        self.outliers.iter().copied().fold(self.whisker_high, f64::max)
    }
}

/// Bar of a stacked-bar chart: one group's counts per category
#[derive(Debug, Clone, PartialEq)]
pub struct StackedBar {
    pub label: BehaviorLabel,
    pub counts: Vec<usize>,
}

impl StackedBar {
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// What a figure shows
#[derive(Debug, Clone, PartialEq)]
pub enum FigureKind {
    /// One box per group (continuous attribute)
    BoxPlot { boxes: Vec<BoxSummary> },
    /// One stacked bar per group (categorical attribute)
    StackedBar {
        categories: Vec<String>,
        bars: Vec<StackedBar>,
    },
}

/// A fully described chart
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: String,
    pub file_name: String,
    /// Attribute shown, used as axis description
    pub attribute: String,
    pub kind: FigureKind,
}

/// Facts about the selection that end up in titles and file names
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureContext {
    pub axis: Axis,
    pub policy: SelectionPolicy,
    /// Size of the "simple" group
    pub simple_size: usize,
}

impl FigureContext {
    pub fn from_assignment(assignment: &GroupAssignment) -> Self {
        Self {
            axis: assignment.axis(),
            policy: assignment.policy(),
            simple_size: assignment.group(BehaviorLabel::Simple).len(),
        }
    }

    /// Output file name for an attribute
    ///
    /// `{axis}_attribute_{attribute}_n_is_{n}.png` for mode-based selection,
    /// `{axis}_attribute_{attribute}.png` for error-based selection.
    pub fn file_name(&self, attribute: &str) -> String {
        let attribute = sanitize(attribute);
        match self.policy {
            SelectionPolicy::ModeBased { per_group } => format!(
                "{}_attribute_{}_n_is_{}.png",
                self.axis.short_name(),
                attribute,
                per_group
            ),
            SelectionPolicy::ErrorBased { .. } => {
                format!("{}_attribute_{}.png", self.axis.short_name(), attribute)
            }
        }
    }

    /// Title for an attribute, with the p-value when a test was run
    pub fn title(&self, attribute: &str, p_value: Option<f64>) -> String {
        let mut title = format!("{}; attribute: {}", self.axis.short_name(), attribute);
        if let Some(p) = p_value {
            let scale = 10f64.powi(P_VALUE_DECIMALS);
            title.push_str(&format!("; p_val: {:?}", (p * scale).round() / scale));
        }
        if let SelectionPolicy::ErrorBased { .. } = self.policy {
            title.push_str(&format!("; n={}", self.simple_size));
        }
        title
    }
}

impl Figure {
    /// Describe the chart for a comparison; skipped comparisons have none
    pub fn from_comparison(comparison: &Comparison, context: &FigureContext) -> Result<Option<Self>> {
        match comparison {
            Comparison::Continuous(c) => Self::box_plot(c, context).map(Some),
            Comparison::Categorical(c) => Ok(Some(Self::stacked_bar(c, context))),
            Comparison::Skipped { .. } => Ok(None),
        }
    }

    fn box_plot(comparison: &ContinuousComparison, context: &FigureContext) -> Result<Self> {
        let boxes = comparison
            .groups
            .iter()
            .map(|(label, values)| BoxSummary::from_values(*label, values))
            .collect::<Result<Vec<_>>>()?;
        let p_value = comparison.test.as_ref().map(|t| t.p_value);

        Ok(Self {
            title: context.title(&comparison.attribute, p_value),
            file_name: context.file_name(&comparison.attribute),
            attribute: comparison.attribute.clone(),
            kind: FigureKind::BoxPlot { boxes },
        })
    }

    fn stacked_bar(comparison: &CategoricalComparison, context: &FigureContext) -> Self {
        // complex first, simple second
        let bars = comparison
            .counts
            .iter()
            .rev()
            .map(|(label, counts)| StackedBar {
                label: *label,
                counts: counts.clone(),
            })
            .collect();

        Self {
            title: context.title(&comparison.attribute, None),
            file_name: context.file_name(&comparison.attribute),
            attribute: comparison.attribute.clone(),
            kind: FigureKind::StackedBar {
                categories: comparison.categories.clone(),
                bars,
            },
        }
    }
}

fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn context(policy: SelectionPolicy) -> FigureContext {
        FigureContext {
            axis: Axis::Catchment,
            policy,
            simple_size: 7,
        }
    }

    #[test]
    fn test_file_names() {
        let mode = context(SelectionPolicy::ModeBased { per_group: 10 });
        assert_eq!(mode.file_name("area"), "catch_attribute_area_n_is_10.png");

        let error = context(SelectionPolicy::ErrorBased { quantile: 0.2 });
        assert_eq!(error.file_name("runoff/precip"), "catch_attribute_runoff_precip.png");
    }

    #[test]
    fn test_titles() {
        let mode = context(SelectionPolicy::ModeBased { per_group: 10 });
        assert_eq!(mode.title("area", Some(0.04567)), "catch; attribute: area; p_val: 0.046");
        assert_eq!(mode.title("geology", None), "catch; attribute: geology");

        let error = context(SelectionPolicy::ErrorBased { quantile: 0.2 });
        assert_eq!(error.title("area", Some(0.0001)), "catch; attribute: area; p_val: 0.0; n=7");
    }

    #[test]
    fn test_box_summary() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 100.0];
        let summary = BoxSummary::from_values(BehaviorLabel::Simple, &values).unwrap();
        assert_eq!(summary.n, 9);
        assert_abs_diff_eq!(summary.q1, 3.0);
        assert_abs_diff_eq!(summary.median, 5.0);
        assert_abs_diff_eq!(summary.q3, 7.0);
        assert_abs_diff_eq!(summary.whisker_low, 1.0);
        assert_abs_diff_eq!(summary.whisker_high, 8.0);
        assert_eq!(summary.outliers, vec![100.0]);
        assert_abs_diff_eq!(summary.max(), 100.0);
        assert_abs_diff_eq!(summary.min(), 1.0);
    }

    #[test]
    fn test_single_value_box() {
        let summary = BoxSummary::from_values(BehaviorLabel::Complex, &[4.2]).unwrap();
        assert_eq!(summary.q1, 4.2);
        assert_eq!(summary.whisker_high, 4.2);
        assert!(summary.outliers.is_empty());
    }
}
