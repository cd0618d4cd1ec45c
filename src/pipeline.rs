//! Batch orchestration: score, select, compare and draw
//!
//! [`Analysis`] holds the ratings and error tables shared by all runs. Each
//! run selects groups along one axis, compares every attribute of its table
//! and hands the resulting figures to a visualizer.

use std::path::PathBuf;

use catchment_core::{AttributesTable, Axis, BehaviorLabel, ErrorTable, RatingsTable};
use catchment_grouping::{AttributeComparator, Comparison, GroupAssignment, SelectionPolicy};
use catchment_significance::{rank_test, Correction, RankTest, TestResult};
use catchment_variability::{scores_for_axis, AllajVariability, VariabilityScores};
use catchment_viz::{ComparisonVisualizer, Figure, FigureContext, PngVisualizer};
use tracing::{info, instrument, warn};

use crate::config::{delimiter_byte, AnalysisConfig, RunConfig};
use crate::error::Result;

/// Outcome of one run
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub axis: Axis,
    pub policy: SelectionPolicy,
    pub simple: usize,
    pub complex: usize,
    /// File names of the figures produced, in attribute order
    pub figures: Vec<String>,
    /// Paths written by the visualizer
    pub written: Vec<PathBuf>,
    /// Test result per tested continuous attribute
    pub tests: Vec<(String, TestResult)>,
    /// Attributes without a figure and why
    pub skipped: Vec<(String, String)>,
}

impl RunSummary {
    fn new(assignment: &GroupAssignment) -> Self {
        Self {
            axis: assignment.axis(),
            policy: assignment.policy(),
            simple: assignment.group(BehaviorLabel::Simple).len(),
            complex: assignment.group(BehaviorLabel::Complex).len(),
            figures: Vec::new(),
            written: Vec::new(),
            tests: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Test result of an attribute
    pub fn test(&self, attribute: &str) -> Option<&TestResult> {
        self.tests
            .iter()
            .find(|(name, _)| name == attribute)
            .map(|(_, result)| result)
    }
}

/// Ratings and errors shared by every run, with the comparison settings
pub struct Analysis {
    ratings: RatingsTable,
    errors: ErrorTable,
    comparator: AttributeComparator,
}

impl Analysis {
    /// Create an analysis using the Wilcoxon rank-sum test without correction
    pub fn new(ratings: RatingsTable, errors: ErrorTable) -> Self {
        Self {
            ratings,
            errors,
            comparator: AttributeComparator::default(),
        }
    }

    /// Use another rank test and p-value correction
    pub fn with_test(mut self, test: RankTest, correction: Correction) -> Self {
        self.comparator = AttributeComparator::new(rank_test(test)).with_correction(correction);
        self
    }

    pub fn ratings(&self) -> &RatingsTable {
        &self.ratings
    }

    pub fn errors(&self) -> &ErrorTable {
        &self.errors
    }

    /// Allaj variability of every identifier of `axis`
    pub fn variability(&self, axis: Axis) -> Result<VariabilityScores> {
        Ok(scores_for_axis(&self.ratings, axis, &AllajVariability)?)
    }

    /// Select groups along the attribute table's axis and draw every attribute
    #[instrument(skip(self, attributes, visualizer), fields(axis = %attributes.axis(), policy = policy.name()))]
    pub fn run<V>(
        &self,
        attributes: &AttributesTable,
        policy: SelectionPolicy,
        visualizer: &mut V,
    ) -> Result<RunSummary>
    where
        V: ComparisonVisualizer + ?Sized,
    {
        let axis = attributes.axis();
        let assignment = policy.select(axis, &self.ratings, &self.errors)?;
        if !assignment.has_both_groups() {
            warn!(axis = %axis, "a behaviour group is empty, every attribute will be skipped");
        }

        let context = FigureContext::from_assignment(&assignment);
        let mut summary = RunSummary::new(&assignment);

        for comparison in self.comparator.compare_all(&assignment, attributes)? {
            if let Comparison::Skipped { attribute, reason } = &comparison {
                summary.skipped.push((attribute.clone(), reason.clone()));
                continue;
            }
            if let Comparison::Continuous(continuous) = &comparison {
                if let Some(test) = &continuous.test {
                    summary.tests.push((continuous.attribute.clone(), test.clone()));
                }
            }

            if let Some(figure) = Figure::from_comparison(&comparison, &context)? {
                if let Some(path) = visualizer.render(&figure)? {
                    summary.written.push(path);
                }
                summary.figures.push(figure.file_name);
            }
        }

        info!(
            axis = %axis,
            simple = summary.simple,
            complex = summary.complex,
            figures = summary.figures.len(),
            tested = summary.tests.len(),
            skipped = summary.skipped.len(),
            "run finished"
        );
        Ok(summary)
    }
}

/// Load every input of `config`, run each configured run and write PNG figures
pub fn run_analysis(config: &AnalysisConfig) -> Result<Vec<RunSummary>> {
    config.validate()?;

    let ratings = catchment_io::read_ratings_path(
        &config.ratings,
        delimiter_byte(config.ratings_delimiter)?,
        config.ratings_row_axis,
    )?;
    let errors = catchment_io::read_errors_path(
        &config.errors,
        delimiter_byte(config.errors_delimiter)?,
        config.ratings_row_axis,
    )?;
    let analysis = Analysis::new(ratings, errors).with_test(config.rank_test, config.correction());

    let mut visualizer = PngVisualizer::new(&config.output_dir)?
        .with_size(config.image.width, config.image.height)?;

    config
        .runs
        .iter()
        .map(|run| run_one(&analysis, run, &mut visualizer))
        .collect()
}

fn run_one<V>(analysis: &Analysis, run: &RunConfig, visualizer: &mut V) -> Result<RunSummary>
where
    V: ComparisonVisualizer + ?Sized,
{
    let attributes = catchment_io::read_attributes_path(
        &run.attributes,
        delimiter_byte(run.attributes_delimiter)?,
        run.axis,
    )?;
    analysis.run(&attributes, run.selection, visualizer)
}
