//! Analysis configuration
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! reproduces the reference batch: error-based selection with `q = 0.2` for
//! catchments and for years.

use std::path::{Path, PathBuf};

use catchment_core::Axis;
use catchment_grouping::SelectionPolicy;
use catchment_significance::{Correction, RankTest};
use catchment_viz::png::{DEFAULT_DPI, DEFAULT_SIZE_INCHES};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One analysis run: an axis, its attribute table and a selection policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    pub axis: Axis,
    /// Attribute CSV with one row per identifier of `axis`
    pub attributes: PathBuf,
    #[serde(default = "default_delimiter")]
    pub attributes_delimiter: char,
    #[serde(default)]
    pub selection: SelectionPolicy,
}

/// Output image size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ImageSize {
    fn default() -> Self {
        let (w, h) = DEFAULT_SIZE_INCHES;
        Self {
            width: (w * DEFAULT_DPI as f64).round() as u32,
            height: (h * DEFAULT_DPI as f64).round() as u32,
        }
    }
}

/// Inputs, outputs and runs of a batch analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Behaviour ratings, one row per `ratings_row_axis` identifier
    pub ratings: PathBuf,
    pub ratings_delimiter: char,
    /// Least-squares errors, same layout as the ratings
    pub errors: PathBuf,
    pub errors_delimiter: char,
    /// Axis of the rows of both the ratings and the error table
    pub ratings_row_axis: Axis,
    /// Directory receiving the PNG figures
    pub output_dir: PathBuf,
    pub image: ImageSize,
    /// Rank test for continuous attributes
    pub rank_test: RankTest,
    /// Number of comparisons for a Bonferroni correction, if any
    pub bonferroni: Option<usize>,
    pub runs: Vec<RunConfig>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            ratings: PathBuf::from("type_simple_complex.csv"),
            ratings_delimiter: ',',
            errors: PathBuf::from("least_square_all_catchments.csv"),
            errors_delimiter: ';',
            ratings_row_axis: Axis::Year,
            output_dir: PathBuf::from("."),
            image: ImageSize::default(),
            rank_test: RankTest::default(),
            bonferroni: None,
            runs: vec![
                RunConfig {
                    axis: Axis::Catchment,
                    attributes: PathBuf::from("attributes_catchments.csv"),
                    attributes_delimiter: default_delimiter(),
                    selection: SelectionPolicy::ErrorBased { quantile: 0.2 },
                },
                RunConfig {
                    axis: Axis::Year,
                    attributes: PathBuf::from("attributes_years.csv"),
                    attributes_delimiter: default_delimiter(),
                    selection: SelectionPolicy::ErrorBased { quantile: 0.2 },
                },
            ],
        }
    }
}

impl AnalysisConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON configuration file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Check delimiters, image size and selection parameters
    pub fn validate(&self) -> Result<()> {
        delimiter_byte(self.ratings_delimiter)?;
        delimiter_byte(self.errors_delimiter)?;
        if self.image.width == 0 || self.image.height == 0 {
            return Err(Error::Config(format!(
                "image size must be positive, got {}x{}",
                self.image.width, self.image.height
            )));
        }
        if self.bonferroni == Some(0) {
            return Err(Error::Config("bonferroni needs at least one comparison".into()));
        }
        for run in &self.runs {
            delimiter_byte(run.attributes_delimiter)?;
            run.selection.validate()?;
        }
        Ok(())
    }

    /// Correction applied to every p-value
    pub fn correction(&self) -> Correction {
        match self.bonferroni {
            Some(comparisons) => Correction::Bonferroni { comparisons },
            None => Correction::None,
        }
    }
}

/// Single-byte CSV delimiter for a configured character
pub fn delimiter_byte(delimiter: char) -> Result<u8> {
    if delimiter.is_ascii() {
        Ok(delimiter as u8)
    } else {
        Err(Error::Config(format!("delimiter '{delimiter}' is not an ASCII character")))
    }
}

fn default_delimiter() -> char {
    ','
}
