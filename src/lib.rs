//! Exploratory comparison of simple and complex catchment behaviour
//!
//! This crate ties the workspace together:
//!
//! - [`catchment_core`]: tables, labels, errors and numeric helpers
//! - [`catchment_variability`]: Allaj's categorical variability per catchment or year
//! - [`catchment_significance`]: rank tests and p-value correction
//! - [`catchment_grouping`]: selection of extremal groups and attribute comparison
//! - [`catchment_viz`]: explicit figures and the PNG backend
//! - [`catchment_io`]: CSV loading
//! - [`config`] and [`pipeline`]: the batch analysis behind the
//!   `catchment-analysis` binary
//!
//! # Example
//!
//! ```rust
//! use catchment_stats::prelude::*;
//!
//! let errors = Table::from_rows(
//!     Axis::Year,
//!     vec!["1".into(), "2".into()],
//!     (1990..2000).map(|y| (y.to_string(), vec![Some((y - 1990) as f64), Some(0.5)])),
//! ).unwrap();
//! let ratings = Table::from_rows(
//!     Axis::Year,
//!     vec!["1".into(), "2".into()],
//!     (1990..2000).map(|y| (y.to_string(), vec![Some(BehaviorLabel::Simple), None])),
//! ).unwrap();
//! let attributes = AttributesTable::new(
//!     Axis::Year,
//!     (1990..2000).map(|y| y.to_string()).collect(),
//!     vec![Attribute {
//!         name: "precipitation".into(),
//!         values: AttributeValues::Continuous((0..10).map(|i| Some(i as f64)).collect()),
//!     }],
//! ).unwrap();
//!
//! let mut figures = CollectingVisualizer::new();
//! let summary = Analysis::new(ratings, errors)
//!     .run(&attributes, SelectionPolicy::ErrorBased { quantile: 0.2 }, &mut figures)
//!     .unwrap();
//! assert_eq!(summary.figures, vec!["year_attribute_precipitation.png".to_string()]);
//! ```

pub mod config;
pub mod error;
pub mod pipeline;

// Re-export workspace crates
pub use catchment_core;
pub use catchment_grouping;
pub use catchment_io;
pub use catchment_significance;
pub use catchment_variability;
pub use catchment_viz;

pub use config::{AnalysisConfig, ImageSize, RunConfig};
pub use error::{Error, Result};
pub use pipeline::{run_analysis, Analysis, RunSummary};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::AnalysisConfig;
    pub use crate::pipeline::{run_analysis, Analysis, RunSummary};
    pub use catchment_core::prelude::*;
    pub use catchment_core::{Attribute, AttributeValues};
    pub use catchment_grouping::{AttributeComparator, Comparison, SelectionPolicy};
    pub use catchment_significance::{Correction, RankTest};
    pub use catchment_variability::{categorical_variability, AllajVariability};
    pub use catchment_viz::{
        CollectingVisualizer, ComparisonVisualizer, Figure, NullVisualizer, PngVisualizer,
    };
}
