//! Categorical variability of catchment behaviour ratings
//!
//! This crate measures how consistently a catchment (or a year) is rated as
//! showing simple or complex hydrological behaviour. The measure is Allaj's
//! (2017) variability for categorical data:
//!
//! | Situation | Score |
//! |-----------|-------|
//! | every rating identical | 0 |
//! | two labels, equally frequent | 1 - 1/sqrt(2) ~ 0.293 |
//! | k labels, equally frequent | 1 - 1/sqrt(k) |
//!
//! Missing ratings are dropped before the relative frequencies are formed.
//!
//! # Examples
//!
//! ```rust
//! use catchment_variability::categorical_variability_of_cells;
//!
//! let v = categorical_variability_of_cells(["A", "A", "B", "B"]).unwrap();
//! assert!((v - 0.2929).abs() < 1e-4);
//!
//! // missing values never enter the denominator
//! assert_eq!(
//!     categorical_variability_of_cells(["A", "A", "nan"]).unwrap(),
//!     categorical_variability_of_cells(["A", "A"]).unwrap(),
//! );
//! ```
//!
//! ## Scoring a ratings table
//!
//! ```rust
//! use catchment_core::{Axis, BehaviorLabel, Table};
//! use catchment_variability::{scores_for_axis, AllajVariability};
//!
//! let ratings = Table::new(
//!     Axis::Year,
//!     vec!["1990".into(), "1991".into()],
//!     vec!["7".into()],
//!     vec![Some(BehaviorLabel::Simple), Some(BehaviorLabel::Simple)],
//! ).unwrap();
//!
//! let per_catchment = scores_for_axis(&ratings, Axis::Catchment, &AllajVariability).unwrap();
//! assert_eq!(per_catchment.get("7"), Some(0.0));
//! ```

pub mod allaj;
pub mod scores;
pub mod traits;

// Re-exports
pub use allaj::{categorical_variability, categorical_variability_of_cells, AllajVariability};
pub use scores::{column_scores, row_scores, scores_for_axis, VariabilityScores};
pub use traits::{relative_frequencies, VariabilityMeasure, VariabilityMeasureProperties};

// Convenience constructor
pub fn allaj() -> AllajVariability {
    AllajVariability::new()
}
