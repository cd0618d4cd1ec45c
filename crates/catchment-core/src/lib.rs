//! Core types for catchment behaviour analysis
//!
//! This crate provides the shared vocabulary of the workspace:
//!
//! - [`Error`] / [`Result`]: the unified error type
//! - [`BehaviorLabel`] and [`Axis`]: what a rating says and which unit it describes
//! - [`Table`]: a labelled catchment x year table in either orientation
//! - [`AttributesTable`]: descriptive attributes, each typed continuous or categorical
//! - [`math`]: means, linear-interpolation quantiles and average ranks
//!
//! # Example
//!
//! ```rust
//! use catchment_core::{Axis, BehaviorLabel, Table};
//!
//! let ratings = Table::new(
//!     Axis::Year,
//!     vec!["1990".into(), "1991".into()],
//!     vec!["1".into(), "2".into()],
//!     vec![
//!         Some(BehaviorLabel::Simple), Some(BehaviorLabel::Complex),
//!         Some(BehaviorLabel::Simple), None,
//!     ],
//! ).unwrap();
//!
//! let per_catchment = ratings.lanes(Axis::Catchment);
//! assert_eq!(per_catchment[0].id, "1");
//! assert_eq!(per_catchment[1].cells, vec![&Some(BehaviorLabel::Complex), &None]);
//! ```

pub mod attributes;
pub mod error;
pub mod label;
pub mod math;
pub mod table;

pub use attributes::{Attribute, AttributeValues, AttributesTable};
pub use error::{Error, Result};
pub use label::{is_missing, normalize_identifier, Axis, BehaviorLabel, MISSING_MARKERS};
pub use table::{Lane, Table};

/// Ratings table: one optional behaviour label per catchment-year
pub type RatingsTable = Table<Option<BehaviorLabel>>;

/// Error table: one optional least-squares error per catchment-year
pub type ErrorTable = Table<Option<f64>>;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::{
        AttributesTable, Axis, BehaviorLabel, ErrorTable, RatingsTable, Result, Table,
    };
}
