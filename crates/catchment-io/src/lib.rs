//! CSV loading for the catchment analysis
//!
//! All three input kinds share one layout: a header row, then one record per
//! identifier whose first cell is the identifier. Identifiers and column
//! names are normalised (`"1.0"` becomes `"1"`) so that tables written by
//! different tools line up.
//!
//! # Example
//!
//! ```rust
//! use catchment_core::Axis;
//! use catchment_io::{read_errors, DEFAULT_ERROR_DELIMITER};
//!
//! let csv = "year;1.0;2.0\n1990;0.25;0.5\n1991;;0.75\n";
//! let errors = read_errors(csv.as_bytes(), DEFAULT_ERROR_DELIMITER, Axis::Year).unwrap();
//! assert_eq!(errors.column_ids(), &["1", "2"]);
//! assert_eq!(errors.get(1, 0), Some(&None));
//! ```

pub mod error;
pub mod raw;
pub mod tables;

pub use error::{Error, Result};
pub use raw::RawTable;
pub use tables::{
    read_attributes, read_attributes_path, read_errors, read_errors_path, read_ratings,
    read_ratings_path, DEFAULT_DELIMITER, DEFAULT_ERROR_DELIMITER,
};
