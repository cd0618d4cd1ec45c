//! Selection of "simple" and "complex" catchment groups and attribute comparison
//!
//! Two selection policies pick extremal identifiers (catchments or years):
//!
//! - **Mode-based**: take each identifier's predominant behaviour label and keep,
//!   per label, the `n` identifiers with the lowest categorical variability
//! - **Error-based**: keep identifiers whose mean least-squares error lies below
//!   the `q` quantile ("simple") or above the `1 - q` quantile ("complex")
//!
//! The [`AttributeComparator`] then contrasts every attribute between the
//! groups: continuous attributes get a rank test, categorical attributes get
//! per-group category counts.
//!
//! # Example
//!
//! ```rust
//! use catchment_core::{Axis, BehaviorLabel, Table};
//! use catchment_grouping::select_by_error;
//!
//! let errors = Table::from_rows(
//!     Axis::Catchment,
//!     vec!["1990".into()],
//!     (1..=10).map(|i| (i.to_string(), vec![Some(i as f64)])),
//! ).unwrap();
//!
//! let groups = select_by_error(&errors, Axis::Catchment, 0.2).unwrap();
//! assert_eq!(groups.group(BehaviorLabel::Simple), &["1".to_string(), "2".to_string()]);
//! assert_eq!(groups.group(BehaviorLabel::Complex), &["9".to_string(), "10".to_string()]);
//! ```

mod compare;
mod error_based;
mod mode;
mod policy;

// Re-exports
pub use compare::{
    AttributeComparator, CategoricalComparison, Comparison, ContinuousComparison,
    MIN_TEST_SAMPLES,
};
pub use error_based::{mean_errors, select_by_error};
pub use mode::{predominant_label, predominant_labels, select_by_mode};
pub use policy::{GroupAssignment, SelectionPolicy};
