//! Figures for simple-versus-complex attribute comparisons
//!
//! Comparisons from `catchment-grouping` are first turned into explicit
//! [`Figure`] values (title, file name, summarised data) and then handed to a
//! [`ComparisonVisualizer`]:
//!
//! - [`PngVisualizer`] draws box plots and stacked bars with plotters
//! - [`CollectingVisualizer`] keeps figures in memory
//! - [`NullVisualizer`] discards them
//!
//! # Example
//!
//! ```rust
//! use catchment_core::{Axis, BehaviorLabel};
//! use catchment_grouping::{Comparison, ContinuousComparison, SelectionPolicy};
//! use catchment_viz::{Figure, FigureContext, FigureKind};
//!
//! let comparison = Comparison::Continuous(ContinuousComparison {
//!     attribute: "area".into(),
//!     groups: vec![
//!         (BehaviorLabel::Simple, vec![1.0, 2.0, 3.0]),
//!         (BehaviorLabel::Complex, vec![4.0, 5.0]),
//!     ],
//!     test: None,
//! });
//! let context = FigureContext {
//!     axis: Axis::Catchment,
//!     policy: SelectionPolicy::ModeBased { per_group: 3 },
//!     simple_size: 3,
//! };
//!
//! let figure = Figure::from_comparison(&comparison, &context).unwrap().unwrap();
//! assert_eq!(figure.file_name, "catch_attribute_area_n_is_3.png");
//! assert!(matches!(figure.kind, FigureKind::BoxPlot { .. }));
//! ```

pub mod figure;
pub mod png;
pub mod visualizer;

pub use figure::{BoxSummary, Figure, FigureContext, FigureKind, StackedBar};
pub use png::PngVisualizer;
pub use visualizer::{CollectingVisualizer, ComparisonVisualizer, NullVisualizer};
