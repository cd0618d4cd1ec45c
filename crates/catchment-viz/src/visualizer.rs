//! Visualization interface for attribute comparisons
//!
//! The analysis hands every [`Figure`] it builds to a visualizer. Backends
//! decide what "rendering" means: writing a PNG, keeping the figure in
//! memory, or nothing at all.

use std::path::PathBuf;

use catchment_core::Result;

use crate::figure::Figure;

/// Receives the figures produced by an analysis run
pub trait ComparisonVisualizer {
    /// Render one figure, returning the written file if there is one
    fn render(&mut self, figure: &Figure) -> Result<Option<PathBuf>>;

    /// Check if this visualizer actually produces output
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Null visualizer that does nothing (for when figures are not wanted)
#[derive(Debug, Default)]
pub struct NullVisualizer;

impl ComparisonVisualizer for NullVisualizer {
    fn render(&mut self, _figure: &Figure) -> Result<Option<PathBuf>> {
        Ok(None)
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

/// Keeps every figure in memory
#[derive(Debug, Default)]
pub struct CollectingVisualizer {
    figures: Vec<Figure>,
}

impl CollectingVisualizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    /// Figure by output file name
    pub fn find(&self, file_name: &str) -> Option<&Figure> {
        self.figures.iter().find(|f| f.file_name == file_name)
    }

    pub fn into_figures(self) -> Vec<Figure> {
        self.figures
    }
}

impl ComparisonVisualizer for CollectingVisualizer {
    fn render(&mut self, figure: &Figure) -> Result<Option<PathBuf>> {
        self.figures.push(figure.clone());
        Ok(None)
    }
}

impl<V: ComparisonVisualizer + ?Sized> ComparisonVisualizer for Box<V> {
    fn render(&mut self, figure: &Figure) -> Result<Option<PathBuf>> {
        (**self).render(figure)
    }

    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }
}
