//! PNG rendering with plotters

use std::fmt::Display;
use std::path::{Path, PathBuf};

use catchment_core::{Error, Result};
use plotters::prelude::*;
use tracing::{debug, instrument};

use crate::figure::{BoxSummary, Figure, FigureKind, StackedBar};
use crate::visualizer::ComparisonVisualizer;

/// Resolution used to turn figure inches into pixels
pub const DEFAULT_DPI: u32 = 150;

/// Default figure size in inches
pub const DEFAULT_SIZE_INCHES: (f64, f64) = (6.4, 4.8);

const BOX_HALF_WIDTH: f64 = 0.25;
const BAR_HALF_WIDTH: f64 = 0.3;

/// Writes each figure as `<out_dir>/<file_name>`
#[derive(Debug, Clone)]
pub struct PngVisualizer {
    out_dir: PathBuf,
    width: u32,
    height: u32,
}

impl PngVisualizer {
    /// Create a visualizer writing into `out_dir`, creating it if needed
    pub fn new(out_dir: impl Into<PathBuf>) -> Result<Self> {
        let out_dir = out_dir.into();
        std::fs::create_dir_all(&out_dir)?;
        let (w, h) = DEFAULT_SIZE_INCHES;
        Ok(Self {
            out_dir,
            width: (w * DEFAULT_DPI as f64).round() as u32,
            height: (h * DEFAULT_DPI as f64).round() as u32,
        })
    }

    /// Override the pixel size
    pub fn with_size(mut self, width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidParameter(format!(
                "image size must be positive, got {width}x{height}"
            )));
        }
        self.width = width;
        self.height = height;
        Ok(self)
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl ComparisonVisualizer for PngVisualizer {
    #[instrument(skip(self, figure), fields(file = %figure.file_name))]
    fn render(&mut self, figure: &Figure) -> Result<Option<PathBuf>> {
        let path = self.out_dir.join(&figure.file_name);
        let root = BitMapBackend::new(&path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(rendering)?;

        match &figure.kind {
            FigureKind::BoxPlot { boxes } => draw_box_plot(&root, figure, boxes)?,
            FigureKind::StackedBar { categories, bars } => {
                draw_stacked_bars(&root, figure, categories, bars)?
            }
        }

        root.present().map_err(rendering)?;
        // the backend borrows `path` until it is dropped
        drop(root);
        debug!(path = %path.display(), "figure written");
        Ok(Some(path))
    }
}

fn rendering<E: Display>(e: E) -> Error {
    Error::Rendering(e.to_string())
}

/// Tick label for group `i` on a numeric x axis
fn group_tick(labels: &[String], x: f64) -> String {
    let nearest = x.round();
    if (x - nearest).abs() > 1e-6 || nearest < 0.0 {
        return String::new();
    }
    labels.get(nearest as usize).cloned().unwrap_or_default()
}

fn draw_box_plot(
    root: &DrawingArea<BitMapBackend<'_>, plotters::coord::Shift>,
    figure: &Figure,
    boxes: &[BoxSummary],
) -> Result<()> {
    let lo = boxes.iter().map(BoxSummary::min).fold(f64::INFINITY, f64::min);
    let hi = boxes.iter().map(BoxSummary::max).fold(f64::NEG_INFINITY, f64::max);
    let pad = if hi > lo { (hi - lo) * 0.05 } else { lo.abs().max(1.0) * 0.05 };
    let labels: Vec<String> = boxes
        .iter()
        .map(|b| format!("{} (n={})", b.label, b.n))
        .collect();

    let mut chart = ChartBuilder::on(root)
        .caption(&figure.title, ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5..boxes.len() as f64 - 0.5, (lo - pad)..(hi + pad))
        .map_err(rendering)?;

    let tick = |x: &f64| group_tick(&labels, *x);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(boxes.len() * 2 + 1)
        .x_label_formatter(&tick)
        .y_desc(figure.attribute.as_str())
        .draw()
        .map_err(rendering)?;

    for (i, summary) in boxes.iter().enumerate() {
        let x = i as f64;
        let color = Palette99::pick(i);
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(x - BOX_HALF_WIDTH, summary.q1), (x + BOX_HALF_WIDTH, summary.q3)],
                color.mix(0.3).filled(),
            )))
            .map_err(rendering)?;
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(x - BOX_HALF_WIDTH, summary.q1), (x + BOX_HALF_WIDTH, summary.q3)],
                BLACK.stroke_width(1),
            )))
            .map_err(rendering)?;

        let cap = BOX_HALF_WIDTH / 2.0;
        let segments = vec![
            vec![(x - BOX_HALF_WIDTH, summary.median), (x + BOX_HALF_WIDTH, summary.median)],
            vec![(x, summary.q3), (x, summary.whisker_high)],
            vec![(x, summary.q1), (x, summary.whisker_low)],
            vec![(x - cap, summary.whisker_high), (x + cap, summary.whisker_high)],
            vec![(x - cap, summary.whisker_low), (x + cap, summary.whisker_low)],
        ];
        chart
            .draw_series(
                segments
                    .into_iter()
                    .map(|points| PathElement::new(points, BLACK.stroke_width(1))),
            )
            .map_err(rendering)?;

        chart
            .draw_series(
                summary
                    .outliers
                    .iter()
                    .map(|v| Circle::new((x, *v), 3, BLACK.stroke_width(1))),
            )
            .map_err(rendering)?;
    }
    Ok(())
}

fn draw_stacked_bars(
    root: &DrawingArea<BitMapBackend<'_>, plotters::coord::Shift>,
    figure: &Figure,
    categories: &[String],
    bars: &[StackedBar],
) -> Result<()> {
    let max_total = bars.iter().map(StackedBar::total).max().unwrap_or(0).max(1) as f64;
    let labels: Vec<String> = bars.iter().map(|b| b.label.to_string()).collect();

    let mut chart = ChartBuilder::on(root)
        .caption(&figure.title, ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(50)
        .build_cartesian_2d(-0.5..bars.len() as f64 - 0.5, 0.0..max_total * 1.1)
        .map_err(rendering)?;

    let tick = |x: &f64| group_tick(&labels, *x);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(bars.len() * 2 + 1)
        .x_label_formatter(&tick)
        .y_desc("count")
        .draw()
        .map_err(rendering)?;

    // one series per category so each gets a legend entry
    let mut bottoms = vec![0.0f64; bars.len()];
    for (c, category) in categories.iter().enumerate() {
        let color = Palette99::pick(c);
        let segments: Vec<_> = bars
            .iter()
            .enumerate()
            .map(|(i, bar)| {
                let x = i as f64;
                let count = bar.counts.get(c).copied().unwrap_or(0) as f64;
                let bottom = bottoms[i];
                bottoms[i] += count;
                Rectangle::new(
                    [(x - BAR_HALF_WIDTH, bottom), (x + BAR_HALF_WIDTH, bottom + count)],
                    color.filled(),
                )
            })
            .collect();
        chart
            .draw_series(segments)
            .map_err(rendering)?
            .label(category.as_str())
            .legend(move |(lx, ly)| {
                Rectangle::new([(lx, ly - 5), (lx + 10, ly + 5)], Palette99::pick(c).filled())
            });
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(rendering)?;
    Ok(())
}
