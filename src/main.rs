use anyhow::{Context, Result};
use catchment_stats::{run_analysis, AnalysisConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => AnalysisConfig::from_path(&path)
            .with_context(|| format!("failed to load configuration from {path}"))?,
        None => {
            info!("no configuration given, using defaults");
            AnalysisConfig::default()
        }
    };

    let summaries = run_analysis(&config).context("catchment analysis failed")?;
    for summary in &summaries {
        info!(
            axis = %summary.axis,
            policy = summary.policy.name(),
            figures = summary.figures.len(),
            skipped = summary.skipped.len(),
            "done"
        );
        for (attribute, reason) in &summary.skipped {
            info!(axis = %summary.axis, attribute = attribute.as_str(), reason = reason.as_str(), "skipped");
        }
    }
    Ok(())
}
