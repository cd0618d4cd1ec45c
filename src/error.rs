//! Error types for the analysis pipeline

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Cannot parse configuration: {0}")]
    ConfigFormat(#[from] serde_json::Error),

    #[error("Cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Loading input failed: {0}")]
    Load(#[from] catchment_io::Error),

    #[error("Analysis failed: {0}")]
    Analysis(#[from] catchment_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
