//! Error types for catchment-io

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Catchment core error: {0}")]
    Core(#[from] catchment_core::Error),

    #[error("Cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid cell '{value}' at row '{row}', column '{column}': {reason}")]
    InvalidCell {
        row: String,
        column: String,
        value: String,
        reason: String,
    },

    #[error("Empty table: {0}")]
    EmptyTable(String),
}

pub type Result<T> = std::result::Result<T, Error>;
