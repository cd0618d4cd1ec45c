//! Error type shared by the catchment analysis crates

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A tuning value (quantile, group size, image size) is out of range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Tables or samples that do not fit together
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Too few usable values after dropping missing cells
    #[error("{operation} needs at least {expected} value(s), got {actual}")]
    InsufficientData {
        operation: String,
        expected: usize,
        actual: usize,
    },

    #[error("{0} contains NaN or infinite values")]
    NonFinite(String),

    #[error("Computation error: {0}")]
    Computation(String),

    /// Figure could not be drawn or written
    #[error("Rendering error: {0}")]
    Rendering(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Nothing left for `operation` once missing values are removed
    pub fn empty_input(operation: &str) -> Self {
        Self::InsufficientData {
            operation: operation.to_string(),
            expected: 1,
            actual: 0,
        }
    }

    pub fn invalid_quantile(p: f64) -> Self {
        Self::InvalidParameter(format!("quantile {p} outside [0, 1]"))
    }

    /// `context` holds `actual` items where `expected` were required
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!("{context} has {actual} entries, expected {expected}"))
    }

    pub fn non_finite(context: &str) -> Self {
        Self::NonFinite(context.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_operation() {
        let err = Error::empty_input("relative frequencies");
        assert_eq!(err.to_string(), "relative frequencies needs at least 1 value(s), got 0");
        assert!(matches!(
            err,
            Error::InsufficientData { expected: 1, actual: 0, .. }
        ));

        assert_eq!(
            Error::size_mismatch(12, 10, "ratings row 1990").to_string(),
            "Invalid input: ratings row 1990 has 10 entries, expected 12"
        );
        assert_eq!(
            Error::non_finite("mean errors").to_string(),
            "mean errors contains NaN or infinite values"
        );
        assert_eq!(
            Error::invalid_quantile(1.5).to_string(),
            "Invalid parameter: quantile 1.5 outside [0, 1]"
        );
    }

    #[test]
    fn test_io_errors_convert() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }
}
