//! Shared error types for the scoring pipeline

use thiserror::Error;

/// Main error type for phrs operations
#[derive(Debug, Error)]
pub enum Error {
    /// No accepted alias for a required logical field is present
    #[error("Missing column for {field}: tried {aliases:?}")]
    MissingColumn {
        field: &'static str,
        aliases: Vec<&'static str>,
    },

    /// The dataset has zero rows
    #[error("Dataset has no rows")]
    EmptyDataset,

    /// A resolved column holds a value that cannot be read as a number
    #[error("Column {column}, row {row}: value {value:?} is not numeric")]
    TypeCoercion {
        column: String,
        row: usize,
        value: String,
    },

    /// A stage ran before the stage it depends on
    #[error("Precursor missing: {0}")]
    PrecursorMissing(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// CSV errors
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
