//! Error types for the tabsight library.
//!
//! Only loading and serialization can fail. Classification and health
//! scoring are total over any table and never return these errors.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tabsight operations.
#[derive(Debug, Error)]
pub enum TabsightError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// File format not supported by the loader.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Empty file or no data to analyze.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for tabsight operations.
pub type Result<T> = std::result::Result<T, TabsightError>;
