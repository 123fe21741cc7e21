//! Error types for the catalog crate.
//!
//! Every variant is a startup failure: the catalog is loaded once and a
//! process with a broken catalog must not serve requests.

use thiserror::Error;

/// Errors that can occur while loading the restaurant catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be found or opened
    #[error("Failed to open file {path}: {source}")]
    FileNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader failed (I/O or malformed quoting)
    #[error("CSV error in {file}: {source}")]
    Csv {
        file: String,
        #[source]
        source: csv::Error,
    },

    /// A required column is absent from the header row
    #[error("Missing column '{column}' in {file}")]
    MissingColumn { file: String, column: String },

    /// Line in data file couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: u64,
        reason: String,
    },

    /// The restaurant and encoded tables don't describe the same rows
    #[error("Row misalignment: {restaurants} restaurants but {encoded} encoded rows")]
    RowMismatch { restaurants: usize, encoded: usize },

    /// Codec artifact failed to load
    #[error(transparent)]
    Codec(#[from] codec::CodecError),

    /// Data validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
