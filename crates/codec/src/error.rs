//! Error types for the codec crate.

use thiserror::Error;

/// Errors that can occur while loading or applying the pre-fitted codec artifacts.
#[derive(Error, Debug)]
pub enum CodecError {
    /// Artifact file could not be found or opened
    #[error("Failed to open artifact {path}: {source}")]
    ArtifactNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Artifact file was readable but not valid JSON for the expected shape
    #[error("Malformed artifact {path}: {source}")]
    MalformedArtifact {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Artifact parsed but its contents are inconsistent
    #[error("Invalid artifact {path}: {reason}")]
    InvalidArtifact { path: String, reason: String },

    /// A matrix did not have the width the scaler was fitted on
    #[error("Expected {expected} features but found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// A matrix was built from a buffer whose length isn't rows * cols
    #[error("Matrix buffer of length {len} cannot hold {rows} rows of {cols} columns")]
    ShapeMismatch { len: usize, rows: usize, cols: usize },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CodecError>;
