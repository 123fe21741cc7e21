//! Multi-label cuisine encoder.
//!
//! The encoder is fitted offline; at runtime we only need its vocabulary
//! (the ordered list of known cuisine names) to turn cuisine names into a
//! multi-hot vector and into the matching `cuisine_<name>` column names of
//! the encoded feature table.

use crate::error::{CodecError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::info;

/// Prefix of the one-hot cuisine columns in the encoded feature table
pub const CUISINE_COLUMN_PREFIX: &str = "cuisine_";

/// Name of the encoded column that flags `cuisine`
pub fn cuisine_column(cuisine: &str) -> String {
    format!("{CUISINE_COLUMN_PREFIX}{cuisine}")
}

/// Maps cuisine names to their position in a fitted vocabulary.
///
/// `Send + Sync` so one encoder can be shared by concurrent requests.
pub trait CuisineEncoder: Send + Sync {
    /// Known cuisine names, in vocabulary order
    fn classes(&self) -> &[String];

    /// Encode cuisine names as a multi-hot vector over `classes()`.
    ///
    /// Names outside the vocabulary are ignored.
    fn encode(&self, cuisines: &[String]) -> Vec<f32>;
}

/// On-disk shape of the encoder artifact
#[derive(Debug, Deserialize)]
struct EncoderArtifact {
    classes: Vec<String>,
}

/// Vocabulary-backed [`CuisineEncoder`].
#[derive(Debug, Clone)]
pub struct MultiLabelEncoder {
    classes: Vec<String>,
    positions: HashMap<String, usize>,
}

impl MultiLabelEncoder {
    /// Build an encoder from an ordered vocabulary.
    ///
    /// Duplicate names keep their first position.
    pub fn new(classes: Vec<String>) -> Self {
        let mut positions = HashMap::with_capacity(classes.len());
        for (i, class) in classes.iter().enumerate() {
            positions.entry(class.clone()).or_insert(i);
        }
        Self { classes, positions }
    }

    /// Load the vocabulary from a JSON artifact of the form
    /// `{"classes": ["Biryani", "Chinese", ...]}`.
    pub fn load(path: &Path) -> Result<Self> {
        let label = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|source| CodecError::ArtifactNotFound {
            path: label.clone(),
            source,
        })?;
        let artifact: EncoderArtifact =
            serde_json::from_str(&content).map_err(|source| CodecError::MalformedArtifact {
                path: label.clone(),
                source,
            })?;

        if artifact.classes.is_empty() {
            return Err(CodecError::InvalidArtifact {
                path: label,
                reason: "vocabulary is empty".to_string(),
            });
        }

        info!(
            "Loaded cuisine vocabulary with {} classes from {}",
            artifact.classes.len(),
            label
        );
        Ok(Self::new(artifact.classes))
    }

    /// Vocabulary position of a cuisine
    pub fn position(&self, cuisine: &str) -> Option<usize> {
        self.positions.get(cuisine).copied()
    }
}

impl CuisineEncoder for MultiLabelEncoder {
    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn encode(&self, cuisines: &[String]) -> Vec<f32> {
        let mut encoded = vec![0.0; self.classes.len()];
        for cuisine in cuisines {
            if let Some(i) = self.position(cuisine) {
                encoded[i] = 1.0;
            }
        }
        encoded
    }
}
