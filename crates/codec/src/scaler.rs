//! Pre-fitted feature scaler.
//!
//! Each feature is transformed as `(x - center) / scale`. The parameters are
//! fitted offline against the full encoded table; at runtime the scaler is
//! only ever applied, never refitted.

use crate::error::{CodecError, Result};
use crate::matrix::FeatureMatrix;
use rayon::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Transforms an encoded feature matrix into a comparable numeric space.
pub trait FeatureScaler: Send + Sync {
    /// Number of features the scaler was fitted on
    fn n_features(&self) -> usize;

    /// Feature names recorded at fit time, when the artifact carries them
    fn feature_names(&self) -> Option<&[String]> {
        None
    }

    /// Scale every row of `matrix`, returning a new matrix with the same columns.
    fn transform(&self, matrix: &FeatureMatrix) -> Result<FeatureMatrix>;
}

/// On-disk shape of the scaler artifact
#[derive(Debug, Deserialize)]
struct ScalerArtifact {
    #[serde(alias = "center")]
    mean: Vec<f32>,
    scale: Vec<f32>,
    #[serde(default)]
    feature_names: Option<Vec<String>>,
}

/// Per-feature center/scale scaler.
#[derive(Debug, Clone)]
pub struct StandardScaler {
    mean: Vec<f32>,
    scale: Vec<f32>,
    feature_names: Option<Vec<String>>,
}

impl StandardScaler {
    /// Build a scaler from its fitted parameters.
    ///
    /// A zero scale leaves the centered value unscaled.
    pub fn new(mean: Vec<f32>, scale: Vec<f32>) -> Result<Self> {
        if mean.len() != scale.len() {
            return Err(CodecError::DimensionMismatch {
                expected: mean.len(),
                found: scale.len(),
            });
        }
        let scale = scale
            .into_iter()
            .map(|s| if s == 0.0 || !s.is_finite() { 1.0 } else { s })
            .collect();
        Ok(Self {
            mean,
            scale,
            feature_names: None,
        })
    }

    /// Attach the feature names the scaler was fitted on.
    pub fn with_feature_names(mut self, names: Vec<String>) -> Self {
        self.feature_names = Some(names);
        self
    }

    /// Load a scaler from a JSON artifact of the form
    /// `{"mean": [...], "scale": [...], "feature_names": [...]}`.
    ///
    /// `feature_names` is optional; `center` is accepted as an alias of `mean`.
    pub fn load(path: &Path) -> Result<Self> {
        let label = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|source| CodecError::ArtifactNotFound {
            path: label.clone(),
            source,
        })?;
        let artifact: ScalerArtifact =
            serde_json::from_str(&content).map_err(|source| CodecError::MalformedArtifact {
                path: label.clone(),
                source,
            })?;

        if artifact.mean.len() != artifact.scale.len() {
            return Err(CodecError::InvalidArtifact {
                path: label,
                reason: format!(
                    "{} centers but {} scales",
                    artifact.mean.len(),
                    artifact.scale.len()
                ),
            });
        }
        if let Some(names) = &artifact.feature_names {
            if names.len() != artifact.mean.len() {
                return Err(CodecError::InvalidArtifact {
                    path: label,
                    reason: format!(
                        "{} feature names for {} features",
                        names.len(),
                        artifact.mean.len()
                    ),
                });
            }
        }

        let mut scaler = Self::new(artifact.mean, artifact.scale)?;
        scaler.feature_names = artifact.feature_names;
        info!(
            "Loaded feature scaler over {} features from {}",
            scaler.n_features(),
            label
        );
        Ok(scaler)
    }
}

impl FeatureScaler for StandardScaler {
    fn n_features(&self) -> usize {
        self.mean.len()
    }

    fn feature_names(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }

    fn transform(&self, matrix: &FeatureMatrix) -> Result<FeatureMatrix> {
        let n_cols = matrix.n_cols();
        if n_cols != self.n_features() {
            return Err(CodecError::DimensionMismatch {
                expected: self.n_features(),
                found: n_cols,
            });
        }
        if n_cols == 0 {
            return Ok(matrix.clone());
        }

        debug!("Scaling {} rows x {} features", matrix.n_rows(), n_cols);
        let mut data = matrix.as_slice().to_vec();
        data.par_chunks_mut(n_cols).for_each(|row| {
            for ((x, mean), scale) in row.iter_mut().zip(&self.mean).zip(&self.scale) {
                *x = (*x - mean) / scale;
            }
        });

        FeatureMatrix::new(matrix.columns().to_vec(), data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> FeatureMatrix {
        FeatureMatrix::from_rows(
            vec!["cost".to_string(), "cuisine_Chinese".to_string()],
            vec![vec![200.0, 1.0], vec![400.0, 0.0]],
        )
        .unwrap()
    }

    #[test]
    fn test_transform() {
        let scaler = StandardScaler::new(vec![300.0, 0.5], vec![100.0, 0.5]).unwrap();
        let scaled = scaler.transform(&matrix()).unwrap();

        assert_eq!(scaled.row(0), &[-1.0, 1.0]);
        assert_eq!(scaled.row(1), &[1.0, -1.0]);
        assert_eq!(scaled.columns(), matrix().columns());
    }

    #[test]
    fn test_zero_scale_is_treated_as_one() {
        let scaler = StandardScaler::new(vec![0.0, 1.0], vec![0.0, 1.0]).unwrap();
        let scaled = scaler.transform(&matrix()).unwrap();
        assert_eq!(scaled.row(0), &[200.0, 0.0]);
    }

    #[test]
    fn test_width_mismatch() {
        let scaler = StandardScaler::new(vec![0.0], vec![1.0]).unwrap();
        let result = scaler.transform(&matrix());
        assert!(matches!(
            result,
            Err(CodecError::DimensionMismatch { expected: 1, found: 2 })
        ));
    }

    #[test]
    fn test_mismatched_parameters() {
        assert!(StandardScaler::new(vec![0.0, 1.0], vec![1.0]).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("scaler-{}.json", std::process::id()));
        fs::write(
            &path,
            r#"{"center": [300.0, 0.5], "scale": [100.0, 0.5], "feature_names": ["cost", "cuisine_Chinese"]}"#,
        )
        .unwrap();

        let scaler = StandardScaler::load(&path).unwrap();
        assert_eq!(scaler.n_features(), 2);
        assert_eq!(scaler.feature_names(), Some(matrix().columns()));
        assert_eq!(scaler.transform(&matrix()).unwrap().row(0), &[-1.0, 1.0]);

        fs::remove_file(path).ok();
    }
}
