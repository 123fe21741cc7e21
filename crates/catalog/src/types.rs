//! Core domain types for the restaurant catalog.

use codec::FeatureMatrix;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier of a restaurant in the source dataset
pub type RestaurantId = u64;

/// Position of a restaurant in the catalog.
///
/// The same position addresses the restaurant table and the encoded feature
/// table; filters pass these around instead of copying rows.
pub type RowIndex = usize;

// =============================================================================
// Restaurant
// =============================================================================

/// One row of the cleaned restaurant dataset.
///
/// Numeric fields are coerced once at load time; values that were missing
/// or non-numeric in the source are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub city: Option<String>,
    pub rating: Option<f32>,
    pub rating_count: Option<f32>,
    pub cost: Option<f32>,
    /// Display form of the cuisine tags, e.g. "North Indian,Chinese"
    pub cuisine: String,
}

// =============================================================================
// Configuration
// =============================================================================

/// Locations of the dataset files and the pre-fitted artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub restaurants: PathBuf,
    pub encoded: PathBuf,
    pub cuisine_encoder: PathBuf,
    pub scaler: PathBuf,
}

impl DataPaths {
    pub const RESTAURANTS_FILE: &'static str = "cleaned_data.csv";
    pub const ENCODED_FILE: &'static str = "encoded_data.csv";
    pub const CUISINE_ENCODER_FILE: &'static str = "cuisine_encoder.json";
    pub const SCALER_FILE: &'static str = "scaler.json";

    /// Standard file layout under a data directory and a models directory
    pub fn from_dirs(data_dir: &Path, models_dir: &Path) -> Self {
        Self {
            restaurants: data_dir.join(Self::RESTAURANTS_FILE),
            encoded: data_dir.join(Self::ENCODED_FILE),
            cuisine_encoder: models_dir.join(Self::CUISINE_ENCODER_FILE),
            scaler: models_dir.join(Self::SCALER_FILE),
        }
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::from_dirs(Path::new("data"), Path::new("models"))
    }
}

// =============================================================================
// Catalog - The In-Memory Store
// =============================================================================

/// Immutable restaurant catalog.
///
/// Holds the restaurant rows and the row-aligned encoded feature table.
/// Row `i` of `restaurants` and row `i` of `features` always describe the
/// same restaurant; construction fails otherwise.
#[derive(Debug)]
pub struct Catalog {
    pub(crate) restaurants: Vec<Restaurant>,
    pub(crate) features: FeatureMatrix,
}

impl Catalog {
    /// Number of restaurants
    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    /// Restaurant at a catalog position
    pub fn get(&self, row: RowIndex) -> Option<&Restaurant> {
        self.restaurants.get(row)
    }

    /// All restaurants in catalog order
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// The raw (unscaled) encoded feature table
    pub fn features(&self) -> &FeatureMatrix {
        &self.features
    }

    /// Every catalog position, in order
    pub fn all_rows(&self) -> Vec<RowIndex> {
        (0..self.len()).collect()
    }
}
