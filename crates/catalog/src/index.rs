//! Catalog building and validation.
//!
//! Loads the restaurant table and the encoded feature table, and checks
//! that they describe the same rows in the same order.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use codec::FeatureMatrix;
use std::collections::HashSet;
use tracing::info;

impl Catalog {
    /// Build a catalog from already-parsed tables.
    ///
    /// Fails if the tables are not row-aligned or restaurant ids repeat.
    pub fn new(restaurants: Vec<Restaurant>, features: FeatureMatrix) -> Result<Self> {
        let catalog = Self {
            restaurants,
            features,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load the catalog from the dataset files named in `paths`.
    ///
    /// Steps:
    /// 1. Parse both CSV files in parallel
    /// 2. Check row alignment and id uniqueness
    pub fn load(paths: &DataPaths) -> Result<Self> {
        info!(
            "Loading restaurants from {} and encoded features from {}",
            paths.restaurants.display(),
            paths.encoded.display()
        );

        let (restaurants, features) = rayon::join(
            || parser::parse_restaurants(&paths.restaurants),
            || parser::parse_encoded(&paths.encoded),
        );
        let restaurants = restaurants?;
        let features = features?;

        info!(
            "Loaded {} restaurants and {} encoded rows x {} features",
            restaurants.len(),
            features.n_rows(),
            features.n_cols()
        );

        Self::new(restaurants, features)
    }

    /// Validate data integrity
    ///
    /// Check that:
    /// - Both tables have the same number of rows
    /// - No restaurant id appears twice
    pub fn validate(&self) -> Result<()> {
        if self.restaurants.len() != self.features.n_rows() {
            return Err(CatalogError::RowMismatch {
                restaurants: self.restaurants.len(),
                encoded: self.features.n_rows(),
            });
        }

        let mut seen = HashSet::with_capacity(self.restaurants.len());
        for restaurant in &self.restaurants {
            if !seen.insert(restaurant.id) {
                return Err(CatalogError::ValidationError(format!(
                    "duplicate restaurant id {}",
                    restaurant.id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn restaurant(id: RestaurantId, city: &str) -> Restaurant {
        Restaurant {
            id,
            name: format!("Restaurant {}", id),
            city: Some(city.to_string()),
            rating: Some(4.0),
            rating_count: Some(20.0),
            cost: Some(250.0),
            cuisine: "Cafe".to_string(),
        }
    }

    fn features(n_rows: usize) -> FeatureMatrix {
        FeatureMatrix::from_rows(vec!["cuisine_Cafe".to_string()], vec![vec![1.0]; n_rows])
            .unwrap()
    }

    #[test]
    fn test_row_mismatch_rejected() {
        let result = Catalog::new(vec![restaurant(1, "Pune")], features(2));
        assert!(matches!(
            result,
            Err(CatalogError::RowMismatch {
                restaurants: 1,
                encoded: 2
            })
        ));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::new(
            vec![restaurant(7, "Pune"), restaurant(7, "Delhi")],
            features(2),
        );
        assert!(matches!(result, Err(CatalogError::ValidationError(_))));
    }

    #[test]
    fn test_load_missing_files() {
        let paths = DataPaths::from_dirs(
            &PathBuf::from("/nonexistent/data"),
            &PathBuf::from("/nonexistent/models"),
        );
        let err = Catalog::load(&paths).unwrap_err();
        assert!(matches!(err, CatalogError::FileNotFound { .. }));
        assert!(err.to_string().contains("/nonexistent/data"));
    }

    #[test]
    fn test_load_from_files() {
        let dir = std::env::temp_dir().join(format!("catalog-load-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(DataPaths::RESTAURANTS_FILE),
            "id,name,city,rating,rating_count,cost,cuisine\n\
             1,A,Pune,4.0,10,200,Cafe\n\
             2,B,Delhi,3.5,--,400,Chinese\n",
        )
        .unwrap();
        fs::write(
            dir.join(DataPaths::ENCODED_FILE),
            "cost,cuisine_Cafe,cuisine_Chinese\n200,1,0\n400,0,1\n",
        )
        .unwrap();

        let catalog = Catalog::load(&DataPaths::from_dirs(&dir, &dir)).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.features().n_cols(), 3);
        assert_eq!(catalog.get(1).unwrap().rating_count, None);

        fs::remove_dir_all(&dir).ok();
    }
}
