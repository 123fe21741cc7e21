//! Filter implementations for the recommendation pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod city;
pub mod cuisine_preference;
pub mod maximum_cost;
pub mod minimum_rating;

// Re-export for convenience
pub use city::CityFilter;
pub use cuisine_preference::CuisinePreferenceFilter;
pub use maximum_cost::MaximumCostFilter;
pub use minimum_rating::MinimumRatingFilter;

#[cfg(test)]
pub(crate) mod test_support {
    use catalog::{Catalog, Restaurant, RestaurantId};
    use codec::FeatureMatrix;
    use std::sync::Arc;

    pub fn restaurant(
        id: RestaurantId,
        city: Option<&str>,
        rating: Option<f32>,
        cost: Option<f32>,
    ) -> Restaurant {
        Restaurant {
            id,
            name: format!("Restaurant {}", id),
            city: city.map(str::to_string),
            rating,
            rating_count: Some(50.0),
            cost,
            cuisine: "Cafe".to_string(),
        }
    }

    /// Catalog with a single constant feature column
    pub fn catalog_of(restaurants: Vec<Restaurant>) -> Arc<Catalog> {
        let rows = vec![vec![1.0]; restaurants.len()];
        catalog_with_features(restaurants, &["cuisine_Cafe"], rows)
    }

    pub fn catalog_with_features(
        restaurants: Vec<Restaurant>,
        columns: &[&str],
        rows: Vec<Vec<f32>>,
    ) -> Arc<Catalog> {
        let columns = columns.iter().map(|c| c.to_string()).collect();
        let features = FeatureMatrix::from_rows(columns, rows).unwrap();
        Arc::new(Catalog::new(restaurants, features).unwrap())
    }
}
