//! Filter to ensure a minimum rating.
//!
//! Restaurants without a numeric rating are dropped: a user who sets a
//! floor should not see unrated listings.

use crate::criteria::SearchCriteria;
use crate::traits::Filter;
use anyhow::Result;
use catalog::{Catalog, RowIndex};
use std::sync::Arc;

/// Removes rows rated below `criteria.min_rating`.
///
/// ## Algorithm
/// For each row:
/// 1. Look up the restaurant's coerced rating
/// 2. Keep it only if the rating is present and >= min_rating
pub struct MinimumRatingFilter {
    catalog: Arc<Catalog>,
}

impl MinimumRatingFilter {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn apply(&self, rows: Vec<RowIndex>, criteria: &SearchCriteria) -> Result<Vec<RowIndex>> {
        let filtered: Vec<RowIndex> = rows
            .into_iter()
            .filter(|&row| {
                self.catalog
                    .get(row)
                    .and_then(|r| r.rating)
                    .is_some_and(|rating| rating >= criteria.min_rating)
            })
            .collect();

        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::{catalog_of, restaurant};

    #[test]
    fn test_minimum_rating_filter() {
        let catalog = catalog_of(vec![
            restaurant(1, Some("Pune"), Some(3.0), Some(200.0)),
            restaurant(2, Some("Pune"), Some(3.5), Some(200.0)),
            restaurant(3, Some("Pune"), Some(4.5), Some(200.0)),
            restaurant(4, Some("Pune"), None, Some(200.0)),
        ]);

        let filter = MinimumRatingFilter::new(catalog.clone());
        let criteria = SearchCriteria::new("Pune").with_min_rating(3.5);
        let filtered = filter.apply(catalog.all_rows(), &criteria).unwrap();

        // Bound is inclusive, missing rating is excluded
        assert_eq!(filtered, vec![1, 2]);
    }

    #[test]
    fn test_zero_floor_still_excludes_missing() {
        let catalog = catalog_of(vec![
            restaurant(1, Some("Pune"), Some(0.0), Some(200.0)),
            restaurant(2, Some("Pune"), None, Some(200.0)),
        ]);

        let filter = MinimumRatingFilter::new(catalog.clone());
        let criteria = SearchCriteria::new("Pune").with_min_rating(0.0);
        let filtered = filter.apply(catalog.all_rows(), &criteria).unwrap();

        assert_eq!(filtered, vec![0]);
    }
}
