//! Filter to keep restaurants in the requested city.
//!
//! This is typically the first filter in the pipeline: it discards most of
//! the catalog with a single string comparison.

use crate::criteria::SearchCriteria;
use crate::traits::Filter;
use anyhow::Result;
use catalog::{Catalog, RowIndex};
use std::sync::Arc;

/// Keeps rows whose city equals the requested city exactly.
///
/// ## Algorithm
/// Case-sensitive comparison; rows with a missing city never match, and an
/// unknown city simply matches nothing.
pub struct CityFilter {
    catalog: Arc<Catalog>,
}

impl CityFilter {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl Filter for CityFilter {
    fn name(&self) -> &str {
        "CityFilter"
    }

    fn apply(&self, rows: Vec<RowIndex>, criteria: &SearchCriteria) -> Result<Vec<RowIndex>> {
        let filtered: Vec<RowIndex> = rows
            .into_iter()
            .filter(|&row| {
                self.catalog
                    .get(row)
                    .and_then(|r| r.city.as_deref())
                    .is_some_and(|city| city == criteria.city)
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
    fn test_city_filter() {
        let catalog = catalog_of(vec![
            restaurant(1, Some("Pune"), Some(4.0), Some(200.0)),
            restaurant(2, Some("pune"), Some(4.0), Some(200.0)),
            restaurant(3, Some("Delhi"), Some(4.0), Some(200.0)),
            restaurant(4, None, Some(4.0), Some(200.0)),
            restaurant(5, Some("Pune"), Some(4.0), Some(200.0)),
        ]);

        let filter = CityFilter::new(catalog.clone());
        let filtered = filter
            .apply(catalog.all_rows(), &SearchCriteria::new("Pune"))
            .unwrap();

        assert_eq!(filtered, vec![0, 4]);
    }

    #[test]
    fn test_unknown_city_matches_nothing() {
        let catalog = catalog_of(vec![restaurant(1, Some("Pune"), Some(4.0), Some(200.0))]);

        let filter = CityFilter::new(catalog.clone());
        let filtered = filter
            .apply(catalog.all_rows(), &SearchCriteria::new("Nonexistent City"))
            .unwrap();

        assert!(filtered.is_empty());
    }
}
