//! Filter to keep restaurants serving at least one preferred cuisine.
//!
//! Matching is done on the encoded one-hot `cuisine_<name>` columns, never
//! on the free-text cuisine display field.

use crate::criteria::SearchCriteria;
use crate::traits::Filter;
use anyhow::Result;
use catalog::{Catalog, RowIndex};
use codec::{cuisine_column, CuisineEncoder};
use std::sync::Arc;
use tracing::debug;

/// Keeps rows flagged with any of the requested cuisines (OR semantics).
///
/// ## Algorithm
/// 1. Encode the requested cuisines with the fitted encoder; names outside
///    the vocabulary drop out here
/// 2. Map each remaining vocabulary entry to its encoded column; entries
///    without a column drop out too
/// 3. If nothing is left, the filter is a no-op
/// 4. Otherwise keep rows whose flags over those columns sum to > 0
pub struct CuisinePreferenceFilter {
    catalog: Arc<Catalog>,
    encoder: Arc<dyn CuisineEncoder>,
    /// Encoded column of each vocabulary entry, aligned with `encoder.classes()`
    columns: Vec<Option<usize>>,
}

impl CuisinePreferenceFilter {
    /// Create a new CuisinePreferenceFilter.
    ///
    /// # Arguments
    /// * `catalog` - Shared catalog whose encoded table holds the cuisine flags
    /// * `encoder` - Fitted cuisine encoder providing the vocabulary
    pub fn new(catalog: Arc<Catalog>, encoder: Arc<dyn CuisineEncoder>) -> Self {
        let features = catalog.features();
        let columns = encoder
            .classes()
            .iter()
            .map(|class| features.column_index(&cuisine_column(class)))
            .collect();
        Self {
            catalog,
            encoder,
            columns,
        }
    }

    /// Encoded columns selected by the requested cuisines
    fn requested_columns(&self, cuisines: &[String]) -> Vec<usize> {
        self.encoder
            .encode(cuisines)
            .iter()
            .zip(&self.columns)
            .filter(|&(&flag, _)| flag > 0.0)
            .filter_map(|(_, column)| *column)
            .collect()
    }
}

impl Filter for CuisinePreferenceFilter {
    fn name(&self) -> &str {
        "CuisinePreferenceFilter"
    }

    fn apply(&self, rows: Vec<RowIndex>, criteria: &SearchCriteria) -> Result<Vec<RowIndex>> {
        if criteria.preferred_cuisines.is_empty() {
            return Ok(rows);
        }

        let columns = self.requested_columns(&criteria.preferred_cuisines);
        if columns.is_empty() {
            debug!(
                "None of {:?} are known cuisines, skipping cuisine filter",
                criteria.preferred_cuisines
            );
            return Ok(rows);
        }

        let features = self.catalog.features();
        let filtered: Vec<RowIndex> = rows
            .into_iter()
            .filter(|&row| columns.iter().map(|&col| features.get(row, col)).sum::<f32>() > 0.0)
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::{catalog_with_features, restaurant};
    use codec::MultiLabelEncoder;

    fn setup() -> (Arc<Catalog>, Arc<dyn CuisineEncoder>) {
        let restaurants = (1..=4)
            .map(|id| restaurant(id, Some("Pune"), Some(4.0), Some(200.0)))
            .collect();
        let catalog = catalog_with_features(
            restaurants,
            &["cost", "cuisine_Chinese", "cuisine_Italian", "cuisine_Biryani"],
            vec![
                vec![200.0, 1.0, 0.0, 0.0], // Chinese
                vec![200.0, 0.0, 1.0, 0.0], // Italian
                vec![200.0, 0.0, 0.0, 1.0], // Biryani
                vec![200.0, 1.0, 1.0, 0.0], // Chinese + Italian
            ],
        );
        // "Thai" is in the vocabulary but has no encoded column
        let encoder: Arc<dyn CuisineEncoder> = Arc::new(MultiLabelEncoder::new(vec![
            "Biryani".to_string(),
            "Chinese".to_string(),
            "Thai".to_string(),
        ]));
        (catalog, encoder)
    }

    #[test]
    fn test_cuisine_preference_or_semantics() {
        let (catalog, encoder) = setup();
        let filter = CuisinePreferenceFilter::new(catalog.clone(), encoder);

        let criteria = SearchCriteria::new("Pune").with_cuisines(["Chinese", "Biryani"]);
        let filtered = filter.apply(catalog.all_rows(), &criteria).unwrap();

        assert_eq!(filtered, vec![0, 2, 3]);
    }

    #[test]
    fn test_unknown_cuisines_are_dropped() {
        let (catalog, encoder) = setup();
        let filter = CuisinePreferenceFilter::new(catalog.clone(), encoder);

        // Italian has a column but is not in the vocabulary
        let criteria = SearchCriteria::new("Pune").with_cuisines(["Chinese", "Italian"]);
        let filtered = filter.apply(catalog.all_rows(), &criteria).unwrap();

        assert_eq!(filtered, vec![0, 3]);
    }

    #[test]
    fn test_all_unknown_skips_filter() {
        let (catalog, encoder) = setup();
        let filter = CuisinePreferenceFilter::new(catalog.clone(), encoder);

        let criteria = SearchCriteria::new("Pune").with_cuisines(["Italian", "Thai"]);
        let filtered = filter.apply(catalog.all_rows(), &criteria).unwrap();

        assert_eq!(filtered, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_no_preference_keeps_all() {
        let (catalog, encoder) = setup();
        let filter = CuisinePreferenceFilter::new(catalog.clone(), encoder);

        let filtered = filter
            .apply(catalog.all_rows(), &SearchCriteria::new("Pune"))
            .unwrap();

        assert_eq!(filtered.len(), 4);
    }
}
