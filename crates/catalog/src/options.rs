//! Option lists for the presentation layer.

use crate::types::Catalog;
use codec::CuisineEncoder;
use std::collections::BTreeSet;

impl Catalog {
    /// Distinct city names, sorted, excluding missing values
    pub fn list_cities(&self) -> Vec<String> {
        self.restaurants
            .iter()
            .filter_map(|r| r.city.as_deref())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

/// Distinct cuisine names from the encoder vocabulary, sorted.
///
/// The vocabulary is the source of truth; the free-text `cuisine` column
/// is never re-parsed.
pub fn list_cuisines(encoder: &dyn CuisineEncoder) -> Vec<String> {
    encoder
        .classes()
        .iter()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
