//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::criteria::SearchCriteria;
use crate::traits::Filter;
use anyhow::Result;
use catalog::RowIndex;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// Filters are combined with AND semantics: a row survives only if every
/// filter keeps it.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(CityFilter::new(catalog.clone()))
///     .add_filter(MinimumRatingFilter::new(catalog.clone()))
///     .add_filter(MaximumCostFilter::new(catalog.clone()))
///     .add_filter(CuisinePreferenceFilter::new(catalog.clone(), encoder.clone()));
///
/// let rows = pipeline.apply(catalog.all_rows(), &criteria)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    ///
    /// # Arguments
    /// * `filter` - Any type implementing the Filter trait
    ///
    /// # Returns
    /// Self for method chaining
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of filters in the pipeline
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the rows.
    ///
    /// ## Algorithm
    /// 1. Start with the input rows
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Stop early once nothing is left
    ///
    /// # Returns
    /// * `Ok(Vec<RowIndex>)` - The surviving rows, in input order
    /// * `Err` - If any filter fails
    pub fn apply(&self, rows: Vec<RowIndex>, criteria: &SearchCriteria) -> Result<Vec<RowIndex>> {
        let mut current = rows;
        for filter in &self.filters {
            if current.is_empty() {
                break;
            }
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, criteria)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
