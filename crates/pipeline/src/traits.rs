//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to a set of catalog rows.

use crate::criteria::SearchCriteria;
use anyhow::Result;
use catalog::RowIndex;

/// Core trait for filtering catalog rows.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - Filters work on catalog positions, so the restaurant table and the
///   encoded feature table are always narrowed together
/// - `Send + Sync` allows filters to be shared by concurrent requests
/// - Filters take ownership of the Vec<RowIndex> and return a filtered Vec,
///   preserving input order
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of catalog rows.
    ///
    /// # Arguments
    /// * `rows` - The candidate rows to filter (takes ownership)
    /// * `criteria` - The request's search criteria
    ///
    /// # Returns
    /// * `Ok(Vec<RowIndex>)` - The rows that satisfy this filter
    /// * `Err` - If filtering fails
    fn apply(&self, rows: Vec<RowIndex>, criteria: &SearchCriteria) -> Result<Vec<RowIndex>>;
}
