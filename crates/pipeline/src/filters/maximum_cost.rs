//! Filter to enforce the user's budget.

use crate::criteria::SearchCriteria;
use crate::traits::Filter;
use anyhow::Result;
use catalog::{Catalog, RowIndex};
use std::sync::Arc;

/// Removes rows costing more than `criteria.max_cost`.
///
/// ## Algorithm
/// Keep a row only if its coerced cost is present and <= max_cost.
/// Rows with no numeric cost are dropped.
pub struct MaximumCostFilter {
    catalog: Arc<Catalog>,
}

impl MaximumCostFilter {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl Filter for MaximumCostFilter {
    fn name(&self) -> &str {
        "MaximumCostFilter"
    }

    fn apply(&self, rows: Vec<RowIndex>, criteria: &SearchCriteria) -> Result<Vec<RowIndex>> {
        let filtered: Vec<RowIndex> = rows
            .into_iter()
            .filter(|&row| {
                self.catalog
                    .get(row)
                    .and_then(|r| r.cost)
                    .is_some_and(|cost| cost <= criteria.max_cost)
            })
            .collect();

        Ok(filtered)
    }
}
