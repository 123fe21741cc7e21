//! Pipeline for filtering and ranking restaurant candidates.
//!
//! This crate provides:
//! - SearchCriteria, the per-request filter settings
//! - Filter trait and implementations for candidate filtering
//! - FilterPipeline for composing filters
//! - SubsetIndex for cosine nearest-neighbor ranking around a centroid
//!
//! ## Architecture
//! The pipeline processes catalog rows in stages:
//! 1. Filters narrow the catalog (city, rating floor, cost ceiling, cuisines)
//! 2. The surviving rows' scaled features are averaged into a profile
//! 3. A subset-local cosine search ranks the rows closest to that profile
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterPipeline, SearchCriteria, SubsetIndex};
//! use pipeline::filters::*;
//!
//! let pipeline = FilterPipeline::new()
//!     .add_filter(CityFilter::new(catalog.clone()))
//!     .add_filter(MinimumRatingFilter::new(catalog.clone()))
//!     .add_filter(MaximumCostFilter::new(catalog.clone()))
//!     .add_filter(CuisinePreferenceFilter::new(catalog.clone(), encoder.clone()));
//!
//! let criteria = SearchCriteria::new("Pune").with_cuisines(["Chinese"]);
//! let rows = pipeline.apply(catalog.all_rows(), &criteria)?;
//!
//! let index = SubsetIndex::new(&scaled_features, &rows);
//! let neighbors = index.kneighbors(&index.centroid(), criteria.top_n);
//! ```

pub mod criteria;
pub mod filter_pipeline;
pub mod filters;
pub mod ranking;
pub mod traits;

// Re-export main types
pub use criteria::SearchCriteria;
pub use filter_pipeline::FilterPipeline;
pub use ranking::{Neighbor, SubsetIndex};
pub use traits::Filter;
