//! Engine crate for the tastebud restaurant recommender.
//!
//! This crate wires the catalog, the cuisine codec and the filter pipeline
//! into a single [`RecommendationEngine`] that answers recommendation
//! requests. It also owns the display fallbacks applied to result records.

pub mod display;
pub mod recommender;

pub use display::RecommendationSummary;
pub use recommender::{Recommendation, RecommendationEngine};
