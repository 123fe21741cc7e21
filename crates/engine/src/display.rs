//! Display-safety fallbacks and summary metrics for a result set.
//!
//! None of this affects ranking. It only guarantees that every returned
//! record carries a number for rating, rating count and cost.

use crate::recommender::Recommendation;
use serde::Serialize;

/// Rating shown when no result in the set has one
pub const DEFAULT_RATING: f32 = 4.0;

/// Rating count shown when no result in the set has one
pub const DEFAULT_RATING_COUNT: f32 = 100.0;

/// Cost shown when no result in the set has one
pub const DEFAULT_COST: f32 = 300.0;

/// Median of the values, averaging the two middle values for even counts
pub fn median(values: &[f32]) -> Option<f32> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f32::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Replace missing values with the median of the present ones.
///
/// If every value is missing, all of them become `default`.
pub fn fill_missing(values: &[Option<f32>], default: f32) -> Vec<f32> {
    let present: Vec<f32> = values.iter().flatten().copied().collect();
    let fill = median(&present).unwrap_or(default);
    values.iter().map(|v| v.unwrap_or(fill)).collect()
}

/// Headline metrics over a non-empty result set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationSummary {
    pub found: usize,
    pub median_rating: f32,
    pub median_rating_count: f32,
    pub mean_cost: f32,
    pub best_similarity: f32,
}

impl RecommendationSummary {
    /// Summarize a result set; `None` when it's empty.
    pub fn from_recommendations(recommendations: &[Recommendation]) -> Option<Self> {
        if recommendations.is_empty() {
            return None;
        }

        let ratings: Vec<f32> = recommendations.iter().map(|r| r.rating).collect();
        let counts: Vec<f32> = recommendations.iter().map(|r| r.rating_count).collect();
        let total_cost: f32 = recommendations.iter().map(|r| r.cost).sum();
        let best_similarity = recommendations
            .iter()
            .map(|r| r.similarity)
            .fold(f32::MIN, f32::max);

        Some(Self {
            found: recommendations.len(),
            median_rating: median(&ratings).unwrap_or(DEFAULT_RATING),
            median_rating_count: median(&counts).unwrap_or(DEFAULT_RATING_COUNT),
            mean_cost: total_cost / recommendations.len() as f32,
            best_similarity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recommendation(rating: f32, rating_count: f32, cost: f32, similarity: f32) -> Recommendation {
        Recommendation {
            id: 1,
            name: "Spice Hub".to_string(),
            city: "Pune".to_string(),
            rating,
            rating_count,
            cost,
            cuisine: "Chinese".to_string(),
            similarity,
        }
    }

    #[test]
    fn test_median() {
        assert_eq!(median(&[]), None);
        assert_eq!(median(&[3.0]), Some(3.0));
        assert_eq!(median(&[5.0, 1.0, 3.0]), Some(3.0));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
    }

    #[test]
    fn test_fill_missing_with_median() {
        let filled = fill_missing(&[Some(10.0), None, Some(30.0), Some(20.0)], DEFAULT_RATING_COUNT);
        assert_eq!(filled, vec![10.0, 20.0, 30.0, 20.0]);
    }

    #[test]
    fn test_fill_all_missing_with_default() {
        let filled = fill_missing(&[None, None], DEFAULT_COST);
        assert_eq!(filled, vec![300.0, 300.0]);
    }

    #[test]
    fn test_fill_nothing_missing() {
        let filled = fill_missing(&[Some(4.1), Some(3.9)], DEFAULT_RATING);
        assert_eq!(filled, vec![4.1, 3.9]);
    }

    #[test]
    fn test_summary() {
        let recs = vec![
            recommendation(4.0, 100.0, 200.0, 0.9),
            recommendation(4.4, 50.0, 400.0, 0.7),
            recommendation(3.8, 20.0, 300.0, 0.95),
        ];
        let summary = RecommendationSummary::from_recommendations(&recs).unwrap();

        assert_eq!(summary.found, 3);
        assert_eq!(summary.median_rating, 4.0);
        assert_eq!(summary.median_rating_count, 50.0);
        assert_eq!(summary.mean_cost, 300.0);
        assert_eq!(summary.best_similarity, 0.95);
    }

    #[test]
    fn test_summary_of_nothing() {
        assert!(RecommendationSummary::from_recommendations(&[]).is_none());
    }
}
