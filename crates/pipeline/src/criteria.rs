//! User-chosen search criteria.

/// Default minimum rating offered by the search form
pub const DEFAULT_MIN_RATING: f32 = 3.5;

/// Default maximum cost offered by the search form
pub const DEFAULT_MAX_COST: f32 = 400.0;

/// Default number of recommendations
pub const DEFAULT_TOP_N: usize = 10;

/// Criteria for a single recommendation request.
///
/// Built per request and only ever borrowed by filters.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCriteria {
    /// Exact, case-sensitive city name
    pub city: String,
    /// Inclusive lower bound on rating
    pub min_rating: f32,
    /// Inclusive upper bound on cost
    pub max_cost: f32,
    /// Cuisines to match with OR semantics; empty means any cuisine
    pub preferred_cuisines: Vec<String>,
    /// Maximum number of results; zero yields an empty result
    pub top_n: usize,
}

impl SearchCriteria {
    /// Criteria for `city` with the default bounds and no cuisine preference.
    pub fn new(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            min_rating: DEFAULT_MIN_RATING,
            max_cost: DEFAULT_MAX_COST,
            preferred_cuisines: Vec::new(),
            top_n: DEFAULT_TOP_N,
        }
    }

    /// Configure minimum rating (default: 3.5)
    pub fn with_min_rating(mut self, min_rating: f32) -> Self {
        self.min_rating = min_rating;
        self
    }

    /// Configure maximum cost (default: 400)
    pub fn with_max_cost(mut self, max_cost: f32) -> Self {
        self.max_cost = max_cost;
        self
    }

    /// Configure preferred cuisines (default: none)
    pub fn with_cuisines<I, S>(mut self, cuisines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferred_cuisines = cuisines.into_iter().map(Into::into).collect();
        self
    }

    /// Configure result count (default: 10)
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }
}
