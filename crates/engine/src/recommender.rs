//! # Recommendation Engine
//!
//! This module coordinates a recommendation request:
//! 1. Filter the catalog (city, rating floor, cost ceiling, cuisines)
//! 2. Short-circuit on an empty match set
//! 3. Clamp the neighbor count to the number of matches
//! 4. Average the matches' scaled features into a profile
//! 5. Rank the matches by cosine distance to the profile
//! 6. Assemble result records with display-safe numbers
//!
//! The catalog, encoder and scaled feature table are built once and only
//! ever read afterwards, so one engine can serve concurrent requests.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::{debug, info, instrument};

use catalog::{Catalog, DataPaths, RestaurantId, RowIndex, list_cuisines};
use codec::{CuisineEncoder, FeatureMatrix, FeatureScaler, MultiLabelEncoder, StandardScaler};
use pipeline::filters::{
    CityFilter, CuisinePreferenceFilter, MaximumCostFilter, MinimumRatingFilter,
};
use pipeline::{FilterPipeline, Neighbor, SearchCriteria, SubsetIndex};

use crate::display::{DEFAULT_COST, DEFAULT_RATING, DEFAULT_RATING_COUNT, fill_missing};

/// Final recommendation returned to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub id: RestaurantId,
    pub name: String,
    pub city: String,
    pub rating: f32,
    pub rating_count: f32,
    pub cost: f32,
    pub cuisine: String,
    /// `1 - cosine distance` to the profile of the matching set, in [0, 1]
    pub similarity: f32,
}

impl Recommendation {
    /// Result schema, in field order
    pub const COLUMNS: [&'static str; 8] = [
        "id",
        "name",
        "city",
        "rating",
        "rating_count",
        "cost",
        "cuisine",
        "similarity",
    ];
}

/// Main engine that coordinates the recommendation pipeline
#[derive(Clone)]
pub struct RecommendationEngine {
    catalog: Arc<Catalog>,
    encoder: Arc<dyn CuisineEncoder>,
    scaled_features: Arc<FeatureMatrix>,
    filter_pipeline: Arc<FilterPipeline>,
}

impl RecommendationEngine {
    /// Create an engine over a loaded catalog and injected codec.
    ///
    /// The scaler is applied to the whole encoded table here, once; the
    /// scaled table is what every request ranks against.
    ///
    /// # Errors
    /// Fails if the scaler was fitted on a different feature layout.
    pub fn new(
        catalog: Arc<Catalog>,
        encoder: Arc<dyn CuisineEncoder>,
        scaler: &dyn FeatureScaler,
    ) -> Result<Self> {
        let features = catalog.features();
        if let Some(names) = scaler.feature_names() {
            if names != features.columns() {
                bail!(
                    "Scaler was fitted on features {:?} but the encoded table has {:?}",
                    names,
                    features.columns()
                );
            }
        }
        let scaled_features = scaler
            .transform(features)
            .context("Failed to scale encoded feature table")?;

        let filter_pipeline = FilterPipeline::new()
            .add_filter(CityFilter::new(catalog.clone()))
            .add_filter(MinimumRatingFilter::new(catalog.clone()))
            .add_filter(MaximumCostFilter::new(catalog.clone()))
            .add_filter(CuisinePreferenceFilter::new(catalog.clone(), encoder.clone()));

        info!(
            "Recommendation engine ready: {} restaurants, {} features, {} cuisines",
            catalog.len(),
            scaled_features.n_cols(),
            encoder.classes().len()
        );

        Ok(Self {
            catalog,
            encoder,
            scaled_features: Arc::new(scaled_features),
            filter_pipeline: Arc::new(filter_pipeline),
        })
    }

    /// Load the catalog and codec artifacts named in `paths` and build an engine.
    ///
    /// Any missing or malformed file is fatal.
    pub fn load(paths: &DataPaths) -> Result<Self> {
        info!(
            "Loading models: encoder {}, scaler {}",
            paths.cuisine_encoder.display(),
            paths.scaler.display()
        );
        let catalog = Catalog::load(paths).context("Failed to load restaurant catalog")?;
        let encoder = MultiLabelEncoder::load(&paths.cuisine_encoder)
            .context("Failed to load cuisine encoder")?;
        let scaler = StandardScaler::load(&paths.scaler).context("Failed to load feature scaler")?;

        Self::new(Arc::new(catalog), Arc::new(encoder), &scaler)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Distinct cities, sorted
    pub fn cities(&self) -> Vec<String> {
        self.catalog.list_cities()
    }

    /// Known cuisines from the encoder vocabulary, sorted
    pub fn cuisines(&self) -> Vec<String> {
        list_cuisines(self.encoder.as_ref())
    }

    /// Main entry point: recommend restaurants matching `criteria`.
    ///
    /// # Returns
    /// Up to `criteria.top_n` records, closest to the profile first. An
    /// empty vector means nothing matched; it is not an error.
    #[instrument(skip(self, criteria), fields(city = %criteria.city, top_n = criteria.top_n))]
    pub fn recommend(&self, criteria: &SearchCriteria) -> Result<Vec<Recommendation>> {
        let start_time = Instant::now();

        let rows = self.apply_filters(criteria)?;
        if rows.is_empty() {
            info!("No restaurants match the filters");
            return Ok(Vec::new());
        }

        // Never ask for more neighbors than there are matches
        let request_n = criteria.top_n.min(rows.len());
        if request_n == 0 {
            debug!("top_n is 0, returning no recommendations");
            return Ok(Vec::new());
        }

        let index = SubsetIndex::new(&self.scaled_features, &rows);
        let profile = index.centroid();
        let neighbors = index.kneighbors(&profile, request_n);

        let recommendations = self.assemble(&index, &neighbors);

        info!(
            "Selected {} of {} matching restaurants in {:.2?}",
            recommendations.len(),
            rows.len(),
            start_time.elapsed()
        );
        Ok(recommendations)
    }

    /// Apply the filter pipeline to the whole catalog
    fn apply_filters(&self, criteria: &SearchCriteria) -> Result<Vec<RowIndex>> {
        let rows = self
            .filter_pipeline
            .apply(self.catalog.all_rows(), criteria)
            .context("Failed to apply filters")?;
        debug!("Filtering complete, {} rows remain", rows.len());
        Ok(rows)
    }

    /// Turn neighbors into result records, in neighbor order
    fn assemble(&self, index: &SubsetIndex<'_>, neighbors: &[Neighbor]) -> Vec<Recommendation> {
        let restaurants: Vec<_> = neighbors
            .iter()
            .filter_map(|n| self.catalog.get(index.global(n)))
            .collect();

        let ratings = fill_missing(
            &restaurants.iter().map(|r| r.rating).collect::<Vec<_>>(),
            DEFAULT_RATING,
        );
        let counts = fill_missing(
            &restaurants.iter().map(|r| r.rating_count).collect::<Vec<_>>(),
            DEFAULT_RATING_COUNT,
        );
        let costs = fill_missing(
            &restaurants.iter().map(|r| r.cost).collect::<Vec<_>>(),
            DEFAULT_COST,
        );

        restaurants
            .iter()
            .zip(neighbors)
            .enumerate()
            .map(|(i, (restaurant, neighbor))| Recommendation {
                id: restaurant.id,
                name: restaurant.name.clone(),
                city: restaurant.city.clone().unwrap_or_default(),
                rating: ratings[i],
                rating_count: counts[i],
                cost: costs[i],
                cuisine: restaurant.cuisine.clone(),
                similarity: neighbor.similarity(),
            })
            .collect()
    }
}
