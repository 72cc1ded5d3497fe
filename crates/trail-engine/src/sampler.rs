//! Waypoint candidate sampling across place categories.

use std::sync::Arc;

use trail_core::models::{PlaceCandidate, RouteCriteria};

use crate::providers::PlaceProvider;

/// Categories queried when the caller does not supply a set of their own.
pub const DEFAULT_CATEGORIES: [&str; 4] = ["park", "nature", "attraction", "restaurant"];

/// Gathers the waypoint candidate pool for one orchestration run.
///
/// Issues one provider query per category at half the requested radius so
/// loop routes through the waypoints stay inside the requested area. A
/// failed category query is logged and skipped; the remaining categories
/// are still attempted.
pub struct CandidateSampler {
    places: Arc<dyn PlaceProvider>,
    categories: Vec<String>,
}

impl CandidateSampler {
    pub fn new(places: Arc<dyn PlaceProvider>) -> Self {
        Self::with_categories(
            places,
            DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        )
    }

    /// Sampler over a caller-chosen category set.
    pub fn with_categories(places: Arc<dyn PlaceProvider>, categories: Vec<String>) -> Self {
        Self { places, categories }
    }

    /// All candidates found across the configured categories, each tagged
    /// with the category whose query produced it. An empty result means
    /// "no candidates", not an error.
    pub async fn sample(&self, criteria: &RouteCriteria) -> Vec<PlaceCandidate> {
        let search_radius_km = criteria.radius_km / 2.0;
        let mut pool = Vec::new();

        for category in &self.categories {
            match self
                .places
                .find_nearby(criteria.center, search_radius_km, category)
                .await
            {
                Ok(places) => {
                    tracing::debug!(category, count = places.len(), "category search done");
                    pool.extend(places.into_iter().map(|mut place| {
                        place.search_category = category.clone();
                        place
                    }));
                }
                Err(err) => {
                    tracing::warn!(category, error = %err, "category search failed, skipping");
                }
            }
        }

        tracing::info!(total = pool.len(), "waypoint candidate pool sampled");
        pool
    }
}
