//! Assembly of a single route candidate from the sampled waypoint pool.

use std::sync::Arc;

use rand::seq::IndexedRandom;
use rand::Rng;
use thiserror::Error;
use trail_core::geo::bearing_deg;
use trail_core::models::{PlaceCandidate, PlaceId, RouteCandidate, RouteCriteria};
use trail_core::remove_crossings;

use crate::providers::{DirectionsProvider, ProviderError};

/// Non-fatal failure of one assembly attempt. The orchestrator drops the
/// attempt and keeps going.
#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error("directions call failed: {0}")]
    Provider(#[from] ProviderError),
    #[error("directions provider returned an empty path")]
    EmptyPath,
}

/// Builds one `RouteCandidate` per invocation.
///
/// Each attempt owns its inputs and shares no mutable state with other
/// attempts, so any number of them may run concurrently.
pub struct RouteAssembler {
    directions: Arc<dyn DirectionsProvider>,
}

impl RouteAssembler {
    pub fn new(directions: Arc<dyn DirectionsProvider>) -> Self {
        Self { directions }
    }

    /// Pick 2–3 waypoints from `pool`, order them into a non-crossing
    /// clockwise sweep, and request a closed-loop path through them.
    pub async fn build<R: Rng>(
        &self,
        criteria: &RouteCriteria,
        pool: &[PlaceCandidate],
        attempt: usize,
        rng: &mut R,
    ) -> Result<RouteCandidate, AssemblyError> {
        let count = rng.random_range(2..=3usize);
        let selected: Vec<PlaceCandidate> = if pool.len() < count {
            pool.to_vec()
        } else {
            pool.choose_multiple(rng, count).cloned().collect()
        };

        let ordered = order_waypoints(criteria.center, selected);

        let waypoint_ids: Vec<PlaceId> = ordered.iter().map(|p| p.place_id.clone()).collect();
        let route = self
            .directions
            .loop_route(criteria.center, &waypoint_ids)
            .await?;
        if route.polyline.is_empty() {
            return Err(AssemblyError::EmptyPath);
        }

        tracing::debug!(
            attempt,
            waypoints = ordered.len(),
            distance_m = route.distance_m,
            duration_s = route.duration_s,
            "assembled route candidate"
        );

        Ok(RouteCandidate {
            id: format!("route_{}", attempt + 1),
            polyline: route.polyline,
            distance_m: route.distance_m,
            duration_s: route.duration_s,
            viewport: route.viewport,
            categories_used: distinct_categories(&ordered),
            waypoints: ordered,
            criteria: criteria.clone(),
            score: 0.0,
        })
    }
}

/// Sort by ascending bearing from the center (clockwise sweep) to avoid
/// naive backtracking, then remove any remaining edge crossings.
fn order_waypoints(
    center: trail_core::models::Coordinate,
    mut waypoints: Vec<PlaceCandidate>,
) -> Vec<PlaceCandidate> {
    waypoints.sort_by(|a, b| {
        bearing_deg(center, a.location).total_cmp(&bearing_deg(center, b.location))
    });
    remove_crossings(waypoints, |p| p.location)
}

/// Distinct search categories among the chosen waypoints, first-seen order.
fn distinct_categories(waypoints: &[PlaceCandidate]) -> Vec<String> {
    let mut seen = Vec::new();
    for place in waypoints {
        if !seen.contains(&place.search_category) {
            seen.push(place.search_category.clone());
        }
    }
    seen
}
