//! Offline scorer for running the pipeline without the external model.

use async_trait::async_trait;
use trail_core::models::RouteCandidate;

use crate::providers::{ProviderError, RouteScorer};

/// Heuristic stand-in for the trained ranking model.
///
/// Combines the signals the model weights most heavily: mean waypoint
/// rating, category variety, and how close the walk length lands to a
/// comfortable target. Scores fall in [0, 1] but nothing downstream
/// depends on the range.
pub struct RatingScorer {
    /// Walk length the score peaks at, in meters.
    pub target_distance_m: f64,
}

impl Default for RatingScorer {
    fn default() -> Self {
        Self {
            target_distance_m: 4000.0,
        }
    }
}

impl RatingScorer {
    fn score(&self, candidate: &RouteCandidate) -> f64 {
        let rating_part = if candidate.waypoints.is_empty() {
            0.0
        } else {
            let sum: f64 = candidate.waypoints.iter().map(|p| p.rating).sum();
            (sum / candidate.waypoints.len() as f64) / 5.0
        };

        let variety_part = (candidate.categories_used.len() as f64 / 3.0).min(1.0);

        let deviation = (candidate.distance_m as f64 - self.target_distance_m).abs();
        let distance_part = (1.0 - deviation / self.target_distance_m).max(0.0);

        0.5 * rating_part + 0.2 * variety_part + 0.3 * distance_part
    }
}

#[async_trait]
impl RouteScorer for RatingScorer {
    async fn score_batch(&self, candidates: &[RouteCandidate]) -> Result<Vec<f64>, ProviderError> {
        Ok(candidates.iter().map(|c| self.score(c)).collect())
    }
}
