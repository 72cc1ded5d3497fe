//! External capability boundaries consumed by the pipeline.
//!
//! Place search, directions, and scoring are opaque services. The pipeline
//! never interprets their payloads beyond the fields modeled in
//! `trail_core::models`; polylines and viewports pass through untouched.

use async_trait::async_trait;
use thiserror::Error;
use trail_core::models::{Coordinate, LoopRoute, PlaceCandidate, PlaceId, RouteCandidate};

/// Failure of a single provider call. Timeouts surface through the same
/// path as any other upstream failure; retry policy belongs to the caller.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider call timed out")]
    Timeout,
    #[error("{0}")]
    Upstream(String),
}

/// Searches points of interest around a center.
#[async_trait]
pub trait PlaceProvider: Send + Sync {
    async fn find_nearby(
        &self,
        center: Coordinate,
        radius_km: f64,
        category: &str,
    ) -> Result<Vec<PlaceCandidate>, ProviderError>;
}

/// Computes a closed-loop walking path through a sequence of places.
#[async_trait]
pub trait DirectionsProvider: Send + Sync {
    /// Path from `origin` back to `origin` via `waypoint_ids` in order.
    async fn loop_route(
        &self,
        origin: Coordinate,
        waypoint_ids: &[PlaceId],
    ) -> Result<LoopRoute, ProviderError>;
}

/// Scores assembled route candidates.
#[async_trait]
pub trait RouteScorer: Send + Sync {
    /// One score per candidate, same order as the input. Implementations
    /// without a native batch call score one candidate at a time behind
    /// this method.
    async fn score_batch(&self, candidates: &[RouteCandidate]) -> Result<Vec<f64>, ProviderError>;
}
