//! Core data models for the route generation pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A WGS84 coordinate pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// True when both components are finite and within WGS84 bounds.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Provider-native place identifier. Opaque; never constructed from
/// internal route ids or compared across identifier spaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceId(pub String);

impl PlaceId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlaceId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for PlaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A point of interest returned by the place provider.
///
/// Immutable once fetched; the sampler tags `search_category` with the
/// category whose query produced the place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceCandidate {
    pub place_id: PlaceId,
    pub name: String,
    pub location: Coordinate,
    /// Provider rating in [0, 5]; 0.0 when the provider has none.
    #[serde(default)]
    pub rating: f64,
    pub search_category: String,
    pub distance_from_center_km: f64,
}

/// User criteria for one orchestration run. Immutable for the duration of
/// the run and echoed back on every generated candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteCriteria {
    pub center: Coordinate,
    pub radius_km: f64,
    #[serde(default = "default_route_type")]
    pub route_type: String,
    #[serde(default)]
    pub include_categories: Vec<String>,
    #[serde(default)]
    pub avoid_categories: Vec<String>,
    #[serde(default)]
    pub duration_min: Option<u32>,
    #[serde(default)]
    pub distance_km: Option<f64>,
    #[serde(default)]
    pub pet_friendly: bool,
    #[serde(default)]
    pub elevation_gain_min_m: Option<u32>,
    #[serde(default)]
    pub time_window: Option<String>,
}

fn default_route_type() -> String {
    "loop".to_string()
}

impl RouteCriteria {
    /// Criteria with defaults matching the request model: 5 km radius,
    /// loop route, no category constraints.
    pub fn around(center: Coordinate) -> Self {
        Self {
            center,
            radius_km: 5.0,
            route_type: default_route_type(),
            include_categories: Vec::new(),
            avoid_categories: Vec::new(),
            duration_min: Some(30),
            distance_km: None,
            pet_friendly: false,
            elevation_gain_min_m: None,
            time_window: None,
        }
    }
}

/// A closed-loop path returned by the directions provider.
///
/// `polyline` and `viewport` are provider-defined opaque values and must be
/// preserved byte-for-byte through the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoopRoute {
    pub polyline: String,
    pub distance_m: u32,
    pub duration_s: u32,
    pub viewport: serde_json::Value,
}

/// One fully assembled route proposal.
///
/// Created by the assembler with a neutral score; the ranking stage writes
/// the final score; everything downstream reads it immutably.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteCandidate {
    pub id: String,
    pub polyline: String,
    pub distance_m: u32,
    pub duration_s: u32,
    pub viewport: serde_json::Value,
    pub waypoints: Vec<PlaceCandidate>,
    pub criteria: RouteCriteria,
    pub score: f64,
    /// Distinct search categories among the chosen waypoints, first-seen order.
    pub categories_used: Vec<String>,
}

/// Externally visible waypoint shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaypointView {
    pub place_id: PlaceId,
    pub name: String,
    pub search_category: String,
    pub location: Coordinate,
    pub rating: f64,
    pub distance_km: f64,
}

/// Opaque route geometry passed through to map clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteGeometry {
    pub polyline: String,
    pub viewport: serde_json::Value,
}

/// Externally visible route shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteView {
    pub id: String,
    pub name: String,
    pub distance_m: u32,
    pub duration_s: u32,
    pub waypoints: Vec<WaypointView>,
    pub geometry: RouteGeometry,
    pub score: f64,
    pub categories_used: Vec<String>,
}

/// Final result of one `generate` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteResponse {
    pub success: bool,
    pub message: String,
    pub routes: Vec<RouteView>,
    pub total_count: usize,
    pub generated_at: DateTime<Utc>,
}
