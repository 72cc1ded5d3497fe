pub mod crossing;
pub mod geo;
pub mod models;

pub use crossing::remove_crossings;
pub use geo::{bearing_deg, haversine_km, orientation, segments_intersect, Orientation};
pub use models::{
    Coordinate, LoopRoute, PlaceCandidate, PlaceId, RouteCandidate, RouteCriteria, RouteGeometry,
    RouteResponse, RouteView, WaypointView,
};
