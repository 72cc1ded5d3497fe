//! Conversion of ranked candidates into the client-facing response shape.

use chrono::Utc;
use trail_core::models::{
    RouteCandidate, RouteGeometry, RouteResponse, RouteView, WaypointView,
};

/// Builds the final `RouteResponse` from ranked candidates.
///
/// A candidate that fails to map (malformed waypoint data) is logged and
/// skipped; it never aborts the build. `total_count` reflects only the
/// candidates that mapped successfully.
pub struct ResponseBuilder;

impl ResponseBuilder {
    pub fn build(ranked: Vec<RouteCandidate>) -> RouteResponse {
        let mut routes = Vec::with_capacity(ranked.len());

        for (index, candidate) in ranked.into_iter().enumerate() {
            match route_view(candidate, index) {
                Ok(route) => routes.push(route),
                Err(reason) => {
                    tracing::warn!(index, reason, "skipping malformed route candidate");
                }
            }
        }

        let total_count = routes.len();
        RouteResponse {
            success: true,
            message: format!("Successfully generated {total_count} routes"),
            routes,
            total_count,
            generated_at: Utc::now(),
        }
    }
}

fn route_view(candidate: RouteCandidate, index: usize) -> Result<RouteView, &'static str> {
    let name = synthesize_name(&candidate, index);

    let mut waypoints = Vec::with_capacity(candidate.waypoints.len());
    for place in candidate.waypoints {
        if place.place_id.as_str().is_empty() {
            return Err("waypoint with empty place id");
        }
        if !place.location.is_valid() {
            return Err("waypoint with out-of-range coordinate");
        }
        waypoints.push(WaypointView {
            place_id: place.place_id,
            name: place.name,
            search_category: place.search_category,
            location: place.location,
            rating: place.rating,
            distance_km: place.distance_from_center_km,
        });
    }

    Ok(RouteView {
        id: candidate.id,
        name,
        distance_m: candidate.distance_m,
        duration_s: candidate.duration_s,
        waypoints,
        geometry: RouteGeometry {
            polyline: candidate.polyline,
            viewport: candidate.viewport,
        },
        score: candidate.score,
        categories_used: candidate.categories_used,
    })
}

/// Human-readable route name from the first two waypoint names.
fn synthesize_name(candidate: &RouteCandidate, index: usize) -> String {
    let names: Vec<&str> = candidate
        .waypoints
        .iter()
        .take(2)
        .map(|p| p.name.as_str())
        .collect();

    match names.as_slice() {
        [] => format!("Route {}", index + 1),
        [only] => format!("Via {only}"),
        [first, second, ..] => match candidate.waypoints.len() {
            n if n > 2 => format!("Via {first}, {second} +{} more", n - 2),
            _ => format!("Via {first} & {second}"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trail_core::models::{Coordinate, PlaceCandidate, PlaceId, RouteCriteria};

    fn place(id: &str, name: &str) -> PlaceCandidate {
        PlaceCandidate {
            place_id: PlaceId::from(id),
            name: name.to_string(),
            location: Coordinate::new(1.29, 103.85),
            rating: 4.2,
            search_category: "park".to_string(),
            distance_from_center_km: 0.8,
        }
    }

    fn candidate(waypoints: Vec<PlaceCandidate>) -> RouteCandidate {
        RouteCandidate {
            id: "route_1".to_string(),
            polyline: "encoded".to_string(),
            distance_m: 4200,
            duration_s: 3600,
            viewport: serde_json::json!({"low": {}, "high": {}}),
            waypoints,
            criteria: RouteCriteria::around(Coordinate::new(1.29, 103.85)),
            score: 0.7,
            categories_used: vec!["park".to_string()],
        }
    }

    #[test]
    fn name_for_two_waypoints() {
        let response = ResponseBuilder::build(vec![candidate(vec![
            place("a", "Botanic Gardens"),
            place("b", "Hawker Centre"),
        ])]);
        assert_eq!(response.routes[0].name, "Via Botanic Gardens & Hawker Centre");
    }

    #[test]
    fn name_for_three_waypoints() {
        let response = ResponseBuilder::build(vec![candidate(vec![
            place("a", "Botanic Gardens"),
            place("b", "Hawker Centre"),
            place("c", "Marina"),
        ])]);
        assert_eq!(
            response.routes[0].name,
            "Via Botanic Gardens, Hawker Centre +1 more"
        );
    }

    #[test]
    fn name_fallback_without_waypoints() {
        let response = ResponseBuilder::build(vec![candidate(Vec::new())]);
        assert_eq!(response.routes[0].name, "Route 1");
    }

    #[test]
    fn malformed_candidate_is_skipped_not_fatal() {
        let mut bad = place("bad", "Broken");
        bad.location = Coordinate::new(f64::NAN, 103.85);

        let response = ResponseBuilder::build(vec![
            candidate(vec![place("a", "Gardens"), place("b", "Centre")]),
            candidate(vec![bad]),
        ]);

        assert!(response.success);
        assert_eq!(response.total_count, 1);
        assert_eq!(response.routes.len(), 1);
        assert_eq!(response.routes[0].id, "route_1");
    }

    #[test]
    fn geometry_passes_through_untouched() {
        let response = ResponseBuilder::build(vec![candidate(vec![
            place("a", "Gardens"),
            place("b", "Centre"),
        ])]);
        let geometry = &response.routes[0].geometry;
        assert_eq!(geometry.polyline, "encoded");
        assert_eq!(geometry.viewport, serde_json::json!({"low": {}, "high": {}}));
    }
}
