//! Routes `computeRoutes` provider for closed walking loops.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;
use trail_core::models::{Coordinate, LoopRoute, PlaceId};
use trail_engine::{DirectionsProvider, ProviderError};

use crate::client::GoogleMapsClient;

const ROUTES_FIELD_MASK: &str =
    "routes.duration,routes.distanceMeters,routes.polyline.encodedPolyline,routes.viewport";
const ANCHOR_FIELD_MASK: &str = "places.location,places.id";
const ANCHOR_RADIUS_M: f64 = 100.0;

#[derive(Debug, Deserialize)]
pub(crate) struct ComputeRoutesResponse {
    #[serde(default)]
    pub(crate) routes: Vec<ApiRoute>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiRoute {
    #[serde(default)]
    pub(crate) duration: Option<String>,
    #[serde(default)]
    pub(crate) distance_meters: Option<u32>,
    #[serde(default)]
    pub(crate) polyline: Option<ApiPolyline>,
    #[serde(default)]
    pub(crate) viewport: serde_json::Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiPolyline {
    #[serde(default)]
    pub(crate) encoded_polyline: String,
}

#[derive(Debug, Deserialize)]
struct AnchorResponse {
    #[serde(default)]
    places: Vec<AnchorPlace>,
}

#[derive(Debug, Deserialize)]
struct AnchorPlace {
    id: String,
}

/// Parses a Routes API duration such as `"3848s"` to whole seconds.
pub(crate) fn parse_duration_s(raw: &str) -> Option<u32> {
    raw.strip_suffix('s')?.parse().ok()
}

impl GoogleMapsClient {
    /// Snaps `origin` to the nearest routable place. Loop routes anchor on a
    /// place id, not a raw coordinate.
    async fn anchor_place_id(&self, origin: Coordinate) -> Result<PlaceId, ProviderError> {
        let body = json!({
            "maxResultCount": 1,
            "locationRestriction": {
                "circle": {
                    "center": {"latitude": origin.lat, "longitude": origin.lng},
                    "radius": ANCHOR_RADIUS_M,
                }
            }
        });
        let response: AnchorResponse = self
            .post_json(&self.config.places_url, ANCHOR_FIELD_MASK, &body)
            .await?;
        response
            .places
            .into_iter()
            .next()
            .map(|place| PlaceId(place.id))
            .ok_or_else(|| ProviderError::Upstream("no navigable place near origin".to_string()))
    }
}

pub(crate) fn routes_body(anchor: &PlaceId, waypoint_ids: &[PlaceId]) -> serde_json::Value {
    let intermediates: Vec<serde_json::Value> = waypoint_ids
        .iter()
        .map(|id| json!({"placeId": id.as_str()}))
        .collect();
    json!({
        "origin": {"placeId": anchor.as_str()},
        "destination": {"placeId": anchor.as_str()},
        "intermediates": intermediates,
        "travelMode": "WALK",
    })
}

#[async_trait]
impl DirectionsProvider for GoogleMapsClient {
    async fn loop_route(
        &self,
        origin: Coordinate,
        waypoint_ids: &[PlaceId],
    ) -> Result<LoopRoute, ProviderError> {
        let anchor = self.anchor_place_id(origin).await?;
        let body = routes_body(&anchor, waypoint_ids);

        let response: ComputeRoutesResponse = self
            .post_json(&self.config.routes_url, ROUTES_FIELD_MASK, &body)
            .await?;

        let route = response
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::Upstream("no route returned".to_string()))?;

        let duration_s = route
            .duration
            .as_deref()
            .and_then(parse_duration_s)
            .unwrap_or(0);
        let polyline = route
            .polyline
            .map(|p| p.encoded_polyline)
            .unwrap_or_default();

        debug!(
            waypoints = waypoint_ids.len(),
            distance_m = route.distance_meters.unwrap_or(0),
            duration_s,
            "loop route computed"
        );

        Ok(LoopRoute {
            polyline,
            distance_m: route.distance_meters.unwrap_or(0),
            duration_s,
            viewport: route.viewport,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_strings_parse_to_seconds() {
        assert_eq!(parse_duration_s("3848s"), Some(3848));
        assert_eq!(parse_duration_s("0s"), Some(0));
        assert_eq!(parse_duration_s("3848"), None);
        assert_eq!(parse_duration_s("abcs"), None);
    }

    #[test]
    fn routes_body_closes_the_loop_on_the_anchor() {
        let anchor = PlaceId::from("ChIJanchor");
        let waypoints = [PlaceId::from("ChIJa"), PlaceId::from("ChIJb")];
        let body = routes_body(&anchor, &waypoints);

        assert_eq!(body["origin"]["placeId"], "ChIJanchor");
        assert_eq!(body["destination"]["placeId"], "ChIJanchor");
        assert_eq!(body["travelMode"], "WALK");
        assert_eq!(body["intermediates"][0]["placeId"], "ChIJa");
        assert_eq!(body["intermediates"][1]["placeId"], "ChIJb");
    }

    #[test]
    fn compute_routes_response_decodes() {
        let raw = r#"{
            "routes": [
                {
                    "duration": "3848s",
                    "distanceMeters": 4210,
                    "polyline": {"encodedPolyline": "abc~xyz"},
                    "viewport": {"low": {"latitude": 1.28, "longitude": 103.84}}
                }
            ]
        }"#;
        let decoded: ComputeRoutesResponse = serde_json::from_str(raw).unwrap();
        let route = &decoded.routes[0];
        assert_eq!(route.duration.as_deref(), Some("3848s"));
        assert_eq!(route.distance_meters, Some(4210));
        assert_eq!(
            route.polyline.as_ref().map(|p| p.encoded_polyline.as_str()),
            Some("abc~xyz")
        );
        assert!(route.viewport.is_object());
    }

    #[test]
    fn empty_routes_decodes_to_none() {
        let decoded: ComputeRoutesResponse = serde_json::from_str("{}").unwrap();
        assert!(decoded.routes.is_empty());
    }
}
