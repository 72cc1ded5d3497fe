//! Places `searchNearby` provider.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;
use trail_core::geo::haversine_km;
use trail_core::models::{Coordinate, PlaceCandidate, PlaceId};
use trail_engine::{PlaceProvider, ProviderError};

use crate::client::GoogleMapsClient;
use crate::place_types::google_types_for_category;

const SEARCH_FIELD_MASK: &str =
    "places.displayName,places.location,places.rating,places.id,places.types";
const MAX_RESULTS: u32 = 20;

#[derive(Debug, Deserialize)]
pub(crate) struct SearchNearbyResponse {
    #[serde(default)]
    pub(crate) places: Vec<ApiPlace>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiPlace {
    pub(crate) id: String,
    #[serde(default)]
    pub(crate) display_name: Option<DisplayName>,
    pub(crate) location: LatLng,
    #[serde(default)]
    pub(crate) rating: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DisplayName {
    #[serde(default)]
    pub(crate) text: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LatLng {
    pub(crate) latitude: f64,
    pub(crate) longitude: f64,
}

pub(crate) fn search_body(
    center: Coordinate,
    radius_km: f64,
    included_types: &[&str],
    max_results: u32,
) -> serde_json::Value {
    let mut body = json!({
        "maxResultCount": max_results,
        "locationRestriction": {
            "circle": {
                "center": {"latitude": center.lat, "longitude": center.lng},
                "radius": radius_km * 1000.0,
            }
        }
    });
    if !included_types.is_empty() {
        body["includedTypes"] = json!(included_types);
    }
    body
}

pub(crate) fn to_candidate(place: ApiPlace, center: Coordinate, category: &str) -> PlaceCandidate {
    let location = Coordinate::new(place.location.latitude, place.location.longitude);
    PlaceCandidate {
        place_id: PlaceId(place.id),
        name: place
            .display_name
            .map(|d| d.text)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "Unnamed place".to_string()),
        location,
        rating: place.rating.unwrap_or(0.0),
        search_category: category.to_string(),
        distance_from_center_km: haversine_km(center, location),
    }
}

#[async_trait]
impl PlaceProvider for GoogleMapsClient {
    async fn find_nearby(
        &self,
        center: Coordinate,
        radius_km: f64,
        category: &str,
    ) -> Result<Vec<PlaceCandidate>, ProviderError> {
        let included_types = google_types_for_category(category);
        let body = search_body(center, radius_km, &included_types, MAX_RESULTS);

        let response: SearchNearbyResponse = self
            .post_json(&self.config.places_url, SEARCH_FIELD_MASK, &body)
            .await?;

        debug!(
            category,
            radius_km,
            count = response.places.len(),
            "place search completed"
        );

        Ok(response
            .places
            .into_iter()
            .map(|place| to_candidate(place, center, category))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_body_uses_meters_and_circle_restriction() {
        let body = search_body(Coordinate::new(1.3, 103.85), 2.5, &["park"], 20);
        assert_eq!(body["maxResultCount"], 20);
        assert_eq!(body["locationRestriction"]["circle"]["radius"], 2500.0);
        assert_eq!(body["includedTypes"], json!(["park"]));
    }

    #[test]
    fn search_body_omits_type_filter_when_empty() {
        let body = search_body(Coordinate::new(1.3, 103.85), 1.0, &[], 20);
        assert!(body.get("includedTypes").is_none());
    }

    #[test]
    fn response_decodes_and_converts() {
        let raw = r#"{
            "places": [
                {
                    "id": "ChIJabc123",
                    "displayName": {"text": "Fort Canning Park"},
                    "location": {"latitude": 1.2925, "longitude": 103.8448},
                    "rating": 4.6
                },
                {
                    "id": "ChIJnoname",
                    "location": {"latitude": 1.2800, "longitude": 103.8500}
                }
            ]
        }"#;
        let decoded: SearchNearbyResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(decoded.places.len(), 2);

        let center = Coordinate::new(1.2834, 103.8607);
        let candidates: Vec<PlaceCandidate> = decoded
            .places
            .into_iter()
            .map(|p| to_candidate(p, center, "park"))
            .collect();

        assert_eq!(candidates[0].place_id.as_str(), "ChIJabc123");
        assert_eq!(candidates[0].name, "Fort Canning Park");
        assert!((candidates[0].rating - 4.6).abs() < f64::EPSILON);
        assert!(candidates[0].distance_from_center_km > 0.0);
        assert_eq!(candidates[0].search_category, "park");

        assert_eq!(candidates[1].name, "Unnamed place");
        assert_eq!(candidates[1].rating, 0.0);
    }

    #[test]
    fn empty_response_decodes_to_no_places() {
        let decoded: SearchNearbyResponse = serde_json::from_str("{}").unwrap();
        assert!(decoded.places.is_empty());
    }
}
