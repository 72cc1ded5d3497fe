//! Maps client configuration from environment.

use std::env;

use thiserror::Error;

const DEFAULT_PLACES_URL: &str = "https://places.googleapis.com/v1/places:searchNearby";
const DEFAULT_ROUTES_URL: &str = "https://routes.googleapis.com/directions/v2:computeRoutes";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum MapsConfigError {
    #[error("GOOGLE_MAPS_API_KEY is not set")]
    MissingApiKey,
}

#[derive(Debug, Clone)]
pub struct MapsConfig {
    pub api_key: String,
    pub places_url: String,
    pub routes_url: String,
    pub timeout_secs: u64,
}

impl MapsConfig {
    pub fn from_env() -> Result<Self, MapsConfigError> {
        let api_key = env::var("GOOGLE_MAPS_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(MapsConfigError::MissingApiKey)?;

        Ok(Self {
            api_key,
            places_url: env::var("GOOGLE_PLACES_URL")
                .unwrap_or_else(|_| DEFAULT_PLACES_URL.to_string()),
            routes_url: env::var("GOOGLE_ROUTES_URL")
                .unwrap_or_else(|_| DEFAULT_ROUTES_URL.to_string()),
            timeout_secs: env::var("GOOGLE_MAPS_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }

    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            places_url: DEFAULT_PLACES_URL.to_string(),
            routes_url: DEFAULT_ROUTES_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
