//! Google Maps implementations of the route pipeline's providers.
//!
//! [`GoogleMapsClient`] backs both the place search (Places `searchNearby`)
//! and the loop directions (Routes `computeRoutes`) seams. One client
//! instance behind an `Arc` serves both roles.

pub mod client;
pub mod config;
pub mod directions;
pub mod place_types;
pub mod places;

pub use client::GoogleMapsClient;
pub use config::{MapsConfig, MapsConfigError};
pub use place_types::{google_types_for_category, is_supported_google_type};
