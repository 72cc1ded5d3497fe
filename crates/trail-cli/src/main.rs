//! Walking route generator CLI.
//!
//! Generates ranked loop-route candidates around a coordinate using the
//! Google Maps providers. Requires GOOGLE_MAPS_API_KEY in the environment.
//!
//! Usage:
//!   cargo run -p trail-cli --bin trail -- --lat 1.2834 --lng 103.8607

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use trail_core::models::{Coordinate, RouteCriteria};
use trail_engine::{
    CandidateSampler, RankingStage, RatingScorer, RouteAssembler, RouteOrchestrator,
};
use trail_maps::{GoogleMapsClient, MapsConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate ranked walking loop routes")]
struct Args {
    /// Latitude of the route center
    #[arg(long)]
    lat: f64,

    /// Longitude of the route center
    #[arg(long)]
    lng: f64,

    /// Search radius in kilometers
    #[arg(long, default_value_t = 5.0)]
    radius_km: f64,

    /// Place categories to sample, comma separated (default: park,nature,attraction,restaurant)
    #[arg(long, value_delimiter = ',')]
    categories: Vec<String>,

    /// Route assembly attempts before ranking
    #[arg(long, default_value_t = 20)]
    attempts: usize,

    /// Seed for reproducible waypoint selection
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("trail_engine=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let center = Coordinate::new(args.lat, args.lng);
    anyhow::ensure!(center.is_valid(), "invalid center coordinate");

    let config = MapsConfig::from_env()?;
    let maps = Arc::new(GoogleMapsClient::new(config)?);

    let sampler = if args.categories.is_empty() {
        CandidateSampler::new(maps.clone())
    } else {
        CandidateSampler::with_categories(maps.clone(), args.categories.clone())
    };

    let pipeline = RouteOrchestrator::new(
        sampler,
        RouteAssembler::new(maps),
        RankingStage::new(Arc::new(RatingScorer::default())),
    )
    .with_max_attempts(args.attempts);

    let mut criteria = RouteCriteria::around(center);
    criteria.radius_km = args.radius_km;
    if !args.categories.is_empty() {
        criteria.include_categories = args.categories.clone();
    }

    let response = match args.seed {
        Some(seed) => pipeline.generate_seeded(&criteria, seed).await?,
        None => pipeline.generate(&criteria).await?,
    };

    println!("{}", response.message);
    for route in &response.routes {
        println!(
            "\n{} (score {:.2})  {:.1} km, {} min",
            route.name,
            route.score,
            route.distance_m as f64 / 1000.0,
            route.duration_s / 60,
        );
        for waypoint in &route.waypoints {
            println!(
                "  - {} [{}] ({:.4}, {:.4})",
                waypoint.name,
                waypoint.search_category,
                waypoint.location.lat,
                waypoint.location.lng
            );
        }
        println!("  polyline: {}", route.geometry.polyline);
    }

    Ok(())
}
