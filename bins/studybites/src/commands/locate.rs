//! Locate command - show the location recommendations are scoped to

use crate::position::FlagPositionProvider;
use crate::render;
use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use studybites_api_client::StudyBitesClient;
use studybites_app::{Backend, GeoLocator};
use studybites_geo::DEFAULT_LOCATION_NAME;

/// JSON output for the resolved location
#[derive(Debug, Serialize)]
struct JsonLocateOutput {
    latitude: f64,
    longitude: f64,
    is_default: bool,
    place_name: Option<String>,
}

/// Run locate command
pub async fn run(provider: FlagPositionProvider, format: &str) -> Result<()> {
    let client = StudyBitesClient::new()?;
    let mut locator = GeoLocator::new(provider);
    let acquired = locator.acquire().await;
    let coordinate = acquired.coordinate();

    let place_name = if acquired.is_fallback() {
        Some(DEFAULT_LOCATION_NAME.to_string())
    } else {
        client
            .place_name(coordinate.latitude, coordinate.longitude)
            .await
    };

    if format == "json" {
        let output = JsonLocateOutput {
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
            is_default: coordinate.is_default,
            place_name,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    render::banner("📍 Location");
    render::location_line(
        place_name.as_deref(),
        coordinate.latitude,
        coordinate.longitude,
        coordinate.is_default,
    );
    if acquired.is_fallback() {
        println!(
            "  {}",
            "No position source; pass --lat and --lng for your own location".dimmed()
        );
        println!();
    }
    println!("  Session: {}", client.session_id().cyan());
    println!();
    Ok(())
}
