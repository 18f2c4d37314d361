//! Recommend command - run the full recommendation pipeline for a category

use crate::position::FlagPositionProvider;
use crate::render;
use anyhow::Result;
use chrono::{Datelike, Local};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use studybites_api_client::StudyBitesClient;
use studybites_api_client::endpoints::analytics::RestaurantViewEvent;
use studybites_api_client::endpoints::foods::PreferenceSet;
use studybites_app::{Backend, GeoLocator, RecommendationRequest, RequestPipeline, project};
use tracing::debug;

/// Run recommend command
pub async fn run(
    food_id: &str,
    no_location_push: bool,
    provider: FlagPositionProvider,
    format: &str,
) -> Result<()> {
    let client = StudyBitesClient::new()?;
    let session_id = client.session_id().to_string();

    let mut locator = GeoLocator::new(provider);
    let acquired = locator.acquire().await;
    let coordinate = acquired.coordinate();
    debug!(
        food_id,
        fallback = acquired.is_fallback(),
        "Requesting recommendation"
    );

    let pipeline = RequestPipeline::new(client);
    let request = RecommendationRequest {
        food_id: food_id.to_string(),
        coordinate: (!no_location_push).then_some(coordinate),
        session_id,
        preferences: PreferenceSet::default(),
    };

    let spinner = if format == "json" {
        None
    } else {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::with_template("  {spinner:.green} {msg}")?);
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner.set_message("Finding the best spot...");
        Some(spinner)
    };

    let outcome = pipeline.fetch_recommendation(&request).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let outcome = outcome?;

    let model = project(
        &outcome.restaurant,
        Some(&coordinate),
        Local::now().weekday(),
    );

    let event = RestaurantViewEvent::now(&outcome.restaurant.id, food_id, Some(coordinate));
    pipeline.backend().track_view(&event).await;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&model)?);
        return Ok(());
    }

    render::banner("🍴 Recommendation");
    render::location_line(
        None,
        coordinate.latitude,
        coordinate.longitude,
        coordinate.is_default,
    );
    render::restaurant_card(&model);
    Ok(())
}
