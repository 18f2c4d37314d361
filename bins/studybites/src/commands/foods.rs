//! Foods command - browse the paged food catalog

use crate::position::FlagPositionProvider;
use crate::render;
use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use studybites_api_client::StudyBitesClient;
use studybites_api_client::endpoints::foods::{FoodCategory, FoodPageParams, PreferenceSet};
use studybites_app::GeoLocator;

/// JSON output for a catalog page
#[derive(Debug, Serialize)]
struct JsonFoodsOutput {
    page: usize,
    total_pages: usize,
    foods: Vec<FoodCategory>,
}

/// Build the preference toggles from the exclusion flags. Everything is on
/// unless explicitly dropped.
pub fn preferences(
    no_vegan: bool,
    no_wheelchair: bool,
    no_budget: bool,
    no_kid_friendly: bool,
) -> PreferenceSet {
    PreferenceSet {
        vegan: !no_vegan,
        wheelchair: !no_wheelchair,
        budget: !no_budget,
        kid_friendly: !no_kid_friendly,
    }
}

/// Run foods command
pub async fn run(
    page: usize,
    preferences: PreferenceSet,
    provider: FlagPositionProvider,
    format: &str,
) -> Result<()> {
    let client = StudyBitesClient::new()?;
    let mut locator = GeoLocator::new(provider);
    let acquired = locator.acquire().await;
    let coordinate = acquired.coordinate();

    let params = FoodPageParams::new()
        .with_location(coordinate.latitude, coordinate.longitude)
        .with_page(page)
        .with_preferences(preferences);
    let fetched = client.foods().page(&params).await?;

    if format == "json" {
        let output = JsonFoodsOutput {
            page: fetched.current_page,
            total_pages: fetched.total_pages,
            foods: fetched.foods,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    render::banner("🍽️  Food Catalog");
    render::location_line(
        None,
        coordinate.latitude,
        coordinate.longitude,
        coordinate.is_default,
    );

    if fetched.foods.is_empty() {
        println!("  {}", "No food options on this page".dimmed());
    }
    for food in &fetched.foods {
        println!("  {:<16} {}", food.id.green(), food.name.bold());
        if let Some(desc) = &food.desc {
            println!("  {:<16} {}", "", desc.dimmed());
        }
    }

    println!();
    println!(
        "  Page {}",
        format!("{} of {}", fetched.current_page + 1, fetched.total_pages).cyan()
    );
    println!();
    Ok(())
}
