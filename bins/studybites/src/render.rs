//! Shared terminal rendering helpers.

use console::Emoji;
use owo_colors::OwoColorize;
use studybites_app::DisplayModel;

static PIN: Emoji<'_, '_> = Emoji("📍 ", "");

/// Section banner in the house style.
pub fn banner(title: &str) {
    println!();
    println!(
        "{}",
        "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━"
            .blue()
    );
    println!("  {}", title.blue().bold());
    println!(
        "{}",
        "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━"
            .blue()
    );
    println!();
}

/// One line naming the place the results are scoped to.
pub fn location_line(place_name: Option<&str>, latitude: f64, longitude: f64, is_default: bool) {
    let place = place_name.unwrap_or("Unknown area");
    let origin = if is_default {
        " (default location)".dimmed().to_string()
    } else {
        String::new()
    };
    println!(
        "  {}{} {}{}",
        PIN,
        place.cyan(),
        format!("({latitude:.4}, {longitude:.4})").dimmed(),
        origin
    );
    println!();
}

/// The recommendation card.
pub fn restaurant_card(model: &DisplayModel) {
    println!("  {} {}", model.emoji, model.name.bold());
    println!(
        "  {} {}",
        model.star_string.yellow(),
        model.rating_label.dimmed()
    );
    println!("  {}", model.description);
    println!();
    println!("  {:<12} {}", "Price:".dimmed(), model.price_label);
    println!("  {:<12} {}", "Hours:".dimmed(), model.hours_label);
    if let Some(distance) = &model.distance_label {
        println!("  {:<12} {}", "Distance:".dimmed(), distance);
    }
    println!("  {:<12} {}", "Address:".dimmed(), model.address);
    println!("  {:<12} {}", "Phone:".dimmed(), model.phone);
    if let Some(website) = &model.website {
        println!("  {:<12} {}", "Website:".dimmed(), website.cyan());
    }
    if let Some(directions) = &model.directions_url {
        println!("  {:<12} {}", "Directions:".dimmed(), directions.cyan());
    }
    if !model.feature_badges.is_empty() {
        let badges: Vec<String> = model
            .feature_badges
            .iter()
            .map(|b| format!("{} {}", b.icon, b.name))
            .collect();
        println!("  {:<12} {}", "Features:".dimmed(), badges.join("  "));
    }
    println!();
}
