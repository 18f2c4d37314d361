//! StudyBites CLI - restaurant recommendations from the terminal
//!
//! Browse the food catalog, get a recommendation for a category, and inspect
//! the location the results are scoped to.

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::process::ExitCode;

mod commands;
mod position;
mod render;

use commands::{foods, locate, recommend};

/// Restaurant recommendation CLI for StudyBites
#[derive(Parser)]
#[command(name = "studybites")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, global = true, default_value = "text")]
    format: String,

    /// Latitude override; with --lng, skips device location lookup
    #[arg(long, global = true, env = "STUDYBITES_LAT")]
    lat: Option<f64>,

    /// Longitude override; with --lat, skips device location lookup
    #[arg(long, global = true, env = "STUDYBITES_LNG")]
    lng: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse a page of the food catalog
    Foods {
        /// Zero-based page index
        #[arg(short, long, default_value = "0")]
        page: usize,

        /// Drop the vegan-options filter
        #[arg(long)]
        no_vegan: bool,

        /// Drop the wheelchair-accessibility filter
        #[arg(long)]
        no_wheelchair: bool,

        /// Drop the budget-friendly filter
        #[arg(long)]
        no_budget: bool,

        /// Drop the kid-friendly filter
        #[arg(long)]
        no_kid_friendly: bool,
    },

    /// Get a restaurant recommendation for a food category
    Recommend {
        /// Food category id (see `studybites foods`)
        food_id: String,

        /// Skip pushing the coordinate to the backend first
        #[arg(long)]
        no_location_push: bool,
    },

    /// Show the location recommendations are scoped to
    Locate,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("studybites=debug,studybites_app=debug,studybites_api_client=debug")
            .init();
    }

    let provider = position::FlagPositionProvider::new(cli.lat, cli.lng);

    let result = match cli.command {
        Commands::Foods {
            page,
            no_vegan,
            no_wheelchair,
            no_budget,
            no_kid_friendly,
        } => {
            let preferences = foods::preferences(no_vegan, no_wheelchair, no_budget, no_kid_friendly);
            foods::run(page, preferences, provider, &cli.format).await
        }

        Commands::Recommend {
            food_id,
            no_location_push,
        } => recommend::run(&food_id, no_location_push, provider, &cli.format).await,

        Commands::Locate => locate::run(provider, &cli.format).await,
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
