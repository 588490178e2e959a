use clap::Parser;
use env_logger::Env;
use log::error;
use std::process::ExitCode;
use std::time::Duration;

use recipe_scraper::{Difficulty, RecipeSearch, RecipeTable, ScrapeError};

/// Search recipes.lewagon.com for an ingredient
#[derive(Parser, Debug)]
#[command(name = "recipe-scraper", version, about)]
struct Cli {
    /// The ingredient to search for
    ingredient: String,

    /// Number of result pages to scrape
    #[arg(short = 'p', long, default_value_t = 3)]
    max_pages: u32,

    /// Keep only this difficulty (Very Easy, Easy, Moderate, Hard, Very Hard); repeatable
    #[arg(short = 'd', long = "difficulty", value_name = "LEVEL")]
    difficulty_levels: Vec<Difficulty>,

    /// Maximum preparation time in minutes (0 disables the filter)
    #[arg(long, default_value_t = 0, value_name = "MINUTES")]
    max_prep_time: u32,

    /// Minimum preparation time in minutes (0 disables the filter)
    #[arg(long, default_value_t = 0, value_name = "MINUTES")]
    min_prep_time: u32,

    /// Request timeout in seconds (overrides the configuration)
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,

    /// Skip malformed recipe cards instead of failing
    #[arg(long)]
    lenient: bool,

    /// Print the results as JSON records instead of a table
    #[arg(long)]
    json: bool,
}

fn debug_enabled() -> bool {
    std::env::var("DEBUG")
        .map(|value| value.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

fn search(cli: Cli) -> Result<RecipeTable, ScrapeError> {
    let mut builder = RecipeSearch::builder()
        .ingredient(cli.ingredient)
        .max_pages(cli.max_pages)
        .max_prep_time(cli.max_prep_time)
        .min_prep_time(cli.min_prep_time);
    for level in cli.difficulty_levels {
        builder = builder.difficulty(level);
    }
    if let Some(seconds) = cli.timeout {
        builder = builder.timeout(Duration::from_secs(seconds));
    }
    if cli.lenient {
        builder = builder.lenient(true);
    }
    builder.build()
}

fn main() -> ExitCode {
    let default_level = if debug_enabled() { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    let cli = Cli::parse();
    let json = cli.json;

    let table = match search(cli) {
        Ok(table) => table,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if json {
        match table.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to serialize results: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", table);
    }

    ExitCode::SUCCESS
}
