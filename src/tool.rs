//! The `get_recipes` tool as an agent sees it.
//!
//! [`tool_definition`] describes the callable and its parameters as JSON
//! schema; [`invoke`] takes the JSON arguments an agent produced and returns
//! the resulting table as an array of records.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::builder::RecipeSearch;
use crate::config::ScraperConfig;
use crate::error::{Result, ScrapeError};
use crate::model::Difficulty;
use crate::pipelines::RecipeQuery;

pub const GET_RECIPES_TOOL: &str = "get_recipes";

const DESCRIPTION: &str = "Scrape recipes from the internet for a given ingredient. \
Returns a table of recipes with their names, difficulty levels, preparation times \
(in minutes), identifiers and URLs. Results can be filtered by difficulty level \
and preparation time.";

/// Arguments of the `get_recipes` tool
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetRecipesArgs {
    pub ingredient: String,
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,
    #[serde(default)]
    pub difficulty_levels: Vec<Difficulty>,
    #[serde(default)]
    pub max_prep_time: u32,
    #[serde(default)]
    pub min_prep_time: u32,
}

fn default_max_pages() -> u32 {
    RecipeQuery::DEFAULT_MAX_PAGES
}

impl GetRecipesArgs {
    pub fn from_value(args: Value) -> Result<Self> {
        serde_json::from_value(args).map_err(ScrapeError::InvalidArguments)
    }
}

/// Name, description and JSON schema of the `get_recipes` tool
pub fn tool_definition() -> Value {
    let levels: Vec<&str> = Difficulty::ALL.iter().map(Difficulty::as_str).collect();

    json!({
        "name": GET_RECIPES_TOOL,
        "description": DESCRIPTION,
        "input_schema": {
            "type": "object",
            "properties": {
                "ingredient": {
                    "type": "string",
                    "description": "The ingredient to search for."
                },
                "max_pages": {
                    "type": "integer",
                    "minimum": 0,
                    "default": RecipeQuery::DEFAULT_MAX_PAGES,
                    "description": "The number of pages to scrape."
                },
                "difficulty_levels": {
                    "type": "array",
                    "items": { "type": "string", "enum": levels },
                    "default": [],
                    "description": "The difficulty levels to filter by. An empty list means no filtering."
                },
                "max_prep_time": {
                    "type": "integer",
                    "minimum": 0,
                    "default": 0,
                    "description": "The maximum preparation time in minutes. 0 means no filtering."
                },
                "min_prep_time": {
                    "type": "integer",
                    "minimum": 0,
                    "default": 0,
                    "description": "The minimum preparation time in minutes. 0 means no filtering."
                }
            },
            "required": ["ingredient"]
        }
    })
}

/// Run `get_recipes` with JSON arguments against the given configuration
pub fn invoke_with_config(args: Value, config: ScraperConfig) -> Result<Value> {
    let args = GetRecipesArgs::from_value(args)?;

    let mut builder = RecipeSearch::builder()
        .ingredient(args.ingredient)
        .max_pages(args.max_pages)
        .max_prep_time(args.max_prep_time)
        .min_prep_time(args.min_prep_time)
        .config(config);
    for level in args.difficulty_levels {
        builder = builder.difficulty(level);
    }
    let table = builder.build()?;

    serde_json::to_value(&table).map_err(ScrapeError::Serialization)
}

/// Run `get_recipes` with JSON arguments, loading the configuration
pub fn invoke(args: Value) -> Result<Value> {
    invoke_with_config(args, ScraperConfig::load()?)
}
