pub mod builder;
pub mod config;
pub mod error;
pub mod extractors;
pub mod fetchers;
pub mod filters;
pub mod model;
pub mod pipelines;
pub mod table;
pub mod tool;

pub use builder::{RecipeSearch, RecipeSearchBuilder};
pub use config::ScraperConfig;
pub use error::{Result, ScrapeError};
pub use extractors::{parse_page, ParseMode, SearchResultsExtractor};
pub use fetchers::{PageFetcher, RequestFetcher};
pub use filters::RecipeFilter;
pub use model::{parse_prep_time, Difficulty, Recipe, ScrapedRecipe};
pub use pipelines::{collect_recipes, RecipeQuery};
pub use table::RecipeTable;

/// Search recipes for an ingredient and return them as a table.
///
/// Walks up to `max_pages` result pages, then keeps the recipes whose
/// difficulty is in `difficulty_levels` and whose preparation time lies within
/// `min_prep_time..=max_prep_time`. An empty `difficulty_levels` and a zero
/// bound disable the corresponding filter. Difficulty levels are validated
/// before any request is made.
///
/// Configuration (endpoint, timeout, retries) is loaded with
/// [`ScraperConfig::load`].
pub fn get_recipes<S: AsRef<str>>(
    ingredient: &str,
    max_pages: u32,
    difficulty_levels: &[S],
    max_prep_time: u32,
    min_prep_time: u32,
) -> Result<RecipeTable> {
    RecipeSearch::builder()
        .ingredient(ingredient)
        .max_pages(max_pages)
        .difficulty_levels(difficulty_levels)
        .max_prep_time(max_prep_time)
        .min_prep_time(min_prep_time)
        .build()
}

/// Fetch one page of search results from the configured endpoint.
///
/// Returns `Ok(None)` when the site redirected, i.e. there are no more pages.
pub fn fetch_page(search_term: &str, page: u32) -> Result<Option<String>> {
    let config = ScraperConfig::load()?;
    RequestFetcher::from_config(&config)?.fetch_page(search_term, page)
}
