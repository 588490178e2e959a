use log::{debug, info};

use crate::error::Result;
use crate::extractors::SearchResultsExtractor;
use crate::fetchers::PageFetcher;
use crate::filters::RecipeFilter;
use crate::model::{Recipe, ScrapedRecipe};
use crate::table::RecipeTable;

/// A recipe search: what to look for, how many pages to walk and how to
/// filter the results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeQuery {
    pub ingredient: String,
    pub max_pages: u32,
    pub filter: RecipeFilter,
}

impl RecipeQuery {
    pub const DEFAULT_MAX_PAGES: u32 = 3;

    pub fn new(ingredient: impl Into<String>) -> Self {
        Self {
            ingredient: ingredient.into(),
            max_pages: Self::DEFAULT_MAX_PAGES,
            filter: RecipeFilter::default(),
        }
    }
}

/// Run a search and return the filtered results as a table.
///
/// This pipeline:
/// 1. Fetches pages `1..=max_pages` in order, stopping at the first redirect
/// 2. Parses every page into recipe cards, keeping page then document order
/// 3. Normalizes every prep time to minutes (one bad value fails the search)
/// 4. Applies the query's filters
///
/// No partial results are returned: any fetch, parse or normalization error
/// aborts the whole search.
pub fn collect_recipes<F>(
    fetcher: &F,
    extractor: &SearchResultsExtractor,
    query: &RecipeQuery,
) -> Result<RecipeTable>
where
    F: PageFetcher + ?Sized,
{
    let mut scraped: Vec<ScrapedRecipe> = Vec::new();

    for page in 1..=query.max_pages {
        let Some(html) = fetcher.fetch_page(&query.ingredient, page)? else {
            debug!("No page {} for {:?}, stopping", page, query.ingredient);
            break;
        };

        let recipes = extractor.parse_html(&html)?;
        debug!("Page {} yielded {} recipes", page, recipes.len());
        scraped.extend(recipes);
    }

    let recipes = scraped
        .into_iter()
        .map(ScrapedRecipe::normalize)
        .collect::<Result<Vec<Recipe>>>()?;

    let total = recipes.len();
    let recipes = query.filter.apply(recipes);
    info!(
        "Found {} recipes for {:?}, {} after filtering",
        total,
        query.ingredient,
        recipes.len()
    );

    Ok(RecipeTable::new(recipes))
}
