use std::time::Duration;

use crate::config::ScraperConfig;
use crate::error::{Result, ScrapeError};
use crate::extractors::SearchResultsExtractor;
use crate::fetchers::RequestFetcher;
use crate::model::Difficulty;
use crate::pipelines::{collect_recipes, RecipeQuery};
use crate::table::RecipeTable;

/// Builder for configuring and running a recipe search
#[derive(Debug, Default)]
pub struct RecipeSearchBuilder {
    ingredient: Option<String>,
    max_pages: Option<u32>,
    difficulty_levels: Vec<Difficulty>,
    invalid_difficulty: Option<String>,
    max_prep_time: u32,
    min_prep_time: u32,
    lenient: Option<bool>,
    timeout: Option<Duration>,
    config: Option<ScraperConfig>,
}

impl RecipeSearchBuilder {
    /// Set the ingredient to search for
    ///
    /// # Example
    /// ```
    /// use recipe_scraper::RecipeSearch;
    ///
    /// let builder = RecipeSearch::builder().ingredient("chocolate");
    /// ```
    pub fn ingredient(mut self, ingredient: impl Into<String>) -> Self {
        self.ingredient = Some(ingredient.into());
        self
    }

    /// Set how many result pages to walk (default 3)
    pub fn max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    /// Keep only recipes of this difficulty; may be called several times
    ///
    /// # Example
    /// ```
    /// use recipe_scraper::{Difficulty, RecipeSearch};
    ///
    /// let builder = RecipeSearch::builder()
    ///     .ingredient("chocolate")
    ///     .difficulty(Difficulty::Easy)
    ///     .difficulty(Difficulty::VeryEasy);
    /// ```
    pub fn difficulty(mut self, level: Difficulty) -> Self {
        if !self.difficulty_levels.contains(&level) {
            self.difficulty_levels.push(level);
        }
        self
    }

    /// Keep only recipes whose difficulty is one of `levels`.
    ///
    /// Values are checked against the accepted levels when the search is
    /// built; an unknown value fails the build with
    /// [`ScrapeError::InvalidDifficulty`].
    pub fn difficulty_levels<I, S>(mut self, levels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for level in levels {
            match level.as_ref().parse::<Difficulty>() {
                Ok(level) => self = self.difficulty(level),
                Err(_) => {
                    if self.invalid_difficulty.is_none() {
                        self.invalid_difficulty = Some(level.as_ref().to_string());
                    }
                }
            }
        }
        self
    }

    /// Keep only recipes ready in at most `minutes` (0 disables the filter)
    pub fn max_prep_time(mut self, minutes: u32) -> Self {
        self.max_prep_time = minutes;
        self
    }

    /// Keep only recipes taking at least `minutes` (0 disables the filter)
    pub fn min_prep_time(mut self, minutes: u32) -> Self {
        self.min_prep_time = minutes;
        self
    }

    /// Skip malformed recipe cards instead of failing the search
    pub fn lenient(mut self, lenient: bool) -> Self {
        self.lenient = Some(lenient);
        self
    }

    /// Set a timeout for HTTP requests
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Use an explicit configuration instead of loading one
    pub fn config(mut self, config: ScraperConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Validate the options into a [`RecipeQuery`] without touching the network
    pub fn query(&self) -> Result<RecipeQuery> {
        if let Some(level) = &self.invalid_difficulty {
            return Err(ScrapeError::InvalidDifficulty(level.clone()));
        }

        let ingredient = self
            .ingredient
            .as_deref()
            .map(str::trim)
            .filter(|ingredient| !ingredient.is_empty())
            .ok_or_else(|| {
                ScrapeError::Builder("No ingredient specified. Use .ingredient()".to_string())
            })?;

        let mut query = RecipeQuery::new(ingredient);
        if let Some(max_pages) = self.max_pages {
            query.max_pages = max_pages;
        }
        query.filter.difficulty_levels = self.difficulty_levels.clone();
        query.filter.max_prep_time = self.max_prep_time;
        query.filter.min_prep_time = self.min_prep_time;
        Ok(query)
    }

    /// Build and run the search
    ///
    /// # Errors
    /// Returns `ScrapeError` if:
    /// - No ingredient was specified
    /// - A difficulty level is not one of the accepted values
    /// - The configuration cannot be loaded
    /// - A page cannot be fetched or parsed
    /// - A preparation time is not a number of minutes
    ///
    /// # Example
    /// ```no_run
    /// # use recipe_scraper::RecipeSearch;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let table = RecipeSearch::builder()
    ///     .ingredient("chocolate")
    ///     .max_prep_time(30)
    ///     .build()?;
    /// println!("{table}");
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(self) -> Result<RecipeTable> {
        let query = self.query()?;

        let mut config = match self.config {
            Some(config) => config,
            None => ScraperConfig::load()?,
        };
        if let Some(lenient) = self.lenient {
            config.lenient = lenient;
        }

        let timeout = self.timeout.unwrap_or_else(|| config.timeout_duration());
        let fetcher = RequestFetcher::new(config.base_url.clone(), Some(timeout))?
            .with_retry(config.retry_attempts, config.retry_delay_ms);
        let extractor = SearchResultsExtractor::from_config(&config)?;

        collect_recipes(&fetcher, &extractor, &query)
    }
}

/// Main entry point for the builder API
pub struct RecipeSearch;

impl RecipeSearch {
    /// Creates a new builder for searching recipes
    ///
    /// # Example
    /// ```
    /// use recipe_scraper::RecipeSearch;
    ///
    /// let builder = RecipeSearch::builder();
    /// ```
    pub fn builder() -> RecipeSearchBuilder {
        RecipeSearchBuilder::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_defaults() {
        let query = RecipeSearch::builder().ingredient("leek").query().unwrap();
        assert_eq!(query.ingredient, "leek");
        assert_eq!(query.max_pages, 3);
        assert!(query.filter.is_noop());
    }

    #[test]
    fn test_query_carries_every_option() {
        let query = RecipeSearch::builder()
            .ingredient("  chocolate ")
            .max_pages(5)
            .difficulty_levels(["Easy", "very hard", "Easy"])
            .max_prep_time(45)
            .min_prep_time(10)
            .query()
            .unwrap();

        assert_eq!(query.ingredient, "chocolate");
        assert_eq!(query.max_pages, 5);
        assert_eq!(
            query.filter.difficulty_levels,
            vec![Difficulty::Easy, Difficulty::VeryHard]
        );
        assert_eq!(query.filter.max_prep_time, 45);
        assert_eq!(query.filter.min_prep_time, 10);
    }

    #[test]
    fn test_missing_ingredient_is_an_error() {
        let result = RecipeSearch::builder().max_pages(2).build();
        assert!(matches!(result, Err(ScrapeError::Builder(_))));

        let result = RecipeSearch::builder().ingredient("   ").query();
        assert!(matches!(result, Err(ScrapeError::Builder(_))));
    }

    #[test]
    fn test_unknown_difficulty_fails_before_any_request() {
        // An unroutable base URL proves no request is attempted
        let config = ScraperConfig {
            base_url: "http://127.0.0.1:9/".to_string(),
            ..Default::default()
        };
        let result = RecipeSearch::builder()
            .ingredient("chocolate")
            .difficulty_levels(vec!["Easy".to_string(), "Impossible".to_string()])
            .config(config)
            .build();

        match result {
            Err(ScrapeError::InvalidDifficulty(level)) => assert_eq!(level, "Impossible"),
            other => panic!("expected InvalidDifficulty, got {other:?}"),
        }
    }
}
