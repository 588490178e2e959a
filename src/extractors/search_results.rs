use log::{debug, warn};
use scraper::{ElementRef, Html, Selector};

use super::{selector, ParseMode};
use crate::config::ScraperConfig;
use crate::error::{Result, ScrapeError};
use crate::model::ScrapedRecipe;

/// Extracts recipe cards from a search results page.
///
/// A card is a `div.recipe` holding a `p.recipe-name`, a
/// `span.recipe-difficulty`, a `span.recipe-cooktime` and a link whose
/// `data-id` and `href` attributes identify the full recipe.
pub struct SearchResultsExtractor {
    site_root: String,
    mode: ParseMode,
    card: Selector,
    name: Selector,
    difficulty: Selector,
    prep_time: Selector,
    link: Selector,
}

impl SearchResultsExtractor {
    pub fn new(site_root: &str) -> Result<Self> {
        Ok(Self {
            site_root: site_root.trim_matches('/').to_string(),
            mode: ParseMode::Strict,
            card: selector("div.recipe")?,
            name: selector("p.recipe-name")?,
            difficulty: selector("span.recipe-difficulty")?,
            prep_time: selector("span.recipe-cooktime")?,
            link: selector("a")?,
        })
    }

    pub fn from_config(config: &ScraperConfig) -> Result<Self> {
        Ok(Self::new(config.site_root())?.with_mode(ParseMode::from_lenient(config.lenient)))
    }

    pub fn with_mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Parse every recipe card of a document, in document order.
    pub fn parse(&self, document: &Html) -> Result<Vec<ScrapedRecipe>> {
        let mut recipes = Vec::new();

        for (index, card) in document.select(&self.card).enumerate() {
            match self.parse_card(card, index) {
                Ok(recipe) => {
                    debug!("Parsed recipe card {}: {}", index, recipe.name);
                    recipes.push(recipe);
                }
                Err(e) if self.mode == ParseMode::Lenient => {
                    warn!("Skipping recipe card {}: {}", index, e);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(recipes)
    }

    pub fn parse_html(&self, html: &str) -> Result<Vec<ScrapedRecipe>> {
        self.parse(&Html::parse_document(html))
    }

    fn parse_card(&self, card: ElementRef, index: usize) -> Result<ScrapedRecipe> {
        let name = self.text_of(card, &self.name, "p.recipe-name", index)?;
        let difficulty = self.text_of(card, &self.difficulty, "span.recipe-difficulty", index)?;
        let prep_time = self.text_of(card, &self.prep_time, "span.recipe-cooktime", index)?;

        let link = card
            .select(&self.link)
            .next()
            .ok_or_else(|| missing("link", index))?;
        let id = link
            .value()
            .attr("data-id")
            .ok_or_else(|| missing("data-id attribute", index))?;
        let href = link
            .value()
            .attr("href")
            .ok_or_else(|| missing("href attribute", index))?;

        Ok(ScrapedRecipe {
            name,
            difficulty,
            prep_time,
            id: id.to_string(),
            url: format!("{}{}", self.site_root, href),
        })
    }

    fn text_of(
        &self,
        card: ElementRef,
        selector: &Selector,
        what: &str,
        index: usize,
    ) -> Result<String> {
        card.select(selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .ok_or_else(|| missing(what, index))
    }
}

fn missing(what: &str, index: usize) -> ScrapeError {
    ScrapeError::MalformedDocument(format!("recipe card {index} has no {what}"))
}

/// Parse a search results page using the default site root, failing on the
/// first malformed card.
pub fn parse_page(html: &str) -> Result<Vec<ScrapedRecipe>> {
    SearchResultsExtractor::from_config(&ScraperConfig::default())?.parse_html(html)
}
