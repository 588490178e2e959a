use scraper::Selector;

use crate::error::{Result, ScrapeError};

mod search_results;

pub use search_results::{parse_page, SearchResultsExtractor};

/// How a malformed recipe card is handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// A malformed card fails the whole page
    #[default]
    Strict,
    /// A malformed card is logged and skipped
    Lenient,
}

impl ParseMode {
    pub fn from_lenient(lenient: bool) -> Self {
        if lenient {
            ParseMode::Lenient
        } else {
            ParseMode::Strict
        }
    }
}

pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::InvalidSelector(format!("{css}: {e}")))
}
