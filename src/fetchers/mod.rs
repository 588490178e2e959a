use crate::error::Result;

mod request;

pub use request::RequestFetcher;

/// Source of search results pages.
pub trait PageFetcher {
    /// Fetch one page (1-based) of results for `search_term`.
    ///
    /// Returns `Ok(None)` when the site redirected the request, which means
    /// there are no more pages for this term.
    fn fetch_page(&self, search_term: &str, page: u32) -> Result<Option<String>>;
}

