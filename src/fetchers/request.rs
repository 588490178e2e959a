use log::{debug, info, warn};
use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use std::thread::sleep;
use std::time::Duration;

use super::PageFetcher;
use crate::config::ScraperConfig;
use crate::error::Result;

/// Fetches search results over HTTP with a blocking client.
///
/// Redirects are never followed: the site answers an exhausted page range or
/// an unknown query with a redirect, which is reported as `None`.
pub struct RequestFetcher {
    client: Client,
    search_url: String,
    retry_attempts: u32,
    retry_delay_ms: u64,
}

impl RequestFetcher {
    pub fn new(search_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .redirect(Policy::none())
            .build()?;

        Ok(Self {
            client,
            search_url: search_url.into(),
            retry_attempts: 1,
            retry_delay_ms: 0,
        })
    }

    pub fn from_config(config: &ScraperConfig) -> Result<Self> {
        Ok(Self::new(config.base_url.clone(), Some(config.timeout_duration()))?
            .with_retry(config.retry_attempts, config.retry_delay_ms))
    }

    /// Retry transport failures up to `attempts` times in total, waiting
    /// `delay_ms * attempt` between tries.
    pub fn with_retry(mut self, attempts: u32, delay_ms: u64) -> Self {
        self.retry_attempts = attempts.max(1);
        self.retry_delay_ms = delay_ms;
        self
    }

    fn request(&self, search_term: &str, page: u32) -> Result<Option<String>> {
        let page_param = page.to_string();
        let response = self
            .client
            .get(&self.search_url)
            .query(&[("search[query]", search_term), ("page", page_param.as_str())])
            .send()?;

        if response.status().is_redirection() {
            debug!(
                "Page {} for {:?} redirected ({}), no more results",
                page,
                search_term,
                response.status()
            );
            return Ok(None);
        }

        Ok(Some(response.text()?))
    }

    /// Linear backoff before retry number `attempt`, saturating on huge delays.
    fn backoff(&self, attempt: u32) -> Duration {
        Duration::from_millis(self.retry_delay_ms.saturating_mul(u64::from(attempt)))
    }
}

impl PageFetcher for RequestFetcher {
    fn fetch_page(&self, search_term: &str, page: u32) -> Result<Option<String>> {
        info!("Scraping page {}", page);

        let mut attempt = 1;
        loop {
            match self.request(search_term, page) {
                Ok(body) => return Ok(body),
                Err(e) if attempt < self.retry_attempts => {
                    warn!(
                        "Fetching page {} failed (attempt {}/{}): {}",
                        page, attempt, self.retry_attempts, e
                    );
                    let delay = self.backoff(attempt);
                    debug!("Waiting {:?} before retry", delay);
                    sleep(delay);
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    #[test]
    fn test_fetch_page_sends_search_query() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("search[query]".into(), "chocolate".into()),
                Matcher::UrlEncoded("page".into(), "2".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html><body>results</body></html>")
            .create();

        let fetcher = RequestFetcher::new(format!("{}/", server.url()), None).unwrap();
        let body = fetcher.fetch_page("chocolate", 2).unwrap();

        assert_eq!(body.as_deref(), Some("<html><body>results</body></html>"));
        mock.assert();
    }

    #[test]
    fn test_redirect_means_no_more_pages() {
        let mut server = Server::new();
        let redirect = server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .with_status(302)
            .with_header("location", "/recipes")
            .create();
        let target = server.mock("GET", "/recipes").expect(0).create();

        let fetcher = RequestFetcher::new(format!("{}/", server.url()), None).unwrap();
        assert_eq!(fetcher.fetch_page("chocolate", 4).unwrap(), None);

        redirect.assert();
        target.assert();
    }

    #[test]
    fn test_error_status_still_returns_body() {
        let mut server = Server::new();
        let _m = server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .with_status(500)
            .with_body("oops")
            .create();

        let fetcher = RequestFetcher::new(format!("{}/", server.url()), None).unwrap();
        assert_eq!(fetcher.fetch_page("x", 1).unwrap().as_deref(), Some("oops"));
    }

    #[test]
    fn test_transport_failure_is_attempted_retry_attempts_times() {
        use std::net::TcpListener;
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;
        use std::thread;

        // Accept and hang up straight away, so every request fails mid-flight
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let connections = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&connections);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                counter.fetch_add(1, Ordering::SeqCst);
                drop(stream);
            }
        });

        let fetcher = RequestFetcher::new(format!("http://{addr}/"), Some(Duration::from_secs(2)))
            .unwrap()
            .with_retry(3, 1);

        let result = fetcher.fetch_page("chocolate", 1);
        assert!(matches!(result, Err(crate::error::ScrapeError::Fetch(_))));
        assert_eq!(connections.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_redirect_is_not_retried() {
        let mut server = Server::new();
        let redirect = server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .with_status(302)
            .with_header("location", "/recipes")
            .expect(1)
            .create();

        let fetcher = RequestFetcher::new(format!("{}/", server.url()), None)
            .unwrap()
            .with_retry(3, 1);
        assert_eq!(fetcher.fetch_page("chocolate", 2).unwrap(), None);

        redirect.assert();
    }

    #[test]
    fn test_backoff_grows_linearly_and_saturates() {
        let fetcher = RequestFetcher::new("http://localhost/", None)
            .unwrap()
            .with_retry(3, 250);
        assert_eq!(fetcher.backoff(1), Duration::from_millis(250));
        assert_eq!(fetcher.backoff(2), Duration::from_millis(500));

        let fetcher = fetcher.with_retry(3, u64::MAX);
        assert_eq!(fetcher.backoff(2), Duration::from_millis(u64::MAX));
    }

    #[test]
    fn test_with_retry_never_drops_below_one_attempt() {
        let fetcher = RequestFetcher::new("http://localhost/", None)
            .unwrap()
            .with_retry(0, 10);
        assert_eq!(fetcher.retry_attempts, 1);
    }
}
