use thiserror::Error;

/// Errors that can occur while searching, parsing or filtering recipes
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Failed to reach the search endpoint
    #[error("Failed to fetch search results: {0}")]
    Fetch(#[from] reqwest::Error),

    /// A recipe card is missing one of its expected elements or attributes
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// The leading token of a preparation time is not an integer
    #[error("Invalid preparation time: {0:?}")]
    InvalidPrepTime(String),

    /// A difficulty filter value is not one of the accepted levels
    #[error("Invalid difficulty level {0:?}, expected one of: Very Easy, Easy, Moderate, Hard, Very Hard")]
    InvalidDifficulty(String),

    /// A CSS selector failed to compile
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    Builder(String),

    /// Tool arguments could not be decoded
    #[error("Invalid tool arguments: {0}")]
    InvalidArguments(#[source] serde_json::Error),

    /// Results could not be serialized
    #[error("Serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
