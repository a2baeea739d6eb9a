use thiserror::Error;

/// Errors that can occur while talking to the recipe database
#[derive(Error, Debug)]
pub enum SearchError {
    /// Transport-level failure (connection refused, DNS, timeout, ...) or a
    /// body that does not decode as the expected JSON
    #[error("Failed to fetch URL: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The API answered with a non-success status code
    #[error("Unexpected response status: {0}")]
    Status(u16),

    /// A detail lookup returned no meal record
    #[error("No recipe found with id {0}")]
    NotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
