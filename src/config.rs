use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Base URL of TheMealDB public v1 API
pub const DEFAULT_BASE_URL: &str = "https://themealdb.com/api/json/v1/1";

/// Client configuration
#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// Base URL the `filter.php` and `lookup.php` endpoints hang off
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds. Requests wait indefinitely when unset.
    #[serde(default)]
    pub timeout: Option<u64>,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: None,
            user_agent: default_user_agent(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    format!("meal-search/{}", env!("CARGO_PKG_VERSION"))
}

impl SearchConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with MEALSEARCH__ prefix
    /// 2. meal-search.toml file in current directory
    /// 3. Default values
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

/// Load configuration from file and environment variables
///
/// Environment variable format: MEALSEARCH__BASE_URL, MEALSEARCH__TIMEOUT
pub fn load_config() -> Result<SearchConfig, ConfigError> {
    let settings = Config::builder()
        .add_source(File::with_name("meal-search").required(false))
        .add_source(
            Environment::with_prefix("MEALSEARCH")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
