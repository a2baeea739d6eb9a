use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::model::{FilterResponse, LookupResponse, RecipeDetail, RecipeSummary};

/// Read-only access to a recipe database
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// All recipes that use `ingredient`, in the order the database returns them.
    /// An empty vector means the query matched nothing.
    async fn filter_by_ingredient(&self, ingredient: &str)
        -> Result<Vec<RecipeSummary>, SearchError>;

    /// Full detail for one recipe id
    async fn lookup_by_id(&self, id: &str) -> Result<RecipeDetail, SearchError>;
}

/// TheMealDB over HTTP
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout_duration() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        MealDbClient {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &str,
    ) -> Result<T, SearchError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {}?i={}", url, query);

        let response = self.client.get(&url).query(&[("i", query)]).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} answered with status {}", url, status);
            return Err(SearchError::Status(status.as_u16()));
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl RecipeSource for MealDbClient {
    async fn filter_by_ingredient(
        &self,
        ingredient: &str,
    ) -> Result<Vec<RecipeSummary>, SearchError> {
        let response: FilterResponse = self.get_json("filter.php", ingredient).await?;
        let summaries = response.into_summaries();
        debug!("'{}' matched {} recipes", ingredient, summaries.len());
        Ok(summaries)
    }

    async fn lookup_by_id(&self, id: &str) -> Result<RecipeDetail, SearchError> {
        let response: LookupResponse = self.get_json("lookup.php", id).await?;
        response
            .meals
            .and_then(|meals| meals.into_iter().next())
            .map(|meal| meal.into_detail())
            .ok_or_else(|| SearchError::NotFound(id.to_string()))
    }
}
