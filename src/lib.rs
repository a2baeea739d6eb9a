//! Search TheMealDB by ingredient and browse recipe details.
//!
//! ```no_run
//! use meal_search::{MealDbClient, SearchConfig, SearchController};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = MealDbClient::new(&SearchConfig::default())?;
//! let mut controller = SearchController::new(client);
//!
//! controller.search("chicken breast").await;
//! if let Some(id) = controller.page().item_id(1).map(String::from) {
//!     controller.select_recipe(&id).await;
//! }
//! println!("{}", controller.page());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod page;
pub mod view;

pub use client::{MealDbClient, RecipeSource};
pub use config::SearchConfig;
pub use controller::{normalize_ingredient, SearchController};
pub use error::SearchError;
pub use model::{RecipeDetail, RecipeSummary};
pub use page::Page;

/// Look up recipes for a raw ingredient string using the default configuration.
///
/// The input is normalized the same way the controller does it.
pub async fn search_recipes(ingredient: &str) -> Result<Vec<RecipeSummary>, SearchError> {
    let config = SearchConfig::load()?;
    let client = MealDbClient::new(&config)?;
    client
        .filter_by_ingredient(&normalize_ingredient(ingredient))
        .await
}

/// Fetch the detail of a single recipe using the default configuration.
pub async fn recipe_detail(id: &str) -> Result<RecipeDetail, SearchError> {
    let config = SearchConfig::load()?;
    let client = MealDbClient::new(&config)?;
    client.lookup_by_id(id).await
}
