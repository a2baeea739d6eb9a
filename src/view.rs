//! Pure mapping from API results to renderable blocks.
//!
//! Nothing in here touches the network or the page; the controller feeds
//! these blocks into a [`Page`](crate::page::Page).

use crate::model::{RecipeDetail, RecipeSummary};

pub const LOADING: &str = "Loading food...";
pub const NO_RESULTS: &str = "No results. Try a different search term.";
pub const SELECT_PROMPT: &str = "Select a recipe to see more details.";
pub const FETCH_ERROR: &str = "Error encountered while fetching recipes.";

/// One renderable element of a pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(String),
    Heading(String),
    /// A selectable search hit, labeled with the recipe name and tagged with its id
    Item { id: String, label: String },
    LineBreak,
}

/// What a finished search puts on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    pub results: Vec<Block>,
    pub detail: Vec<Block>,
}

pub fn loading() -> Vec<Block> {
    vec![Block::Paragraph(LOADING.to_string())]
}

pub fn fetch_error() -> Block {
    Block::Paragraph(FETCH_ERROR.to_string())
}

/// Render a search outcome.
///
/// No hits gives a single "no results" paragraph and leaves the detail pane
/// empty. Otherwise every hit becomes an item followed by a line break, in the
/// order given, and the detail pane gets the selection prompt.
pub fn results(summaries: &[RecipeSummary]) -> ResultsView {
    if summaries.is_empty() {
        return ResultsView {
            results: vec![Block::Paragraph(NO_RESULTS.to_string())],
            detail: Vec::new(),
        };
    }

    let results = summaries
        .iter()
        .flat_map(|summary| {
            [
                Block::Item {
                    id: summary.id.clone(),
                    label: summary.name.clone(),
                },
                Block::LineBreak,
            ]
        })
        .collect();

    ResultsView {
        results,
        detail: vec![Block::Paragraph(SELECT_PROMPT.to_string())],
    }
}

pub fn detail(recipe: &RecipeDetail) -> Vec<Block> {
    vec![
        Block::Heading(recipe.name.clone()),
        Block::Paragraph(format!("Cuisine: {}", recipe.cuisine)),
        Block::Paragraph(format!("Ingredients: {}", ingredient_line(&recipe.ingredients))),
    ]
}

pub fn ingredient_line(ingredients: &[String]) -> String {
    ingredients.join(", ")
}
