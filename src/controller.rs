use log::{debug, info, warn};

use crate::client::RecipeSource;
use crate::error::SearchError;
use crate::model::{RecipeDetail, RecipeSummary};
use crate::page::{Page, Trigger};
use crate::view;

/// Trim surrounding whitespace and turn every remaining space into `_`,
/// the way TheMealDB spells multi-word ingredients ("chicken breast" ->
/// "chicken_breast").
pub fn normalize_ingredient(input: &str) -> String {
    input.trim().replace(' ', "_")
}

/// Handed out by [`SearchController::begin_search`]; redeem it with
/// [`SearchController::finish_search`] once the filter request settles.
///
/// Dropping the ticket, finished or not, re-enables the search trigger.
#[derive(Debug)]
#[must_use]
pub struct SearchTicket {
    generation: u64,
    ingredient: String,
    trigger: Trigger,
}

impl Drop for SearchTicket {
    fn drop(&mut self) {
        if !self.trigger.is_enabled() {
            debug!("Search for '{}' abandoned, re-enabling trigger", self.ingredient);
            self.trigger.set_enabled(true);
        }
    }
}

impl SearchTicket {
    /// Normalized ingredient to query for
    pub fn ingredient(&self) -> &str {
        &self.ingredient
    }
}

/// Handed out by [`SearchController::begin_select`].
#[derive(Debug)]
#[must_use]
pub struct SelectTicket {
    search_generation: u64,
    generation: u64,
    id: String,
}

impl SelectTicket {
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Drives a [`Page`] from user actions and a [`RecipeSource`].
///
/// Every operation is a `begin_*` step that updates the page and hands out a
/// ticket, and a `finish_*` step that renders the response for that ticket.
/// Responses that were overtaken by a newer operation are dropped.
pub struct SearchController<S> {
    source: S,
    page: Page,
    search_generation: u64,
    select_generation: u64,
}

impl<S: RecipeSource> SearchController<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            page: Page::new(),
            search_generation: 0,
            select_generation: 0,
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Search for recipes using `input` and render the outcome.
    ///
    /// Returns `false` without doing anything if a search is already in
    /// flight. Dropping the returned future before it completes leaves the
    /// loading line in place but re-enables the trigger.
    pub async fn search(&mut self, input: &str) -> bool {
        let Some(ticket) = self.begin_search(input) else {
            return false;
        };
        let result = self.source.filter_by_ingredient(ticket.ingredient()).await;
        self.finish_search(ticket, result);
        true
    }

    /// Show the detail for recipe `id`.
    pub async fn select_recipe(&mut self, id: &str) {
        let ticket = self.begin_select(id);
        let result = self.source.lookup_by_id(ticket.id()).await;
        self.finish_select(ticket, result);
    }

    /// Disable the trigger, clear the detail pane and show the loading line.
    ///
    /// `None` while the trigger is disabled: the activation is ignored.
    pub fn begin_search(&mut self, input: &str) -> Option<SearchTicket> {
        if !self.page.trigger_enabled() {
            debug!("Search already in flight, ignoring '{}'", input);
            return None;
        }

        self.page.set_trigger_enabled(false);
        self.page.clear_detail();
        self.page.replace_results(view::loading());
        self.search_generation += 1;

        let ingredient = normalize_ingredient(input);
        info!("Searching recipes with '{}'", ingredient);
        Some(SearchTicket {
            generation: self.search_generation,
            ingredient,
            trigger: self.page.trigger().clone(),
        })
    }

    pub fn finish_search(
        &mut self,
        ticket: SearchTicket,
        result: Result<Vec<RecipeSummary>, SearchError>,
    ) {
        // Only one search can be pending, so a search ticket is never stale
        // while the trigger is disabled.
        if ticket.generation != self.search_generation {
            debug!("Dropping stale search for '{}'", ticket.ingredient);
            return;
        }

        match result {
            Ok(summaries) => {
                let rendered = view::results(&summaries);
                self.page.replace_results(rendered.results);
                self.page.replace_detail(rendered.detail);
            }
            Err(e) => {
                warn!("Search for '{}' failed: {}", ticket.ingredient, e);
                self.page.replace_results(vec![view::fetch_error()]);
            }
        }
        self.page.set_trigger_enabled(true);
    }

    pub fn begin_select(&mut self, id: &str) -> SelectTicket {
        self.page.clear_detail();
        self.select_generation += 1;
        debug!("Looking up recipe {}", id);
        SelectTicket {
            search_generation: self.search_generation,
            generation: self.select_generation,
            id: id.to_string(),
        }
    }

    pub fn finish_select(&mut self, ticket: SelectTicket, result: Result<RecipeDetail, SearchError>) {
        if ticket.generation != self.select_generation
            || ticket.search_generation != self.search_generation
        {
            debug!("Dropping stale detail for recipe {}", ticket.id);
            return;
        }

        match result {
            Ok(recipe) => self.page.replace_detail(view::detail(&recipe)),
            Err(e) => {
                warn!("Lookup of recipe {} failed: {}", ticket.id, e);
                self.page.append_result(view::fetch_error());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{Block, FETCH_ERROR, LOADING, NO_RESULTS, SELECT_PROMPT};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory recipe source that records the queries it receives
    #[derive(Default)]
    struct FakeSource {
        hits: HashMap<String, Vec<RecipeSummary>>,
        details: HashMap<String, RecipeDetail>,
        queries: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl RecipeSource for FakeSource {
        async fn filter_by_ingredient(
            &self,
            ingredient: &str,
        ) -> Result<Vec<RecipeSummary>, SearchError> {
            self.queries.lock().unwrap().push(ingredient.to_string());
            match self.hits.get(ingredient) {
                Some(hits) => Ok(hits.clone()),
                None => Err(SearchError::Status(500)),
            }
        }

        async fn lookup_by_id(&self, id: &str) -> Result<RecipeDetail, SearchError> {
            self.details
                .get(id)
                .cloned()
                .ok_or_else(|| SearchError::NotFound(id.to_string()))
        }
    }

    fn summary(id: &str, name: &str) -> RecipeSummary {
        RecipeSummary {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn detail(name: &str, cuisine: &str, ingredients: &[&str]) -> RecipeDetail {
        RecipeDetail {
            name: name.to_string(),
            cuisine: cuisine.to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn paragraph(text: &str) -> Block {
        Block::Paragraph(text.to_string())
    }

    #[test]
    fn test_normalize_ingredient() {
        assert_eq!(normalize_ingredient("chicken breast"), "chicken_breast");
        assert_eq!(normalize_ingredient("  chicken breast  "), "chicken_breast");
        assert_eq!(normalize_ingredient("extra virgin olive oil"), "extra_virgin_olive_oil");
        assert_eq!(normalize_ingredient("a  b"), "a__b");
        assert_eq!(normalize_ingredient("\tsalt\n"), "salt");
        assert_eq!(normalize_ingredient(""), "");
        assert_eq!(normalize_ingredient("   "), "");
    }

    #[test]
    fn test_begin_search_shows_loading_and_disables_trigger() {
        let mut controller = SearchController::new(FakeSource::default());
        let ticket = controller.begin_search(" chicken breast ").unwrap();

        assert_eq!(ticket.ingredient(), "chicken_breast");
        assert_eq!(controller.page().results(), &[paragraph(LOADING)]);
        assert!(controller.page().detail().is_empty());
        assert!(!controller.page().trigger_enabled());
    }

    #[test]
    fn test_second_search_while_pending_is_ignored() {
        let mut controller = SearchController::new(FakeSource::default());
        let ticket = controller.begin_search("rice").unwrap();

        assert!(controller.begin_search("beef").is_none());

        controller.finish_search(ticket, Ok(vec![summary("1", "Kedgeree")]));
        assert!(controller.page().trigger_enabled());
        assert!(controller.begin_search("beef").is_some());
    }

    #[test]
    fn test_dropped_ticket_re_enables_trigger() {
        let mut controller = SearchController::new(FakeSource::default());
        let ticket = controller.begin_search("rice").unwrap();
        assert!(!controller.page().trigger_enabled());

        drop(ticket);

        assert!(controller.page().trigger_enabled());
        assert!(controller.begin_search("beef").is_some());
    }

    #[tokio::test]
    async fn test_search_renders_items_in_order() {
        let mut source = FakeSource::default();
        source.hits.insert(
            "chicken".to_string(),
            vec![summary("52940", "Brown Stew Chicken"), summary("52795", "Chicken Handi")],
        );
        let mut controller = SearchController::new(source);

        assert!(controller.search("chicken").await);

        let items: Vec<_> = controller.page().items().collect();
        assert_eq!(
            items,
            vec![("52940", "Brown Stew Chicken"), ("52795", "Chicken Handi")]
        );
        assert_eq!(controller.page().detail(), &[paragraph(SELECT_PROMPT)]);
        assert!(controller.page().trigger_enabled());
    }

    #[tokio::test]
    async fn test_search_without_hits() {
        let mut source = FakeSource::default();
        source.hits.insert("unobtainium".to_string(), Vec::new());
        let mut controller = SearchController::new(source);

        controller.search("unobtainium").await;

        assert_eq!(controller.page().results(), &[paragraph(NO_RESULTS)]);
        assert_eq!(controller.page().items().count(), 0);
        assert!(controller.page().detail().is_empty());
    }

    #[tokio::test]
    async fn test_search_failure_re_enables_trigger() {
        let mut controller = SearchController::new(FakeSource::default());

        controller.search("anything").await;

        assert_eq!(controller.page().results(), &[paragraph(FETCH_ERROR)]);
        assert_eq!(controller.page().items().count(), 0);
        assert!(controller.page().trigger_enabled());
    }

    #[tokio::test]
    async fn test_empty_input_is_queried_as_is() {
        let mut source = FakeSource::default();
        source.hits.insert(String::new(), Vec::new());
        let mut controller = SearchController::new(source);

        controller.search("   ").await;

        assert_eq!(*controller.source().queries.lock().unwrap(), vec![String::new()]);
        assert_eq!(controller.page().results(), &[paragraph(NO_RESULTS)]);
    }

    #[tokio::test]
    async fn test_select_replaces_detail() {
        let mut source = FakeSource::default();
        source.hits.insert(
            "chicken".to_string(),
            vec![summary("1", "First"), summary("2", "Second")],
        );
        source.details.insert("1".to_string(), detail("First", "British", &["Egg"]));
        source.details.insert("2".to_string(), detail("Second", "French", &["Butter", "Flour"]));
        let mut controller = SearchController::new(source);

        controller.search("chicken").await;
        controller.select_recipe("1").await;
        controller.select_recipe("2").await;

        assert_eq!(
            controller.page().detail(),
            &[
                Block::Heading("Second".to_string()),
                paragraph("Cuisine: French"),
                paragraph("Ingredients: Butter, Flour"),
            ]
        );
    }

    #[tokio::test]
    async fn test_select_failure_appends_error_to_results() {
        let mut source = FakeSource::default();
        source.hits.insert("fish".to_string(), vec![summary("9", "Kedgeree")]);
        let mut controller = SearchController::new(source);

        controller.search("fish").await;
        controller.select_recipe("9").await;

        let results = controller.page().results();
        assert_eq!(results.len(), 3);
        assert_eq!(results[2], paragraph(FETCH_ERROR));
        assert_eq!(controller.page().items().count(), 1);
        assert!(controller.page().detail().is_empty());
    }

    #[test]
    fn test_out_of_order_detail_responses() {
        let mut controller = SearchController::new(FakeSource::default());
        let first = controller.begin_select("1");
        let second = controller.begin_select("2");

        controller.finish_select(second, Ok(detail("Second", "French", &["Butter"])));
        controller.finish_select(first, Ok(detail("First", "British", &["Egg"])));

        assert_eq!(
            controller.page().detail()[0],
            Block::Heading("Second".to_string())
        );
    }

    #[test]
    fn test_detail_response_after_new_search_is_dropped() {
        let mut controller = SearchController::new(FakeSource::default());
        let select = controller.begin_select("1");
        let search = controller.begin_search("beef").unwrap();

        controller.finish_select(select, Ok(detail("First", "British", &["Egg"])));
        assert!(controller.page().detail().is_empty());
        assert_eq!(controller.page().results(), &[paragraph(LOADING)]);

        controller.finish_search(search, Ok(Vec::new()));
        assert_eq!(controller.page().results(), &[paragraph(NO_RESULTS)]);
    }
}
