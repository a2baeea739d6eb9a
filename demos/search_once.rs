//! One search and one detail lookup, printed as text and as HTML
//!
//! Run with: cargo run --example search_once -- "chicken breast"

use meal_search::{recipe_detail, search_recipes, MealDbClient, SearchConfig, SearchController};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let ingredient = std::env::args().nth(1).unwrap_or_else(|| "chicken".to_string());

    // Plain data, no page involved
    println!("=== Raw results ===");
    let summaries = search_recipes(&ingredient).await?;
    for summary in summaries.iter().take(5) {
        println!("{} {}", summary.id, summary.name);
    }
    if let Some(first) = summaries.first() {
        let detail = recipe_detail(&first.id).await?;
        println!("{} ({}): {}", detail.name, detail.cuisine, detail.ingredients.join(", "));
    }

    // Same search driven through the controller
    println!("\n=== Page ===");
    let client = MealDbClient::new(&SearchConfig::load()?)?;
    let mut controller = SearchController::new(client);
    controller.search(&ingredient).await;
    if let Some(id) = controller.page().item_id(1).map(String::from) {
        controller.select_recipe(&id).await;
    }
    println!("{}", controller.page());

    println!("=== HTML ===");
    println!("{}", controller.page().results_html());
    println!("{}", controller.page().detail_html());

    Ok(())
}
