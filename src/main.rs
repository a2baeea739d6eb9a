use log::debug;
use std::env;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};

use meal_search::{MealDbClient, SearchConfig, SearchController};

const PROMPT: &str = "ingredient, recipe number, or q> ";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = SearchConfig::load()?;
    debug!("Using {}", config.base_url);
    let client = MealDbClient::new(&config)?;
    let mut controller = SearchController::new(client);

    // Anything on the command line is the first search
    let args: Vec<String> = env::args().skip(1).collect();
    if !args.is_empty() {
        controller.search(&args.join(" ")).await;
        println!("{}", controller.page());
    }

    let mut stdout = io::stdout();
    let mut lines = BufReader::new(io::stdin()).lines();
    loop {
        stdout.write_all(PROMPT.as_bytes()).await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();
        if input == "q" {
            break;
        }

        match input.parse::<usize>() {
            Ok(position) => match controller.page().item_id(position).map(String::from) {
                Some(id) => controller.select_recipe(&id).await,
                None => {
                    println!("No recipe listed at position {}", position);
                    continue;
                }
            },
            Err(_) => {
                controller.search(input).await;
            }
        }
        println!("{}", controller.page());
    }

    Ok(())
}
