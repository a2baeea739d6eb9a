use serde::Deserialize;
use serde_json::{Map, Value};

/// Number of `strIngredientN` slots in a TheMealDB meal record
pub const INGREDIENT_SLOTS: usize = 20;

/// One search hit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeSummary {
    pub id: String,
    pub name: String,
}

/// Everything the detail pane shows about a single recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDetail {
    pub name: String,
    pub cuisine: String,
    /// Ingredients in slot order, empty slots skipped
    pub ingredients: Vec<String>,
}

/// Body of `filter.php?i=...`
#[derive(Debug, Deserialize)]
pub struct FilterResponse {
    #[serde(default)]
    pub meals: Option<Vec<MealSummary>>,
}

#[derive(Debug, Deserialize)]
pub struct MealSummary {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
}

/// Body of `lookup.php?i=...`
#[derive(Debug, Deserialize)]
pub struct LookupResponse {
    #[serde(default)]
    pub meals: Option<Vec<MealRecord>>,
}

/// A full meal record. Only the fields we display are typed; ingredient
/// slots are read out of `fields` by name.
#[derive(Debug, Deserialize)]
pub struct MealRecord {
    #[serde(rename = "strMeal", default)]
    pub name: Option<String>,
    #[serde(rename = "strArea", default)]
    pub area: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl FilterResponse {
    /// Flatten into summaries, treating `meals: null` as no hits.
    pub fn into_summaries(self) -> Vec<RecipeSummary> {
        self.meals
            .unwrap_or_default()
            .into_iter()
            .map(|meal| RecipeSummary {
                id: meal.id,
                name: meal.name,
            })
            .collect()
    }
}

impl MealRecord {
    /// Values of `strIngredient1..=strIngredient20` that are present and
    /// non-blank, trimmed, in slot order.
    pub fn ingredients(&self) -> Vec<String> {
        (1..=INGREDIENT_SLOTS)
            .filter_map(|slot| {
                self.fields
                    .get(&format!("strIngredient{}", slot))
                    .and_then(Value::as_str)
                    .map(str::trim)
                    .filter(|value| !value.is_empty())
                    .map(String::from)
            })
            .collect()
    }

    pub fn into_detail(self) -> RecipeDetail {
        let ingredients = self.ingredients();
        RecipeDetail {
            name: self.name.unwrap_or_default(),
            cuisine: self.area.unwrap_or_default(),
            ingredients,
        }
    }
}
