use serde_json::Value;

use crate::personality::{cuisines_for, DietType, Nutrient};
use crate::providers::spoonacular::{Recipe, SpoonacularClient};
use crate::providers::ProviderError;

/// Outcome of one recipe lookup. The default presentation collapses
/// NotFound and Failed into the same fallback message; Failed stays
/// distinguishable so the cause can be logged.
#[derive(Debug)]
pub enum Lookup {
    Found(Recipe),
    NotFound,
    Failed(ProviderError),
}

impl Lookup {
    /// Collapses to the presentation-facing optional recipe, logging any
    /// swallowed provider failure.
    pub fn into_option(self) -> Option<Recipe> {
        match self {
            Lookup::Found(recipe) => Some(recipe),
            Lookup::NotFound => None,
            Lookup::Failed(err) => {
                log::warn!("recipe lookup failed: {}", err);
                None
            }
        }
    }
}

/// A random recipe in the cuisine mapped from the personality label,
/// filtered by diet. The random endpoint returns full detail, so a single
/// round trip suffices.
pub async fn recipe_by_personality(
    client: &SpoonacularClient,
    trait_label: &str,
    diet: DietType,
) -> Lookup {
    let cuisine = cuisines_for(trait_label)[0];
    log::info!("searching {} recipes for trait {}", cuisine, trait_label);

    let params = [
        ("number", "1".to_string()),
        ("diet", diet.as_str().to_string()),
        ("cuisine", cuisine.to_string()),
        ("instructionsRequired", "true".to_string()),
    ];

    match client.fetch_json("recipes/random", &params).await {
        Ok(body) => first_recipe(body.get("recipes")),
        Err(err) => Lookup::Failed(err),
    }
}

/// A recipe containing `ingredient`, ready within `max_time` minutes.
/// The keyword search returns summaries only, so a hit costs a second
/// round trip for the full detail.
pub async fn recipe_by_ingredient(
    client: &SpoonacularClient,
    ingredient: &str,
    max_time: u32,
) -> Lookup {
    let params = [
        ("number", "1".to_string()),
        ("includeIngredients", ingredient.to_string()),
        ("maxReadyTime", max_time.to_string()),
        ("instructionsRequired", "true".to_string()),
    ];

    let body = match client.fetch_json("recipes/complexSearch", &params).await {
        Ok(body) => body,
        Err(err) => return Lookup::Failed(err),
    };

    match first_id(body.get("results")) {
        Some(id) => fetch_detail(client, id).await,
        None => Lookup::NotFound,
    }
}

/// A recipe whose `nutrient` content falls inside [min_value, max_value],
/// ready within `max_time` minutes. Same search-then-detail shape as the
/// ingredient strategy, except the range endpoint answers with a bare
/// array of summaries.
pub async fn recipe_by_nutrients(
    client: &SpoonacularClient,
    nutrient: Nutrient,
    min_value: u32,
    max_value: u32,
    max_time: u32,
) -> Lookup {
    let params = [
        ("number", "1".to_string()),
        ("addRecipeNutrition", "true".to_string()),
        (nutrient.min_param(), min_value.to_string()),
        (nutrient.max_param(), max_value.to_string()),
        ("maxReadyTime", max_time.to_string()),
    ];

    let body = match client.fetch_json("recipes/findByNutrients", &params).await {
        Ok(body) => body,
        Err(err) => return Lookup::Failed(err),
    };

    match first_id(Some(&body)) {
        Some(id) => fetch_detail(client, id).await,
        None => Lookup::NotFound,
    }
}

fn first_id(entries: Option<&Value>) -> Option<i64> {
    entries
        .and_then(|v| v.as_array())?
        .first()?
        .get("id")?
        .as_i64()
}

fn first_recipe(entries: Option<&Value>) -> Lookup {
    let first = match entries.and_then(|v| v.as_array()).and_then(|a| a.first()) {
        Some(first) => first,
        None => return Lookup::NotFound,
    };
    match serde_json::from_value::<Recipe>(first.clone()) {
        Ok(recipe) => Lookup::Found(recipe),
        Err(err) => Lookup::Failed(ProviderError::Decode(err.to_string())),
    }
}

async fn fetch_detail(client: &SpoonacularClient, id: i64) -> Lookup {
    match client.recipe_information(id).await {
        Ok(body) => match serde_json::from_value::<Recipe>(body) {
            Ok(recipe) => Lookup::Found(recipe),
            Err(err) => Lookup::Failed(ProviderError::Decode(err.to_string())),
        },
        Err(err) => Lookup::Failed(err),
    }
}
