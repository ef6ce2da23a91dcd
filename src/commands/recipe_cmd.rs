use anyhow::Result;
use colored::Colorize;

use crate::config::AppConfig;
use crate::personality::{cuisines_for, DietType, Nutrient};
use crate::providers::spoonacular::{Recipe, SpoonacularClient};
use crate::providers::yelp::{Business, YelpClient};
use crate::recommend;

/// One user-initiated search, already parsed by the CLI.
#[derive(Debug, Clone)]
pub enum SearchRequest {
    Personality {
        trait_label: String,
        diet: DietType,
    },
    Ingredient {
        name: String,
        max_time: u32,
    },
    Nutrients {
        nutrient: Nutrient,
        min_value: u32,
        max_value: u32,
        max_time: u32,
    },
}

/// Runs one search end to end: recipe lookup, rendering, and the optional
/// restaurant cross-reference when a location was given.
pub async fn run(config: &AppConfig, request: SearchRequest, location: Option<String>) -> Result<()> {
    let spoonacular = SpoonacularClient::new(config.spoonacular_api_key.clone());

    // The cuisine resolved for a personality search doubles as the
    // restaurant search term later on.
    let resolved_cuisine = match &request {
        SearchRequest::Personality { trait_label, .. } => {
            Some(cuisines_for(trait_label)[0].to_string())
        }
        _ => None,
    };

    let lookup = match &request {
        SearchRequest::Personality { trait_label, diet } => {
            recommend::recipe_by_personality(&spoonacular, trait_label, *diet).await
        }
        SearchRequest::Ingredient { name, max_time } => {
            recommend::recipe_by_ingredient(&spoonacular, name, *max_time).await
        }
        SearchRequest::Nutrients {
            nutrient,
            min_value,
            max_value,
            max_time,
        } => {
            recommend::recipe_by_nutrients(&spoonacular, *nutrient, *min_value, *max_value, *max_time)
                .await
        }
    };

    let recipe = match lookup.into_option() {
        Some(recipe) => recipe,
        None => {
            println!(
                "{}",
                "No matching recipe found. Try a different search.".yellow()
            );
            return Ok(());
        }
    };

    render_recipe(&recipe);

    if let Some(location) = location {
        let cuisine = resolved_cuisine.or_else(|| recipe.cuisines.first().cloned());
        match cuisine {
            Some(cuisine) if !cuisine.is_empty() => {
                let yelp = YelpClient::new(config.yelp_api_key.clone());
                let restaurants = yelp.search(&location, &cuisine).await;
                render_restaurants(&restaurants);
            }
            _ => log::info!("recipe carries no cuisine, skipping restaurant search"),
        }
    }

    Ok(())
}

fn render_recipe(recipe: &Recipe) {
    let title = recipe.title.as_deref().unwrap_or("No title");
    println!("\n{} {}", "🍳 Recommended Recipe:".bold(), title.green().bold());

    if let Some(image) = &recipe.image {
        println!("🖼  {}", image);
    }

    let ready = recipe
        .ready_in_minutes
        .map(|m| format!("{} minutes", m))
        .unwrap_or_else(|| "N/A".to_string());
    println!("⏱  Total preparation time: {}", ready);

    if !recipe.extended_ingredients.is_empty() {
        println!("\n{}", "📝 Ingredients:".bold());
        for ingredient in &recipe.extended_ingredients {
            let line = ingredient
                .original
                .as_deref()
                .or(ingredient.name.as_deref())
                .unwrap_or("unknown ingredient");
            println!("• {}", line);
        }
    }

    println!("\n{}", "📋 Instructions:".bold());
    println!(
        "{}",
        recipe
            .instructions
            .as_deref()
            .unwrap_or("No instructions available.")
    );

    if let Some(nutrition) = &recipe.nutrition {
        if !nutrition.nutrients.is_empty() {
            println!("\n{}", "🥗 Nutrition Information:".bold());
            for nutrient in &nutrition.nutrients {
                let name = nutrient.name.as_deref().unwrap_or("Unknown");
                let amount = nutrient.amount.unwrap_or(0.0);
                let unit = nutrient.unit.as_deref().unwrap_or("");
                println!("• {}: {:.1} {}", name, amount, unit);
            }
        }
    }
}

fn render_restaurants(restaurants: &[Business]) {
    if restaurants.is_empty() {
        println!("\n{}", "No nearby restaurants found.".yellow());
        return;
    }

    println!("\n{}", "📍 Nearby Restaurants:".bold());
    for business in restaurants {
        let name = business.name.as_deref().unwrap_or("Unnamed");
        let rating = business
            .rating
            .map(|r| format!("{}⭐", r))
            .unwrap_or_else(|| "unrated".to_string());
        let address = business
            .location
            .address1
            .as_deref()
            .unwrap_or("Address not available");
        println!("• {} ({}) - {}", name.cyan(), rating, address);
    }
}
