use bitebytype::commands::recipe_cmd::{self, SearchRequest};
use bitebytype::config::AppConfig;
use bitebytype::personality::{DietType, Nutrient};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dotenv::dotenv;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "BiteByType - meals that fit your personality",
    long_about = None
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Location for nearby-restaurant recommendations
    #[arg(long, global = true)]
    location: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find a recipe matching a personality trait
    Personality {
        /// Dominant personality trait, e.g. "Openness" or "Extraversion".
        /// Unrecognized labels fall back to Italian cuisine.
        #[arg(long = "trait")]
        trait_label: String,

        /// Diet preference, e.g. "Vegan" or "Gluten Free"
        #[arg(long)]
        diet: DietType,
    },
    /// Find a recipe using a main ingredient
    Ingredient {
        /// Main ingredient to cook with
        #[arg(long)]
        name: String,

        /// Max preparation time in minutes
        #[arg(long, default_value_t = 30)]
        max_time: u32,
    },
    /// Find a recipe inside a nutrient range
    Nutrients {
        /// Nutrient to constrain: Calories, Protein or Fat
        #[arg(long)]
        nutrient: Nutrient,

        /// Minimum amount of the nutrient
        #[arg(long)]
        min: u32,

        /// Maximum amount of the nutrient
        #[arg(long)]
        max: u32,

        /// Max preparation time in minutes
        #[arg(long, default_value_t = 30)]
        max_time: u32,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {}", "Configuration error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    let request = match args.command {
        Command::Personality { trait_label, diet } => SearchRequest::Personality { trait_label, diet },
        Command::Ingredient { name, max_time } => SearchRequest::Ingredient { name, max_time },
        Command::Nutrients {
            nutrient,
            min,
            max,
            max_time,
        } => SearchRequest::Nutrients {
            nutrient,
            min_value: min,
            max_value: max,
            max_time,
        },
    };

    if let Err(err) = recipe_cmd::run(&config, request, args.location).await {
        eprintln!("{} {}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}
