pub mod commands;
pub mod config;
pub mod personality;
pub mod providers;
pub mod recommend;

// Re-export commonly used items
pub use config::AppConfig;
pub use personality::{cuisines_for, DietType, Nutrient, PersonalityTrait};
pub use providers::{ProviderError, SpoonacularClient, YelpClient};
pub use recommend::Lookup;
