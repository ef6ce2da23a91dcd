use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    MissingKey(&'static str),
}

/// API keys for both providers. Loaded once at startup and handed to the
/// clients at construction; nothing reads the environment after this.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub spoonacular_api_key: String,
    pub yelp_api_key: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            spoonacular_api_key: std::env::var("SPOONACULAR_API_KEY")
                .map_err(|_| ConfigError::MissingKey("SPOONACULAR_API_KEY"))?,
            yelp_api_key: std::env::var("YELP_API_KEY")
                .map_err(|_| ConfigError::MissingKey("YELP_API_KEY"))?,
        })
    }
}
