pub mod memo;
pub mod spoonacular;
pub mod yelp;

// Re-export common types
pub use spoonacular::SpoonacularClient;
pub use yelp::YelpClient;

use thiserror::Error;

/// Failure modes of one provider round trip. Clone so memoized failures
/// replay on repeated identical requests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("provider returned status {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Decode(String),
}
