pub mod recipe_cmd;

// Re-export common types
pub use recipe_cmd::SearchRequest;
