use thiserror::Error;

/// Errors that can occur while generating recipes or talking to the assistant
#[derive(Error, Debug)]
pub enum ChefError {
    /// HTTP transport failure talking to a backend
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The recipe generation backend failed or returned an unusable payload
    #[error("Recipe generation failed: {0}")]
    Generation(String),

    /// The conversation backend failed or returned an unusable payload
    #[error("Assistant backend failed: {0}")]
    Backend(String),

    /// The ingredient catalog could not be loaded at startup
    #[error("Failed to load ingredient catalog: {0}")]
    Catalog(String),

    /// A generation request was built with invalid parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Failed to decode a JSON payload
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
