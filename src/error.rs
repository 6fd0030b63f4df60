use thiserror::Error;

/// Errors that can occur while generating a recipe
#[derive(Error, Debug)]
pub enum ChefError {
    /// Failed to reach the generation service
    #[error("Request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// The generation service returned a response we could not use
    #[error("Provider error: {0}")]
    ProviderError(String),

    /// No API key available for the selected provider
    #[error("Missing API key for provider '{0}'")]
    MissingApiKey(String),

    /// Unknown or disabled provider requested
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    /// Fewer than two usable ingredients were supplied
    #[error("At least two ingredients are required")]
    NotEnoughIngredients,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
