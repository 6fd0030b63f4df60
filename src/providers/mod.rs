mod factory;
mod google;
mod open_ai;
mod prompt;

pub use factory::ProviderFactory;
pub use google::GoogleProvider;
pub use open_ai::OpenAIProvider;
pub use prompt::{RecipeRequest, AR_PROMPT_TEMPLATE, FR_PROMPT_TEMPLATE};

use crate::error::ChefError;
use async_trait::async_trait;
use std::time::Duration;

/// Build an HTTP client bounded by the configured request timeout
pub(crate) fn http_client(timeout_secs: u64) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
}

/// Unified trait for all generation providers
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Get the provider name (e.g., "google", "openai")
    fn provider_name(&self) -> &str;

    /// Send the prompt to the generation service and return the raw
    /// free-form recipe text
    async fn generate(&self, prompt: &str) -> Result<String, ChefError>;
}
