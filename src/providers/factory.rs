use crate::config::{AppConfig, ProviderConfig};
use crate::error::ChefError;
use crate::providers::{GoogleProvider, OpenAIProvider, RecipeProvider};

pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider instance from configuration.
    /// `timeout` bounds every request the provider sends, in seconds.
    pub fn create(
        provider_name: &str,
        config: &ProviderConfig,
        timeout: u64,
    ) -> Result<Box<dyn RecipeProvider>, ChefError> {
        if !config.enabled {
            return Err(ChefError::UnknownProvider(format!(
                "{} (disabled in configuration)",
                provider_name
            )));
        }

        match provider_name {
            "google" => Ok(Box::new(GoogleProvider::new(config, timeout)?)),
            "openai" => Ok(Box::new(OpenAIProvider::new(config, timeout)?)),
            _ => Err(ChefError::UnknownProvider(provider_name.to_string())),
        }
    }

    /// Get the default provider from configuration
    pub fn get_default_provider(
        config: &AppConfig,
    ) -> Result<Box<dyn RecipeProvider>, ChefError> {
        let provider_name = &config.default_provider;
        let provider_config = config.providers.get(provider_name).ok_or_else(|| {
            ChefError::UnknownProvider(format!("{} (not found in configuration)", provider_name))
        })?;

        Self::create(provider_name, provider_config, config.timeout)
    }

    /// List all available provider names
    pub fn available_providers() -> Vec<&'static str> {
        vec!["google", "openai"]
    }
}
