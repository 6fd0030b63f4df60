pub mod classifier;
pub mod config;
pub mod error;
pub mod locale;
pub mod pdf;
pub mod providers;

use log::info;

pub use classifier::{classify, ClassifiedRecipe};
pub use config::{AppConfig, PdfConfig, ProviderConfig};
pub use error::ChefError;
pub use locale::{Direction, Language};
pub use pdf::Renderer;
pub use providers::{ProviderFactory, RecipeProvider, RecipeRequest};

/// Generate a recipe with the configured default provider and split the
/// response into display sections.
pub async fn generate_recipe(
    request: &RecipeRequest,
    config: &AppConfig,
) -> Result<ClassifiedRecipe, ChefError> {
    let usable = request
        .ingredients
        .iter()
        .filter(|ingredient| !ingredient.trim().is_empty())
        .count();
    if usable < 2 {
        return Err(ChefError::NotEnoughIngredients);
    }

    let provider = ProviderFactory::get_default_provider(config)?;
    info!(
        "Requesting recipe from provider '{}'",
        provider.provider_name()
    );

    let raw = provider.generate(&request.build_prompt()).await?;
    Ok(classify(&raw, request.language.direction()))
}

/// Render recipe text as a downloadable PDF byte buffer
pub fn render_pdf(text: &str, language: Language, config: &PdfConfig) -> Vec<u8> {
    Renderer::new(config).render(text, language.direction())
}
