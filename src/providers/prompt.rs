use crate::locale::Language;

/// French prompt template, loaded at compile time with `include_str!`
/// so it can be edited without dealing with Rust string syntax.
pub const FR_PROMPT_TEMPLATE: &str = include_str!("prompt_fr.txt");

/// Arabic prompt template
pub const AR_PROMPT_TEMPLATE: &str = include_str!("prompt_ar.txt");

/// User-selected parameters for one generation request
#[derive(Debug, Clone)]
pub struct RecipeRequest {
    pub ingredients: Vec<String>,
    pub difficulty: String,
    pub cuisine: String,
    pub prep_time: String,
    pub diet: String,
    pub language: Language,
}

impl RecipeRequest {
    /// Interpolate the request into the language-appropriate template
    pub fn build_prompt(&self) -> String {
        let template = match self.language {
            Language::Fr => FR_PROMPT_TEMPLATE,
            Language::Ar => AR_PROMPT_TEMPLATE,
        };

        template
            .replace("{ingredients}", &self.ingredients.join(", "))
            .replace("{difficulty}", &self.difficulty)
            .replace("{cuisine}", &self.cuisine)
            .replace("{prep_time}", &self.prep_time)
            .replace("{diet}", &self.diet)
    }
}
