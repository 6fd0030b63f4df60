use std::env;

use chefbot::{generate_recipe, locale, render_pdf, AppConfig, Language, RecipeRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let lang_code = args
        .get(1)
        .ok_or("Usage: chefbot <fr|ar> <ingredient,ingredient,...> [output.pdf]")?;
    let language = Language::from_code(lang_code).ok_or("Language must be 'fr' or 'ar'")?;
    let strings = locale::strings(language);

    let ingredients: Vec<String> = args
        .get(2)
        .ok_or(strings.ingredient_label)?
        .split(',')
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect();

    // Preferences default to the first entry of each localized option list
    let options = locale::options(language);
    let request = RecipeRequest {
        ingredients,
        difficulty: options.difficulty_levels[0].to_string(),
        cuisine: options.cuisine_types[0].to_string(),
        prep_time: options.prep_times[0].to_string(),
        diet: options.diet_types[0].to_string(),
        language,
    };

    let config = AppConfig::load()?;

    println!("{}", strings.loading);
    let recipe = generate_recipe(&request, &config).await?;
    println!("{}", strings.success);

    println!("\n{}\n", recipe.title);
    for line in &recipe.ingredients_block {
        println!("{}", line);
    }
    println!();
    for line in &recipe.steps_block {
        println!("{}", line);
    }

    let pdf_bytes = render_pdf(&recipe.full_text, language, &config.pdf);
    let output = args
        .get(3)
        .cloned()
        .unwrap_or_else(|| language.pdf_file_name().to_string());
    tokio::fs::write(&output, pdf_bytes).await?;
    println!("\n{}: {}", strings.download, output);

    Ok(())
}
