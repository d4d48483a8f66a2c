//! Generate a recipe from the ingredients you have at hand.
//!
//! The ingredients, dietary filters and output language are turned into a
//! prompt for an LLM that is asked to answer with a fixed JSON schema; the
//! reply is parsed into a [`Recipe`].

pub mod builder;
pub mod config;
pub mod error;
pub mod form;
pub mod generator;
pub mod model;
pub mod options;
pub mod prompt;
pub mod providers;
pub mod speech;
pub mod view;

pub use builder::{Provider, RecipeGeneratorBuilder};
pub use error::RecipeError;
pub use form::{RecipeForm, SubmitRequest};
pub use generator::RecipeGenerator;
pub use model::Recipe;
pub use providers::GenerationService;
pub use view::{render_html, render_text, result_view, ResultView};

/// Generate a recipe with the configured default provider.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let recipe = pantry_chef::generate_recipe(
///     "chicken breast, broccoli, olive oil, garlic",
///     &["Vegetarian".to_string()],
///     "Spanish",
/// )
/// .await?;
/// # Ok(())
/// # }
/// ```
pub async fn generate_recipe(
    ingredients: &str,
    dietary_options: &[String],
    language: &str,
) -> Result<Option<Recipe>, RecipeError> {
    let generator = RecipeGenerator::builder().build()?;
    generator
        .generate(ingredients, dietary_options, language)
        .await
}
