use log::{debug, error};

use crate::error::RecipeError;
use crate::model::Recipe;
use crate::prompt::{build_recipe_prompt, recipe_schema};
use crate::providers::GenerationService;

/// Turns form input into a prompt, calls the generation service once and
/// converts its reply into a [`Recipe`].
pub struct RecipeGenerator {
    service: Box<dyn GenerationService>,
}

impl RecipeGenerator {
    pub fn new(service: Box<dyn GenerationService>) -> Self {
        RecipeGenerator { service }
    }

    pub fn provider_name(&self) -> &str {
        self.service.provider_name()
    }

    /// Generate a recipe.
    ///
    /// Returns `Ok(None)` when the service answers with empty text, and an
    /// error-carrying recipe (see [`Recipe::unreadable`]) when the reply is not
    /// valid JSON. Only a failed service call is returned as an `Err`.
    pub async fn generate(
        &self,
        ingredients: &str,
        dietary_options: &[String],
        language: &str,
    ) -> Result<Option<Recipe>, RecipeError> {
        let prompt = build_recipe_prompt(ingredients, dietary_options, language);
        debug!(
            "Requesting recipe from {} ({} dietary options, language {})",
            self.service.provider_name(),
            dietary_options.len(),
            language
        );

        let reply = self
            .service
            .generate(&prompt, &recipe_schema())
            .await
            .map_err(|e| {
                error!("Error generating recipe: {}", e);
                RecipeError::GenerationFailed(e)
            })?;

        Ok(parse_reply(&reply))
    }
}

/// Parse the service reply text. Fields are not validated beyond the JSON shape.
pub fn parse_reply(reply: &str) -> Option<Recipe> {
    let text = reply.trim();
    if text.is_empty() {
        return None;
    }

    match serde_json::from_str::<Recipe>(text) {
        Ok(recipe) => Some(recipe),
        Err(e) => {
            error!("Failed to parse JSON response ({}): {}", e, text);
            Some(Recipe::unreadable())
        }
    }
}
