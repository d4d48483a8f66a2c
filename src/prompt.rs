use serde_json::{json, Value};

/// Dietary guideline written into the prompt when no filter is selected
pub const NO_DIETARY_RESTRICTION: &str = "None";

/// Build the prompt for one generation request.
///
/// Ingredients and language are passed through verbatim; dietary options are
/// joined with `", "`.
pub fn build_recipe_prompt(
    ingredients: &str,
    dietary_options: &[String],
    language: &str,
) -> String {
    let dietary = if dietary_options.is_empty() {
        NO_DIETARY_RESTRICTION.to_string()
    } else {
        dietary_options.join(", ")
    };

    format!(
        "Generate a single, creative recipe based on the following available ingredients: \
         {ingredients}.\n\
         The recipe must adhere to these dietary guidelines: {dietary}.\n\
         The output language for the recipe should be {language}.\n\
         If no reasonable recipe can be made, be creative and suggest a very simple \
         preparation, or use the 'error' field to state what is missing.\n\
         Your response must be in JSON format conforming to the provided schema."
    )
}

/// The fixed output schema for a recipe reply, as a provider-neutral JSON schema.
///
/// Every field is required except `error`.
pub fn recipe_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "recipeName": { "type": "string", "description": "The name of the recipe." },
            "description": {
                "type": "string",
                "description": "A short, enticing description of the dish."
            },
            "prepTime": {
                "type": "string",
                "description": "Preparation time, e.g., '15 minutes'."
            },
            "cookTime": {
                "type": "string",
                "description": "Cooking time, e.g., '25 minutes'."
            },
            "servings": {
                "type": "string",
                "description": "Number of servings, e.g., '4 people'."
            },
            "ingredients": {
                "type": "array",
                "items": { "type": "string" },
                "description": "A list of ingredients with quantities."
            },
            "instructions": {
                "type": "array",
                "items": { "type": "string" },
                "description": "Step-by-step cooking instructions."
            },
            "error": {
                "type": "string",
                "description": "If a recipe cannot be generated, provide a reason here \
                                (e.g., 'Insufficient ingredients')."
            }
        },
        "required": [
            "recipeName",
            "description",
            "prepTime",
            "cookTime",
            "servings",
            "ingredients",
            "instructions"
        ]
    })
}
