use serde::{Deserialize, Serialize};

/// Message stored in a recipe when the service reply could not be parsed
pub const UNREADABLE_RECIPE_MESSAGE: &str =
    "The AI returned an invalid recipe format. Please try again.";

/// A generated recipe, in the shape the generation service returns it.
///
/// When `error` is set the recipe is an error value: the service could not
/// build a recipe from the given ingredients and the other fields are not
/// meant to be displayed. Missing fields deserialize to empty values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Recipe {
    pub recipe_name: String,
    pub description: String,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Recipe {
    /// An error-carrying recipe with empty placeholder fields
    pub fn with_error(message: impl Into<String>) -> Self {
        Recipe {
            error: Some(message.into()),
            ..Default::default()
        }
    }

    /// The recipe returned when the service reply is not valid JSON
    pub fn unreadable() -> Self {
        Self::with_error(UNREADABLE_RECIPE_MESSAGE)
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_names() {
        let json = r#"{
            "recipeName": "Pollo al Ajillo",
            "description": "Garlic chicken",
            "prepTime": "10 minutes",
            "cookTime": "20 minutes",
            "servings": "2",
            "ingredients": ["2 chicken breasts", "4 cloves garlic"],
            "instructions": ["Brown the chicken.", "Add the garlic."]
        }"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.recipe_name, "Pollo al Ajillo");
        assert_eq!(recipe.prep_time, "10 minutes");
        assert_eq!(recipe.cook_time, "20 minutes");
        assert_eq!(recipe.servings, "2");
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.instructions[1], "Add the garlic.");
        assert!(!recipe.is_error());
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let recipe: Recipe = serde_json::from_str(r#"{"recipeName": "Toast"}"#).unwrap();
        assert_eq!(recipe.recipe_name, "Toast");
        assert_eq!(recipe.servings, "");
        assert!(recipe.instructions.is_empty());
    }

    #[test]
    fn test_error_variant() {
        let recipe: Recipe =
            serde_json::from_str(r#"{"error": "Insufficient ingredients"}"#).unwrap();
        assert!(recipe.is_error());
        assert_eq!(recipe.error.as_deref(), Some("Insufficient ingredients"));

        let unreadable = Recipe::unreadable();
        assert_eq!(unreadable.error.as_deref(), Some(UNREADABLE_RECIPE_MESSAGE));
        assert_eq!(unreadable.recipe_name, "");
        assert!(unreadable.ingredients.is_empty());
    }

    #[test]
    fn test_serialize_skips_absent_error() {
        let recipe = Recipe {
            recipe_name: "Salad".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&recipe).unwrap();
        assert_eq!(value["recipeName"], "Salad");
        assert!(value.get("error").is_none());
    }
}
