use std::error::Error;

use thiserror::Error;

/// Errors that can occur while generating a recipe
#[derive(Error, Debug)]
pub enum RecipeError {
    /// The generation service could not be reached or refused the request.
    ///
    /// The message is shown to the user as-is; the underlying cause is kept
    /// as the error source.
    #[error("Failed to generate recipe. Please check your API key and try again.")]
    GenerationFailed(#[source] Box<dyn Error + Send + Sync>),

    /// A provider could not be created (missing key, unknown or disabled provider)
    #[error("Provider error: {0}")]
    ProviderError(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_failed_message_hides_cause() {
        let err = RecipeError::GenerationFailed("HTTP 403 from upstream".into());
        assert_eq!(
            err.to_string(),
            "Failed to generate recipe. Please check your API key and try again."
        );
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("HTTP 403 from upstream"));
    }

    #[test]
    fn test_provider_error_message() {
        let err = RecipeError::ProviderError("Unknown provider: foo".to_string());
        assert_eq!(err.to_string(), "Provider error: Unknown provider: foo");
    }
}
