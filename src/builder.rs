use std::time::Duration;

use crate::config::AppConfig;
use crate::error::RecipeError;
use crate::generator::RecipeGenerator;
use crate::providers::{GenerationService, ProviderFactory};

/// Generation providers that can be selected explicitly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Google,
    OpenAI,
    Ollama,
}

impl Provider {
    /// Convert to provider name string used by the factory
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Google => "google",
            Provider::OpenAI => "openai",
            Provider::Ollama => "ollama",
        }
    }
}

/// Builder for a [`RecipeGenerator`]
///
/// Settings given here override the ones loaded from configuration.
#[derive(Default)]
pub struct RecipeGeneratorBuilder {
    config: Option<AppConfig>,
    provider: Option<Provider>,
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    service: Option<Box<dyn GenerationService>>,
}

impl RecipeGeneratorBuilder {
    /// Use this configuration instead of loading `pantry-chef.toml` and the environment
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the generation provider
    ///
    /// # Example
    /// ```
    /// use pantry_chef::{Provider, RecipeGenerator};
    ///
    /// let builder = RecipeGenerator::builder().provider(Provider::OpenAI);
    /// ```
    pub fn provider(mut self, provider: Provider) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set the API key for the provider
    ///
    /// This allows passing the API key directly instead of relying on
    /// environment variables or config files.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the model name for the provider
    ///
    /// # Example
    /// ```
    /// use pantry_chef::{Provider, RecipeGenerator};
    ///
    /// let builder = RecipeGenerator::builder()
    ///     .provider(Provider::Google)
    ///     .model("gemini-2.5-pro");
    /// ```
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Point the provider at a custom or proxy endpoint
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for the HTTP request. Requests never time out by default.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Use an existing service; every other setting is ignored
    pub fn service(mut self, service: Box<dyn GenerationService>) -> Self {
        self.service = Some(service);
        self
    }

    /// Build the generator
    ///
    /// # Errors
    /// Returns `RecipeError` if the configuration cannot be loaded or the
    /// provider cannot be created (unknown, disabled, or no API key).
    pub fn build(self) -> Result<RecipeGenerator, RecipeError> {
        if let Some(service) = self.service {
            return Ok(RecipeGenerator::new(service));
        }

        let config = match self.config {
            Some(config) => config,
            None => AppConfig::load()?,
        };

        let provider_name = self
            .provider
            .map(|p| p.as_str().to_string())
            .unwrap_or_else(|| config.default_provider.clone());

        let mut provider_config = config.provider(&provider_name).ok_or_else(|| {
            RecipeError::BuilderError(format!("Unknown provider: {}", provider_name))
        })?;
        if let Some(api_key) = self.api_key {
            provider_config.api_key = Some(api_key);
        }
        if let Some(model) = self.model {
            provider_config.model = model;
        }
        if let Some(base_url) = self.base_url {
            provider_config.base_url = Some(base_url);
        }
        let timeout = self
            .timeout
            .or_else(|| config.timeout.map(Duration::from_secs));

        let service = ProviderFactory::create(&provider_name, &provider_config, timeout)
            .map_err(|e| RecipeError::ProviderError(e.to_string()))?;

        Ok(RecipeGenerator::new(service))
    }
}

impl RecipeGenerator {
    pub fn builder() -> RecipeGeneratorBuilder {
        RecipeGeneratorBuilder::default()
    }
}
