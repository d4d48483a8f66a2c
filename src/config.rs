use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Provider used for generation
    #[serde(default = "default_provider")]
    pub default_provider: String,
    /// Map of provider name to provider configuration
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
    /// Language preselected in the form
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Request timeout in seconds; no timeout when unset
    #[serde(default)]
    pub timeout: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_provider: default_provider(),
            providers: HashMap::new(),
            default_language: default_language(),
            timeout: None,
        }
    }
}

/// Configuration for a specific generation provider
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Whether this provider is enabled
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Model identifier (e.g., "gemini-2.5-flash", "gpt-4o-mini");
    /// the provider's built-in model when left out
    #[serde(default)]
    pub model: String,
    /// API key for authentication (can also be set via environment variable)
    pub api_key: Option<String>,
    /// Base URL for API endpoint (for custom or proxy endpoints)
    pub base_url: Option<String>,
    /// Sampling temperature; the service default when unset
    pub temperature: Option<f32>,
    /// Maximum tokens to generate; the service default when unset
    pub max_tokens: Option<u32>,
}

impl ProviderConfig {
    /// Built-in configuration for a provider that is missing from the config file
    pub fn default_for(provider_name: &str) -> Option<Self> {
        let model = match provider_name {
            "google" => "gemini-2.5-flash",
            "openai" => "gpt-4o-mini",
            "ollama" => "llama3.1",
            _ => return None,
        };

        Some(ProviderConfig {
            enabled: true,
            model: model.to_string(),
            api_key: None,
            base_url: None,
            temperature: None,
            max_tokens: None,
        })
    }
}

// Default value functions
fn default_provider() -> String {
    "google".to_string()
}

fn default_language() -> String {
    crate::options::DEFAULT_LANGUAGE.to_string()
}

fn default_enabled() -> bool {
    true
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with PANTRY_CHEF__ prefix
    /// 2. pantry-chef.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: PANTRY_CHEF__PROVIDERS__GOOGLE__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Configuration for `provider_name`, falling back to built-in defaults
    ///
    /// A partly configured provider (e.g. only `api_key` set) keeps the
    /// built-in model.
    pub fn provider(&self, provider_name: &str) -> Option<ProviderConfig> {
        let builtin = ProviderConfig::default_for(provider_name);
        match (self.providers.get(provider_name).cloned(), builtin) {
            (Some(mut configured), Some(builtin)) => {
                if configured.model.trim().is_empty() {
                    configured.model = builtin.model;
                }
                Some(configured)
            }
            (configured, builtin) => configured.or(builtin),
        }
    }
}

/// Load configuration from file and environment variables
///
/// See [`AppConfig::load`] for the lookup order.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("pantry-chef").required(false))
        // Use double underscore for nested: PANTRY_CHEF__PROVIDERS__GOOGLE__API_KEY
        .add_source(
            Environment::with_prefix("PANTRY_CHEF")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;
    use std::env;

    fn from_toml(toml: &str) -> AppConfig {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_default_values() {
        let config = AppConfig::default();
        assert_eq!(config.default_provider, "google");
        assert_eq!(config.default_language, "English");
        assert!(config.timeout.is_none());
        assert!(config.providers.is_empty());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = from_toml("");
        assert_eq!(config.default_provider, "google");
        assert_eq!(config.default_language, "English");
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_parse_provider_section() {
        let config = from_toml(
            r#"
            default_provider = "openai"
            default_language = "Spanish"
            timeout = 45

            [providers.openai]
            model = "gpt-4.1-mini"
            api_key = "test-key"
            temperature = 0.2
            "#,
        );

        assert_eq!(config.default_provider, "openai");
        assert_eq!(config.default_language, "Spanish");
        assert_eq!(config.timeout, Some(45));

        let openai = config.provider("openai").unwrap();
        assert!(openai.enabled);
        assert_eq!(openai.model, "gpt-4.1-mini");
        assert_eq!(openai.api_key.as_deref(), Some("test-key"));
        assert_eq!(openai.temperature, Some(0.2));
        assert!(openai.max_tokens.is_none());
    }

    #[test]
    fn test_provider_falls_back_to_builtin_defaults() {
        let config = AppConfig::default();
        let google = config.provider("google").unwrap();
        assert!(google.enabled);
        assert_eq!(google.model, "gemini-2.5-flash");
        assert!(google.api_key.is_none());

        assert!(config.provider("unknown").is_none());
    }

    #[test]
    fn test_provider_section_with_only_api_key() {
        let config = from_toml(
            r#"
            [providers.google]
            api_key = "file-key"
            "#,
        );

        let google = config.provider("google").unwrap();
        assert!(google.enabled);
        assert_eq!(google.model, "gemini-2.5-flash");
        assert_eq!(google.api_key.as_deref(), Some("file-key"));
    }

    #[test]
    fn test_api_key_from_environment_only() {
        env::set_var("PANTRY_CHEF__PROVIDERS__GOOGLE__API_KEY", "env-key");
        let result = load_config();
        env::remove_var("PANTRY_CHEF__PROVIDERS__GOOGLE__API_KEY");

        let config = result.unwrap();
        let google = config.provider("google").unwrap();
        assert_eq!(google.model, "gemini-2.5-flash");
        assert_eq!(google.api_key.as_deref(), Some("env-key"));
    }

    #[test]
    fn test_load_config_without_file() {
        // Every field has a default, so a missing pantry-chef.toml is fine
        let config = load_config().unwrap();
        assert!(!config.default_provider.is_empty());
    }
}
