mod factory;
mod google;
mod ollama;
mod open_ai;

pub use factory::ProviderFactory;
pub use google::GoogleProvider;
pub use ollama::OllamaProvider;
pub use open_ai::OpenAIProvider;

use async_trait::async_trait;
use serde_json::Value;
use std::error::Error;

/// A text-completion service that can answer in schema-constrained JSON
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Get the provider name (e.g., "google", "openai")
    fn provider_name(&self) -> &str;

    /// Send `prompt` and return the raw reply text, which the service is
    /// asked to shape according to `schema`
    async fn generate(
        &self,
        prompt: &str,
        schema: &Value,
    ) -> Result<String, Box<dyn Error + Send + Sync>>;
}

/// Extract an `{"error": {...}}` body returned by an HTTP API, if any
pub(crate) fn api_error(provider: &str, body: &Value) -> Option<String> {
    let error = body.get("error")?;
    if error.is_null() {
        return None;
    }
    let message = error["message"]
        .as_str()
        .or_else(|| error.as_str())
        .unwrap_or("Unknown error");
    Some(match error["code"].as_i64() {
        Some(code) => format!("{provider} API error ({code}): {message}"),
        None => format!("{provider} API error: {message}"),
    })
}

/// HTTP client for a provider, with an optional request timeout
pub(crate) fn http_client(
    timeout: Option<std::time::Duration>,
) -> Result<reqwest::Client, reqwest::Error> {
    let builder = reqwest::Client::builder();
    let builder = match timeout {
        Some(timeout) => builder.timeout(timeout),
        None => builder,
    };
    builder.build()
}
