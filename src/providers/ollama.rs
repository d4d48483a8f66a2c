use crate::config::ProviderConfig;
use crate::providers::{api_error, http_client, GenerationService};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};
use std::error::Error;
use std::time::Duration;

pub struct OllamaProvider {
    client: Client,
    base_url: String,
    model: String,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

impl OllamaProvider {
    /// Create a new Ollama provider from configuration
    pub fn new(
        config: &ProviderConfig,
        timeout: Option<Duration>,
    ) -> Result<Self, Box<dyn Error>> {
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| "http://localhost:11434".to_string());

        Ok(OllamaProvider {
            client: http_client(timeout)?,
            base_url,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: String, model: String) -> Self {
        OllamaProvider {
            client: Client::new(),
            base_url,
            model,
            temperature: None,
            max_tokens: None,
        }
    }
}

#[async_trait]
impl GenerationService for OllamaProvider {
    fn provider_name(&self) -> &str {
        "ollama"
    }

    async fn generate(
        &self,
        prompt: &str,
        schema: &Value,
    ) -> Result<String, Box<dyn Error + Send + Sync>> {
        let mut options = json!({});
        if let Some(temperature) = self.temperature {
            options["temperature"] = json!(temperature);
        }
        if let Some(max_tokens) = self.max_tokens {
            options["num_predict"] = json!(max_tokens);
        }

        // Native chat API: `format` takes a JSON schema for structured output
        let response = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .json(&json!({
                "model": self.model,
                "messages": [
                    {"role": "user", "content": prompt}
                ],
                "format": schema,
                "stream": false,
                "options": options
            }))
            .send()
            .await?;

        let status = response.status();
        let response_body: Value = response.json().await?;
        debug!("Ollama response: {:?}", response_body);

        if let Some(message) = api_error("Ollama", &response_body) {
            return Err(message.into());
        }
        if !status.is_success() {
            return Err(format!("Ollama API returned HTTP {status}").into());
        }

        let content = response_body["message"]["content"]
            .as_str()
            .ok_or("Failed to extract content from Ollama response")?
            .to_string();

        Ok(content)
    }
}
