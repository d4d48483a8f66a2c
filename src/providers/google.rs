use crate::config::ProviderConfig;
use crate::providers::{api_error, http_client, GenerationService};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Map, Value};
use std::error::Error;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub struct GoogleProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

impl GoogleProvider {
    /// Create a new Google Gemini provider from configuration
    pub fn new(
        config: &ProviderConfig,
        timeout: Option<Duration>,
    ) -> Result<Self, Box<dyn Error>> {
        // Try config first, then fall back to environment variables
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .or_else(|| std::env::var("GOOGLE_API_KEY").ok())
            .or_else(|| std::env::var("API_KEY").ok())
            .ok_or("GEMINI_API_KEY not found in config or environment")?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(GoogleProvider {
            client: http_client(timeout)?,
            api_key,
            base_url,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        GoogleProvider {
            client: Client::new(),
            api_key,
            base_url,
            model,
            temperature: None,
            max_tokens: None,
        }
    }

    fn generation_config(&self, schema: &Value) -> Value {
        let mut config = json!({
            "responseMimeType": "application/json",
            "responseSchema": to_gemini_schema(schema),
        });
        if let Some(temperature) = self.temperature {
            config["temperature"] = json!(temperature);
        }
        if let Some(max_tokens) = self.max_tokens {
            config["maxOutputTokens"] = json!(max_tokens);
        }
        config
    }
}

/// Gemini's response schema uses upper-case OpenAPI type names
fn to_gemini_schema(schema: &Value) -> Value {
    match schema {
        Value::Object(map) => {
            let converted: Map<String, Value> = map
                .iter()
                .map(|(key, value)| {
                    let value = match (key.as_str(), value) {
                        ("type", Value::String(ty)) => Value::String(ty.to_uppercase()),
                        // property names must stay untouched
                        ("properties", Value::Object(props)) => Value::Object(
                            props
                                .iter()
                                .map(|(name, prop)| (name.clone(), to_gemini_schema(prop)))
                                .collect(),
                        ),
                        ("items", item) => to_gemini_schema(item),
                        (_, other) => other.clone(),
                    };
                    (key.clone(), value)
                })
                .collect();
            Value::Object(converted)
        }
        other => other.clone(),
    }
}

#[async_trait]
impl GenerationService for GoogleProvider {
    fn provider_name(&self) -> &str {
        "google"
    }

    async fn generate(
        &self,
        prompt: &str,
        schema: &Value,
    ) -> Result<String, Box<dyn Error + Send + Sync>> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&json!({
                "contents": [{
                    "parts": [{ "text": prompt }]
                }],
                "generationConfig": self.generation_config(schema)
            }))
            .send()
            .await?;

        let status = response.status();
        let response_body: Value = response.json().await?;
        debug!("Google Gemini response: {:?}", response_body);

        if let Some(message) = api_error("Google Gemini", &response_body) {
            return Err(message.into());
        }
        if !status.is_success() {
            return Err(format!("Google Gemini API returned HTTP {status}").into());
        }

        // A reply may be split over several parts
        let parts = response_body["candidates"][0]["content"]["parts"]
            .as_array()
            .ok_or("Failed to extract content from Google Gemini response")?;
        let text: String = parts.iter().filter_map(|p| p["text"].as_str()).collect();

        Ok(text)
    }
}
