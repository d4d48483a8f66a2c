use async_trait::async_trait;
use pantry_chef::GenerationService;
use serde_json::Value;
use std::error::Error;
use std::sync::{Arc, Mutex};

/// Outcome the stub service produces for every call
#[derive(Clone)]
pub enum Reply {
    Text(String),
    Fail(String),
}

#[derive(Default)]
pub struct Calls {
    pub prompts: Vec<String>,
    pub schemas: Vec<Value>,
}

/// In-memory generation service that records what it was asked
pub struct StubService {
    reply: Reply,
    calls: Arc<Mutex<Calls>>,
}

impl StubService {
    pub fn new(reply: Reply) -> (Self, Arc<Mutex<Calls>>) {
        let calls = Arc::new(Mutex::new(Calls::default()));
        (
            StubService {
                reply,
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }

    pub fn text(text: &str) -> (Self, Arc<Mutex<Calls>>) {
        Self::new(Reply::Text(text.to_string()))
    }
}

#[async_trait]
impl GenerationService for StubService {
    fn provider_name(&self) -> &str {
        "stub"
    }

    async fn generate(
        &self,
        prompt: &str,
        schema: &Value,
    ) -> Result<String, Box<dyn Error + Send + Sync>> {
        {
            let mut calls = self.calls.lock().unwrap();
            calls.prompts.push(prompt.to_string());
            calls.schemas.push(schema.clone());
        }
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Fail(reason) => Err(reason.clone().into()),
        }
    }
}

pub const POLLO_AL_AJILLO: &str = r#"{
    "recipeName": "Pollo al Ajillo",
    "description": "Pollo dorado con ajo y brócoli.",
    "prepTime": "10 minutes",
    "cookTime": "20 minutes",
    "servings": "2",
    "ingredients": [
        "2 pechugas de pollo",
        "1 brócoli",
        "2 cucharadas de aceite de oliva",
        "4 dientes de ajo"
    ],
    "instructions": ["Dorar el pollo.", "Añadir el ajo y el brócoli.", "Servir caliente."]
}"#;
