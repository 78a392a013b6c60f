use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};

use crate::config::AssistantConfig;
use crate::error::ChefError;
use crate::services::ConversationBackend;

/// Client for the Google generative-language API backing the assistant.
pub struct GeminiBackend {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiBackend {
    /// Create a backend from configuration. The API key is looked up in
    /// config first, then the GEMINI_API_KEY environment variable.
    pub fn new(config: &AssistantConfig) -> Result<Self, ChefError> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .ok_or_else(|| {
                ChefError::Backend("GEMINI_API_KEY not found in config or environment".to_string())
            })?;

        Ok(GeminiBackend {
            client: Client::new(),
            base_url: config.base_url.clone(),
            api_key,
            model: config.model.clone(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String, model: String) -> Self {
        GeminiBackend {
            client: Client::new(),
            base_url,
            api_key,
            model,
        }
    }
}

#[async_trait]
impl ConversationBackend for GeminiBackend {
    fn backend_name(&self) -> &str {
        "gemini"
    }

    async fn reply(&self, prompt: &str) -> Result<String, ChefError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&json!({
                "contents": [{
                    "parts": [{
                        "text": prompt
                    }]
                }]
            }))
            .send()
            .await?;

        let response_body: Value = response.json().await?;
        debug!("{:?}", response_body);

        let text = response_body["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| {
                ChefError::Backend("Failed to extract text from Gemini response".to_string())
            })?
            .to_string();

        Ok(text)
    }
}
