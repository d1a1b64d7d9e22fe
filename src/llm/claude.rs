use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{ModelConfig, TextModel};
use crate::error::{Error, Result};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Text model backed by the Anthropic messages API.
pub struct ClaudeClient {
    client: Client,
    api_key: String,
    config: ModelConfig,
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl ClaudeClient {
    /// Build a client from an explicit API key.
    pub fn new(api_key: impl Into<String>, config: ModelConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| Error::Service(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            config,
        })
    }

    /// Build a client from the `ANTHROPIC_API_KEY` environment variable.
    pub fn from_env(config: ModelConfig) -> Result<Self> {
        let api_key = env::var("ANTHROPIC_API_KEY").map_err(|_| {
            Error::Service(
                "ANTHROPIC_API_KEY is not set; use --dry-run for offline generation".to_string(),
            )
        })?;
        Self::new(api_key, config)
    }
}

#[async_trait]
impl TextModel for ClaudeClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let body = MessagesRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    Error::Service(format!("cannot reach {ANTHROPIC_API_URL}: {e}"))
                } else {
                    Error::Service(format!("API request failed: {e}"))
                }
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Service(format!("failed to read API response: {e}")))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiError>(&text)
                .map(|e| e.error.message)
                .unwrap_or(text);
            return Err(Error::Service(format!(
                "API error ({}): {message}",
                status.as_u16()
            )));
        }

        let parsed: MessagesResponse = serde_json::from_str(&text)
            .map_err(|e| Error::Service(format!("failed to parse API response: {e}")))?;

        Ok(parsed
            .content
            .into_iter()
            .map(|block| block.text)
            .collect::<String>()
            .trim()
            .to_string())
    }
}
