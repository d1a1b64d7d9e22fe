mod claude;

pub use claude::ClaudeClient;

use async_trait::async_trait;

use crate::error::Result;

/// Outbound text-generation boundary: one prompt in, plain text out.
///
/// The remote service is an injected collaborator so commands and tests can
/// substitute their own implementation; availability and auth are the
/// implementation's concern.
#[async_trait]
pub trait TextModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Configuration for a remote text model.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model: crate::config::DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            max_tokens: 1024,
        }
    }
}
