mod remote;
mod template;

pub use remote::RemoteGenerator;
pub use template::TemplateGenerator;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{DocstringConfig, DocstringStyle};
use crate::error::Result;
use crate::llm::{ClaudeClient, ModelConfig};
use crate::types::CodeElement;

/// Docstring synthesis for a single extracted element.
///
/// Deterministic and delegated modes are interchangeable implementations of
/// this trait; callers never branch on a mode flag.
#[async_trait]
pub trait DocstringGenerator: Send + Sync {
    async fn generate(&self, element: &CodeElement, style: DocstringStyle) -> Result<String>;
}

/// Select the generator for a config: offline template in dry-run mode,
/// otherwise the remote model, which requires credentials.
pub fn create_generator(config: &DocstringConfig) -> Result<Arc<dyn DocstringGenerator>> {
    if config.dry_run {
        return Ok(Arc::new(TemplateGenerator));
    }

    let model = ClaudeClient::from_env(ModelConfig {
        model: config.model.clone(),
        temperature: config.temperature,
        max_tokens: config.max_tokens,
    })?;
    Ok(Arc::new(RemoteGenerator::new(Arc::new(model))))
}
