use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use super::DocstringGenerator;
use crate::config::DocstringStyle;
use crate::error::Result;
use crate::llm::TextModel;
use crate::types::CodeElement;

/// Generator that delegates to a remote text model.
///
/// The response is used verbatim apart from whitespace trimming and removal
/// of stray code fences or triple quotes the model was told not to emit.
pub struct RemoteGenerator {
    model: Arc<dyn TextModel>,
}

static CODE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^```[a-zA-Z]*\r?\n(.*?)\r?\n?```$").unwrap());

impl RemoteGenerator {
    pub fn new(model: Arc<dyn TextModel>) -> Self {
        Self { model }
    }
}

#[async_trait]
impl DocstringGenerator for RemoteGenerator {
    async fn generate(&self, element: &CodeElement, style: DocstringStyle) -> Result<String> {
        let prompt = build_prompt(element, style);
        let response = self.model.generate(&prompt).await?;
        Ok(clean_response(&response))
    }
}

fn style_name(style: DocstringStyle) -> &'static str {
    match style {
        DocstringStyle::Google => "Google",
        DocstringStyle::Numpy => "NumPy",
    }
}

/// Assemble the generation prompt from the element's kind, name, signature
/// snippet, and enclosing class.
pub fn build_prompt(element: &CodeElement, style: DocstringStyle) -> String {
    let kind = element.kind.to_string();
    let kind_upper = kind.to_uppercase();
    let style_name = style_name(style);

    let context = match &element.parent {
        Some(class) => format!("\nThis {kind} is defined inside class {class}.\n"),
        None => String::new(),
    };

    format!(
        "You are an expert Python developer. Generate a comprehensive \
         {style_name}-style docstring for the following {kind}.\n\
         \n\
         IMPORTANT RULES:\n\
         1. Use {style_name}-style docstring format\n\
         2. Be concise but informative\n\
         3. Include Args, Returns, Raises sections when applicable\n\
         4. For classes, describe the purpose and key attributes\n\
         5. Do NOT include the code in the docstring\n\
         6. Do NOT include triple quotes in your response\n\
         7. Match the indentation of the original code\n\
         {context}\n\
         {kind_upper} NAME: {name}\n\
         {kind_upper} CODE:\n\
         ```python\n\
         {snippet}\n\
         ```\n\
         \n\
         Generate ONLY the docstring content (without triple quotes). The \
         docstring should be ready to insert directly after the \
         definition line.",
        name = element.name,
        snippet = element.snippet,
    )
}

/// Strip accidental markdown fences and surrounding triple quotes.
fn clean_response(raw: &str) -> String {
    let mut text = raw.trim();
    if let Some(cap) = CODE_FENCE.captures(text) {
        if let Some(inner) = cap.get(1) {
            text = inner.as_str().trim();
        }
    }
    text = text.strip_prefix("\"\"\"").unwrap_or(text);
    text = text.strip_suffix("\"\"\"").unwrap_or(text);
    text.trim().to_string()
}
