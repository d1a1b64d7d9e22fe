use async_trait::async_trait;

use super::DocstringGenerator;
use crate::config::DocstringStyle;
use crate::error::Result;
use crate::types::{CodeElement, ElementKind};

/// Deterministic offline generator.
///
/// Builds the docstring purely from the element's name, kind, and parameter
/// list; identical input always yields byte-identical output.
pub struct TemplateGenerator;

#[async_trait]
impl DocstringGenerator for TemplateGenerator {
    async fn generate(&self, element: &CodeElement, style: DocstringStyle) -> Result<String> {
        Ok(template_docstring(element, style))
    }
}

fn template_docstring(element: &CodeElement, style: DocstringStyle) -> String {
    match style {
        DocstringStyle::Google => google_template(element),
        DocstringStyle::Numpy => numpy_template(element),
    }
}

fn google_template(element: &CodeElement) -> String {
    let mut out = format!("Brief description of {}.\n", element.name);

    if !element.params.is_empty() {
        out.push_str("\nArgs:\n");
        for param in &element.params {
            out.push_str(&format!("    {param} (Any): Description of {param}.\n"));
        }
    }

    match element.kind {
        ElementKind::Class => {}
        _ => out.push_str("\nReturns:\n    Any: Description of return value.\n"),
    }

    out.trim_end().to_string()
}

fn numpy_template(element: &CodeElement) -> String {
    let mut out = format!("{}.\n", element.name);

    if !element.params.is_empty() {
        out.push_str("\nParameters\n----------\n");
        for param in &element.params {
            out.push_str(&format!("{param} : Any\n    Description.\n"));
        }
    }

    match element.kind {
        ElementKind::Class => {}
        _ => out.push_str("\nReturns\n-------\nAny\n    Description.\n"),
    }

    out.trim_end().to_string()
}
