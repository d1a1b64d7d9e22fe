//! The docstring pipeline: extract, synthesize, rewrite.

pub mod batch;

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::config::{DocstringConfig, DocstringStyle};
use crate::error::Result;
use crate::extract::extract_elements;
use crate::generate::{create_generator, DocstringGenerator};
use crate::rewrite::insert_docstrings;
use crate::types::{DocstringResult, ElementFailure, ProcessedSource};

/// Stateless single-file pipeline. All configuration is fixed at
/// construction; processing one file never touches another's state.
pub struct DocstringAgent {
    generator: Arc<dyn DocstringGenerator>,
    style: DocstringStyle,
}

impl DocstringAgent {
    pub fn new(config: &DocstringConfig) -> Result<Self> {
        Ok(Self {
            generator: create_generator(config)?,
            style: config.style,
        })
    }

    /// Build an agent around an explicit generator. Used by tests to inject
    /// canned implementations.
    pub fn with_generator(generator: Arc<dyn DocstringGenerator>, style: DocstringStyle) -> Self {
        Self { generator, style }
    }

    /// Run extract -> synthesize -> rewrite over one source snapshot.
    ///
    /// Elements that already carry a docstring are skipped. A generation
    /// failure is recorded against its element and does not abort the file.
    pub async fn process_source(&self, source: &str) -> Result<ProcessedSource> {
        let elements = extract_elements(source)?;

        let mut results = Vec::new();
        let mut failures = Vec::new();

        for element in elements {
            if element.has_docstring || element.insert_row.is_none() {
                continue;
            }
            match self.generator.generate(&element, self.style).await {
                Ok(text) => results.push(DocstringResult {
                    element,
                    text,
                    style: self.style,
                }),
                Err(e) => failures.push(ElementFailure {
                    name: element.name,
                    line: element.start_line,
                    error: e.to_string(),
                }),
            }
        }

        let inserted = results.len();
        let text = insert_docstrings(source, &results);

        Ok(ProcessedSource {
            text,
            inserted,
            failures,
        })
    }

    /// Process a file from disk, optionally writing the rewritten source.
    ///
    /// Input is decoded as UTF-8 with undecodable bytes replaced rather than
    /// raising. Invalid Python syntax surfaces to the caller as a parse
    /// error by design: the caller chose exactly one file.
    pub async fn process_file(
        &self,
        path: &Path,
        output: Option<&Path>,
    ) -> Result<ProcessedSource> {
        let bytes = fs::read(path)?;
        let source = String::from_utf8_lossy(&bytes);
        let processed = self.process_source(&source).await?;

        if let Some(output) = output {
            if let Some(parent) = output.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(output, &processed.text)?;
        }

        Ok(processed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::generate::TemplateGenerator;
    use async_trait::async_trait;
    use tempfile::TempDir;

    fn dry_run_agent() -> DocstringAgent {
        DocstringAgent::with_generator(Arc::new(TemplateGenerator), DocstringStyle::Google)
    }

    #[tokio::test]
    async fn test_example_scenario_add() {
        let source = "def add(a, b):\n    return a + b\n";
        let processed = dry_run_agent().process_source(source).await.unwrap();

        assert_eq!(processed.inserted, 1);
        assert!(processed.failures.is_empty());
        assert!(processed.text.contains("a (Any): Description of a."));
        assert!(processed.text.contains("b (Any): Description of b."));
        // The original body line is byte-identical and unmoved relative to
        // the def line plus the inserted block.
        assert!(processed.text.ends_with("    return a + b\n"));
        assert!(processed.text.starts_with("def add(a, b):\n    \"\"\""));
    }

    #[tokio::test]
    async fn test_pipeline_is_idempotent_on_documented_elements() {
        let agent = dry_run_agent();
        let source = "def add(a, b):\n    return a + b\n";

        let first = agent.process_source(source).await.unwrap();
        let second = agent.process_source(&first.text).await.unwrap();

        assert_eq!(second.inserted, 0);
        assert_eq!(second.text, first.text);
    }

    #[tokio::test]
    async fn test_empty_source_is_unchanged() {
        let processed = dry_run_agent().process_source("").await.unwrap();
        assert_eq!(processed.text, "");
        assert_eq!(processed.inserted, 0);
    }

    #[tokio::test]
    async fn test_invalid_syntax_raises() {
        let err = dry_run_agent()
            .process_source("def broken(\n  nope")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[tokio::test]
    async fn test_element_failures_do_not_abort_the_file() {
        struct FlakyGenerator;

        #[async_trait]
        impl crate::generate::DocstringGenerator for FlakyGenerator {
            async fn generate(
                &self,
                element: &crate::types::CodeElement,
                _style: DocstringStyle,
            ) -> crate::error::Result<String> {
                if element.name == "bad" {
                    Err(Error::Service("timeout".to_string()))
                } else {
                    Ok("Works.".to_string())
                }
            }
        }

        let agent =
            DocstringAgent::with_generator(Arc::new(FlakyGenerator), DocstringStyle::Google);
        let source = "def bad():\n    pass\n\ndef good():\n    pass\n";
        let processed = agent.process_source(source).await.unwrap();

        assert_eq!(processed.inserted, 1);
        assert_eq!(processed.failures.len(), 1);
        assert_eq!(processed.failures[0].name, "bad");
        assert!(processed.text.contains("def good():\n    \"\"\"\n    Works."));
        assert!(processed.text.contains("def bad():\n    pass"));
    }

    #[tokio::test]
    async fn test_process_file_writes_output() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("mod.py");
        let output = dir.path().join("out/mod.py");
        std::fs::write(&input, "def f(x):\n    return x\n").unwrap();

        let processed = dry_run_agent()
            .process_file(&input, Some(&output))
            .await
            .unwrap();

        assert_eq!(processed.inserted, 1);
        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(written, processed.text);
    }
}
