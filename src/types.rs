//! Core data records shared across the pipeline.
//!
//! Every type here is a flat, write-once record: created by one component,
//! consumed by the next, discarded when the invocation ends.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::DocstringStyle;

/// Kind of documentable element discovered in Python source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Function,
    Method,
    Class,
    AsyncFunction,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Function => write!(f, "function"),
            ElementKind::Method => write!(f, "method"),
            ElementKind::Class => write!(f, "class"),
            ElementKind::AsyncFunction => write!(f, "async function"),
        }
    }
}

/// A function, method, class, or async function found by extraction.
///
/// Line numbers are 1-based. `insert_row` / `body_indent` are rewrite
/// metadata: the 0-based source row where a docstring block may be inserted
/// and the column indent of the element's body. One-line definitions carry no
/// insert row and are skipped by the rewriter.
#[derive(Debug, Clone, Serialize)]
pub struct CodeElement {
    pub kind: ElementKind,
    pub name: String,
    /// Positional and keyword parameter names, in declaration order.
    pub params: Vec<String>,
    pub start_line: usize,
    pub end_line: usize,
    /// Enclosing class name, used only to format the generation prompt.
    pub parent: Option<String>,
    pub has_docstring: bool,
    /// Source slice covering the full definition.
    pub snippet: String,
    pub insert_row: Option<usize>,
    pub body_indent: usize,
}

/// A generated docstring bound to the element it documents.
#[derive(Debug, Clone)]
pub struct DocstringResult {
    pub element: CodeElement,
    pub text: String,
    pub style: DocstringStyle,
}

/// A per-element generation failure that did not abort the file.
#[derive(Debug, Clone, Serialize)]
pub struct ElementFailure {
    pub name: String,
    pub line: usize,
    pub error: String,
}

/// Output of the single-file pipeline.
#[derive(Debug, Clone)]
pub struct ProcessedSource {
    pub text: String,
    pub inserted: usize,
    pub failures: Vec<ElementFailure>,
}

/// Result of one batch invocation: rewritten sources and captured errors,
/// keyed by file path. Ordering carries no meaning.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub rewritten: BTreeMap<PathBuf, ProcessedSource>,
    pub errors: BTreeMap<PathBuf, String>,
}

impl BatchReport {
    pub fn files_processed(&self) -> usize {
        self.rewritten.len()
    }

    pub fn files_failed(&self) -> usize {
        self.errors.len()
    }

    pub fn docstrings_inserted(&self) -> usize {
        self.rewritten.values().map(|p| p.inserted).sum()
    }

    /// JSON-friendly summary of the batch run.
    pub fn summary(&self) -> BatchSummary {
        BatchSummary {
            files_processed: self.files_processed(),
            docstrings_inserted: self.docstrings_inserted(),
            failures: self
                .errors
                .iter()
                .map(|(p, e)| (p.display().to_string(), e.clone()))
                .collect(),
            generated_at: Utc::now(),
        }
    }
}

/// Serializable summary emitted by `docsmith batch --json`.
#[derive(Debug, Serialize)]
pub struct BatchSummary {
    pub files_processed: usize,
    pub docstrings_inserted: usize,
    pub failures: BTreeMap<String, String>,
    pub generated_at: DateTime<Utc>,
}

/// Project context assembled by the README summarizer.
///
/// Assembled fresh per invocation; never cached.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectInfo {
    pub name: String,
    pub directory_structure: String,
    pub important_files: BTreeMap<String, String>,
    pub code_samples: BTreeMap<String, String>,
}
