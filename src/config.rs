//! Immutable configuration passed at agent construction.
//!
//! Nothing here is read from a config file or mutated after construction;
//! each command builds the structs it needs from CLI flags and hands them to
//! the components it creates.

use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::Serialize;

/// Default Claude model used for remote generation.
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";

/// Docstring layout emitted by the synthesizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocstringStyle {
    /// Section-header format: "Args:", "Returns:", "Raises:".
    Google,
    /// Structured-table format with underlined section headers.
    Numpy,
}

impl fmt::Display for DocstringStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocstringStyle::Google => write!(f, "google"),
            DocstringStyle::Numpy => write!(f, "numpy"),
        }
    }
}

/// Configuration for the docstring pipeline.
#[derive(Debug, Clone)]
pub struct DocstringConfig {
    pub style: DocstringStyle,
    /// Offline deterministic generation; no API client is constructed.
    pub dry_run: bool,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for DocstringConfig {
    fn default() -> Self {
        Self {
            style: DocstringStyle::Google,
            dry_run: false,
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            max_tokens: 1024,
        }
    }
}

/// Configuration for batch directory processing.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Worker pool size; 1 means sequential.
    pub workers: usize,
    /// Directory names ignored in addition to the built-in set.
    pub extra_ignores: Vec<String>,
    /// Mirror rewritten files under this root when set.
    pub output_dir: Option<PathBuf>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            workers: 4,
            extra_ignores: Vec::new(),
            output_dir: None,
        }
    }
}

/// Configuration for README generation.
#[derive(Debug, Clone)]
pub struct ReadmeConfig {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Maximum directory depth rendered in the outline.
    pub max_depth: usize,
    /// Upper bound on the compiled context sent to the model.
    pub max_context_chars: usize,
    /// Number of code files sampled for the context.
    pub max_code_files: usize,
    /// Per-file character budget for important files.
    pub important_file_chars: usize,
    /// Per-file character budget for code samples.
    pub code_sample_chars: usize,
}

impl Default for ReadmeConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            max_tokens: 2000,
            max_depth: 3,
            max_context_chars: 50_000,
            max_code_files: 10,
            important_file_chars: 5_000,
            code_sample_chars: 2_000,
        }
    }
}
