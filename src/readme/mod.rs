//! Project summarization and README generation.
//!
//! Collects a directory outline, a prioritized set of manifest-style files,
//! and a bounded sample of code files; truncates everything to its budget;
//! and forwards the compiled context to the text model in one call.

mod outline;

pub use outline::directory_outline;

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::config::ReadmeConfig;
use crate::error::{Error, Result};
use crate::llm::{ClaudeClient, ModelConfig, TextModel};
use crate::scan::DEFAULT_IGNORE_DIRS;
use crate::types::ProjectInfo;

/// Manifest, config, and license files read in full (up to their budget)
/// from the project root.
static IMPORTANT_FILES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "setup.py",
        "setup.cfg",
        "pyproject.toml",
        "requirements.txt",
        "Pipfile",
        "poetry.lock",
        "package.json",
        "package-lock.json",
        "Cargo.toml",
        "Dockerfile",
        "docker-compose.yml",
        "config.yaml",
        "config.json",
        ".env.example",
        "LICENSE",
        "CONTRIBUTING.md",
    ]
    .into_iter()
    .collect()
});

static CODE_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["py", "js", "ts", "jsx", "tsx", "go", "rs", "java", "cpp", "c", "h"]
        .into_iter()
        .collect()
});

const TRUNCATION_MARKER: &str = "\n... (truncated)";
const CONTEXT_TRUNCATION_MARKER: &str = "\n... (context truncated)";

/// Agent that turns a project directory into a README via one remote call.
pub struct ReadmeAgent {
    model: Arc<dyn TextModel>,
    config: ReadmeConfig,
}

impl ReadmeAgent {
    pub fn new(model: Arc<dyn TextModel>, config: ReadmeConfig) -> Self {
        Self { model, config }
    }

    /// Build an agent backed by the Anthropic API, keyed from the
    /// environment.
    pub fn from_env(config: ReadmeConfig) -> Result<Self> {
        let model = ClaudeClient::from_env(ModelConfig {
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })?;
        Ok(Self::new(Arc::new(model), config))
    }

    /// Assemble project context: outline, important files, code samples.
    /// Unreadable files are skipped, never fatal.
    pub fn gather(&self, root: &Path) -> Result<ProjectInfo> {
        if !root.is_dir() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("not a directory: {}", root.display()),
            )));
        }

        let ignored: HashSet<&str> = DEFAULT_IGNORE_DIRS.iter().copied().collect();
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "project".to_string());

        Ok(ProjectInfo {
            name,
            directory_structure: directory_outline(root, self.config.max_depth, &ignored),
            important_files: self.read_important_files(root),
            code_samples: self.sample_code_files(root, &ignored),
        })
    }

    fn read_important_files(&self, root: &Path) -> BTreeMap<String, String> {
        let mut contents = BTreeMap::new();
        for name in IMPORTANT_FILES.iter() {
            let path = root.join(name);
            if !path.is_file() {
                continue;
            }
            if let Ok(bytes) = fs::read(&path) {
                let text = String::from_utf8_lossy(&bytes);
                contents.insert(
                    name.to_string(),
                    truncate_chars(&text, self.config.important_file_chars),
                );
            }
        }
        contents
    }

    fn sample_code_files(&self, root: &Path, ignored: &HashSet<&str>) -> BTreeMap<String, String> {
        let mut files: Vec<_> = walkdir::WalkDir::new(root)
            .into_iter()
            .filter_entry(|e| {
                e.path() == root
                    || !e.file_type().is_dir()
                    || !is_ignored_name(e.file_name(), ignored)
            })
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                e.path()
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| CODE_EXTENSIONS.contains(ext))
            })
            .map(|e| e.into_path())
            .collect();
        files.sort();

        let mut samples = BTreeMap::new();
        for path in files.into_iter().take(self.config.max_code_files) {
            let Ok(bytes) = fs::read(&path) else {
                continue;
            };
            let text = String::from_utf8_lossy(&bytes);
            let relative = path
                .strip_prefix(root)
                .unwrap_or(&path)
                .display()
                .to_string();
            samples.insert(relative, truncate_chars(&text, self.config.code_sample_chars));
        }
        samples
    }

    /// One remote call: compiled context in, README text out.
    pub async fn generate(&self, info: &ProjectInfo) -> Result<String> {
        let context = build_context(info, self.config.max_context_chars);
        let prompt = readme_prompt(&context);
        self.model.generate(&prompt).await
    }

    /// Gather, generate, and optionally write the README.
    pub async fn process(&self, root: &Path, output: Option<&Path>) -> Result<String> {
        let info = self.gather(root)?;
        let readme = self.generate(&info).await?;

        if let Some(output) = output {
            fs::write(output, &readme)?;
        }

        Ok(readme)
    }
}

fn is_ignored_name(name: &std::ffi::OsStr, ignored: &HashSet<&str>) -> bool {
    let name = name.to_string_lossy();
    ignored.contains(name.as_ref()) || name.starts_with('.')
}

/// Truncate to a character budget on a char boundary, appending a marker.
fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], TRUNCATION_MARKER),
        None => text.to_string(),
    }
}

/// Compile the gathered sections into one context string capped at
/// `max_chars`.
pub fn build_context(info: &ProjectInfo, max_chars: usize) -> String {
    let mut parts = vec![
        format!("# Project Analysis for: {}\n", info.name),
        "## Directory Structure\n".to_string(),
        format!("{}\n", info.directory_structure),
    ];

    if !info.important_files.is_empty() {
        parts.push("## Important Files\n".to_string());
        for (filename, content) in &info.important_files {
            parts.push(format!("### {filename}\n```\n{content}\n```\n"));
        }
    }

    if !info.code_samples.is_empty() {
        parts.push("## Code Samples\n".to_string());
        for (filepath, content) in &info.code_samples {
            parts.push(format!("### {filepath}\n```\n{content}\n```\n"));
        }
    }

    let context = parts.join("\n");
    match context.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}{}", &context[..byte_idx], CONTEXT_TRUNCATION_MARKER),
        None => context,
    }
}

fn readme_prompt(context: &str) -> String {
    format!(
        "Based on the following project analysis, generate a comprehensive, \
         professional README.md file.\n\
         \n\
         PROJECT ANALYSIS:\n\
         {context}\n\
         \n\
         IMPORTANT REQUIREMENTS:\n\
         1. Create a well-structured README with clear sections\n\
         2. Include a descriptive title and brief overview\n\
         3. Document features, installation, usage, project structure\n\
         4. Add sections for requirements, configuration, and contributing if applicable\n\
         5. Include badges for any frameworks/languages detected\n\
         6. Make it engaging and professional\n\
         7. Use proper Markdown formatting\n\
         8. Include examples where relevant\n\
         9. Be specific to the project based on the analysis\n\
         \n\
         REQUIRED SECTIONS (if applicable):\n\
         - Title and Description\n\
         - Features\n\
         - Installation/Setup\n\
         - Usage/Getting Started\n\
         - Project Structure\n\
         - Configuration\n\
         - Requirements/Dependencies\n\
         - Contributing\n\
         - License\n\
         \n\
         Generate ONLY the README.md content, starting with the title. Do not \
         include any explanations outside the README."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::fs;
    use tempfile::TempDir;

    struct EchoModel;

    #[async_trait]
    impl TextModel for EchoModel {
        async fn generate(&self, prompt: &str) -> Result<String> {
            Ok(format!("# Generated\n\nprompt bytes: {}", prompt.len()))
        }
    }

    fn agent_with(config: ReadmeConfig) -> ReadmeAgent {
        ReadmeAgent::new(Arc::new(EchoModel), config)
    }

    fn sample_project() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("requirements.txt"),
            "requests==2.31.0\nflask>=3\n",
        )
        .unwrap();
        fs::write(dir.path().join("main.py"), "def main():\n    pass\n").unwrap();
        fs::create_dir(dir.path().join("pkg")).unwrap();
        fs::write(dir.path().join("pkg/util.py"), "X = 1\n").unwrap();
        dir
    }

    #[test]
    fn test_gather_collects_all_sections() {
        let dir = sample_project();
        let info = agent_with(ReadmeConfig::default()).gather(dir.path()).unwrap();

        assert!(info.directory_structure.contains("main.py"));
        assert!(info.important_files.contains_key("requirements.txt"));
        assert!(info.code_samples.contains_key("main.py"));
        assert!(info.code_samples.contains_key("pkg/util.py"));
    }

    #[test]
    fn test_gather_rejects_missing_directory() {
        let dir = TempDir::new().unwrap();
        let err = agent_with(ReadmeConfig::default())
            .gather(&dir.path().join("nope"))
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_code_sample_budget_and_truncation() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("big.py"), "x = 1\n".repeat(1000)).unwrap();

        let config = ReadmeConfig {
            code_sample_chars: 50,
            ..ReadmeConfig::default()
        };
        let info = agent_with(config).gather(dir.path()).unwrap();
        let sample = &info.code_samples["big.py"];
        assert!(sample.ends_with(TRUNCATION_MARKER));
        assert!(sample.chars().count() <= 50 + TRUNCATION_MARKER.chars().count());
    }

    #[test]
    fn test_max_code_files_bound() {
        let dir = TempDir::new().unwrap();
        for i in 0..5 {
            fs::write(dir.path().join(format!("f{i}.py")), "pass\n").unwrap();
        }

        let config = ReadmeConfig {
            max_code_files: 2,
            ..ReadmeConfig::default()
        };
        let info = agent_with(config).gather(dir.path()).unwrap();
        assert_eq!(info.code_samples.len(), 2);
    }

    #[test]
    fn test_truncate_chars_is_boundary_safe() {
        let text = "日本語テキスト";
        let truncated = truncate_chars(text, 3);
        assert!(truncated.starts_with("日本語"));
        assert!(truncated.ends_with(TRUNCATION_MARKER));
        assert_eq!(truncate_chars("short", 100), "short");
    }

    #[test]
    fn test_build_context_caps_size() {
        let info = ProjectInfo {
            name: "demo".to_string(),
            directory_structure: "├── a.py\n".repeat(500),
            important_files: BTreeMap::new(),
            code_samples: BTreeMap::new(),
        };
        let context = build_context(&info, 200);
        assert!(context.ends_with(CONTEXT_TRUNCATION_MARKER));
        assert!(context.starts_with("# Project Analysis for: demo"));
    }

    #[tokio::test]
    async fn test_process_writes_output() {
        let dir = sample_project();
        let output = dir.path().join("README.md");
        let readme = agent_with(ReadmeConfig::default())
            .process(dir.path(), Some(&output))
            .await
            .unwrap();

        assert!(readme.starts_with("# Generated"));
        assert_eq!(fs::read_to_string(output).unwrap(), readme);
    }
}
