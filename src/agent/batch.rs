//! Batch processing across a directory tree.
//!
//! Each file is an independent task: one read, one pipeline run, one result.
//! Tasks share nothing mutable; completed results land in the report map one
//! insert at a time. There is no cancellation or timeout — a hung remote
//! call occupies its worker slot until it returns or errors.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use super::DocstringAgent;
use crate::config::BatchConfig;
use crate::error::{Error, Result};
use crate::scan::collect_python_files;
use crate::types::{BatchReport, ProcessedSource};

/// Run the docstring pipeline over every Python file under `root`.
///
/// Per-file failures (parse errors, unreadable paths, service errors that
/// killed a whole file) are captured in the report; they never halt the
/// remaining files. When an output directory is configured, each rewritten
/// source is mirrored to the same relative path beneath it.
pub async fn process_directory(
    agent: Arc<DocstringAgent>,
    root: &Path,
    config: &BatchConfig,
) -> Result<BatchReport> {
    if !root.is_dir() {
        return Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("not a directory: {}", root.display()),
        )));
    }

    // Keep the output tree out of the scan so reruns do not re-process
    // already rewritten files.
    let mut ignores = config.extra_ignores.clone();
    if let Some(out) = &config.output_dir {
        if let Some(name) = out.file_name() {
            ignores.push(name.to_string_lossy().into_owned());
        }
    }

    let files = collect_python_files(root, &ignores);
    let semaphore = Arc::new(Semaphore::new(config.workers.max(1)));
    let mut tasks = JoinSet::new();

    for path in files {
        let agent = Arc::clone(&agent);
        let semaphore = Arc::clone(&semaphore);
        let root = root.to_path_buf();
        let output_dir = config.output_dir.clone();

        tasks.spawn(async move {
            let _permit = semaphore.acquire_owned().await;
            let outcome = process_one(&agent, &root, &path, output_dir.as_deref()).await;
            (path, outcome)
        });
    }

    let mut report = BatchReport::default();
    while let Some(joined) = tasks.join_next().await {
        let Ok((path, outcome)) = joined else {
            continue;
        };
        match outcome {
            Ok(processed) => {
                report.rewritten.insert(path, processed);
            }
            Err(e) => {
                report.errors.insert(path, e.to_string());
            }
        }
    }

    Ok(report)
}

async fn process_one(
    agent: &DocstringAgent,
    root: &Path,
    path: &Path,
    output_dir: Option<&Path>,
) -> Result<ProcessedSource> {
    let bytes = tokio::fs::read(path).await?;
    let source = String::from_utf8_lossy(&bytes);
    let processed = agent.process_source(&source).await?;

    if let Some(output_dir) = output_dir {
        let relative = path.strip_prefix(root).unwrap_or(path);
        let target = output_dir.join(relative);
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&target, &processed.text).await?;
    }

    Ok(processed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DocstringStyle;
    use crate::generate::TemplateGenerator;
    use std::fs;
    use tempfile::TempDir;

    fn agent() -> Arc<DocstringAgent> {
        Arc::new(DocstringAgent::with_generator(
            Arc::new(TemplateGenerator),
            DocstringStyle::Google,
        ))
    }

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[tokio::test]
    async fn test_batch_processes_all_files() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.py", "def f(x):\n    return x\n");
        write(dir.path(), "pkg/b.py", "def g(y):\n    return y\n");

        let report = process_directory(agent(), dir.path(), &BatchConfig::default())
            .await
            .unwrap();

        assert_eq!(report.files_processed(), 2);
        assert_eq!(report.files_failed(), 0);
        assert_eq!(report.docstrings_inserted(), 2);
    }

    #[tokio::test]
    async fn test_parse_failure_recorded_not_fatal() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "ok.py", "def f(x):\n    return x\n");
        write(dir.path(), "broken.py", "def broken(\n  nope");

        let report = process_directory(agent(), dir.path(), &BatchConfig::default())
            .await
            .unwrap();

        assert_eq!(report.files_processed(), 1);
        assert_eq!(report.files_failed(), 1);
        let failed = report.errors.keys().next().unwrap();
        assert!(failed.ends_with("broken.py"));
    }

    #[tokio::test]
    async fn test_output_tree_is_mirrored() {
        let dir = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        write(dir.path(), "pkg/mod.py", "def f(x):\n    return x\n");

        let config = BatchConfig {
            output_dir: Some(out.path().to_path_buf()),
            ..BatchConfig::default()
        };
        process_directory(agent(), dir.path(), &config)
            .await
            .unwrap();

        let mirrored = out.path().join("pkg/mod.py");
        let text = fs::read_to_string(mirrored).unwrap();
        assert!(text.contains("x (Any): Description of x."));
    }

    #[tokio::test]
    async fn test_output_dir_under_root_is_not_rescanned() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.py", "def f(x):\n    return x\n");
        write(dir.path(), "generated/old.py", "def g(y):\n    return y\n");

        let config = BatchConfig {
            output_dir: Some(dir.path().join("generated")),
            ..BatchConfig::default()
        };
        let report = process_directory(agent(), dir.path(), &config)
            .await
            .unwrap();

        assert_eq!(report.files_processed(), 1);
    }

    #[tokio::test]
    async fn test_sequential_worker_pool() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.py", "def f():\n    pass\n");
        write(dir.path(), "b.py", "def g():\n    pass\n");

        let config = BatchConfig {
            workers: 1,
            ..BatchConfig::default()
        };
        let report = process_directory(agent(), dir.path(), &config)
            .await
            .unwrap();
        assert_eq!(report.files_processed(), 2);
    }

    #[tokio::test]
    async fn test_missing_root_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let err = process_directory(agent(), &missing, &BatchConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
