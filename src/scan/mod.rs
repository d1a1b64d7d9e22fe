//! Source file enumeration with ignore rules.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

/// Directory names skipped by every traversal.
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[
    ".git",
    ".venv",
    "venv",
    "node_modules",
    "__pycache__",
    ".pytest_cache",
    "build",
    "dist",
    ".tox",
    "output_docs",
];

/// Collect every `.py` file under `root`, skipping the default ignore set,
/// hidden directories, and any extra names supplied by the caller. Results
/// are sorted for deterministic processing order.
pub fn collect_python_files(root: &Path, extra_ignores: &[String]) -> Vec<PathBuf> {
    let ignored: HashSet<&str> = DEFAULT_IGNORE_DIRS
        .iter()
        .copied()
        .chain(extra_ignores.iter().map(String::as_str))
        .collect();

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !is_skipped_dir(e, root, &ignored))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "py"))
        .map(|e| e.into_path())
        .collect();

    files.sort();
    files
}

fn is_skipped_dir(entry: &DirEntry, root: &Path, ignored: &HashSet<&str>) -> bool {
    if !entry.file_type().is_dir() || entry.path() == root {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    ignored.contains(name.as_ref()) || name.starts_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "x = 1\n").unwrap();
    }

    #[test]
    fn test_collects_only_python_files() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("a.py"));
        touch(&dir.path().join("pkg/b.py"));
        touch(&dir.path().join("notes.txt"));

        let files = collect_python_files(dir.path(), &[]);
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.py", "b.py"]);
    }

    #[test]
    fn test_default_ignores_and_hidden_dirs() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("kept.py"));
        touch(&dir.path().join(".git/skipped.py"));
        touch(&dir.path().join("__pycache__/skipped.py"));
        touch(&dir.path().join(".hidden/skipped.py"));
        touch(&dir.path().join("venv/lib/skipped.py"));

        let files = collect_python_files(dir.path(), &[]);
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("kept.py"));
    }

    #[test]
    fn test_extra_ignores_extend_defaults() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("kept.py"));
        touch(&dir.path().join("generated/skipped.py"));

        let files = collect_python_files(dir.path(), &["generated".to_string()]);
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_hidden_root_is_still_scanned() {
        let dir = TempDir::new().unwrap();
        let hidden_root = dir.path().join(".project");
        touch(&hidden_root.join("kept.py"));

        let files = collect_python_files(&hidden_root, &[]);
        assert_eq!(files.len(), 1);
    }
}
