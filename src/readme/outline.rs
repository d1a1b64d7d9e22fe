use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Render a depth-bounded tree outline of `root`.
///
/// Entries are sorted by name; hidden entries and ignored directory names
/// are skipped. Unreadable directories are silently pruned.
pub fn directory_outline(root: &Path, max_depth: usize, ignored: &HashSet<&str>) -> String {
    let mut out = String::new();
    render(root, max_depth, 0, "", ignored, &mut out);
    out
}

fn render(
    dir: &Path,
    max_depth: usize,
    depth: usize,
    prefix: &str,
    ignored: &HashSet<&str>,
    out: &mut String,
) {
    if depth >= max_depth {
        return;
    }

    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    let mut names: Vec<(String, bool)> = entries
        .filter_map(|e| e.ok())
        .filter_map(|e| {
            let name = e.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') || ignored.contains(name.as_str()) {
                return None;
            }
            let is_dir = e.file_type().map(|t| t.is_dir()).unwrap_or(false);
            Some((name, is_dir))
        })
        .collect();
    names.sort();

    let count = names.len();
    for (i, (name, is_dir)) in names.into_iter().enumerate() {
        let is_last = i == count - 1;
        let connector = if is_last { "└── " } else { "├── " };
        out.push_str(prefix);
        out.push_str(connector);
        out.push_str(&name);
        out.push('\n');

        if is_dir {
            let extension = if is_last { "    " } else { "│   " };
            render(
                &dir.join(&name),
                max_depth,
                depth + 1,
                &format!("{prefix}{extension}"),
                ignored,
                out,
            );
        }
    }
}
