//! Docstring insertion.
//!
//! Operates purely on the original text plus the line metadata captured at
//! extraction time; it never re-parses. Insertions are applied bottom-up so
//! earlier row numbers stay valid. Applying metadata from one snapshot to a
//! different text is undefined behavior; both steps always run on the same
//! immutable source within one invocation.

use crate::types::DocstringResult;

/// Insert each generated docstring immediately after its definition header.
///
/// Elements that already carry a docstring, and one-line definitions without
/// an insertion point, are left untouched. No line outside the inserted
/// blocks is modified.
pub fn insert_docstrings(source: &str, results: &[DocstringResult]) -> String {
    let mut lines: Vec<String> = source.split('\n').map(str::to_string).collect();

    let mut pending: Vec<&DocstringResult> = results
        .iter()
        .filter(|r| !r.element.has_docstring && r.element.insert_row.is_some())
        .collect();
    pending.sort_by(|a, b| b.element.insert_row.cmp(&a.element.insert_row));

    for result in pending {
        let Some(row) = result.element.insert_row else {
            continue;
        };
        let at = row.min(lines.len());
        let block = format_block(&result.text, &result.element.name, result.element.body_indent);
        lines.splice(at..at, block);
    }

    lines.join("\n")
}

/// Render a docstring body as an indented triple-quoted block.
fn format_block(text: &str, name: &str, indent: usize) -> Vec<String> {
    let pad = " ".repeat(indent);
    let body = text.trim();

    let mut block = Vec::new();
    block.push(format!("{pad}\"\"\""));
    if body.is_empty() {
        block.push(format!("{pad}Brief description of {name}."));
    } else {
        for line in body.lines() {
            if line.trim().is_empty() {
                block.push(String::new());
            } else {
                block.push(format!("{pad}{line}"));
            }
        }
    }
    block.push(format!("{pad}\"\"\""));
    block
}
