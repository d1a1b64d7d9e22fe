//! Python element extraction.
//!
//! One parse pass over the source with tree-sitter produces a flat,
//! source-ordered list of documentable elements: functions, async functions,
//! classes, and methods. Nested definitions are reported alongside their
//! parents; a method records its enclosing class name, which is used only to
//! format the generation prompt.

use tree_sitter::{Node, Parser};

use crate::error::{Error, Result};
use crate::types::{CodeElement, ElementKind};

/// Extract every documentable element from `source`, in source order.
///
/// Empty or whitespace-only input yields an empty vector. Syntactically
/// invalid input yields `Error::Parse` naming the first offending line.
pub fn extract_elements(source: &str) -> Result<Vec<CodeElement>> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(|e| Error::Parse(format!("failed to load Python grammar: {e}")))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| Error::Parse("parser produced no tree".to_string()))?;

    let root = tree.root_node();
    if root.has_error() {
        return Err(Error::Parse(format!(
            "syntax error near line {}",
            first_error_line(root)
        )));
    }

    let lines: Vec<&str> = source.split('\n').collect();
    let mut elements = Vec::new();
    walk(root, source, &lines, None, &mut elements);
    elements.sort_by_key(|e| e.start_line);
    Ok(elements)
}

fn walk(
    node: Node<'_>,
    source: &str,
    lines: &[&str],
    class_ctx: Option<&str>,
    out: &mut Vec<CodeElement>,
) {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "function_definition" => {
                if let Some(element) = build_function(child, source, lines, class_ctx) {
                    out.push(element);
                }
                // Definitions nested in a function body are plain functions,
                // not methods of the enclosing class.
                if let Some(body) = child.child_by_field_name("body") {
                    walk(body, source, lines, None, out);
                }
            }
            "class_definition" => {
                let name = node_field_text(child, "name", source);
                if let Some(element) = build_class(child, source, lines) {
                    out.push(element);
                }
                if let Some(body) = child.child_by_field_name("body") {
                    walk(body, source, lines, name.as_deref(), out);
                }
            }
            _ => walk(child, source, lines, class_ctx, out),
        }
    }
}

fn build_function(
    node: Node<'_>,
    source: &str,
    lines: &[&str],
    class_ctx: Option<&str>,
) -> Option<CodeElement> {
    let name = node_field_text(node, "name", source)?;

    let is_async = has_child_kind(node, "async");
    let kind = if is_async {
        ElementKind::AsyncFunction
    } else if class_ctx.is_some() {
        ElementKind::Method
    } else {
        ElementKind::Function
    };

    let params = node
        .child_by_field_name("parameters")
        .map(|p| parameter_names(p, source))
        .unwrap_or_default();

    Some(make_element(
        node,
        lines,
        kind,
        name,
        params,
        class_ctx.map(|c| c.to_string()),
    ))
}

fn build_class(node: Node<'_>, source: &str, lines: &[&str]) -> Option<CodeElement> {
    let name = node_field_text(node, "name", source)?;
    Some(make_element(node, lines, ElementKind::Class, name, Vec::new(), None))
}

fn make_element(
    node: Node<'_>,
    lines: &[&str],
    kind: ElementKind,
    name: String,
    params: Vec<String>,
    parent: Option<String>,
) -> CodeElement {
    let start_row = node.start_position().row;
    let end_row = node.end_position().row.min(lines.len().saturating_sub(1));
    let snippet = lines[start_row..=end_row].join("\n");

    let body = node.child_by_field_name("body");
    let has_docstring = body.map(body_has_docstring).unwrap_or(false);

    // A body on the same row as the header colon is a one-liner like
    // "def f(): pass"; injecting a docstring there would break the code.
    let colon_row = find_child_kind(node, ":").map(|c| c.start_position().row);
    let (insert_row, body_indent) = match body {
        Some(b) if colon_row != Some(b.start_position().row) => {
            (Some(b.start_position().row), b.start_position().column)
        }
        _ => (None, node.start_position().column + 4),
    };

    CodeElement {
        kind,
        name,
        params,
        start_line: start_row + 1,
        end_line: end_row + 1,
        parent,
        has_docstring,
        snippet,
        insert_row,
        body_indent,
    }
}

/// True when the first statement of `body` is a literal string expression.
fn body_has_docstring(body: Node<'_>) -> bool {
    let mut cursor = body.walk();
    for stmt in body.named_children(&mut cursor) {
        if stmt.kind() == "comment" {
            continue;
        }
        if stmt.kind() != "expression_statement" {
            return false;
        }
        return stmt
            .child(0)
            .map(|c| matches!(c.kind(), "string" | "concatenated_string"))
            .unwrap_or(false);
    }
    false
}

/// Positional and keyword parameter names, skipping splats and separators.
fn parameter_names(params: Node<'_>, source: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut cursor = params.walk();
    for child in params.named_children(&mut cursor) {
        let name = match child.kind() {
            "identifier" => node_text(child, source),
            "typed_parameter" => child
                .named_child(0)
                .filter(|n| n.kind() == "identifier")
                .and_then(|n| node_text(n, source)),
            "default_parameter" | "typed_default_parameter" => child
                .child_by_field_name("name")
                .filter(|n| n.kind() == "identifier")
                .and_then(|n| node_text(n, source)),
            _ => None,
        };
        if let Some(name) = name {
            names.push(name);
        }
    }
    names
}

fn node_text(node: Node<'_>, source: &str) -> Option<String> {
    node.utf8_text(source.as_bytes()).ok().map(|s| s.to_string())
}

fn node_field_text(node: Node<'_>, field: &str, source: &str) -> Option<String> {
    node.child_by_field_name(field)
        .and_then(|n| node_text(n, source))
}

fn has_child_kind(node: Node<'_>, kind: &str) -> bool {
    find_child_kind(node, kind).is_some()
}

fn find_child_kind<'a>(node: Node<'a>, kind: &str) -> Option<Node<'a>> {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find(|c| c.kind() == kind);
    found
}

fn first_error_line(root: Node<'_>) -> usize {
    let mut min_row = usize::MAX;
    let mut stack = vec![root];
    while let Some(n) = stack.pop() {
        if n.is_error() || n.is_missing() {
            min_row = min_row.min(n.start_position().row);
            continue;
        }
        if !n.has_error() {
            continue;
        }
        let mut cursor = n.walk();
        for child in n.children(&mut cursor) {
            stack.push(child);
        }
    }
    if min_row == usize::MAX {
        root.start_position().row + 1
    } else {
        min_row + 1
    }
}
