//! Text views of category envelopes.
//!
//! An envelope without `data` shows its `message` instead.

use crate::domain::{ApiResponse, Category, CategoryNode};

const INDENT: &str = "  ";

/// One-line summary: name, slug, id, and an inactive marker when the service says so.
pub fn render_category_line(category: &Category) -> String {
    let mut line = category
        .name
        .clone()
        .unwrap_or_else(|| "(unnamed)".to_string());
    if let Some(slug) = category.slug.as_deref() {
        line.push_str(&format!(" /{slug}"));
    }
    if let Some(id) = category.identifier() {
        line.push_str(&format!(" [{id}]"));
    }
    if category.is_active() == Some(false) {
        line.push_str(" (inactive)");
    }
    line
}

fn envelope_note<T>(envelope: &ApiResponse<T>) -> String {
    let status = if envelope.success { "ok" } else { "failed" };
    match envelope.message.as_deref() {
        Some(message) => format!("{status}: {message}"),
        None => format!("{status}: no data"),
    }
}

pub fn render_category_list(envelope: &ApiResponse<Vec<Category>>) -> String {
    match envelope.data.as_deref() {
        Some([]) => "No categories.".to_string(),
        Some(categories) => categories
            .iter()
            .map(|c| format!("- {}", render_category_line(c)))
            .collect::<Vec<_>>()
            .join("\n"),
        None => envelope_note(envelope),
    }
}

fn push_node(out: &mut Vec<String>, node: &CategoryNode, depth: usize) {
    out.push(format!(
        "{}- {}",
        INDENT.repeat(depth),
        render_category_line(&node.category)
    ));
    for child in node.children() {
        push_node(out, child, depth + 1);
    }
}

/// Indented tree, children two spaces deeper than their parent.
pub fn render_category_tree(envelope: &ApiResponse<Vec<CategoryNode>>) -> String {
    match envelope.data.as_deref() {
        Some([]) => "No categories.".to_string(),
        Some(roots) => {
            let mut out = Vec::new();
            for root in roots {
                push_node(&mut out, root, 0);
            }
            out.join("\n")
        }
        None => envelope_note(envelope),
    }
}

pub fn render_category(envelope: &ApiResponse<Category>) -> String {
    match envelope.data.as_ref() {
        Some(category) => {
            let mut out = render_category_line(category);
            if let Some(description) = category.description.as_deref() {
                out.push('\n');
                out.push_str(description);
            }
            out
        }
        None => envelope_note(envelope),
    }
}
