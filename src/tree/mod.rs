//! Presentation model: a grouped, navigable listing of classified references.
//!
//! Builds a tree of plain value nodes from an [`AnalysisResult`]. Every node
//! carries an explicit discriminated tag ([`NodeKind`]), so no logic ever has
//! to recover a node's meaning from its display label.

use crate::analyze::{AnalysisResult, CategoryGroup, ClassifiedReference};
use crate::classify::AccessKind;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Maximum preview length, in characters, before truncation.
const PREVIEW_MAX_CHARS: usize = 60;

/// How the top level of the tree is grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupMode {
    /// Files at the top level, categories beneath each file.
    ByFile,
    /// Categories at the top level.
    ByCategory,
}

/// Discriminated tag identifying what a tree node represents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    /// A source file containing occurrences.
    File {
        /// The file path.
        path: PathBuf,
    },
    /// One access category under the root or under a file.
    Category {
        /// The category this node holds.
        kind: AccessKind,
        /// Number of references in the category.
        count: usize,
    },
    /// A single reference leaf; fields form the jump target.
    Reference {
        /// Owning file.
        file: PathBuf,
        /// Line number (1-based).
        line: usize,
        /// Start column of the symbol.
        col_start: usize,
        /// End column of the symbol (exclusive).
        col_end: usize,
    },
}

/// One node of the rendered reference tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    /// Display label.
    pub label: String,
    /// What this node represents.
    pub kind: NodeKind,
    /// Child nodes.
    pub children: Vec<TreeNode>,
}

/// Display label for a category node.
pub fn category_label(kind: AccessKind) -> &'static str {
    match kind {
        AccessKind::Read => "Reads",
        AccessKind::Write => "Writes",
        AccessKind::ReadWrite => "Read/Write",
    }
}

/// Truncated single-line preview of a reference's context.
///
/// Trims the line, caps it at 60 characters (a character cap, never a byte
/// slice) and appends `...` when truncated.
pub fn preview(context: &str) -> String {
    let trimmed = context.trim();
    if trimmed.chars().count() <= PREVIEW_MAX_CHARS {
        return trimmed.to_string();
    }
    let capped: String = trimmed.chars().take(PREVIEW_MAX_CHARS).collect();
    format!("{}...", capped)
}

/// Build the reference tree for a result under the given grouping mode.
///
/// ByFile: one node per file in first-appearance order, each holding its
/// non-empty category nodes. ByCategory: the non-empty top-level category
/// nodes directly. Empty results yield an empty tree.
pub fn build_tree(result: &AnalysisResult, mode: GroupMode) -> Vec<TreeNode> {
    match mode {
        GroupMode::ByFile => result
            .grouped_by_file
            .iter()
            .map(|entry| file_node(&entry.file, &entry.groups))
            .collect(),
        GroupMode::ByCategory => category_nodes(&result.grouped_by_type),
    }
}

fn file_node(path: &Path, groups: &CategoryGroup) -> TreeNode {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    TreeNode {
        label: format!("{} ({})", name, groups.len()),
        kind: NodeKind::File {
            path: path.to_path_buf(),
        },
        children: category_nodes(groups),
    }
}

fn category_nodes(groups: &CategoryGroup) -> Vec<TreeNode> {
    [AccessKind::Read, AccessKind::Write, AccessKind::ReadWrite]
        .into_iter()
        .filter_map(|kind| {
            let references = groups.category(kind);
            if references.is_empty() {
                return None;
            }
            Some(TreeNode {
                label: format!("{} ({})", category_label(kind), references.len()),
                kind: NodeKind::Category {
                    kind,
                    count: references.len(),
                },
                children: references.iter().map(reference_node).collect(),
            })
        })
        .collect()
}

fn reference_node(reference: &ClassifiedReference) -> TreeNode {
    let occurrence = &reference.occurrence;
    TreeNode {
        label: format!("Line {}: {}", occurrence.line, preview(&reference.context)),
        kind: NodeKind::Reference {
            file: occurrence.file.clone(),
            line: occurrence.line,
            col_start: occurrence.col_start,
            col_end: occurrence.col_end,
        },
        children: Vec::new(),
    }
}

/// Render a tree as two-space indented text for terminal output.
pub fn render_text(nodes: &[TreeNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        render_node(node, 0, &mut out);
    }
    out
}

fn render_node(node: &TreeNode, depth: usize, out: &mut String) {
    let _ = writeln!(out, "{}{}", "  ".repeat(depth), node.label);
    for child in &node.children {
        render_node(child, depth + 1, out);
    }
}

/// One-line summary of an analysis result.
pub fn summary(result: &AnalysisResult) -> String {
    let groups = &result.grouped_by_type;
    format!(
        "found {} references to '{}': {} reads, {} writes, {} read-writes",
        result.total_references,
        result.symbol,
        groups.reads.len(),
        groups.writes.len(),
        groups.read_writes.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_line_is_untouched() {
        assert_eq!(preview("  x = 5  "), "x = 5");
    }

    #[test]
    fn test_preview_truncates_at_sixty_chars() {
        let long = "a".repeat(80);
        let p = preview(&long);
        assert_eq!(p.chars().count(), 63);
        assert!(p.ends_with("..."));
    }

    #[test]
    fn test_preview_exactly_sixty_chars_no_ellipsis() {
        let line = "b".repeat(60);
        assert_eq!(preview(&line), line);
    }

    #[test]
    fn test_preview_counts_chars_not_bytes() {
        // 70 two-byte characters: a byte cap would slice mid-char.
        let line = "é".repeat(70);
        let p = preview(&line);
        assert_eq!(p.chars().count(), 63);
        assert!(p.starts_with("é"));
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(category_label(AccessKind::Read), "Reads");
        assert_eq!(category_label(AccessKind::Write), "Writes");
        assert_eq!(category_label(AccessKind::ReadWrite), "Read/Write");
    }
}
