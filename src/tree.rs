//! Tree Utilities
//!
//! Helper functions for tree rendering.

use std::collections::HashSet;

use crate::models::{FileNode, NodeKind};

/// Render nodes as an indented tree using recursive DFS.
/// Returns (node, depth) pairs in display order; children of folders not in
/// `expanded` are skipped.
pub fn flatten_visible(nodes: &[FileNode], expanded: &HashSet<String>) -> Vec<(FileNode, usize)> {
    fn collect(
        nodes: &[FileNode],
        depth: usize,
        expanded: &HashSet<String>,
        result: &mut Vec<(FileNode, usize)>,
    ) {
        for node in nodes {
            result.push((node.clone(), depth));
            if node.kind == NodeKind::Folder && expanded.contains(node.id) {
                collect(&node.children, depth + 1, expanded, result);
            }
        }
    }

    let mut result = Vec::new();
    collect(nodes, 0, expanded, &mut result);
    result
}

/// Flip a folder's expansion state
pub fn toggle_expanded(expanded: &mut HashSet<String>, id: &str) {
    if !expanded.remove(id) {
        expanded.insert(id.to_string());
    }
}

/// Left padding of a row, in rem
pub fn indent_rem(depth: usize) -> f32 {
    depth as f32 * 1.5 + 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data::file_tree;

    fn ids(rows: &[(FileNode, usize)]) -> Vec<(&str, usize)> {
        rows.iter().map(|(n, d)| (n.id, *d)).collect()
    }

    #[test]
    fn test_collapsed_shows_roots_only() {
        let rows = flatten_visible(&file_tree(), &HashSet::new());
        assert_eq!(ids(&rows), vec![("1", 0), ("2", 0)]);
    }

    #[test]
    fn test_expansion_is_per_folder() {
        let tree = file_tree();
        let mut expanded = HashSet::new();
        toggle_expanded(&mut expanded, "1");
        let rows = flatten_visible(&tree, &expanded);
        assert_eq!(ids(&rows), vec![("1", 0), ("1-1", 1), ("1-2", 1), ("2", 0)]);

        toggle_expanded(&mut expanded, "2");
        toggle_expanded(&mut expanded, "2-1");
        let rows = flatten_visible(&tree, &expanded);
        assert_eq!(rows.last().map(|(n, d)| (n.id, *d)), Some(("2-1", 1)));

        // Collapsing a parent hides its expanded descendants
        toggle_expanded(&mut expanded, "2");
        let rows = flatten_visible(&tree, &expanded);
        assert!(!rows.iter().any(|(n, _)| n.id == "2-1"));
        assert!(expanded.contains("2-1"));
    }

    #[test]
    fn test_indent() {
        assert_eq!(indent_rem(0), 1.0);
        assert_eq!(indent_rem(2), 4.0);
    }
}
