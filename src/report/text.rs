//! Text rendering for trees and summaries.

use crate::aggregator::{rank_busiest, PathNode};

/// Render the flattened tree as an indented text listing
///
/// One line per node: depth dashes, path, hit count. Cheap enough to
/// eyeball large trees during development.
pub fn render_tree(nodes: &[&PathNode]) -> String {
    let mut out = String::new();

    for node in nodes {
        out.push_str(&format!(
            "{} {} ({})\n",
            "-".repeat(node.depth),
            node.path,
            node.hit_count
        ));
    }

    out
}

/// Render a table of the busiest paths
///
/// # Arguments
/// * `nodes` - Flattened nodes, root first
/// * `max_lines` - Number of paths to show
pub fn render_summary(nodes: &[&PathNode], max_lines: usize) -> String {
    let total_hits = nodes.first().map(|n| n.hit_count).unwrap_or(0);
    let busiest = rank_busiest(nodes, total_hits, max_lines);

    let mut lines = Vec::new();

    lines.push("  BUSIEST PATHS".to_string());
    lines.push(format!("  {:<44} {:>10} {:>8}", "Path", "Hits", "%"));
    lines.push(format!("  {}", "-".repeat(64)));

    for entry in &busiest {
        // Truncate long paths, keeping the tail which carries the detail
        let display_path = if entry.path.len() > 42 {
            format!("...{}", &entry.path[entry.path.len() - 39..])
        } else {
            entry.path.clone()
        };

        lines.push(format!(
            "  {:<44} {:>10} {:>7.1}%",
            display_path, entry.hits, entry.percentage
        ));
    }

    let non_root = nodes.len().saturating_sub(1);
    if non_root > busiest.len() {
        lines.push(format!(
            "  (showing top {} of {} paths)",
            busiest.len(),
            non_root
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::{flatten, PathTree};

    #[test]
    fn test_render_tree_indents_by_depth() {
        let mut tree = PathTree::new();
        tree.insert("/a/b", 1);

        let nodes = flatten(&tree, -1);
        let text = render_tree(&nodes);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], " / (1)");
        assert_eq!(lines[1], "- /a (1)");
        assert_eq!(lines[2], "-- /a/b (1)");
    }

    #[test]
    fn test_render_summary_lists_busiest_first() {
        let mut tree = PathTree::new();
        tree.insert("/a", 1);
        tree.insert("/a", 2);
        tree.insert("/b", 3);

        let nodes = flatten(&tree, -1);
        let text = render_summary(&nodes, 10);

        let a_pos = text.find("/a").unwrap();
        let b_pos = text.find("/b").unwrap();
        assert!(a_pos < b_pos);
    }

    #[test]
    fn test_render_summary_empty_tree() {
        let tree = PathTree::new();
        let nodes = flatten(&tree, -1);

        let text = render_summary(&nodes, 10);
        assert!(text.contains("BUSIEST PATHS"));
    }
}
