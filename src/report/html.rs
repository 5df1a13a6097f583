//! HTML report generation.
//!
//! Builds a self-contained HTML document from a flattened node list:
//! a summary header followed by one table row per aggregated path.
//! The markup is assembled in code so the binary carries no template
//! files at runtime.

use crate::aggregator::PathNode;
use crate::ingest::TimeWindow;
use crate::utils::error::ReportError;
use chrono::{DateTime, Utc};
use log::info;

/// HTML report configuration
#[derive(Debug, Clone)]
pub struct HtmlConfig {
    pub title: String,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            title: "Access Log Path Report".to_string(),
        }
    }
}

impl HtmlConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// Generate the HTML report document
///
/// **Public** - main entry point for HTML rendering
///
/// # Arguments
/// * `nodes` - Flattened nodes, pre-order, root first
/// * `window` - Time window the report covers
/// * `config` - Optional configuration (None = defaults)
///
/// # Returns
/// The complete HTML document as a string
///
/// # Errors
/// * `ReportError::EmptyNodes` - `nodes` is empty; flattening a built
///   tree always yields at least the root, so this only guards direct
///   library misuse
pub fn generate_html(
    nodes: &[&PathNode],
    window: &TimeWindow,
    config: Option<&HtmlConfig>,
) -> Result<String, ReportError> {
    if nodes.is_empty() {
        return Err(ReportError::EmptyNodes);
    }

    let config = config.cloned().unwrap_or_default();

    info!("Generating HTML report with {} nodes", nodes.len());

    let total_hits = nodes[0].hit_count;
    let title = escape_html(&config.title);

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", title));
    html.push_str(
        "<style>\n\
         body { font-family: sans-serif; margin: 2em; }\n\
         table { border-collapse: collapse; }\n\
         th, td { border: 1px solid #ccc; padding: 4px 10px; text-align: left; }\n\
         th { background: #f0f0f0; }\n\
         td.num { text-align: right; }\n\
         </style>\n",
    );
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h1>{}</h1>\n", title));

    // Summary header
    html.push_str("<ul>\n");
    html.push_str(&format!("<li>From: {}</li>\n", format_bound(window.from)));
    html.push_str(&format!("<li>To: {}</li>\n", format_bound(window.to)));
    html.push_str(&format!("<li>Total hits: {}</li>\n", total_hits));
    html.push_str(&format!("<li>Generated: {}</li>\n", Utc::now().to_rfc3339()));
    html.push_str("</ul>\n");

    // One row per flattened node, indented by depth
    html.push_str("<table>\n<thead>\n");
    html.push_str("<tr><th>Path</th><th>Hits</th><th>First call</th><th>Last call</th></tr>\n");
    html.push_str("</thead>\n<tbody>\n");

    for node in nodes {
        html.push_str(&format!(
            "<tr><td style=\"padding-left: {}em\">{}</td><td class=\"num\">{}</td><td>{}</td><td>{}</td></tr>\n",
            node.depth + 1,
            escape_html(&node.path),
            node.hit_count,
            format_timestamp(node.first_call_timestamp()),
            format_timestamp(node.last_call_timestamp()),
        ));
    }

    html.push_str("</tbody>\n</table>\n</body>\n</html>\n");

    info!("HTML report generated ({} bytes)", html.len());

    Ok(html)
}

/// Format a window bound for display
///
/// **Private** - internal helper
fn format_bound(bound: Option<i64>) -> String {
    match bound {
        Some(ts) => format_timestamp(ts),
        None => "unbounded".to_string(),
    }
}

/// Format a Unix timestamp as UTC date and time; 0 means "no hits"
///
/// **Private** - internal helper
fn format_timestamp(timestamp: i64) -> String {
    if timestamp == 0 {
        return "-".to_string();
    }

    match DateTime::<Utc>::from_timestamp(timestamp, 0) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => timestamp.to_string(),
    }
}

/// Minimal HTML escaping for text content and attribute values
///
/// **Private** - internal helper
fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::{flatten, PathTree};

    fn sample_nodes(tree: &mut PathTree) -> Vec<&PathNode> {
        tree.insert("/a", 100);
        tree.insert("/a/b", 200);
        flatten(tree, -1)
    }

    #[test]
    fn test_generate_html_contains_paths_and_counts() {
        let mut tree = PathTree::new();
        let nodes = sample_nodes(&mut tree);

        let html = generate_html(&nodes, &TimeWindow::unbounded(), None).unwrap();

        assert!(html.contains("<title>Access Log Path Report</title>"));
        assert!(html.contains("/a/b"));
        assert!(html.contains("Total hits: 2"));
        assert!(html.contains("unbounded"));
    }

    #[test]
    fn test_generate_html_custom_title() {
        let mut tree = PathTree::new();
        let nodes = sample_nodes(&mut tree);
        let config = HtmlConfig::new().with_title("March traffic");

        let html = generate_html(&nodes, &TimeWindow::unbounded(), Some(&config)).unwrap();

        assert!(html.contains("<h1>March traffic</h1>"));
    }

    #[test]
    fn test_generate_html_escapes_paths() {
        let mut tree = PathTree::new();
        tree.insert("/<script>", 1);
        let nodes = flatten(&tree, -1);

        let html = generate_html(&nodes, &TimeWindow::unbounded(), None).unwrap();

        assert!(html.contains("/&lt;script&gt;"));
        assert!(!html.contains("<td style=\"padding-left: 2em\">/<script>"));
    }

    #[test]
    fn test_generate_html_empty_nodes() {
        let nodes: Vec<&PathNode> = vec![];
        let result = generate_html(&nodes, &TimeWindow::unbounded(), None);
        assert!(matches!(result, Err(ReportError::EmptyNodes)));
    }

    #[test]
    fn test_format_timestamp_zero() {
        assert_eq!(format_timestamp(0), "-");
    }
}
