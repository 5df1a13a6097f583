//! Hit statistics over built trees.
//!
//! Ranks the busiest paths and rolls up totals for the console summary
//! and report headers.

use super::path_tree::{flatten, PathNode, PathTree};
use crate::utils::config::UNBOUNDED_DEPTH;
use log::debug;

/// A ranked path with its share of total hits
///
/// **Public** - returned from rank_busiest
#[derive(Debug, Clone)]
pub struct BusyPath {
    /// Full node path
    pub path: String,

    /// Observations attributed to the node
    pub hits: u64,

    /// Share of the root's total hits
    pub percentage: f64,
}

/// Rank the busiest paths in a flattened node list
///
/// **Public** - main entry point for ranking
///
/// # Arguments
/// * `nodes` - Flattened nodes (pre-order, root first)
/// * `total_hits` - Total hits recorded at the root
/// * `top_n` - Number of top paths to return
///
/// # Returns
/// The non-root paths with the most hits, descending; ties broken by
/// path so the ranking is deterministic.
pub fn rank_busiest(nodes: &[&PathNode], total_hits: u64, top_n: usize) -> Vec<BusyPath> {
    debug!("Ranking top {} of {} nodes", top_n, nodes.len());

    let mut ranked: Vec<BusyPath> = nodes
        .iter()
        .filter(|n| n.depth > 0)
        .map(|n| BusyPath {
            path: n.path.clone(),
            hits: n.hit_count,
            percentage: if total_hits > 0 {
                (n.hit_count as f64 / total_hits as f64) * 100.0
            } else {
                0.0
            },
        })
        .collect();

    ranked.sort_by(|a, b| b.hits.cmp(&a.hits).then_with(|| a.path.cmp(&b.path)));
    ranked.truncate(top_n);
    ranked
}

/// Roll-up of a built tree
///
/// **Public** - returned from tree_totals
#[derive(Debug, Clone, Default)]
pub struct TreeTotals {
    /// Hits recorded at the root (= ingested records)
    pub total_hits: u64,

    /// Nodes in the tree, root included
    pub node_count: usize,

    /// Depth of the deepest node
    pub max_depth: usize,

    /// Root first-call timestamp (0 with no hits)
    pub first_call: i64,

    /// Root last-call timestamp (0 with no hits)
    pub last_call: i64,
}

impl TreeTotals {
    /// Human-readable one-liner for logging
    pub fn summary(&self) -> String {
        format!(
            "Hits: {} | Nodes: {} | Max depth: {} | Oldest: {} | Newest: {}",
            self.total_hits, self.node_count, self.max_depth, self.first_call, self.last_call
        )
    }
}

/// Compute totals for a built tree
///
/// **Public** - used by the report command and summaries
pub fn tree_totals(tree: &PathTree) -> TreeTotals {
    let nodes = flatten(tree, UNBOUNDED_DEPTH);

    TreeTotals {
        total_hits: tree.root().hit_count,
        node_count: nodes.len(),
        max_depth: nodes.iter().map(|n| n.depth).max().unwrap_or(0),
        first_call: tree.root().first_call_timestamp(),
        last_call: tree.root().last_call_timestamp(),
    }
}
