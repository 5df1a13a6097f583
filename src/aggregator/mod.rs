//! Aggregation of log records into the path tree.
//!
//! This module transforms ingested records into:
//! - The hierarchical path tree (hit counts per URL segment)
//! - Depth-bounded flattened node lists for reporting
//! - Busiest-path rankings and tree totals

pub mod path_tree;
pub mod stats;

// Re-export main types and functions
pub use path_tree::{flatten, NodeId, PathNode, PathTree, ROOT};
pub use stats::{rank_busiest, tree_totals, BusyPath, TreeTotals};
