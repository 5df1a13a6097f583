//! Output JSON schema definitions for report data.
//!
//! This module defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// Input log file the report was generated from
    pub source: String,

    /// Time window applied while ingesting
    pub window: WindowSpec,

    /// Total number of hits recorded at the root
    pub total_hits: u64,

    /// Line-level ingestion counters
    pub lines: LineSummary,

    /// Flattened path nodes, pre-order, depth-bounded
    pub nodes: Vec<NodeEntry>,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

/// Inclusive time window bounds in Unix seconds; an absent bound is open
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WindowSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<i64>,
}

/// Ingestion counters for one report run
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LineSummary {
    /// Lines read from the file
    pub read: u64,

    /// Lines parsed into records
    pub parsed: u64,

    /// Malformed lines skipped
    pub skipped: u64,

    /// Parsed records rejected by the time window
    pub filtered: u64,
}

/// One aggregated path in the report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeEntry {
    /// Full path of the node (e.g. "/a/b"); the root is "/"
    pub path: String,

    /// Distance from the root (root = 0)
    pub depth: usize,

    /// Observations attributed to this node
    pub hits: u64,

    /// Timestamp reported as the node's first call (0 = no hits)
    pub first_call: i64,

    /// Timestamp reported as the node's last call (0 = no hits)
    pub last_call: i64,
}
