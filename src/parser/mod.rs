//! Access-log parsing and schema definitions.
//!
//! This module handles:
//! - Tokenizing raw log lines into records
//! - Parsing log timestamps
//! - Defining the output report schema

pub mod access_log;
pub mod schema;

// Re-export main types
pub use access_log::{parse_line, parse_log_timestamp, LogRecord};
pub use schema::{LineSummary, NodeEntry, Report, WindowSpec};
