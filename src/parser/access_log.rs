//! Access-log line parser.
//!
//! Tokenizes single lines of a combined-format access log into
//! (path, timestamp) records. Malformed lines are skipped by the
//! caller, never fatal.

use crate::utils::config::{
    LOG_TIME_FORMAT, MIN_LINE_FIELDS, REQUEST_FIELD_INDEX, TIMESTAMP_FIELD_INDEX,
};
use chrono::NaiveDateTime;
use log::debug;

/// A normalized (path, timestamp) observation taken from one log line
///
/// **Public** - produced by ingestion, consumed exactly once by tree
/// insertion; the tree copies the timestamp and drops the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Request path as it appeared in the log line
    pub path: String,

    /// Unix timestamp of the request
    pub timestamp: i64,
}

/// Parse a single access-log line into a record
///
/// **Public** - main entry point for line parsing
///
/// # Arguments
/// * `line` - One raw line from the log file
///
/// # Returns
/// `Some(LogRecord)` for a well-formed line, `None` for lines that are
/// too short or carry an unparseable timestamp. The caller decides
/// whether to count or log the skip.
pub fn parse_line(line: &str) -> Option<LogRecord> {
    let terms: Vec<&str> = line.split_whitespace().collect();

    // Ensure there is enough data in the line.
    if terms.len() < MIN_LINE_FIELDS {
        return None;
    }

    let path = terms[REQUEST_FIELD_INDEX];
    let timestamp = parse_log_timestamp(terms[TIMESTAMP_FIELD_INDEX])?;

    Some(LogRecord {
        path: path.to_string(),
        timestamp,
    })
}

/// Parse the `[10/Oct/2000:13:55:36` timestamp field as UTC seconds
///
/// **Public** - also used directly by tests
pub fn parse_log_timestamp(term: &str) -> Option<i64> {
    match NaiveDateTime::parse_from_str(term, LOG_TIME_FORMAT) {
        Ok(dt) => Some(dt.and_utc().timestamp()),
        Err(e) => {
            debug!("Unparseable timestamp field '{}': {}", term, e);
            None
        }
    }
}
