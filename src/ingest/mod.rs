//! Access-log ingestion.
//!
//! Reads a log file line by line, parses each line into a record and
//! keeps the ones inside the configured time window. Malformed lines
//! are counted and skipped; only I/O failures are fatal, and they are
//! surfaced to the caller before the tree is ever touched.

use crate::parser::access_log::{parse_line, LogRecord};
use crate::parser::schema::LineSummary;
use crate::utils::config::CLI_TIME_FORMAT;
use crate::utils::error::IngestError;
use chrono::NaiveDateTime;
use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Inclusive time window applied while ingesting
///
/// Bounds are Unix seconds; an absent bound leaves that side open.
/// The window is an immutable value passed explicitly through the
/// pipeline, never ambient state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeWindow {
    pub from: Option<i64>,
    pub to: Option<i64>,
}

impl TimeWindow {
    /// Window accepting every timestamp
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Build a window from optional `YYYYMMDDHHMMSS` bound strings
    ///
    /// # Errors
    /// * `IngestError::InvalidTimeBound` - a bound does not match the layout
    pub fn parse(from: Option<&str>, to: Option<&str>) -> Result<Self, IngestError> {
        Ok(Self {
            from: from.map(parse_bound).transpose()?,
            to: to.map(parse_bound).transpose()?,
        })
    }

    /// Check whether `timestamp` falls inside the window, bounds included
    pub fn contains(&self, timestamp: i64) -> bool {
        if let Some(from) = self.from {
            if timestamp < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if timestamp > to {
                return false;
            }
        }
        true
    }
}

/// Parse one CLI time bound as UTC
fn parse_bound(value: &str) -> Result<i64, IngestError> {
    NaiveDateTime::parse_from_str(value, CLI_TIME_FORMAT)
        .map(|dt| dt.and_utc().timestamp())
        .map_err(|_| IngestError::InvalidTimeBound(value.to_string()))
}

/// Counters describing one ingestion run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    /// Lines read from the file
    pub lines_read: u64,

    /// Lines successfully parsed into records
    pub lines_parsed: u64,

    /// Lines skipped as malformed
    pub lines_skipped: u64,

    /// Parsed records rejected by the time window
    pub lines_filtered: u64,
}

impl IngestStats {
    /// Convert to the report schema representation
    pub fn to_summary(&self) -> LineSummary {
        LineSummary {
            read: self.lines_read,
            parsed: self.lines_parsed,
            skipped: self.lines_skipped,
            filtered: self.lines_filtered,
        }
    }
}

/// Read an access log and return the in-window records
///
/// **Public** - main entry point for ingestion
///
/// # Arguments
/// * `path` - Access-log file to read
/// * `window` - Inclusive time window to keep
///
/// # Returns
/// The records inside the window, in file order, plus line counters
///
/// # Errors
/// * `IngestError::Io` - the file cannot be opened or read
pub fn read_log(
    path: impl AsRef<Path>,
    window: &TimeWindow,
) -> Result<(Vec<LogRecord>, IngestStats), IngestError> {
    let path = path.as_ref();

    info!("Reading access log: {}", path.display());

    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    let mut stats = IngestStats::default();

    for line in reader.lines() {
        let line = line?;
        stats.lines_read += 1;

        let Some(record) = parse_line(&line) else {
            stats.lines_skipped += 1;
            continue;
        };
        stats.lines_parsed += 1;

        if !window.contains(record.timestamp) {
            stats.lines_filtered += 1;
            continue;
        }

        records.push(record);
    }

    debug!(
        "Ingested {} records ({} lines read, {} skipped, {} outside window)",
        records.len(),
        stats.lines_read,
        stats.lines_skipped,
        stats.lines_filtered
    );

    Ok((records, stats))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_unbounded_accepts_everything() {
        let window = TimeWindow::unbounded();
        assert!(window.contains(i64::MIN));
        assert!(window.contains(0));
        assert!(window.contains(i64::MAX));
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let window = TimeWindow {
            from: Some(100),
            to: Some(200),
        };
        assert!(window.contains(100));
        assert!(window.contains(200));
        assert!(!window.contains(99));
        assert!(!window.contains(201));
    }

    #[test]
    fn test_window_parse_valid_bounds() {
        let window = TimeWindow::parse(Some("20001010135536"), None).unwrap();
        assert!(window.from.is_some());
        assert!(window.to.is_none());
    }

    #[test]
    fn test_window_parse_invalid_bound() {
        let result = TimeWindow::parse(Some("not-a-time"), None);
        assert!(matches!(result, Err(IngestError::InvalidTimeBound(_))));
    }
}
