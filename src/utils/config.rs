//! Configuration and constants for the CLI.

/// Current output schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Path of the root node
pub const ROOT_PATH: &str = "/";

/// Separator between path segments
pub const PATH_SEPARATOR: &str = "/";

// Access-log field layout (whitespace-split terms of a combined-format line)
pub const MIN_LINE_FIELDS: usize = 8;
pub const TIMESTAMP_FIELD_INDEX: usize = 3;
pub const REQUEST_FIELD_INDEX: usize = 6;

/// Timestamp layout inside a log line, e.g. "[10/Oct/2000:13:55:36"
pub const LOG_TIME_FORMAT: &str = "[%d/%b/%Y:%H:%M:%S";

/// Timestamp layout accepted on the command line, e.g. "20001010135536"
pub const CLI_TIME_FORMAT: &str = "%Y%m%d%H%M%S";

/// Depth sentinel meaning "no depth limit"
pub const UNBOUNDED_DEPTH: i32 = -1;

/// Upper bound for --depth; URL trees deeper than this are not real
pub const MAX_REPORT_DEPTH: i32 = 64;
