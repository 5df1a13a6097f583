//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while reading an access log
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Failed to read log file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid time bound '{0}': expected YYYYMMDDHHMMSS")]
    InvalidTimeBound(String),
}

/// Errors that can occur during report rendering
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Empty node list")]
    EmptyNodes,
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
