//! HTML report output writer.
//!
//! Writes generated HTML documents to files.

use super::json::ensure_parent_dirs;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write HTML content to a file
///
/// **Public** - main entry point for HTML output
///
/// # Arguments
/// * `html_content` - Document from the report generator
/// * `output_path` - Path to output HTML file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is invalid
pub fn write_html(html_content: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing HTML to: {}", output_path.display());

    validate_html_path(output_path)?;
    ensure_parent_dirs(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(html_content.as_bytes())
        .map_err(OutputError::WriteFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!(
        "HTML written successfully ({} bytes, {:.2} KB)",
        html_content.len(),
        html_content.len() as f64 / 1024.0
    );

    Ok(())
}

/// Validate output path for HTML
///
/// **Private** - internal validation
fn validate_html_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    if let Some(ext) = path.extension() {
        if ext != "html" && ext != "htm" {
            debug!(
                "Warning: File does not have an .html extension: {}",
                path.display()
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    const SAMPLE_HTML: &str = "<!DOCTYPE html>\n<html><body><h1>report</h1></body></html>\n";

    #[test]
    fn test_write_html_round_trip() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path();

        write_html(SAMPLE_HTML, path).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(content, SAMPLE_HTML);
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/report.html");

        write_html(SAMPLE_HTML, &nested_path).unwrap();

        assert!(nested_path.exists());
    }

    #[test]
    fn test_validate_html_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = validate_html_path(temp_dir.path());
        assert!(result.is_err());
    }
}
