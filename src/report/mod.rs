//! Report rendering.
//!
//! This module converts flattened node lists into human-facing output:
//! - HTML documents (the primary report)
//! - Indented text trees and summary tables for the console

pub mod html;
pub mod text;

// Re-export main types and functions
pub use html::{generate_html, HtmlConfig};
pub use text::{render_summary, render_tree};
