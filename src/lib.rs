//! Hitpath
//!
//! Path-level hit aggregation and reporting for web server access
//! logs.
//!
//! This crate provides the core implementation for the `hitpath` CLI
//! tool: it reads an access log, filters hits by a time window,
//! aggregates them into a tree keyed by URL path segments and renders
//! depth-bounded HTML, JSON and text reports.
//!
//! ## Getting Started
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install hitpath
//! hitpath --help
//! ```

pub mod aggregator;
pub mod commands;
pub mod ingest;
pub mod output;
pub mod parser;
pub mod report;
pub mod utils;
