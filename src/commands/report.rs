//! Report command implementation.
//!
//! The report command:
//! 1. Reads and time-filters the access log
//! 2. Builds the path tree
//! 3. Flattens it to the requested depth
//! 4. Renders the HTML report
//! 5. Writes output files

use crate::aggregator::{flatten, tree_totals, PathNode, PathTree};
use crate::ingest::{read_log, IngestStats, TimeWindow};
use crate::output::{write_html, write_report};
use crate::parser::schema::{NodeEntry, Report, WindowSpec};
use crate::report::{generate_html, render_summary, render_tree, HtmlConfig};
use crate::utils::config::{MAX_REPORT_DEPTH, SCHEMA_VERSION, UNBOUNDED_DEPTH};
use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Access-log file to analyze
    pub input: PathBuf,

    /// Maximum node depth included in output (-1 = unbounded)
    pub max_depth: i32,

    /// Window lower bound, YYYYMMDDHHMMSS (None = open)
    pub from: Option<String>,

    /// Window upper bound, YYYYMMDDHHMMSS (None = open)
    pub to: Option<String>,

    /// Output path for the HTML report
    pub output_html: PathBuf,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Print the indented path tree to stdout
    pub print_tree: bool,

    /// Print the busiest-paths summary to stdout
    pub print_summary: bool,

    /// Report title (None = default)
    pub title: Option<String>,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            max_depth: UNBOUNDED_DEPTH,
            from: None,
            to: None,
            output_html: PathBuf::from("report.html"),
            output_json: None,
            print_tree: false,
            print_summary: false,
            title: None,
        }
    }
}

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Report command arguments
///
/// # Returns
/// Ok if the report run succeeds, Err with context if any step fails
///
/// # Errors
/// * Log file read failures
/// * Time window parse errors
/// * File write errors
pub fn execute_report(args: ReportArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Starting report for: {}", args.input.display());

    // Step 1: Read and filter the access log
    info!("Step 1/5: Reading access log...");
    let window = TimeWindow::parse(args.from.as_deref(), args.to.as_deref())
        .context("Failed to parse time window")?;
    let (records, stats) =
        read_log(&args.input, &window).context("Failed to read access log")?;

    debug!(
        "Ingested {} records ({} lines skipped, {} outside window)",
        records.len(),
        stats.lines_skipped,
        stats.lines_filtered
    );

    // Step 2: Build the path tree
    info!("Step 2/5: Building path tree from {} records...", records.len());
    let mut tree = PathTree::new();
    for record in &records {
        tree.insert(&record.path, record.timestamp);
    }

    let totals = tree_totals(&tree);
    info!("Tree built: {}", totals.summary());

    // Step 3: Flatten to the requested depth
    info!("Step 3/5: Flattening tree (max depth {})...", args.max_depth);
    let nodes = flatten(&tree, args.max_depth);

    // Step 4: Render the HTML report
    info!("Step 4/5: Rendering HTML report...");
    let config = args
        .title
        .as_ref()
        .map(|t| HtmlConfig::new().with_title(t.clone()));
    let html = generate_html(&nodes, &window, config.as_ref())
        .context("Failed to generate HTML report")?;

    // Step 5: Write outputs
    info!("Step 5/5: Writing output files...");

    write_html(&html, &args.output_html).context("Failed to write HTML report")?;

    info!("✓ HTML report written to: {}", args.output_html.display());

    if let Some(json_path) = &args.output_json {
        let report = build_report(&args, &window, &nodes, &stats, totals.total_hits);

        write_report(&report, json_path).context("Failed to write JSON report")?;

        info!("✓ JSON report written to: {}", json_path.display());
    }

    if args.print_tree {
        print!("{}", render_tree(&nodes));
    }

    if args.print_summary {
        println!("\n{}", "=".repeat(72));
        println!("REPORT SUMMARY");
        println!("{}", "=".repeat(72));
        println!("Input file:  {}", args.input.display());
        println!("Depth:       {}", args.max_depth);
        println!("From:        {}", args.from.as_deref().unwrap_or("unbounded"));
        println!("To:          {}", args.to.as_deref().unwrap_or("unbounded"));
        println!("Lines found: {}", records.len());
        println!("Oldest:      {}", totals.first_call);
        println!("Newest:      {}", totals.last_call);
        println!("\n{}", render_summary(&nodes, 10));
        println!("{}", "=".repeat(72));
    }

    let elapsed = start_time.elapsed();
    info!("Report completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Assemble the JSON report from the pipeline results
///
/// **Private** - internal helper for execute_report
fn build_report(
    args: &ReportArgs,
    window: &TimeWindow,
    nodes: &[&PathNode],
    stats: &IngestStats,
    total_hits: u64,
) -> Report {
    Report {
        version: SCHEMA_VERSION.to_string(),
        source: args.input.display().to_string(),
        window: WindowSpec {
            from: window.from,
            to: window.to,
        },
        total_hits,
        lines: stats.to_summary(),
        nodes: nodes
            .iter()
            .map(|n| NodeEntry {
                path: n.path.clone(),
                depth: n.depth,
                hits: n.hit_count,
                first_call: n.first_call_timestamp(),
                last_call: n.last_call_timestamp(),
            })
            .collect(),
        generated_at: Utc::now().to_rfc3339(),
    }
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
///
/// # Arguments
/// * `args` - Arguments to validate
///
/// # Returns
/// Ok if arguments are valid, Err with message if not
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input file cannot be empty");
    }

    if !args.input.exists() {
        anyhow::bail!("Input file does not exist: {}", args.input.display());
    }

    if args.input.is_dir() {
        anyhow::bail!("Input path is a directory: {}", args.input.display());
    }

    if args.max_depth < UNBOUNDED_DEPTH {
        anyhow::bail!("Depth must be -1 (unbounded) or non-negative");
    }

    if args.max_depth > MAX_REPORT_DEPTH {
        anyhow::bail!("Depth is too large (max {})", MAX_REPORT_DEPTH);
    }

    let window = TimeWindow::parse(args.from.as_deref(), args.to.as_deref())
        .context("Invalid time bound")?;

    if let (Some(from), Some(to)) = (window.from, window.to) {
        if from > to {
            anyhow::bail!("Time window is empty: --from is after --to");
        }
    }

    Ok(())
}

/// Quick report with defaults (convenience function)
///
/// **Public** - simplified API for the common use case
///
/// # Arguments
/// * `input` - Access-log file
///
/// # Returns
/// Path to the generated HTML report
pub fn quick_report(input: impl Into<PathBuf>) -> Result<PathBuf> {
    let args = ReportArgs {
        input: input.into(),
        ..Default::default()
    };

    execute_report(args.clone())?;

    Ok(args.output_html)
}
