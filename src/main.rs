//! Hitpath CLI
//!
//! Aggregates web-server access-log hits into a URL path tree and
//! renders depth-bounded HTML, JSON and text reports.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use hitpath::commands::{execute_report, validate_args, ReportArgs};
use hitpath::utils::config::SCHEMA_VERSION;

/// Hitpath - path-level hit aggregation for access logs
#[derive(Parser, Debug)]
#[command(name = "hitpath")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze an access log and write reports
    Report {
        /// Access-log file to analyze
        #[arg(short, long)]
        input: PathBuf,

        /// Maximum node depth in output (-1 = unbounded)
        #[arg(short, long, default_value = "-1", allow_hyphen_values = true)]
        depth: i32,

        /// Only count hits at or after this time (YYYYMMDDHHMMSS)
        #[arg(short, long)]
        from: Option<String>,

        /// Only count hits at or before this time (YYYYMMDDHHMMSS)
        #[arg(short, long)]
        to: Option<String>,

        /// Output path for the HTML report
        #[arg(short, long, default_value = "report.html")]
        output: PathBuf,

        /// Output path for the JSON report (optional)
        #[arg(short, long)]
        json: Option<PathBuf>,

        /// Print the indented path tree to stdout
        #[arg(long)]
        tree: bool,

        /// Print a busiest-paths summary to stdout
        #[arg(long)]
        summary: bool,

        /// Report title
        #[arg(long)]
        title: Option<String>,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Report {
            input,
            depth,
            from,
            to,
            output,
            json,
            tree,
            summary,
            title,
        } => {
            let args = ReportArgs {
                input,
                max_depth: depth,
                from,
                to,
                output_html: output,
                output_json: json,
                print_tree: tree,
                print_summary: summary,
                title,
            };

            // Validate args first
            validate_args(&args)?;

            // Execute report
            execute_report(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Validate a report JSON file
///
/// **Private** - internal command implementation
fn validate_report_file(file_path: PathBuf) -> Result<()> {
    use hitpath::output::read_report;

    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Source: {}", report.source);
    println!("  Total hits: {}", report.total_hits);
    println!("  Lines read: {}", report.lines.read);
    println!("  Nodes: {}", report.nodes.len());

    Ok(())
}

/// Display schema information
///
/// **Private** - internal command implementation
fn display_schema(show_details: bool) {
    println!("Hitpath Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string        - Schema version (e.g., '1.0.0')");
        println!("  source: string         - Input log file");
        println!("  window: object         - Inclusive time window (Unix seconds)");
        println!("    from: number?        - Lower bound, absent = open");
        println!("    to: number?          - Upper bound, absent = open");
        println!("  total_hits: number     - Hits recorded at the root");
        println!("  lines: object          - Ingestion counters");
        println!("    read: number         - Lines read from the file");
        println!("    parsed: number       - Lines parsed into records");
        println!("    skipped: number      - Malformed lines skipped");
        println!("    filtered: number     - Records outside the window");
        println!("  nodes: array           - Flattened path nodes, pre-order");
        println!("    path: string         - Full node path");
        println!("    depth: number        - Distance from the root");
        println!("    hits: number         - Observations at this node");
        println!("    first_call: number   - First-call timestamp (0 = none)");
        println!("    last_call: number    - Last-call timestamp (0 = none)");
        println!("  generated_at: string   - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
///
/// **Private** - internal command implementation
fn display_version() {
    println!("Hitpath v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Path-level hit aggregation and reporting for web server access logs.");
}
