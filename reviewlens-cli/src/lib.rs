#![warn(missing_docs)]
//! ReviewLens CLI Library
//!
//! Loads review records, runs the aggregation engine, renders the dashboard
//! charts and prints the report. `reviewlens::run()` (or
//! `reviewlens_cli::run()`) is the whole binary.
//!
//! # Example
//!
//! ```no_run
//! fn main() {
//!     if let Err(e) = reviewlens_cli::run() {
//!         eprintln!("Error: {e:#}");
//!         std::process::exit(1);
//!     }
//! }
//! ```

mod config;
mod executor;
mod input;

pub use config::*;
pub use executor::{
    ReviewAnalytics, build_report, compute_analytics, format_human_output, render_charts,
    write_charts,
};
pub use input::{InputError, InputFormat, load_reviews, parse_csv, parse_json};

use anyhow::Context;
use clap::{Parser, Subcommand};
use rayon::ThreadPoolBuilder;
use reviewlens_core::{ReviewRecord, ReviewSeries};
use reviewlens_report::{
    AnalyticsReport, ChartOptions, ChartSummary, OutputFormat, generate_json_report,
};
use std::io::Write;
use std::path::PathBuf;

/// ReviewLens CLI arguments
#[derive(Parser, Debug)]
#[command(name = "reviewlens")]
#[command(author, version, about = "ReviewLens - review analytics aggregation")]
pub struct Cli {
    /// Optional subcommand; defaults to analyzing INPUT
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Review file: a JSON array of objects or a CSV with a header row
    pub input: Option<PathBuf>,

    /// Output format: human, json (default from reviewlens.toml)
    #[arg(long)]
    pub format: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory to write chart PNGs into
    #[arg(long, value_name = "DIR")]
    pub charts: Option<PathBuf>,

    /// Skip chart rendering
    #[arg(long)]
    pub no_charts: bool,

    /// Input format: json, csv (inferred from the extension by default)
    #[arg(long)]
    pub input_format: Option<String>,

    /// Configuration file (discovered by walking up from the current directory by default)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Number of threads for parallel chart rendering
    /// 0 = use all available cores (default), 1 = single-threaded
    #[arg(long, short = 'j', default_value = "0")]
    pub threads: usize,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a default reviewlens.toml
    Init,
}

/// Settings resolved from reviewlens.toml and CLI overrides
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSettings {
    /// Report format
    pub format: OutputFormat,
    /// Chart rendering parameters
    pub chart_options: ChartOptions,
    /// Where chart PNGs go; `None` disables chart rendering
    pub chart_dir: Option<PathBuf>,
}

impl AnalysisSettings {
    /// Layer CLI flags over configuration values
    pub fn resolve(cli: &Cli, config: &ReviewLensConfig) -> anyhow::Result<Self> {
        let format = cli
            .format
            .as_deref()
            .unwrap_or(config.output.format.as_str())
            .parse::<OutputFormat>()
            .map_err(anyhow::Error::msg)?;

        let chart_dir = if cli.no_charts || (!config.charts.enabled && cli.charts.is_none()) {
            None
        } else {
            Some(
                cli.charts
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(&config.output.directory)),
            )
        };

        Ok(Self {
            format,
            chart_options: config.chart_options(),
            chart_dir,
        })
    }
}

/// Run the ReviewLens CLI with the given arguments.
/// This is the main entry point of the binary.
///
/// # Returns
/// Returns `Ok(())` on success, or an error if something goes wrong.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the ReviewLens CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    // Initialize logging; a subscriber may already be installed when embedded
    let filter = if cli.verbose {
        "reviewlens=debug"
    } else {
        "reviewlens=info"
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    match cli.command {
        Some(Commands::Init) => {
            print!("{}", ReviewLensConfig::default_toml());
            Ok(())
        }
        None => run_analysis(&cli),
    }
}

/// Load configuration: `--config` wins, then discovery, then defaults
fn load_config(cli: &Cli) -> anyhow::Result<ReviewLensConfig> {
    match &cli.config {
        Some(path) => ReviewLensConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(ReviewLensConfig::discover().unwrap_or_default()),
    }
}

fn run_analysis(cli: &Cli) -> anyhow::Result<()> {
    let input = cli
        .input
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("No input file given (see --help)"))?;

    let config = load_config(cli)?;
    let settings = AnalysisSettings::resolve(cli, &config)?;

    // Configure Rayon thread pool for chart rendering
    if cli.threads > 0 {
        ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .ok();
    }

    let input_format = cli
        .input_format
        .as_deref()
        .map(str::parse::<InputFormat>)
        .transpose()?;
    let records = load_reviews(input, input_format)?;

    let report = analyze(&records, &settings, Some(input.display().to_string()))?;

    let output = match settings.format {
        OutputFormat::Json => generate_json_report(&report)?,
        OutputFormat::Human => format_human_output(&report),
    };

    if let Some(ref path) = cli.output {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        file.write_all(output.as_bytes())?;
        tracing::info!(path = %path.display(), "report written");
    } else {
        print!("{}", output);
    }

    Ok(())
}

/// Aggregate a review collection into a report, rendering charts when enabled
pub fn analyze(
    records: &[ReviewRecord],
    settings: &AnalysisSettings,
    source: Option<String>,
) -> anyhow::Result<AnalyticsReport> {
    let analytics = compute_analytics(records);

    let charts = match &settings.chart_dir {
        Some(dir) => {
            let series = ReviewSeries::from_records(records);
            let artifacts = render_charts(&series, &settings.chart_options)?;
            let paths = write_charts(&artifacts, dir)
                .with_context(|| format!("Failed to write charts to {}", dir.display()))?;
            tracing::info!(dir = %dir.display(), charts = paths.len(), "charts written");
            artifacts
                .iter()
                .zip(paths)
                .map(|(artifact, path)| ChartSummary::from_artifact(artifact, Some(path)))
                .collect()
        }
        None => Vec::new(),
    };

    Ok(build_report(&analytics, charts, source))
}
