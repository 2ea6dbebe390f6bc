//! CLI argument definitions for aircheck.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "aircheck",
    version,
    about = "Media delivery reconciliation - match planned spots against monitoring logs",
    long_about = "Reconcile a media plan against a broadcast monitoring log.\n\n\
                  Pairs planned spots with aired spots under channel, duration,\n\
                  program-similarity, and day-pattern constraints, then reports\n\
                  delivery metrics, discrepancies, and recommendations."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Reconcile a plan file against a monitoring log.
    Analyze(AnalyzeArgs),

    /// List the canonical channel-name mapping table.
    Channels,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to the plan (Presupuesto) CSV export.
    #[arg(value_name = "PLAN")]
    pub plan: PathBuf,

    /// Path to the monitoring (Monitoreo) CSV export.
    #[arg(value_name = "MONITORING")]
    pub monitoring: PathBuf,

    /// Output directory for the JSON report (default: output/ next to PLAN).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Print the summary without writing the JSON report.
    #[arg(long = "no-report")]
    pub no_report: bool,

    /// Minimum program-name similarity for a candidate match.
    #[arg(
        long = "program-threshold",
        value_name = "RATIO",
        default_value_t = 0.8
    )]
    pub program_threshold: f64,

    /// Maximum absolute duration difference in seconds.
    #[arg(
        long = "duration-tolerance",
        value_name = "SECONDS",
        default_value_t = 2
    )]
    pub duration_tolerance: i64,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
