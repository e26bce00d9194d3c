//! CLI argument definitions for labqc.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "labqc",
    version,
    about = "Lab results QC - find blank, unbounded and out-of-range results",
    long_about = "Run quality checks over a lab results CSV.\n\n\
                  Reports rows with blank results, missing reference ranges and\n\
                  out-of-range results, and offers to export each finding set\n\
                  to its own CSV file."
)]
pub struct Cli {
    /// Path to the lab results data file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Directory for exported CSV files (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Whether to export findings without asking.
    ///
    /// `prompt` asks interactively when findings exist; `yes` and `no`
    /// decide up front, for non-interactive use.
    #[arg(long = "download", value_enum, default_value = "prompt")]
    pub download: DownloadArg,

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

/// CLI download decision choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum DownloadArg {
    Prompt,
    Yes,
    No,
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
