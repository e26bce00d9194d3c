//! Lab results QC CLI.

use clap::{ColorChoice, Parser};
use labqc_cli::commands::{DownloadDecision, RunOptions, run};
use labqc_cli::logging::{LogConfig, LogFormat, init_logging};
use labqc_cli::summary::print_run_summary;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, DownloadArg, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let options = RunOptions {
        file: cli.file.clone(),
        output_dir: cli.output_dir.clone().unwrap_or_else(|| PathBuf::from(".")),
        download: match cli.download {
            DownloadArg::Prompt => DownloadDecision::Prompt,
            DownloadArg::Yes => DownloadDecision::Always,
            DownloadArg::No => DownloadDecision::Never,
        },
    };
    let exit_code = match run(&options) {
        Ok(summary) => {
            print_run_summary(&summary);
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
