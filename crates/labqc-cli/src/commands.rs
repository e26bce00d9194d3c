//! The QC run: load, store, check, report, export.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use labqc_ingest::read_lab_results;
use labqc_report::{ExportedFile, export_findings};
use labqc_validate::{Findings, ResultStore, run_checks};

use crate::prompt;
use crate::summary::print_findings;

/// How the export confirmation is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadDecision {
    /// Ask the operator interactively.
    Prompt,
    /// Export without asking.
    Always,
    /// Never export.
    Never,
}

/// Terminal outcome of the export step.
#[derive(Debug)]
pub enum ExportOutcome {
    /// Every finding set was empty; nothing to write.
    NothingToDownload,
    /// Confirmed; the listed files were written.
    Downloaded(Vec<ExportedFile>),
    /// Declined; nothing was written.
    Skipped,
}

/// Options for one QC run.
#[derive(Debug)]
pub struct RunOptions {
    /// Path to the lab results CSV.
    pub file: PathBuf,
    /// Directory exported files are written to.
    pub output_dir: PathBuf,
    /// Export confirmation mode.
    pub download: DownloadDecision,
}

/// Result of one QC run, for the closing summary.
#[derive(Debug)]
pub struct RunSummary {
    pub findings: Findings,
    pub outcome: ExportOutcome,
}

/// Runs the full pipeline against one input file.
///
/// Prints the per-category findings as it goes; returns the materialized
/// findings and the export outcome.
pub fn run(options: &RunOptions) -> Result<RunSummary> {
    let span = info_span!("qc_run", file = %options.file.display());
    let _guard = span.enter();

    let df = read_lab_results(&options.file)
        .with_context(|| format!("load {}", options.file.display()))?;
    info!(rows = df.height(), "lab results loaded");

    let mut store = ResultStore::new();
    store.load(&df);
    let findings = run_checks(&mut store)?;
    print_findings(&findings);

    let outcome = resolve_export(&findings, options)?;
    Ok(RunSummary { findings, outcome })
}

fn resolve_export(findings: &Findings, options: &RunOptions) -> Result<ExportOutcome> {
    if findings.is_all_empty() {
        println!("Nothing to download.");
        return Ok(ExportOutcome::NothingToDownload);
    }

    let confirmed = match options.download {
        DownloadDecision::Prompt => prompt::confirm_download().context("read confirmation")?,
        DownloadDecision::Always => true,
        DownloadDecision::Never => false,
    };
    if !confirmed {
        debug!("export declined");
        println!("Download skipped.");
        return Ok(ExportOutcome::Skipped);
    }

    let exported = export_findings(findings, &options.output_dir)?;
    for file in &exported {
        println!("{} saved.", file.category.output_filename());
    }
    println!("All files downloaded.");
    Ok(ExportOutcome::Downloaded(exported))
}
