use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading a lab results file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file not found.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// The header row lacks columns the validation queries need.
    #[error("{} is missing required column(s): {}", path.display(), columns.join(", "))]
    MissingColumns {
        path: PathBuf,
        columns: Vec<&'static str>,
    },
}
