use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, DataType, IntoLazy, SerReader, col};
use tracing::debug;

use labqc_model::{REQUIRED_COLUMNS, missing_columns};

use crate::error::IngestError;

/// Reads a lab results CSV into a DataFrame.
///
/// The first row is treated as the header. Column names and row order are
/// preserved. The three validation columns are coerced to `Float64` so the
/// range queries always compare numerics: a fully empty `result` column
/// loads as nulls instead of an inferred string column, and a non-numeric
/// cell becomes null (a blank result) rather than failing the run.
///
/// # Errors
///
/// Returns [`IngestError`] when the file is absent, the contents are not
/// parseable CSV, or a column required by the validation queries is missing.
pub fn read_lab_results(path: &Path) -> Result<DataFrame, IngestError> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let columns: Vec<&str> = df.get_column_names().iter().map(|c| c.as_str()).collect();
    let missing = missing_columns(&columns);
    if !missing.is_empty() {
        return Err(IngestError::MissingColumns {
            path: path.to_path_buf(),
            columns: missing,
        });
    }

    // Inference sees only a prefix of the file; pin the validation columns.
    let df = df
        .lazy()
        .with_columns(REQUIRED_COLUMNS.map(|name| col(name).cast(DataType::Float64)))
        .collect()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded lab results"
    );
    Ok(df)
}
