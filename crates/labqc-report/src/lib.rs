//! CSV export of QC findings.
//!
//! Each non-empty finding set is written to its fixed filename inside the
//! output directory, overwriting any prior file of that name. Empty sets
//! produce no file.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::{CsvWriter, SerWriter};
use tracing::info;

use labqc_model::CheckCategory;
use labqc_validate::Findings;

/// A finding set written to disk.
#[derive(Debug, Clone)]
pub struct ExportedFile {
    pub category: CheckCategory,
    pub path: PathBuf,
    pub rows: usize,
}

/// Writes every non-empty finding set to `output_dir`.
///
/// Returns one [`ExportedFile`] per file written, in report order. The
/// directory is created if it does not exist.
///
/// # Errors
///
/// Fails on the first file that cannot be created or written.
pub fn export_findings(findings: &Findings, output_dir: &Path) -> Result<Vec<ExportedFile>> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create output directory {}", output_dir.display()))?;

    let mut exported = Vec::new();
    for category in CheckCategory::ALL {
        let df = findings.get(category);
        if df.is_empty() {
            continue;
        }
        let path = output_dir.join(category.output_filename());
        let mut file =
            File::create(&path).with_context(|| format!("create {}", path.display()))?;
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut df.clone())
            .with_context(|| format!("write {}", path.display()))?;
        info!(category = %category, path = %path.display(), rows = df.height(), "exported findings");
        exported.push(ExportedFile {
            category,
            path,
            rows: df.height(),
        });
    }
    Ok(exported)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::df;

    fn sample_findings() -> Findings {
        let empty = df!(
            "specimen_id" => Vec::<String>::new(),
            "result" => Vec::<f64>::new(),
        )
        .unwrap();
        let out_of_range = df!(
            "specimen_id" => ["S1"],
            "result" => [15.0],
            "lower_ref" => [1.0],
            "upper_ref" => [10.0],
        )
        .unwrap();
        Findings {
            blank_results: empty.clone(),
            missing_range: empty,
            out_of_range,
        }
    }

    #[test]
    fn writes_only_non_empty_sets() {
        let dir = tempfile::tempdir().unwrap();
        let exported = export_findings(&sample_findings(), dir.path()).unwrap();

        assert_eq!(exported.len(), 1);
        assert_eq!(exported[0].category, CheckCategory::OutOfRange);
        assert_eq!(exported[0].rows, 1);
        assert!(dir.path().join("out_of_range_results.csv").exists());
        assert!(!dir.path().join("blank_results.csv").exists());
        assert!(!dir.path().join("missing_range.csv").exists());
    }

    #[test]
    fn exported_csv_has_header_and_row() {
        let dir = tempfile::tempdir().unwrap();
        export_findings(&sample_findings(), dir.path()).unwrap();

        let contents =
            std::fs::read_to_string(dir.path().join("out_of_range_results.csv")).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next(),
            Some("specimen_id,result,lower_ref,upper_ref")
        );
        assert_eq!(lines.next(), Some("S1,15.0,1.0,10.0"));
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out_of_range_results.csv");
        std::fs::write(&path, "stale contents\n").unwrap();

        export_findings(&sample_findings(), dir.path()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("stale contents"));
        assert!(contents.starts_with("specimen_id"));
    }
}
