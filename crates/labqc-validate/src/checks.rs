//! The three QC checks, expressed as SQL queries against the store.
//!
//! The checks are independent read-only filters: no ordering dependency,
//! no shared state, and rerunning them against the same table yields the
//! same result sets. Null comparisons in the out-of-range predicate yield
//! no match rather than an error, so a row with a missing bound is never
//! flagged as out of range.

use anyhow::Result;
use polars::prelude::DataFrame;
use tracing::info;

use labqc_model::CheckCategory;

use crate::store::ResultStore;

/// The three materialized result sets of one QC run.
#[derive(Debug, Clone)]
pub struct Findings {
    /// Rows where `result` is null.
    pub blank_results: DataFrame,
    /// Rows where `lower_ref` or `upper_ref` is null.
    pub missing_range: DataFrame,
    /// Rows where `result` falls outside `[lower_ref, upper_ref]`.
    pub out_of_range: DataFrame,
}

impl Findings {
    /// The result set for `category`.
    pub fn get(&self, category: CheckCategory) -> &DataFrame {
        match category {
            CheckCategory::BlankResult => &self.blank_results,
            CheckCategory::MissingRange => &self.missing_range,
            CheckCategory::OutOfRange => &self.out_of_range,
        }
    }

    /// True when no category matched any row.
    pub fn is_all_empty(&self) -> bool {
        CheckCategory::ALL
            .iter()
            .all(|&category| self.get(category).is_empty())
    }
}

fn query_for(category: CheckCategory) -> &'static str {
    match category {
        CheckCategory::BlankResult => "SELECT * FROM lab_results WHERE result IS NULL",
        CheckCategory::MissingRange => {
            "SELECT * FROM lab_results WHERE lower_ref IS NULL OR upper_ref IS NULL"
        }
        CheckCategory::OutOfRange => {
            "SELECT * FROM lab_results WHERE result < lower_ref OR result > upper_ref"
        }
    }
}

/// Runs all three checks against the loaded `lab_results` relation.
///
/// # Errors
///
/// Fails if the relation has not been loaded or a query cannot be executed.
pub fn run_checks(store: &mut ResultStore) -> Result<Findings> {
    let blank_results = store.query(query_for(CheckCategory::BlankResult))?;
    let missing_range = store.query(query_for(CheckCategory::MissingRange))?;
    let out_of_range = store.query(query_for(CheckCategory::OutOfRange))?;
    info!(
        blank_results = blank_results.height(),
        missing_range = missing_range.height(),
        out_of_range = out_of_range.height(),
        "validation checks complete"
    );
    Ok(Findings {
        blank_results,
        missing_range,
        out_of_range,
    })
}
