//! Shared vocabulary for the lab results QC pipeline.

mod check;
mod schema;

pub use check::CheckCategory;
pub use schema::{LOWER_REF_COL, REQUIRED_COLUMNS, RESULT_COL, UPPER_REF_COL, missing_columns};
