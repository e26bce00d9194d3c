//! Validation layer: an embedded SQL store plus the three QC checks.

mod checks;
mod store;

pub use checks::{Findings, run_checks};
pub use store::{LAB_RESULTS_TABLE, ResultStore};
