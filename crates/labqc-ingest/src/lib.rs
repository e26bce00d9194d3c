//! CSV ingestion for lab results files.

mod error;
mod polars_utils;
mod reader;

pub use error::IngestError;
pub use polars_utils::{any_to_string, format_numeric};
pub use reader::read_lab_results;
