//! Expected column schema for lab results input files.
//!
//! The validation queries only touch these three columns; any other column
//! in the input is passed through untouched.

/// Measured value column.
pub const RESULT_COL: &str = "result";
/// Lower reference bound column.
pub const LOWER_REF_COL: &str = "lower_ref";
/// Upper reference bound column.
pub const UPPER_REF_COL: &str = "upper_ref";

/// Columns the validation queries require.
pub const REQUIRED_COLUMNS: [&str; 3] = [RESULT_COL, LOWER_REF_COL, UPPER_REF_COL];

/// Returns the required columns absent from `columns`, in schema order.
pub fn missing_columns<S: AsRef<str>>(columns: &[S]) -> Vec<&'static str> {
    REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|required| !columns.iter().any(|c| c.as_ref() == *required))
        .collect()
}
