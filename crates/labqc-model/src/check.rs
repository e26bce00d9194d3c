//! The three validation categories the QC run reports on.

use std::fmt;

/// A validation category. Each category owns its console messages and its
/// fixed export filename, so every stage of the pipeline agrees on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CheckCategory {
    /// The measured value is absent.
    BlankResult,
    /// The lower or upper reference bound is absent.
    MissingRange,
    /// The measured value falls outside its reference bounds.
    OutOfRange,
}

impl CheckCategory {
    /// All categories, in report order.
    pub const ALL: [CheckCategory; 3] = [
        CheckCategory::BlankResult,
        CheckCategory::MissingRange,
        CheckCategory::OutOfRange,
    ];

    /// Short label used in summary tables.
    pub fn label(self) -> &'static str {
        match self {
            CheckCategory::BlankResult => "Blank results",
            CheckCategory::MissingRange => "Missing ranges",
            CheckCategory::OutOfRange => "Out of range",
        }
    }

    /// Message printed when the category has no matching rows.
    pub fn empty_message(self) -> &'static str {
        match self {
            CheckCategory::BlankResult => "There are no empty results.",
            CheckCategory::MissingRange => "There are no missing normal ranges.",
            CheckCategory::OutOfRange => "No out of range results were found.",
        }
    }

    /// Heading printed above the offending-row dump.
    pub fn found_message(self) -> &'static str {
        match self {
            CheckCategory::BlankResult => "The following rows are missing results values:",
            CheckCategory::MissingRange => "The following rows are missing normal ranges:",
            CheckCategory::OutOfRange => "The following results are out of range:",
        }
    }

    /// Fixed export filename for this category.
    pub fn output_filename(self) -> &'static str {
        match self {
            CheckCategory::BlankResult => "blank_results.csv",
            CheckCategory::MissingRange => "missing_range.csv",
            CheckCategory::OutOfRange => "out_of_range_results.csv",
        }
    }
}

impl fmt::Display for CheckCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_filenames_are_distinct() {
        let names: Vec<&str> = CheckCategory::ALL
            .iter()
            .map(|c| c.output_filename())
            .collect();
        assert_eq!(names.len(), 3);
        assert!(names.iter().all(|n| n.ends_with(".csv")));
        assert_ne!(names[0], names[1]);
        assert_ne!(names[1], names[2]);
        assert_ne!(names[0], names[2]);
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(CheckCategory::OutOfRange.to_string(), "Out of range");
    }
}
