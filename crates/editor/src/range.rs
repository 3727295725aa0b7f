// Chunk: docs/chunks/line_edits - Whole-line edit batches over a line-addressed document

//! Character-granularity spans and their replacements.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A character span with 1-based line and column numbers.
///
/// Columns count chars. Column 1 is before the first char of a line;
/// a column past the end of its line means the end of that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub start_line_number: usize,
    pub start_column: usize,
    pub end_line_number: usize,
    pub end_column: usize,
}

impl Range {
    /// Column that always resolves to the end of its line.
    pub const MAX_COLUMN: usize = usize::MAX;

    pub fn new(
        start_line_number: usize,
        start_column: usize,
        end_line_number: usize,
        end_column: usize,
    ) -> Self {
        Self {
            start_line_number,
            start_column,
            end_line_number,
            end_column,
        }
    }

    /// True if start and end are the same position.
    pub fn is_empty(&self) -> bool {
        self.start_line_number == self.end_line_number && self.start_column == self.end_column
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = |c: usize| {
            if c == Range::MAX_COLUMN {
                "$".to_string()
            } else {
                c.to_string()
            }
        };
        write!(
            f,
            "[{},{} -> {},{}]",
            self.start_line_number,
            col(self.start_column),
            self.end_line_number,
            col(self.end_column)
        )
    }
}

/// Replacement of an arbitrary character range with new text.
///
/// This is the unit a [`Document`](crate::Document) batch receives.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RangeEdit {
    pub range: Range,
    pub new_text: String,
}

impl RangeEdit {
    pub fn new(range: Range, new_text: impl Into<String>) -> Self {
        Self {
            range,
            new_text: new_text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_structural() {
        let a = RangeEdit::new(Range::new(1, 1, 2, 1), "x\n");
        assert_eq!(a, RangeEdit::new(Range::new(1, 1, 2, 1), "x\n"));
        assert_ne!(a, RangeEdit::new(Range::new(1, 1, 2, 1), "x"));
        assert_ne!(a, RangeEdit::new(Range::new(1, 1, 3, 1), "x\n"));
    }

    #[test]
    fn test_empty_range() {
        assert!(Range::new(4, 2, 4, 2).is_empty());
        assert!(!Range::new(4, 2, 5, 2).is_empty());
    }

    #[test]
    fn test_display_marks_end_of_line() {
        let range = Range::new(2, Range::MAX_COLUMN, 5, Range::MAX_COLUMN);
        assert_eq!(range.to_string(), "[2,$ -> 5,$]");
        assert_eq!(Range::new(1, 1, 3, 1).to_string(), "[1,1 -> 3,1]");
    }
}
