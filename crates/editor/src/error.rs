// Chunk: docs/chunks/line_edits - Whole-line edit batches over a line-addressed document

//! Error types for line edits and the documents they are applied to.

use lineedit_buffer::BufferError;
use thiserror::Error;

use crate::line_range::LineRange;

/// Invalid arguments for a [`LineRange`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineRangeError {
    #[error("line numbers start at 1, got 0")]
    ZeroStart,

    #[error("line range end does not fit in usize")]
    Overflow,
}

/// Errors raised by a [`Document`](crate::Document)'s batch primitive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// The in-memory buffer refused the splice batch.
    #[error(transparent)]
    Buffer(#[from] BufferError),

    /// A host document refused the batch.
    #[error("document rejected the edit batch: {0}")]
    Rejected(String),
}

/// Errors from applying a [`LineEdits`](crate::LineEdits) batch.
///
/// Validation errors are raised before the document is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("edit {index} starts at line {start}, past the end of a {line_count}-line document")]
    StartOutOfBounds {
        index: usize,
        start: usize,
        line_count: usize,
    },

    #[error("edit {index} {range} starts before the preceding edit {previous}; edits must be sorted")]
    Unsorted {
        index: usize,
        range: LineRange,
        previous: LineRange,
    },

    #[error("edit {index} {range} overlaps the preceding edit {previous}")]
    Overlapping {
        index: usize,
        range: LineRange,
        previous: LineRange,
    },

    #[error(
        "edit {index} {range} runs past the last line and starts where the interior edit {previous} ends; their splices overlap"
    )]
    ConflictsWithTail {
        index: usize,
        range: LineRange,
        previous: LineRange,
    },

    #[error(transparent)]
    Document(#[from] DocumentError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_edits() {
        let err = EditError::Overlapping {
            index: 1,
            range: LineRange::new(2, 2),
            previous: LineRange::new(1, 3),
        };
        assert_eq!(
            err.to_string(),
            "edit 1 [2, 4) overlaps the preceding edit [1, 4)"
        );
    }

    #[test]
    fn test_buffer_errors_pass_through() {
        let err = EditError::from(DocumentError::from(BufferError::InvertedSplice { index: 0 }));
        assert_eq!(err.to_string(), "splice 0 ends before it starts");
    }
}
