// Chunk: docs/chunks/line_edits - Whole-line edit batches over a line-addressed document

//! The document capability line edits are applied to.

use lineedit_buffer::{Position, Splice, TextBuffer};
use tracing::trace;

use crate::error::DocumentError;
use crate::range::{Range, RangeEdit};

/// A line-addressed text document owned by a host.
///
/// Line edits only need the line count and one atomic batch primitive; the
/// host keeps its own undo history and mutation discipline.
pub trait Document {
    /// Number of lines. A document with no text still has one (empty) line.
    fn line_count(&self) -> usize;

    /// Applies `edits` as one logical change (one undo step for hosts that
    /// keep history).
    ///
    /// Every range refers to the document as it was before the call.
    /// `selection_after` is the selection to establish afterwards; `None`
    /// leaves selection handling to the document.
    fn apply_batch(
        &mut self,
        edits: &[RangeEdit],
        selection_after: Option<Range>,
    ) -> Result<(), DocumentError>;
}

/// Converts a 1-based line/column into a buffer position.
///
/// Oversized columns stay oversized; the buffer clamps them to the line end.
fn to_position(line_number: usize, column: usize) -> Position {
    Position::new(line_number.saturating_sub(1), column.saturating_sub(1))
}

fn to_splice(edit: &RangeEdit) -> Splice {
    let range = &edit.range;
    Splice::new(
        to_position(range.start_line_number, range.start_column),
        to_position(range.end_line_number, range.end_column),
        edit.new_text.as_str(),
    )
}

impl Document for TextBuffer {
    fn line_count(&self) -> usize {
        TextBuffer::line_count(self)
    }

    /// Splices the whole batch in one [`TextBuffer::apply_splices`] call.
    /// The cursor lands at the end of `selection_after`, or is clamped into
    /// the new content when there is none.
    fn apply_batch(
        &mut self,
        edits: &[RangeEdit],
        selection_after: Option<Range>,
    ) -> Result<(), DocumentError> {
        let splices: Vec<Splice> = edits.iter().map(to_splice).collect();
        let cursor = selection_after.map(|sel| to_position(sel.end_line_number, sel.end_column));
        let dirty = self.apply_splices(&splices, cursor)?;
        trace!(?dirty, "text buffer batch committed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineedit_buffer::BufferError;

    #[test]
    fn test_columns_are_one_based() {
        let mut buf = TextBuffer::from_str("hello\nworld");
        buf.apply_batch(&[RangeEdit::new(Range::new(2, 1, 2, 6), "there")], None)
            .unwrap();
        assert_eq!(buf.content(), "hello\nthere");
    }

    #[test]
    fn test_max_column_reaches_end_of_line() {
        let mut buf = TextBuffer::from_str("abc\ndef");
        let edit = RangeEdit::new(
            Range::new(1, Range::MAX_COLUMN, 2, Range::MAX_COLUMN),
            "",
        );
        buf.apply_batch(&[edit], None).unwrap();
        assert_eq!(buf.content(), "abc");
    }

    #[test]
    fn test_selection_end_becomes_cursor() {
        let mut buf = TextBuffer::from_str("abc");
        buf.apply_batch(
            &[RangeEdit::new(Range::new(1, 4, 1, 4), "\nxyz")],
            Some(Range::new(2, 1, 2, 3)),
        )
        .unwrap();
        assert_eq!(buf.cursor_position(), Position::new(1, 2));
    }

    #[test]
    fn test_buffer_rejection_surfaces_as_document_error() {
        let mut buf = TextBuffer::from_str("abc");
        let err = buf
            .apply_batch(&[RangeEdit::new(Range::new(1, 3, 1, 1), "")], None)
            .unwrap_err();
        assert_eq!(
            err,
            DocumentError::Buffer(BufferError::InvertedSplice { index: 0 })
        );
    }
}
