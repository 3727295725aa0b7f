// Chunk: docs/chunks/text_buffer - Text buffer data structure with gap buffer backing

//! TextBuffer is the main public API for text storage and mutation.
//!
//! It combines a gap buffer (char storage) with a line index (O(1) line
//! access) and tracks a cursor as (line, column). Mutations arrive as
//! batches of [`Splice`]s that commit together and bump the buffer version
//! once.

use tracing::debug;

use crate::error::BufferError;
use crate::gap_buffer::GapBuffer;
use crate::line_index::LineIndex;
use crate::types::{DirtyLines, Position, Splice};

/// A line-addressed text buffer.
///
/// The buffer maintains:
/// - Content storage via a gap buffer
/// - Line boundary tracking for line-based access
/// - Cursor position as (line, column)
/// - A version counter, incremented once per committed batch
#[derive(Debug)]
pub struct TextBuffer {
    buffer: GapBuffer,
    line_index: LineIndex,
    cursor: Position,
    version: u64,
}

impl TextBuffer {
    /// Creates a new empty text buffer.
    pub fn new() -> Self {
        Self {
            buffer: GapBuffer::new(),
            line_index: LineIndex::new(),
            cursor: Position::default(),
            version: 0,
        }
    }

    /// Creates a text buffer initialized with the given content.
    ///
    /// Note: We don't implement `FromStr` because it requires returning `Result`,
    /// but loading a string into a TextBuffer cannot fail.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Self {
        let mut line_index = LineIndex::new();
        line_index.rebuild(content.chars());

        Self {
            buffer: GapBuffer::from_str(content),
            line_index,
            cursor: Position::default(),
            version: 0,
        }
    }

    /// Creates a text buffer from lines, joined with `'\n'` and no trailing terminator.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let content: Vec<&str> = lines.iter().map(AsRef::as_ref).collect();
        Self::from_str(&content.join("\n"))
    }

    // ==================== Accessors ====================

    /// Returns the current cursor position.
    pub fn cursor_position(&self) -> Position {
        self.cursor
    }

    /// Number of committed splice batches since creation.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Returns the number of lines in the buffer.
    ///
    /// Always at least 1 (even for an empty buffer).
    pub fn line_count(&self) -> usize {
        self.line_index.line_count()
    }

    /// Returns the content of the specified line, without its newline.
    /// Returns an empty string if the line index is out of bounds.
    pub fn line_content(&self, line: usize) -> String {
        let total_len = self.buffer.len();
        match (
            self.line_index.line_start(line),
            self.line_index.line_end(line, total_len),
        ) {
            (Some(start), Some(end)) => self.buffer.slice(start, end),
            _ => String::new(),
        }
    }

    /// Returns the length of the specified line (excluding newline).
    pub fn line_len(&self, line: usize) -> usize {
        self.line_index
            .line_len(line, self.buffer.len())
            .unwrap_or(0)
    }

    /// Returns every line's content, in order.
    pub fn lines(&self) -> Vec<String> {
        (0..self.line_count()).map(|l| self.line_content(l)).collect()
    }

    /// Returns the total character count in the buffer.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the entire buffer content as a String.
    pub fn content(&self) -> String {
        self.buffer.to_string()
    }

    // ==================== Cursor ====================

    /// Clamps a position into the document.
    ///
    /// Columns past the end of a line land on the line end; lines past the
    /// last line land on the end of the document.
    pub fn clamp_position(&self, pos: Position) -> Position {
        let last_line = self.line_count() - 1;
        if pos.line > last_line {
            return Position::new(last_line, self.line_len(last_line));
        }
        Position::new(pos.line, pos.col.min(self.line_len(pos.line)))
    }

    /// Sets the cursor to an arbitrary position, clamped to valid bounds.
    pub fn set_cursor(&mut self, pos: Position) {
        self.cursor = self.clamp_position(pos);
    }

    /// Converts a position to a char offset, clamping it first.
    fn position_to_offset(&self, pos: Position) -> usize {
        let pos = self.clamp_position(pos);
        self.line_index.line_start(pos.line).unwrap_or(0) + pos.col
    }

    // ==================== Validation ====================

    /// Debug assertion: verifies that the incrementally maintained line index
    /// matches a fresh rebuild from the buffer content. Compiled out in
    /// release builds.
    #[cfg(debug_assertions)]
    fn assert_line_index_consistent(&self) {
        let mut expected = LineIndex::new();
        expected.rebuild(self.buffer.chars());
        assert_eq!(
            self.line_index.line_starts(),
            expected.line_starts(),
            "line_index drift detected at version {}",
            self.version,
        );
    }

    #[cfg(not(debug_assertions))]
    fn assert_line_index_consistent(&self) {}

    // ==================== Mutations ====================

    // Chunk: docs/chunks/batch_splice - Atomic multi-range splicing
    /// Applies a batch of splices as one change.
    ///
    /// Every splice is expressed against the buffer as it was before the call.
    /// Splices must be sorted by start and must not overlap; touching splices
    /// and several insertions at one position are fine and keep their batch
    /// order. Positions are clamped with [`TextBuffer::clamp_position`].
    ///
    /// On error nothing is modified. A non-empty batch increments
    /// [`TextBuffer::version`] by exactly one. The cursor moves to
    /// `cursor_after` when given, otherwise it is clamped into the new content.
    pub fn apply_splices(
        &mut self,
        splices: &[Splice],
        cursor_after: Option<Position>,
    ) -> Result<DirtyLines, BufferError> {
        if splices.is_empty() {
            return Ok(DirtyLines::None);
        }

        let mut resolved = Vec::with_capacity(splices.len());
        let mut prev: Option<(usize, usize)> = None;
        for (index, splice) in splices.iter().enumerate() {
            let start = self.position_to_offset(splice.start);
            let end = self.position_to_offset(splice.end);
            if end < start {
                return Err(BufferError::InvertedSplice { index });
            }
            if let Some((prev_start, prev_end)) = prev {
                if start < prev_start {
                    return Err(BufferError::UnsortedSplices { index });
                }
                if start < prev_end {
                    return Err(BufferError::OverlappingSplices { index });
                }
            }
            prev = Some((start, end));
            resolved.push((start, end, splice.text.as_str()));
        }

        let first_line = self.clamp_position(splices[0].start).line;
        let last_line = resolved
            .iter()
            .map(|&(_, end, _)| self.line_index.line_at_offset(end))
            .max()
            .unwrap_or(first_line);
        let reshapes_lines = resolved.iter().any(|&(start, end, text)| {
            text.contains('\n')
                || self.line_index.line_at_offset(start) != self.line_index.line_at_offset(end)
        });
        let lines_before = self.line_count();

        // Back to front, so earlier offsets stay valid.
        for &(start, end, text) in resolved.iter().rev() {
            let removed = self.buffer.splice(start, end - start, text);
            self.line_index.splice(start, removed, text);
        }

        self.version += 1;
        self.cursor = match cursor_after {
            Some(pos) => self.clamp_position(pos),
            None => self.clamp_position(self.cursor),
        };
        self.assert_line_index_consistent();

        debug!(
            splices = splices.len(),
            lines_before,
            lines_after = self.line_count(),
            version = self.version,
            "applied splice batch"
        );

        Ok(if reshapes_lines {
            DirtyLines::FromLineToEnd(first_line)
        } else {
            DirtyLines::lines(first_line, last_line)
        })
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}
