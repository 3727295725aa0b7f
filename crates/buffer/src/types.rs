// Chunk: docs/chunks/text_buffer - Text buffer data structure with gap buffer backing

/// Position in the buffer as (line, column) where both are 0-indexed.
///
/// Columns count chars. Ordering is by line, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

// Chunk: docs/chunks/batch_splice - Atomic multi-range splicing
/// One character-range replacement, expressed against the buffer state
/// before the batch it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    pub start: Position,
    pub end: Position,
    pub text: String,
}

impl Splice {
    pub fn new(start: Position, end: Position, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }

    /// A pure insertion at `at`.
    pub fn insert(at: Position, text: impl Into<String>) -> Self {
        Self::new(at, at, text)
    }

    /// A pure deletion of `start..end`.
    pub fn delete(start: Position, end: Position) -> Self {
        Self::new(start, end, String::new())
    }
}

/// Information about which lines were dirtied by a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirtyLines {
    /// No lines changed (e.g., an empty batch).
    None,
    /// A single line changed in place.
    Single(usize),
    /// A range of lines changed in place [from, to). No lines were added or removed.
    Range { from: usize, to: usize },
    /// Everything from a line to the end of the buffer changed.
    /// Used whenever a batch adds or removes lines.
    FromLineToEnd(usize),
}

impl DirtyLines {
    /// Returns true if no lines were dirtied.
    pub fn is_none(&self) -> bool {
        matches!(self, DirtyLines::None)
    }

    /// Returns the starting line of the dirty region, if any.
    pub fn start_line(&self) -> Option<usize> {
        match self {
            DirtyLines::None => None,
            DirtyLines::Single(line) | DirtyLines::FromLineToEnd(line) => Some(*line),
            DirtyLines::Range { from, .. } => Some(*from),
        }
    }

    /// Dirty region for an in-place change spanning lines `first..=last`.
    pub(crate) fn lines(first: usize, last: usize) -> Self {
        if first == last {
            DirtyLines::Single(first)
        } else {
            DirtyLines::Range {
                from: first,
                to: last + 1,
            }
        }
    }
}
