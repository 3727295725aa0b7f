// Chunk: docs/chunks/line_edits - Whole-line edit batches over a line-addressed document

//! Whole-line edits and their translation into character splices.
//!
//! A [`LineRangeEdit`] says "at (before) line `start`, delete `count` lines
//! and insert these lines". A document's last line has no terminator, so an
//! edit cannot always be expressed as "each new line plus `'\n'`". Every edit
//! falls into exactly one [`Placement`]:
//!
//! ```text
//! Interior            end_exclusive <= N   (start,1)..(end_exclusive,1)   "a\nb\n"
//! DocumentFromStart   start == 1           (1,1)..(N,$)                  "a\nb"
//! DocumentTail        otherwise            (start-1,$)..(N,$)            "\na\nb"
//! ```
//!
//! `N` is the document's line count before the batch and `$` is end of line.
//! All edits in a batch are placed against that same `N`.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::document::Document;
use crate::error::EditError;
use crate::line_range::LineRange;
use crate::range::{Range, RangeEdit};

/// Replace the lines in `range` with `new_lines`.
///
/// Lines in `new_lines` carry no line terminators.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineRangeEdit {
    pub range: LineRange,
    pub new_lines: Vec<String>,
}

impl LineRangeEdit {
    pub fn new<I, S>(range: LineRange, new_lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            range,
            new_lines: new_lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Inserts `new_lines` before `line_number` without removing anything.
    pub fn insert<I, S>(line_number: usize, new_lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(LineRange::new(line_number, 0), new_lines)
    }

    /// Removes the lines in `range`.
    pub fn delete(range: LineRange) -> Self {
        Self::new(range, Vec::<String>::new())
    }

    /// Applies this edit alone, as a batch of one.
    pub fn apply<D: Document + ?Sized>(&self, document: &mut D) -> Result<(), EditError> {
        LineEdits::new(vec![self.clone()]).apply(document)
    }

    /// How this edit is spliced into a document of `line_count` lines.
    pub fn placement(&self, line_count: usize) -> Placement {
        if self.range.end_line_number_exclusive() <= line_count {
            Placement::Interior
        } else if self.range.start_line_number() == 1 {
            Placement::DocumentFromStart
        } else {
            Placement::DocumentTail
        }
    }

    /// The splice that performs this edit on a document of `line_count` lines.
    pub fn to_range_edit(&self, line_count: usize) -> RangeEdit {
        let start = self.range.start_line_number();
        match self.placement(line_count) {
            Placement::Interior => RangeEdit::new(
                Range::new(start, 1, self.range.end_line_number_exclusive(), 1),
                self.new_lines.iter().map(|line| format!("{line}\n")).collect::<String>(),
            ),
            Placement::DocumentFromStart => RangeEdit::new(
                Range::new(1, 1, line_count, Range::MAX_COLUMN),
                self.new_lines.join("\n"),
            ),
            Placement::DocumentTail => RangeEdit::new(
                Range::new(start - 1, Range::MAX_COLUMN, line_count, Range::MAX_COLUMN),
                self.new_lines.iter().map(|line| format!("\n{line}")).collect::<String>(),
            ),
        }
    }
}

/// Where a [`LineRangeEdit`] sits relative to the end of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The replaced lines end at or before the last line; the following line
    /// keeps its own start, so every new line carries a terminator.
    Interior,
    /// The edit starts at line 1 and runs past the last line: it replaces
    /// the whole document, and the new lines get no trailing terminator.
    DocumentFromStart,
    /// The edit starts after line 1 and runs past the last line: the splice
    /// starts at the end of the preceding line and each new line brings its
    /// own leading terminator.
    DocumentTail,
}

/// An ordered batch of [`LineRangeEdit`]s, applied as one change.
///
/// Edits must be sorted by start line and must not overlap. Adjacent edits
/// and several insertions before the same line are allowed; insertions keep
/// their batch order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineEdits {
    edits: Vec<LineRangeEdit>,
}

impl LineEdits {
    pub fn new(edits: Vec<LineRangeEdit>) -> Self {
        Self { edits }
    }

    pub fn edits(&self) -> &[LineRangeEdit] {
        &self.edits
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Checks that the batch can be applied to a document of `line_count` lines.
    ///
    /// Every edit must start at most one line past the end, start no earlier
    /// than the edit before it, and begin at or after that edit's end. An
    /// edit reaching past the last line may not start where an interior edit
    /// ends: its splice begins at the end of the preceding line, inside the
    /// interior splice.
    pub fn validate(&self, line_count: usize) -> Result<(), EditError> {
        let mut previous: Option<&LineRangeEdit> = None;
        for (index, edit) in self.edits.iter().enumerate() {
            let range = &edit.range;
            if range.start_line_number() > line_count + 1 {
                return Err(EditError::StartOutOfBounds {
                    index,
                    start: range.start_line_number(),
                    line_count,
                });
            }
            if let Some(previous) = previous {
                let prev_range = &previous.range;
                if range.start_line_number() < prev_range.start_line_number() {
                    return Err(EditError::Unsorted {
                        index,
                        range: *range,
                        previous: *prev_range,
                    });
                }
                if !prev_range.is_before(range) {
                    return Err(EditError::Overlapping {
                        index,
                        range: *range,
                        previous: *prev_range,
                    });
                }
                if edit.placement(line_count) == Placement::DocumentTail
                    && previous.placement(line_count) == Placement::Interior
                    && prev_range.end_line_number_exclusive() == range.start_line_number()
                {
                    return Err(EditError::ConflictsWithTail {
                        index,
                        range: *range,
                        previous: *prev_range,
                    });
                }
            }
            previous = Some(edit);
        }
        Ok(())
    }

    /// Translates the batch into splices for a document of `line_count` lines.
    ///
    /// Pure: every edit is placed against the same `line_count`, and no
    /// ordering checks are made.
    pub fn to_range_edits(&self, line_count: usize) -> Vec<RangeEdit> {
        self.edits
            .iter()
            .map(|edit| {
                let range_edit = edit.to_range_edit(line_count);
                trace!(
                    lines = %edit.range,
                    placement = ?edit.placement(line_count),
                    splice = %range_edit.range,
                    "placed line edit"
                );
                range_edit
            })
            .collect()
    }

    /// Validates the batch, then hands all of its splices to `document` in a
    /// single [`Document::apply_batch`] call with no selection to restore.
    pub fn apply<D: Document + ?Sized>(&self, document: &mut D) -> Result<(), EditError> {
        let line_count = document.line_count();
        self.validate(line_count)?;

        let range_edits = self.to_range_edits(line_count);
        debug!(
            edits = self.edits.len(),
            line_count, "applying line edit batch"
        );
        document.apply_batch(&range_edits, None)?;
        Ok(())
    }
}

impl From<Vec<LineRangeEdit>> for LineEdits {
    fn from(edits: Vec<LineRangeEdit>) -> Self {
        Self::new(edits)
    }
}

impl FromIterator<LineRangeEdit> for LineEdits {
    fn from_iter<T: IntoIterator<Item = LineRangeEdit>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
