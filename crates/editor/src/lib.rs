// Chunk: docs/chunks/line_edits - Whole-line edit batches over a line-addressed document

//! lineedit: whole-line edits applied to line-addressed documents.
//!
//! A [`LineRangeEdit`] replaces a [`LineRange`] of whole lines with new lines.
//! A [`LineEdits`] batch translates its edits into character-level
//! [`RangeEdit`]s, taking care of line terminators where an edit reaches the
//! end of the document, and commits them through a single
//! [`Document::apply_batch`] call.
//!
//! # Example
//!
//! ```
//! use lineedit::{LineEdits, LineRange, LineRangeEdit};
//! use lineedit_buffer::TextBuffer;
//!
//! let mut doc = TextBuffer::from_lines(&["A", "B", "C"]);
//!
//! LineEdits::new(vec![LineRangeEdit::new(LineRange::new(2, 1), ["X", "Y"])])
//!     .apply(&mut doc)
//!     .unwrap();
//! assert_eq!(doc.lines(), vec!["A", "X", "Y", "C"]);
//!
//! // Replacing past the last line never leaves a trailing blank line.
//! let mut doc = TextBuffer::from_lines(&["A", "B", "C"]);
//! LineRangeEdit::new(LineRange::new(1, 3), ["Z"]).apply(&mut doc).unwrap();
//! assert_eq!(doc.content(), "Z");
//! ```

pub mod cli;
pub mod config;
mod document;
mod editing;
mod error;
mod line_range;
pub mod logging;
mod range;
pub mod script;

pub use document::Document;
pub use editing::{LineEdits, LineRangeEdit, Placement};
pub use error::{DocumentError, EditError, LineRangeError};
pub use line_range::LineRange;
pub use range::{Range, RangeEdit};
