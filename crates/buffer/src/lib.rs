// Chunk: docs/chunks/text_buffer - Text buffer data structure with gap buffer backing
// Chunk: docs/chunks/batch_splice - Atomic multi-range splicing

//! lineedit-buffer: the in-memory text buffer behind lineedit documents.
//!
//! This crate provides a gap buffer-backed text buffer with a line index,
//! cursor tracking and dirty line reporting.
//!
//! # Overview
//!
//! The main type is [`TextBuffer`], which provides:
//! - Line-based access (`line_count`, `line_content`, `lines`)
//! - Atomic batches of character-range replacements ([`Splice`])
//! - A version counter that advances once per committed batch
//!
//! # Example
//!
//! ```
//! use lineedit_buffer::{DirtyLines, Position, Splice, TextBuffer};
//!
//! let mut buffer = TextBuffer::from_str("A\nB\nC");
//!
//! // Replace line 1 ("B\n") with two lines.
//! let dirty = buffer
//!     .apply_splices(
//!         &[Splice::new(Position::new(1, 0), Position::new(2, 0), "X\nY\n")],
//!         None,
//!     )
//!     .unwrap();
//! assert_eq!(buffer.content(), "A\nX\nY\nC");
//! assert_eq!(dirty, DirtyLines::FromLineToEnd(1));
//! assert_eq!(buffer.version(), 1);
//! ```
//!
//! # Dirty Line Tracking
//!
//! Each batch returns a [`DirtyLines`] value:
//!
//! - `DirtyLines::None` - empty batch
//! - `DirtyLines::Single(line)` / `DirtyLines::Range { .. }` - lines changed in place
//! - `DirtyLines::FromLineToEnd(line)` - lines were added or removed

mod error;
mod gap_buffer;
mod line_index;
mod text_buffer;
mod types;

pub use error::BufferError;
pub use text_buffer::TextBuffer;
pub use types::{DirtyLines, Position, Splice};
