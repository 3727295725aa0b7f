// Chunk: docs/chunks/batch_splice - Atomic multi-range splicing

//! Errors raised by buffer mutations.

use thiserror::Error;

/// Reasons a splice batch is rejected. A rejected batch leaves the buffer untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// A splice whose end lies before its start.
    #[error("splice {index} ends before it starts")]
    InvertedSplice { index: usize },

    /// A splice that starts before the previous splice in the batch.
    #[error("splice {index} starts before the splice preceding it; batches must be sorted by start")]
    UnsortedSplices { index: usize },

    /// A splice that begins inside the range replaced by the previous splice.
    #[error("splice {index} overlaps the range replaced by the splice preceding it")]
    OverlappingSplices { index: usize },
}
