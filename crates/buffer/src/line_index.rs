// Chunk: docs/chunks/text_buffer - Text buffer data structure with gap buffer backing

//! Line index for tracking line boundaries in the text buffer.
//!
//! Maintains the char offset at which every line starts. Splices update the
//! index in one pass instead of rebuilding it from the content.

/// Tracks line boundaries in a text buffer.
///
/// `line_starts[0] == 0` always; each later entry is the offset just past a `'\n'`.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Creates a new line index with a single empty line.
    pub fn new() -> Self {
        Self {
            line_starts: vec![0],
        }
    }

    /// Rebuilds the index from the full content. O(n); used when loading text.
    pub fn rebuild<I>(&mut self, content: I)
    where
        I: IntoIterator<Item = char>,
    {
        self.line_starts.clear();
        self.line_starts.push(0);
        self.line_starts.extend(
            content
                .into_iter()
                .enumerate()
                .filter(|&(_, ch)| ch == '\n')
                .map(|(offset, _)| offset + 1),
        );
    }

    /// Number of lines. Always at least 1.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Offset of the first char of `line`, or None if out of bounds.
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Offset just past the last char of `line` (its newline, or `total_len`
    /// for the final line).
    pub fn line_end(&self, line: usize, total_len: usize) -> Option<usize> {
        if line >= self.line_count() {
            return None;
        }
        match self.line_starts.get(line + 1) {
            Some(next) => Some(next - 1),
            None => Some(total_len),
        }
    }

    /// Length of `line` excluding its newline.
    pub fn line_len(&self, line: usize, total_len: usize) -> Option<usize> {
        let start = self.line_start(line)?;
        let end = self.line_end(line, total_len)?;
        Some(end - start)
    }

    /// Returns the line containing the given char offset.
    ///
    /// Uses binary search for O(log n) lookup. Offsets past the end map to the last line.
    pub fn line_at_offset(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line.saturating_sub(1),
        }
    }

    // Chunk: docs/chunks/batch_splice - Atomic multi-range splicing
    /// Updates the index for `removed_len` chars at `offset` being replaced by `inserted`.
    ///
    /// Line starts produced by newlines inside the removed span are dropped,
    /// later starts shift by the length delta, and every newline in
    /// `inserted` contributes a new start.
    pub fn splice(&mut self, offset: usize, removed_len: usize, inserted: &str) {
        let removed_end = offset + removed_len;
        let first = self.line_starts.partition_point(|&s| s <= offset);
        let last = self.line_starts.partition_point(|&s| s <= removed_end);

        let mut inserted_len = 0;
        let mut new_starts = Vec::new();
        for ch in inserted.chars() {
            inserted_len += 1;
            if ch == '\n' {
                new_starts.push(offset + inserted_len);
            }
        }

        for start in &mut self.line_starts[last..] {
            *start = *start - removed_len + inserted_len;
        }
        self.line_starts.splice(first..last, new_starts);
    }

    /// Returns the raw line_starts array (for debug validation).
    #[cfg(any(debug_assertions, test))]
    pub fn line_starts(&self) -> &[usize] {
        &self.line_starts
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}
