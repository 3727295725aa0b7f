// Chunk: docs/chunks/text_buffer - Text buffer data structure with gap buffer backing

//! Gap buffer storage for the text buffer.
//!
//! Characters live in one array with a movable gap. A splice moves the gap to
//! its start, swallows the replaced characters into the gap, then writes the
//! replacement into it, so nearby splices stay cheap.

const INITIAL_GAP_SIZE: usize = 64;
const GAP_GROWTH_FACTOR: usize = 2;

/// Character storage as `[pre-gap content | gap | post-gap content]`.
#[derive(Debug)]
pub struct GapBuffer {
    data: Vec<char>,
    /// First unused slot.
    gap_start: usize,
    /// First used slot after the gap.
    gap_end: usize,
}

impl GapBuffer {
    /// Creates a new empty gap buffer.
    pub fn new() -> Self {
        Self {
            data: vec!['\0'; INITIAL_GAP_SIZE],
            gap_start: 0,
            gap_end: INITIAL_GAP_SIZE,
        }
    }

    /// Creates a gap buffer holding `text`, with the gap at the end.
    pub fn from_str(text: &str) -> Self {
        let mut data: Vec<char> = text.chars().collect();
        let len = data.len();
        data.resize(len + INITIAL_GAP_SIZE, '\0');
        Self {
            gap_start: len,
            gap_end: data.len(),
            data,
        }
    }

    /// Logical length in chars (excluding the gap).
    pub fn len(&self) -> usize {
        self.data.len() - self.gap_len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn gap_len(&self) -> usize {
        self.gap_end - self.gap_start
    }

    /// Current gap position in logical coordinates.
    #[allow(dead_code)]
    pub fn gap_position(&self) -> usize {
        self.gap_start
    }

    /// Moves the gap to the logical position `pos`, clamped to the length.
    ///
    /// O(distance) between the old and new gap positions.
    pub fn move_gap_to(&mut self, pos: usize) {
        let pos = pos.min(self.len());

        if pos < self.gap_start {
            let shift = self.gap_start - pos;
            self.data.copy_within(pos..self.gap_start, self.gap_end - shift);
            self.gap_start = pos;
            self.gap_end -= shift;
        } else if pos > self.gap_start {
            let shift = pos - self.gap_start;
            self.data
                .copy_within(self.gap_end..self.gap_end + shift, self.gap_start);
            self.gap_start += shift;
            self.gap_end += shift;
        }
    }

    /// Grows the gap in place to at least `min_size`, keeping its position.
    fn ensure_gap(&mut self, min_size: usize) {
        if self.gap_len() >= min_size {
            return;
        }

        let growth = (min_size - self.gap_len()).max(self.data.len() * GAP_GROWTH_FACTOR);
        let old_len = self.data.len();
        let post_gap_len = old_len - self.gap_end;

        self.data.resize(old_len + growth, '\0');
        let new_gap_end = self.data.len() - post_gap_len;
        if post_gap_len > 0 {
            self.data.copy_within(self.gap_end..old_len, new_gap_end);
        }
        self.gap_end = new_gap_end;
    }

    /// Replaces `removed_len` chars starting at logical offset `start` with `text`.
    ///
    /// `start + removed_len` is clamped to the buffer length. Returns the
    /// number of chars actually removed.
    pub fn splice(&mut self, start: usize, removed_len: usize, text: &str) -> usize {
        self.move_gap_to(start);
        let removed = removed_len.min(self.data.len() - self.gap_end);
        self.gap_end += removed;

        let chars: Vec<char> = text.chars().collect();
        self.ensure_gap(chars.len());
        self.data[self.gap_start..self.gap_start + chars.len()].copy_from_slice(&chars);
        self.gap_start += chars.len();
        removed
    }

    /// Returns the character at the given logical position.
    pub fn char_at(&self, pos: usize) -> Option<char> {
        if pos >= self.len() {
            return None;
        }
        let physical = if pos < self.gap_start {
            pos
        } else {
            pos + self.gap_len()
        };
        Some(self.data[physical])
    }

    /// Iterates over every character in logical order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.data[..self.gap_start]
            .iter()
            .chain(self.data[self.gap_end..].iter())
            .copied()
    }

    /// Returns the logical range `start..end` as a String (clamped).
    pub fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.len());
        (start.min(end)..end).filter_map(|i| self.char_at(i)).collect()
    }
}

impl Default for GapBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GapBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for ch in self.chars() {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}
