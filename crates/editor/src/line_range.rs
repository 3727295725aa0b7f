// Chunk: docs/chunks/line_edits - Whole-line edit batches over a line-addressed document

//! Half-open ranges of whole lines.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LineRangeError;

/// A half-open interval `[start_line_number, end_line_number_exclusive)` of
/// 1-based line numbers.
///
/// An empty range (`line_count == 0`) marks the position before
/// `start_line_number`, where a pure insertion goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLineRange")]
pub struct LineRange {
    start_line_number: usize,
    line_count: usize,
}

#[derive(Deserialize)]
struct RawLineRange {
    start_line_number: usize,
    line_count: usize,
}

impl TryFrom<RawLineRange> for LineRange {
    type Error = LineRangeError;

    fn try_from(raw: RawLineRange) -> Result<Self, Self::Error> {
        Self::try_new(raw.start_line_number, raw.line_count)
    }
}

impl LineRange {
    /// Creates a range of `line_count` lines starting at `start_line_number`.
    ///
    /// # Panics
    ///
    /// Panics if `start_line_number` is 0.
    pub fn new(start_line_number: usize, line_count: usize) -> Self {
        match Self::try_new(start_line_number, line_count) {
            Ok(range) => range,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible form of [`LineRange::new`].
    pub fn try_new(start_line_number: usize, line_count: usize) -> Result<Self, LineRangeError> {
        if start_line_number == 0 {
            return Err(LineRangeError::ZeroStart);
        }
        start_line_number
            .checked_add(line_count)
            .ok_or(LineRangeError::Overflow)?;
        Ok(Self {
            start_line_number,
            line_count,
        })
    }

    /// Creates the range `[start, end_exclusive)`.
    ///
    /// # Panics
    ///
    /// Panics if `start` is 0 or `end_exclusive < start`.
    pub fn from_line_numbers(start: usize, end_exclusive: usize) -> Self {
        assert!(
            end_exclusive >= start,
            "line range end {end_exclusive} precedes start {start}"
        );
        Self::new(start, end_exclusive - start)
    }

    pub fn start_line_number(&self) -> usize {
        self.start_line_number
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn end_line_number_exclusive(&self) -> usize {
        self.start_line_number + self.line_count
    }

    pub fn is_empty(&self) -> bool {
        self.line_count == 0
    }

    /// True if `line_number` is one of the lines in the range.
    pub fn contains(&self, line_number: usize) -> bool {
        self.start_line_number <= line_number && line_number < self.end_line_number_exclusive()
    }

    /// True if every line of `self` comes before every line of `other`.
    /// Adjacent ranges count as before.
    pub fn is_before(&self, other: &LineRange) -> bool {
        self.end_line_number_exclusive() <= other.start_line_number
    }

    /// True if the ranges share at least one line.
    pub fn intersects(&self, other: &LineRange) -> bool {
        self.start_line_number < other.end_line_number_exclusive()
            && other.start_line_number < self.end_line_number_exclusive()
    }

    /// True if the ranges share a line or are adjacent.
    pub fn touches(&self, other: &LineRange) -> bool {
        self.start_line_number <= other.end_line_number_exclusive()
            && other.start_line_number <= self.end_line_number_exclusive()
    }

    /// Smallest range covering both.
    pub fn join(&self, other: &LineRange) -> LineRange {
        let start = self.start_line_number.min(other.start_line_number);
        let end = self
            .end_line_number_exclusive()
            .max(other.end_line_number_exclusive());
        LineRange::from_line_numbers(start, end)
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {})",
            self.start_line_number,
            self.end_line_number_exclusive()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_is_start_plus_count() {
        let range = LineRange::new(3, 4);
        assert_eq!(range.end_line_number_exclusive(), 7);
        assert_eq!(LineRange::from_line_numbers(3, 7), range);
    }

    #[test]
    fn test_empty_range_contains_nothing() {
        let range = LineRange::new(5, 0);
        assert!(range.is_empty());
        assert!(!range.contains(5));
    }

    #[test]
    fn test_contains_is_half_open() {
        let range = LineRange::new(2, 2);
        assert!(!range.contains(1));
        assert!(range.contains(2));
        assert!(range.contains(3));
        assert!(!range.contains(4));
    }

    #[test]
    fn test_zero_start_is_rejected() {
        assert_eq!(LineRange::try_new(0, 1), Err(LineRangeError::ZeroStart));
    }

    #[test]
    #[should_panic(expected = "line numbers start at 1")]
    fn test_new_panics_on_zero_start() {
        let _ = LineRange::new(0, 3);
    }

    #[test]
    fn test_adjacent_ranges_touch_but_do_not_intersect() {
        let a = LineRange::new(1, 2);
        let b = LineRange::new(3, 1);
        assert!(a.is_before(&b));
        assert!(a.touches(&b));
        assert!(!a.intersects(&b));
        assert_eq!(a.join(&b), LineRange::new(1, 3));
    }

    #[test]
    fn test_overlapping_ranges_intersect() {
        let a = LineRange::new(1, 3);
        let b = LineRange::new(3, 2);
        assert!(a.intersects(&b));
        assert!(!a.is_before(&b));
    }

    #[test]
    fn test_display_shows_half_open_interval() {
        assert_eq!(LineRange::new(2, 3).to_string(), "[2, 5)");
    }

    #[test]
    fn test_deserialize_validates_start() {
        let ok: LineRange =
            serde_json::from_str(r#"{"start_line_number": 2, "line_count": 1}"#).unwrap();
        assert_eq!(ok, LineRange::new(2, 1));

        let bad = serde_json::from_str::<LineRange>(r#"{"start_line_number": 0, "line_count": 1}"#);
        assert!(bad.is_err());
    }
}
