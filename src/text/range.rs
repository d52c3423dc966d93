//! Half-open text ranges
//!
//! Offsets are UTF-16 code units into the current `TextBuffer`, which is
//! what the browser selection API reports.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A range of text from start (inclusive) to end (exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Build a range from two offsets in either order
    pub fn normalized(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Check if this range is empty (start >= end)
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Length in UTF-16 code units
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if an offset is contained within this range
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Check if two ranges share at least one offset.
    ///
    /// Abutting ranges (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &TextRange) -> bool {
        !(self.end <= other.start || other.end <= self.start)
    }

    /// Clamp both ends to `len`
    pub fn clamp_to(&self, len: usize) -> TextRange {
        let end = self.end.min(len);
        TextRange {
            start: self.start.min(end),
            end,
        }
    }

    /// True when the range reaches past a buffer of length `len`
    pub fn exceeds(&self, len: usize) -> bool {
        self.end > len
    }
}

impl fmt::Display for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
