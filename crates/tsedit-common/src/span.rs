//! Byte-offset ranges into source text.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A half-open byte range `[pos, end)` in a source text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextRange {
    pub pos: u32,
    pub end: u32,
}

impl TextRange {
    #[inline]
    pub const fn new(pos: u32, end: u32) -> Self {
        Self { pos, end }
    }

    /// An empty range at `pos`, used for pure insertions.
    #[inline]
    pub const fn at(pos: u32) -> Self {
        Self { pos, end: pos }
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.pos)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.pos
    }

    #[inline]
    pub const fn contains(&self, pos: u32) -> bool {
        pos >= self.pos && pos < self.end
    }

    /// Convert to a `usize` range for slicing.
    #[inline]
    pub fn as_range(&self) -> Range<usize> {
        self.pos as usize..self.end as usize
    }
}

impl From<Range<usize>> for TextRange {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start as u32, range.end as u32)
    }
}
