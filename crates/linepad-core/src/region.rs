/// Selection regions and the lines they touch.
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::buffer::TextBuffer;

/// A pair of char offsets into a buffer, in either order.
///
/// `start > end` is a reversed selection and covers the same span as its
/// swap. `start == end` is a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    pub start: usize,
    pub end: usize,
}

impl Region {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A zero-width region at `offset`.
    pub fn cursor(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    /// Returns `(min, max)` of the two offsets.
    pub fn normalized(&self) -> (usize, usize) {
        (self.start.min(self.end), self.start.max(self.end))
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the inclusive range of line indices this region touches.
    ///
    /// # Errors
    ///
    /// Returns an error if either offset is past the end of the buffer.
    pub fn touched_lines(&self, buffer: &TextBuffer) -> Result<RangeInclusive<usize>> {
        let (lo, hi) = self.normalized();
        let first = buffer.char_to_line(lo)?;
        let last = buffer.char_to_line(hi)?;
        Ok(first..=last)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

/// Parses `"start:end"`, or a bare `"offset"` for a cursor.
impl FromStr for Region {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .with_context(|| format!("invalid offset {part:?} in region {s:?}"))
        };
        match s.split_once(':') {
            Some((start, end)) => Ok(Self::new(parse(start)?, parse(end)?)),
            None => Ok(Self::cursor(parse(s)?)),
        }
    }
}

impl From<(usize, usize)> for Region {
    fn from((start, end): (usize, usize)) -> Self {
        Self::new(start, end)
    }
}
