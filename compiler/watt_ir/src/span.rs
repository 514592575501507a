//! Source locations.
//!
//! A [`Location`] spans two [`Position`]s. Lines and columns are 1-based, offsets are
//! 0-based byte offsets into the source text.

use std::fmt;
use std::ops::Range;

/// A point in the source text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub offset: u32,
}

impl Position {
    pub const fn new(line: u32, column: u32, offset: u32) -> Self {
        Position {
            line,
            column,
            offset,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Source range covered by a syntax node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Location {
    pub start: Position,
    pub end: Position,
}

impl Location {
    /// Location for synthesized nodes.
    pub const DUMMY: Location = Location {
        start: Position::new(0, 0, 0),
        end: Position::new(0, 0, 0),
    };

    pub const fn new(start: Position, end: Position) -> Self {
        Location { start, end }
    }

    /// Smallest location covering both `self` and `other`.
    #[must_use]
    pub fn merge(self, other: Location) -> Location {
        let start = if other.start.offset < self.start.offset {
            other.start
        } else {
            self.start
        };
        let end = if other.end.offset > self.end.offset {
            other.end
        } else {
            self.end
        };
        Location { start, end }
    }

    /// Byte range of this location, for snippet rendering.
    pub fn range(&self) -> Range<usize> {
        self.start.offset as usize..self.end.offset as usize
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

/// Maps byte offsets to line/column positions.
#[derive(Clone, Debug)]
pub struct LineIndex {
    /// Offset of the first byte of every line.
    line_starts: Vec<u32>,
    len: u32,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(to_u32(i + 1));
            }
        }
        LineIndex {
            line_starts,
            len: to_u32(source.len()),
        }
    }

    /// Position of a byte offset. Offsets past the end clamp to the end of input.
    pub fn position(&self, offset: usize) -> Position {
        let offset = to_u32(offset).min(self.len);
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next.saturating_sub(1),
        };
        let line_start = self.line_starts.get(line).copied().unwrap_or(0);
        Position {
            line: to_u32(line + 1),
            column: offset - line_start + 1,
            offset,
        }
    }

    /// Location of a byte range.
    pub fn location(&self, range: Range<usize>) -> Location {
        Location {
            start: self.position(range.start),
            end: self.position(range.end),
        }
    }
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests;
