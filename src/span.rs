// Source spans and locations
//
//  Copyright (C) 2014-2022 Ryan Specialty Group, LLC.
//
//  This file is part of defscript.
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Mapping to source input byte intervals.
//!
//! A [`Span`] is a half-open byte interval `[start, end)` within a single
//!   source string,
//!     representing where a token originated.
//! Tokens synthesized by the [pipeline](crate::pipeline) carry a
//!   zero-length span at the point of synthesis.
//!
//! ```
//! use defscript::span::Span;
//!
//! let span = Span::new(2, 6);
//! assert_eq!(2, span.start());
//! assert_eq!(4, span.len());
//!
//! // Freely copyable
//! let cp = span;
//! assert_eq!(cp, span);
//! ```
//!
//! Spans are only byte offsets;
//!   they are converted into human-friendly line/column
//!   [`SourceLocation`]s by a [`Locator`] once all pipeline rewriting is
//!   complete.
//! Span is expected to fit within a general-purpose CPU register on a
//!   64-bit system,
//!     and so does not exceed 8 bytes in length.

mod locate;

pub use locate::Locator;

use crate::global::SourceOffset;
use std::fmt::Display;

/// A half-open byte interval within a source string.
///
/// The invariant `start <= end` is upheld by every constructor;
///   inverted intervals are collapsed onto `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Span {
    start: SourceOffset,
    end: SourceOffset,
}

assert_eq_size!(Span, u64);

impl Span {
    pub fn new(start: SourceOffset, end: SourceOffset) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    /// A zero-length span at `offset`.
    ///
    /// This is the span of every pseudo-token.
    pub fn at(offset: SourceOffset) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Create a span from a `(start, end)` byte interval using native
    ///   [`usize`] offsets,
    ///     saturating offsets that cannot be represented by
    ///     [`SourceOffset`].
    pub fn from_byte_interval((start, end): (usize, usize)) -> Self {
        let sat =
            |x: usize| SourceOffset::try_from(x).unwrap_or(SourceOffset::MAX);
        Self::new(sat(start), sat(end))
    }

    pub fn start(&self) -> SourceOffset {
        self.start
    }

    pub fn end(&self) -> SourceOffset {
        self.end
    }

    pub fn len(&self) -> SourceOffset {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Create a new span that is a slice of this one.
    ///
    /// The slice is clamped to the bounds of this span,
    ///   so that a bad offset results in a truncated span rather than one
    ///   that points at unrelated source text.
    pub fn slice(self, rel_offset: usize, len: usize) -> Self {
        let clamp = |x: usize| {
            SourceOffset::try_from(x)
                .unwrap_or(SourceOffset::MAX)
                .min(self.len())
        };

        let start = self.start + clamp(rel_offset);
        let end = start.saturating_add(clamp(len)).min(self.end);

        Self { start, end }
    }

    /// Shift this span forward by `offset` bytes.
    ///
    /// This is used to translate spans of tokens produced by lexing a
    ///   substring back into the coordinates of the parent string.
    pub fn offset_by(self, offset: SourceOffset) -> Self {
        Self {
            start: self.start.saturating_add(offset),
            end: self.end.saturating_add(offset),
        }
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// A human-friendly point within a source string.
///
/// Lines are 1-indexed and columns are 0-indexed display columns,
///   matching the convention of most editors' status lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: SourceOffset,
    pub column: SourceOffset,
}

impl Position {
    pub fn new(line: SourceOffset, column: SourceOffset) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self { line: 1, column: 0 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The line/column interval of a token or reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SourceLocation {
    pub start: Position,
    pub end: Position,
}

impl SourceLocation {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// A zero-width location at `pos`.
    pub fn at(pos: Position) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Location spanning from the start of `self` to the end of `last`.
    pub fn through(self, last: SourceLocation) -> Self {
        Self {
            start: self.start,
            end: last.end,
        }
    }
}

impl Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.start == self.end {
            Display::fmt(&self.start, f)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}
