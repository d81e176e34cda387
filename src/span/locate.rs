// Byte offset to line/column resolution
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

//! Resolve [`Span`]s into [`SourceLocation`]s.
//!
//! The [`Locator`] indexes the start of every line of a source string
//!   once,
//!     after which each lookup is a binary search followed by a scan of
//!     the characters preceding the offset on its line.
//!
//! Columns account for the display width of unicode characters with a
//!   fixed-width font,
//!     in a manner similar to POSIX `wcwidth(3)`,
//!     using the same `unicode-width` crate as Rustc.
//! Characters without a defined width
//!   (control characters, including tabs)
//!   count as a single column.

use super::{Position, SourceLocation, Span};
use crate::{global::SourceOffset, token::Token};
use unicode_width::UnicodeWidthChar;

/// Line index over a single source string.
#[derive(Debug, Clone)]
pub struct Locator<'s> {
    src: &'s str,
    line_starts: Vec<usize>,
}

impl<'s> Locator<'s> {
    pub fn new(src: &'s str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(memchr::memchr_iter(b'\n', src.as_bytes()).map(|i| i + 1))
            .collect();

        Self { src, line_starts }
    }

    /// Line and display column of the byte `offset`.
    ///
    /// Offsets past the end of the source resolve to the end of the
    ///   source;
    ///     offsets within a multi-byte character resolve to that
    ///     character's column.
    pub fn position(&self, offset: SourceOffset) -> Position {
        let mut offset = (offset as usize).min(self.src.len());
        while !self.src.is_char_boundary(offset) {
            offset -= 1;
        }

        // `line_starts[0] == 0`, so this is always at least 1.
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = self.line_starts[line - 1];

        let column: usize = self.src[line_start..offset]
            .chars()
            .map(|c| c.width().unwrap_or(1))
            .sum();

        let sat =
            |x: usize| SourceOffset::try_from(x).unwrap_or(SourceOffset::MAX);
        Position::new(sat(line), sat(column))
    }

    pub fn resolve(&self, span: Span) -> SourceLocation {
        SourceLocation::new(
            self.position(span.start()),
            self.position(span.end()),
        )
    }

    /// Stamp a [`SourceLocation`] onto `tok` derived from its span.
    ///
    /// Any location already present on the token is replaced.
    pub fn locate<'t>(&self, tok: Token<'t>) -> Token<'t> {
        tok.with_loc(self.resolve(tok.span))
    }
}
