// Indentation block synthesis
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

//! Synthesis of implicit blocks.
//!
//! Certain keywords
//!   (the _indenters_ `try`, `finally`, `else`, and `do`)
//!   may open a block by indentation rather than by braces:
//!
//! ```text
//! try
//!     risky()
//! catch e
//!     recover(e)
//! ```
//!
//! [`Indentation`] makes such blocks explicit by emitting an `indent`
//!   marker where one opens and a `dedent` marker where it closes,
//!   so that the grammar needn't be sensitive to whitespace.
//!
//! Implicit blocks and braces may nest within one another.
//! A `}` closes every implicit block opened since its matching `{`,
//!   and dedenting never closes a block outside of the innermost brace.

use crate::{
    global::SourceOffset,
    pipeline::{Emit, Rewriter, Viewer},
    token::{Token, TokenKind},
};

use TokenKind::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    /// A literal `{`.
    Brace,

    /// An implicit block whose body is indented by the given width.
    Block(usize),
}

/// Emit `indent` and `dedent` markers for implicit blocks.
///
/// Every `indent` emitted is eventually matched by exactly one `dedent`,
///   however malformed the input;
///     blocks still open at the end of the stream are closed there.
/// Markers are emitted before the token that caused them.
#[derive(Debug, Default)]
pub struct Indentation {
    /// Open levels,
    ///   innermost last.
    ///
    /// The root level has zero width and is never closed,
    ///   and so is not represented.
    stack: Vec<Level>,
}

/// Whether `kind` opens an implicit block when followed by a newline.
fn is_indenter(kind: TokenKind) -> bool {
    matches!(kind, Try | Finally | Else | Do)
}

/// Indentation width of the line following a newline token.
///
/// This is the count of trailing spaces and tabs;
///   tabs are not expanded.
fn indent_width(nl: &Token) -> usize {
    nl.text
        .bytes()
        .rev()
        .take_while(|&b| b == b' ' || b == b'\t')
        .count()
}

impl Indentation {
    fn dedent<'s>(&mut self, at: SourceOffset, out: &mut Emit<'s>) {
        self.stack.pop();
        out.emit(Token::pseudo(Dedent, at));
    }

    /// Close implicit blocks back to and including the innermost brace.
    ///
    /// An unmatched `}` closes nothing.
    fn close_brace<'s>(&mut self, at: SourceOffset, out: &mut Emit<'s>) {
        if !self.stack.contains(&Level::Brace) {
            return;
        }

        while let Some(Level::Block(_)) = self.stack.last() {
            self.dedent(at, out);
        }

        self.stack.pop();
    }

    /// Close implicit blocks indented beyond `width`.
    fn close_wider<'s>(
        &mut self,
        width: usize,
        at: SourceOffset,
        out: &mut Emit<'s>,
    ) {
        while let Some(&Level::Block(w)) = self.stack.last() {
            if w <= width {
                break;
            }

            self.dedent(at, out);
        }
    }
}

impl<'s> Rewriter<'s> for Indentation {
    fn rewrite(
        &mut self,
        tok: Token<'s>,
        view: &mut Viewer<'s>,
        out: &mut Emit<'s>,
    ) {
        match tok.kind {
            LBrace => self.stack.push(Level::Brace),
            RBrace => self.close_brace(tok.span.start(), out),

            Newline => {
                let width = indent_width(&tok);

                if view.look_back(1).map_or(false, is_indenter) {
                    self.stack.push(Level::Block(width));
                    out.emit(Token::pseudo(Indent, tok.span.start()));
                } else {
                    self.close_wider(width, tok.span.start(), out);
                }
            }

            _ => {}
        }

        out.emit(tok);
    }

    fn finish(&mut self, view: &mut Viewer<'s>, out: &mut Emit<'s>) {
        let at = view.offset();

        while let Some(level) = self.stack.pop() {
            if let Level::Block(_) = level {
                out.emit(Token::pseudo(Dedent, at));
            }
        }
    }

    fn name(&self) -> &'static str {
        "indentation"
    }
}

#[cfg(test)]
mod test;
