// Newline elision
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

//! Removal of newlines that cannot separate statements.
//!
//! The lexer emits a [`Newline`](TokenKind::Newline) token for every run
//!   of line breaks,
//!     but the grammar treats a newline as a statement separator.
//! Most newlines within a bracketed list,
//!   and every newline within parentheses,
//!   are therefore insignificant.
//!
//! There are two passes:
//!   [`NewlineElision`] runs before indentation markers are synthesized,
//!   and [`NewlineCleanup`] runs after,
//!     since `indent` and `dedent` change which tokens are adjacent to
//!     a newline.

use crate::{
    pipeline::{Emit, Rewriter, Viewer},
    token::{Token, TokenKind},
};

use TokenKind::*;

/// Drop newlines that are adjacent to list punctuation or enclosed in
///   parentheses.
///
/// A newline is dropped if any of the following hold:
///
///   - it begins or ends the stream;
///   - it follows `[`, `{`, or `,`;
///   - it precedes another newline, `]`, `}`, `,`, or a run of pipes; or
///   - the innermost open bracket is `(`.
///
/// Braces and brackets may therefore still contain newlines acting as
///   statement separators,
///     but parentheses never do.
#[derive(Debug, Default)]
pub struct NewlineElision {
    /// Open brackets,
    ///   innermost last.
    brackets: Vec<TokenKind>,
}

impl NewlineElision {
    fn track(&mut self, kind: TokenKind) {
        match kind {
            LBrace | LBracket | LParen => self.brackets.push(kind),

            // A closer that does not match the innermost opener is left
            //   for the parser to reject.
            RBrace | RBracket | RParen => {
                if self.brackets.last().copied() == opener_of(kind) {
                    self.brackets.pop();
                }
            }

            _ => {}
        }
    }

    fn in_parens(&self) -> bool {
        self.brackets.last() == Some(&LParen)
    }
}

fn opener_of(closer: TokenKind) -> Option<TokenKind> {
    match closer {
        RBrace => Some(LBrace),
        RBracket => Some(LBracket),
        RParen => Some(LParen),
        _ => None,
    }
}

impl<'s> Rewriter<'s> for NewlineElision {
    fn rewrite(
        &mut self,
        tok: Token<'s>,
        view: &mut Viewer<'s>,
        out: &mut Emit<'s>,
    ) {
        self.track(tok.kind);

        if tok.kind == Newline {
            let drop = match (view.look_back(1), view.look_ahead(0)) {
                (None, _) | (_, None) => true,
                (Some(LBracket | LBrace | Comma), _) => true,
                (_, Some(Newline | RBracket | RBrace | Comma | Pipes)) => true,
                _ => self.in_parens(),
            };

            if drop {
                return;
            }
        }

        out.emit(tok);
    }

    fn name(&self) -> &'static str {
        "newline-elision"
    }
}

/// Drop newlines made redundant by indentation markers.
///
/// A newline is dropped if it follows `indent` or `=`,
///   precedes `else`, `catch`, `finally`, or `dedent`,
///   or begins or ends the stream.
///
/// A newline following `=` is insignificant,
///   and so the value of an assignment may begin on the next line.
#[derive(Debug, Default, Clone, Copy)]
pub struct NewlineCleanup;

impl<'s> Rewriter<'s> for NewlineCleanup {
    fn rewrite(
        &mut self,
        tok: Token<'s>,
        view: &mut Viewer<'s>,
        out: &mut Emit<'s>,
    ) {
        if tok.kind == Newline {
            let drop = match (view.look_back(1), view.look_ahead(0)) {
                (None, _) | (_, None) => true,
                (Some(Indent | Assign), _) => true,
                (_, Some(Else | Catch | Finally | Dedent)) => true,
                _ => false,
            };

            if drop {
                return;
            }
        }

        out.emit(tok);
    }

    fn name(&self) -> &'static str {
        "newline-cleanup"
    }
}
