// Function literal disambiguation
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

//! Calls versus function literals.
//!
//! A parenthesized list is a parameter list if it is followed by an
//!   arrow, a generator or binding modifier, or a body:
//!
//! ```text
//! (a, b) => a + b        # function literal
//! f (a, b)               # call
//! ```
//!
//! The lexer cannot distinguish these,
//!   and an LR(1) grammar cannot either without an unbounded amount of
//!   lookahead.
//! [`FnLiteral`] withholds each outermost parenthesized group until it
//!   closes,
//!     then replays it with an `fn` marker before every `(` whose `)` was
//!     followed by one of `=>`, `->`, `*`, `~`, `~*`, or `{`.

use crate::{
    pipeline::{Backpatch, Emit, Rewriter, Viewer},
    token::{Token, TokenKind},
};

use TokenKind::*;

/// Insert `fn` before parameter lists.
///
/// See the [module-level documentation](self) for more information.
#[derive(Debug, Default)]
pub struct FnLiteral<'s> {
    groups: Backpatch<'s>,
}

/// Whether a token of kind `kind` following `)` makes the group a
///   parameter list.
fn follows_params(kind: Option<TokenKind>) -> bool {
    matches!(
        kind,
        Some(FatArrow | Arrow | Star | Tilde | TildeStar | LBrace)
    )
}

impl<'s> Rewriter<'s> for FnLiteral<'s> {
    fn rewrite(
        &mut self,
        tok: Token<'s>,
        view: &mut Viewer<'s>,
        out: &mut Emit<'s>,
    ) {
        match tok.kind {
            LParen => {
                self.groups.open(());
                self.groups.buffer(tok);
            }

            RParen if self.groups.is_open() => {
                self.groups.buffer(tok);

                if let Some((pos, ())) = self.groups.close() {
                    if follows_params(view.look_ahead(0)) {
                        self.groups.mark(pos);
                    }
                }

                if !self.groups.is_open() {
                    self.groups.replay(Fn, out);
                }
            }

            _ if self.groups.is_open() => self.groups.buffer(tok),
            _ => out.emit(tok),
        }
    }

    fn finish(&mut self, _view: &mut Viewer<'s>, out: &mut Emit<'s>) {
        self.groups.flush(Fn, out);
    }

    fn name(&self) -> &'static str {
        "fn-literal"
    }
}
