// Destructuring assignment disambiguation
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

//! Patterns versus literals.
//!
//! An object or array literal at the start of a statement is a
//!   destructuring pattern if it is followed by `=` or `:=`:
//!
//! ```text
//! {x, y} = point
//! [head, tail] := split(list)
//! ```
//!
//! Like [`FnLiteral`](super::FnLiteral),
//!   [`Destructure`] withholds each outermost `{…}` or `[…]` group until
//!   it closes,
//!     then replays it with an `assign` marker before every eligible
//!     group followed by an assignment operator.
//! A group is eligible only where a statement or declaration target may
//!   begin:
//!     at the start of the stream,
//!     or after `def`, `,`, a newline, or `indent`.

use crate::{
    pipeline::{Backpatch, Emit, Rewriter, Viewer},
    token::{Token, TokenKind},
};

use TokenKind::*;

/// Insert `assign` before destructuring patterns.
#[derive(Debug, Default)]
pub struct Destructure<'s> {
    /// Groups paired with their eligibility.
    groups: Backpatch<'s, bool>,
}

fn is_eligible_after(kind: Option<TokenKind>) -> bool {
    matches!(kind, None | Some(Def | Comma | Newline | Indent))
}

impl<'s> Rewriter<'s> for Destructure<'s> {
    fn rewrite(
        &mut self,
        tok: Token<'s>,
        view: &mut Viewer<'s>,
        out: &mut Emit<'s>,
    ) {
        match tok.kind {
            LBrace | LBracket => {
                self.groups.open(is_eligible_after(view.look_back(1)));
                self.groups.buffer(tok);
            }

            RBrace | RBracket if self.groups.is_open() => {
                self.groups.buffer(tok);

                if let Some((pos, true)) = self.groups.close() {
                    if matches!(view.look_ahead(0), Some(Assign | Define)) {
                        self.groups.mark(pos);
                    }
                }

                if !self.groups.is_open() {
                    self.groups.replay(AssignMarker, out);
                }
            }

            _ if self.groups.is_open() => self.groups.buffer(tok),
            _ => out.emit(tok),
        }
    }

    fn finish(&mut self, _view: &mut Viewer<'s>, out: &mut Emit<'s>) {
        self.groups.flush(AssignMarker, out);
    }

    fn name(&self) -> &'static str {
        "destructure"
    }
}
