// Cascade retokenization
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

//! Cascade references.
//!
//! A cascade applies a series of operations to a shared receiver:
//!
//! ```text
//! canvas
//!   |.moveTo(0, 0)
//!   |.lineTo(5, 5)
//! ```
//!
//! [`Cascade`] turns each run of pipes followed by `.` into a
//!   [`Ref`](TokenKind::Ref) followed by a synthetic
//!   [`Obj`](TokenKind::Obj) standing in for the implicit receiver,
//!     so that `|.moveTo` parses like the member access `obj.moveTo`.

use crate::{
    pipeline::{Emit, Rewriter, Viewer},
    token::{Token, TokenKind},
};

use TokenKind::*;

#[derive(Debug, Default, Clone, Copy)]
pub struct Cascade;

impl<'s> Rewriter<'s> for Cascade {
    fn rewrite(
        &mut self,
        tok: Token<'s>,
        view: &mut Viewer<'s>,
        out: &mut Emit<'s>,
    ) {
        if tok.kind == Pipes && view.look_ahead(0) == Some(Dot) {
            out.emit(view.change_type(tok, Ref));
            out.emit(view.pseudo_token_at(Obj, tok.span.end()));
        } else {
            out.emit(tok);
        }
    }

    fn name(&self) -> &'static str {
        "cascade"
    }
}
