// Trivia removal
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

//! Removal of insignificant tokens.

use crate::{
    pipeline::{Emit, Rewriter, Viewer},
    token::Token,
};

/// Drop whitespace and comments.
///
/// This stage is idempotent.
#[derive(Debug, Default, Clone, Copy)]
pub struct Trivia;

impl<'s> Rewriter<'s> for Trivia {
    fn rewrite(
        &mut self,
        tok: Token<'s>,
        _view: &mut Viewer<'s>,
        out: &mut Emit<'s>,
    ) {
        if !tok.kind.is_trivia() {
            out.emit(tok);
        }
    }

    fn name(&self) -> &'static str {
        "trivia"
    }
}
