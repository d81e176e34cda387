// Star operator disambiguation
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

//! Disambiguation of `*`.

use crate::{
    pipeline::{Emit, Rewriter, Viewer},
    token::{Token, TokenKind},
};

use TokenKind::*;

/// Reclassify multiplicative `*` as [`Star`](TokenKind::Star) where it
///   cannot be multiplication.
///
/// This is the case when it precedes `{`
///   (a generator body)
///   or follows `import` or `export`
///   (a namespace import or re-export).
#[derive(Debug, Default, Clone, Copy)]
pub struct StarOperator;

impl<'s> Rewriter<'s> for StarOperator {
    fn rewrite(
        &mut self,
        tok: Token<'s>,
        view: &mut Viewer<'s>,
        out: &mut Emit<'s>,
    ) {
        let is_star = tok.kind == Scalar
            && tok.text == "*"
            && (view.look_ahead(0) == Some(LBrace)
                || matches!(view.look_back(1), Some(Import | Export)));

        out.emit(if is_star { view.change_type(tok, Star) } else { tok });
    }

    fn name(&self) -> &'static str {
        "star-operator"
    }
}
