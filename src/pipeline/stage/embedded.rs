// Embedded snippet classification
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

//! Single- and multi-line embedded snippets.

use crate::{
    pipeline::{Emit, Rewriter, Viewer},
    token::{Token, TokenKind},
};

/// Reclassify [`Embedded`](TokenKind::Embedded) snippets by whether they
///   span multiple lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedSnippet;

impl<'s> Rewriter<'s> for EmbeddedSnippet {
    fn rewrite(
        &mut self,
        tok: Token<'s>,
        view: &mut Viewer<'s>,
        out: &mut Emit<'s>,
    ) {
        if tok.kind == TokenKind::Embedded {
            let kind = match memchr::memchr(b'\n', tok.text.as_bytes()) {
                Some(_) => TokenKind::EmbeddedMultiLine,
                None => TokenKind::EmbeddedSingleLine,
            };

            out.emit(view.change_type(tok, kind));
        } else {
            out.emit(tok);
        }
    }

    fn name(&self) -> &'static str {
        "embedded-snippet"
    }
}
