// String interpolation splicing
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

//! Expansion of rich strings.
//!
//! A rich string may contain interpolated expressions:
//!
//! ```text
//! "Hello, {user.name}!"
//! ```
//!
//! The lexer produces a single [`RichString`](TokenKind::RichString)
//!   token for the entire string.
//! [`Interpolation`] expands it in place into a sequence the grammar can
//!   parse:
//!
//! ```text
//! "  string-literal  {  id . id  }  string-literal  "
//! ```
//!
//! Each delimiter and literal run is a chunk of the original token,
//!   sharing its source text.
//! Each interpolation body is tokenized independently by a
//!   [`Retokenize`] implementation
//!     (which for the standard pipeline runs this same pipeline,
//!       so interpolations may themselves contain rich strings)
//!   and its tokens are translated into the coordinates of the enclosing
//!   source.
//!
//! A string-literal chunk,
//!   possibly empty,
//!   precedes every `{` and every closing `"`,
//!     and so literal chunks and interpolations always alternate.
//! Braces and quotes escaped with a backslash are literal.

use crate::{
    global::SourceOffset,
    lex::{fetch_interpolation, Retokenize},
    pipeline::{Emit, Rewriter, Viewer},
    token::{Token, TokenKind},
};
use std::rc::Rc;

use TokenKind::*;

/// Expand rich strings into literal chunks and interpolations.
///
/// See the [module-level documentation](self) for more information.
pub struct Interpolation<'s> {
    retok: Rc<dyn Retokenize<'s> + 's>,
}

impl<'s> Interpolation<'s> {
    pub fn new(retok: Rc<dyn Retokenize<'s> + 's>) -> Self {
        Self { retok }
    }

    /// Expand the rich string `tok`,
    ///   which must be the current token of `view`.
    fn expand(&self, tok: Token<'s>, view: &Viewer<'s>, out: &mut Emit<'s>) {
        let text = tok.text;
        let bytes = text.as_bytes();

        // Start of the current literal run.
        let mut literal = 0;
        let mut escaped = false;
        let mut i = 0;

        while i < bytes.len() {
            match bytes[i] {
                b'"' if !escaped => {
                    if i > 0 {
                        out.emit(view.chunk_token(
                            StringLiteral,
                            literal,
                            i - literal,
                        ));
                    }

                    out.emit(view.chunk_token(Quote, i, 1));
                    i += 1;
                    literal = i;
                }

                b'{' if !escaped => {
                    let len = i - literal;
                    out.emit(view.chunk_token(StringLiteral, literal, len));
                    out.emit(view.chunk_token(LBrace, i, 1));

                    let body = fetch_interpolation(text, i + 1);
                    let offset = tok.span.start() + (i + 1) as SourceOffset;

                    out.extend(self.retok.retokenize(body).map(|sub| Token {
                        span: sub.span.offset_by(offset),
                        loc: None,
                        ..sub
                    }));

                    let close = i + 1 + body.len();
                    if close < bytes.len() {
                        out.emit(view.chunk_token(RBrace, close, 1));
                    }

                    i = close + 1;
                    literal = i.min(bytes.len());
                }

                c => {
                    escaped = c == b'\\' && !escaped;
                    i += 1;
                    continue;
                }
            }

            escaped = false;
        }

        // Unterminated string.
        if literal < bytes.len() {
            let len = bytes.len() - literal;
            out.emit(view.chunk_token(StringLiteral, literal, len));
        }
    }
}

impl<'s> Rewriter<'s> for Interpolation<'s> {
    fn rewrite(
        &mut self,
        tok: Token<'s>,
        view: &mut Viewer<'s>,
        out: &mut Emit<'s>,
    ) {
        if tok.kind == RichString {
            self.expand(tok, view, out);
        } else {
            out.emit(tok);
        }
    }

    fn name(&self) -> &'static str {
        "interpolation"
    }
}
