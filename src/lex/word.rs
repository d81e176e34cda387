// Word lexer
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

//! A lexer of whitespace-delimited words.
//!
//! [`WordLexer`] names each token by the terminal name of its kind,
//!   so that `( a , b ) => a` lexes as
//!   `(`, `id`, `,`, `id`, `)`, `=>`, `id`.
//! It exists to exercise grammars and the pipeline without depending on
//!   the full language lexer;
//!     every token must be separated by whitespace,
//!     with the exception of strings and snippets:
//!
//!   - `"…"` is a rich string,
//!       which may contain `{…}` interpolations with arbitrary content;
//!   - `'…'` is a simple string;
//!   - `` `…` `` is an embedded snippet; and
//!   - `#` begins a comment that runs to the end of the line.
//!
//! Words that name a kind the pipeline synthesizes
//!   (like `indent` or `fn`)
//!   are identifiers,
//!     as are any other unrecognized words.

use super::{fetch_interpolation, Lexer};
use crate::{
    span::Span,
    token::{Token, TokenKind, TokenStream},
};

#[derive(Debug, Default, Clone, Copy)]
pub struct WordLexer;

impl Lexer for WordLexer {
    fn lex<'s>(&self, src: &'s str) -> TokenStream<'s> {
        Box::new(WordLex { src, pos: 0 })
    }
}

struct WordLex<'s> {
    src: &'s str,
    pos: usize,
}

impl<'s> WordLex<'s> {
    fn scan_while(&self, from: usize, pred: impl Fn(u8) -> bool) -> usize {
        self.src.as_bytes()[from..]
            .iter()
            .position(|&b| !pred(b))
            .map(|n| from + n)
            .unwrap_or(self.src.len())
    }

    /// End of a quoted string beginning at `self.pos`,
    ///   honoring escapes and optionally skipping interpolations.
    fn scan_quoted(&self, quote: u8, interp: bool) -> usize {
        let bytes = self.src.as_bytes();
        let mut i = self.pos + 1;
        let mut escaped = false;

        while i < bytes.len() {
            let c = bytes[i];

            if interp && c == b'{' && !escaped {
                let body = fetch_interpolation(self.src, i + 1);
                i = (i + body.len() + 2).min(bytes.len());
                continue;
            }

            if c == quote && !escaped {
                return i + 1;
            }

            escaped = c == b'\\' && !escaped;
            i += 1;
        }

        bytes.len()
    }
}

fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// Kind of a bare word.
fn classify(word: &str) -> TokenKind {
    use TokenKind::*;

    match word {
        "@" => return This,
        "*" | "/" | "//" | "%" => return Scalar,
        "+" | "-" => return Linear,
        "^" => return Pow,
        "==" | "!=" | "<=" | ">=" | "<" | ">" => return Compare,
        "+=" | "-=" | "*=" | "/=" => return Reassign,
        _ => {}
    }

    if word.bytes().all(|b| b == b'|') {
        return Pipes;
    }

    if word.bytes().next().map_or(false, |b| b.is_ascii_digit()) {
        return Number;
    }

    match word.parse::<TokenKind>() {
        Ok(kind)
            if kind.index() <= Bang.index()
                && !matches!(kind, Ws | Comment | Newline) =>
        {
            kind
        }
        _ => Id,
    }
}

impl<'s> Iterator for WordLex<'s> {
    type Item = Token<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.src.as_bytes();
        let start = self.pos;
        let c = *bytes.get(start)?;

        let (kind, end) = match c {
            b' ' | b'\t' => (
                TokenKind::Ws,
                self.scan_while(start, |b| b == b' ' || b == b'\t'),
            ),
            b'\r' | b'\n' => {
                (TokenKind::Newline, self.scan_while(start, is_space))
            }
            b'#' => {
                (TokenKind::Comment, self.scan_while(start, |b| b != b'\n'))
            }
            b'"' => (TokenKind::RichString, self.scan_quoted(b'"', true)),
            b'\'' => (TokenKind::SimpleString, self.scan_quoted(b'\'', false)),
            b'`' => (TokenKind::Embedded, self.scan_quoted(b'`', false)),
            _ => {
                let end = self.scan_while(start, |b| !is_space(b));
                (classify(&self.src[start..end]), end)
            }
        };

        self.pos = end;

        Some(Token::new(
            kind,
            &self.src[start..end],
            Span::from_byte_interval((start, end)),
        ))
    }
}
