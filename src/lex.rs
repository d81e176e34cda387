// Lexer boundary
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

//! Boundary with the character-level lexer.
//!
//! The lexer itself is supplied by the caller through [`Lexer`];
//!   this crate only defines what it must produce:
//!     a lazy [`TokenStream`] whose spans are byte offsets into the source
//!     string that was lexed,
//!     including [`Ws`](TokenKind::Ws) and
//!     [`Comment`](TokenKind::Comment) trivia,
//!     which the pipeline discards.
//!
//! String interpolation requires lexing fragments of a rich string
//!   independently of the surrounding source.
//! That capability is [`Retokenize`],
//!   which the [pipeline](crate::pipeline) uses to expand each `{…}` of a
//!   rich string;
//!     [`Frontend`](crate::frontend::Frontend) provides it by running
//!     its lexer and the full pipeline over the fragment.

mod word;

pub use word::WordLexer;

use crate::token::TokenStream;

#[cfg(doc)]
use crate::token::TokenKind;

/// Primitive character-level lexer.
pub trait Lexer {
    /// Lazily tokenize `src`.
    ///
    /// Spans must be relative to the start of `src`.
    fn lex<'s>(&self, src: &'s str) -> TokenStream<'s>;
}

/// Tokenize a fragment of a larger source into fully processed tokens.
pub trait Retokenize<'s> {
    /// Tokenize `fragment`,
    ///   producing spans relative to the start of `fragment`.
    ///
    /// The caller is responsible for translating spans into the
    ///   coordinates of the enclosing source.
    fn retokenize(&self, fragment: &'s str) -> TokenStream<'s>;
}

/// Extract the body of a `{…}` interpolation from `text`.
///
/// `start` is the byte offset immediately following the opening `{`.
/// The returned slice excludes both braces.
/// Nested braces are balanced,
///   and braces appearing within single- or double-quoted strings
///   (honoring backslash escapes) are ignored.
///
/// If the interpolation is never closed,
///   the remainder of `text` is returned.
///
/// ```
/// # use defscript::lex::fetch_interpolation;
/// let text = r#""a {f({x: 1})} b""#;
/// assert_eq!("f({x: 1})", fetch_interpolation(text, 4));
/// ```
pub fn fetch_interpolation(text: &str, start: usize) -> &str {
    let rest = text.get(start..).unwrap_or("");
    let bytes = rest.as_bytes();

    let mut depth = 1usize;
    let mut quote: Option<u8> = None;
    let mut escaped = false;

    for (i, &c) in bytes.iter().enumerate() {
        match quote {
            Some(q) => {
                if c == q && !escaped {
                    quote = None;
                }
                escaped = c == b'\\' && !escaped;
            }

            None => match c {
                b'\'' | b'"' => quote = Some(c),
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        return &rest[..i];
                    }
                }
                _ => {}
            },
        }
    }

    rest
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn flat_interpolation() {
        assert_eq!("x", fetch_interpolation("{x} y", 1));
    }

    #[test]
    fn nested_braces_are_balanced() {
        assert_eq!("{a: {b}}", fetch_interpolation("{{a: {b}}}", 1));
    }

    #[test]
    fn braces_in_strings_are_ignored() {
        assert_eq!("'}' + \"{\"", fetch_interpolation("{'}' + \"{\"}", 1));
    }

    #[test]
    fn escaped_quote_does_not_end_string() {
        assert_eq!(r"'\'}'", fetch_interpolation(r"{'\'}'}", 1));
    }

    #[test]
    fn unterminated_returns_remainder() {
        assert_eq!("a + {b", fetch_interpolation("{a + {b", 1));
    }

    #[test]
    fn start_past_end_is_empty() {
        assert_eq!("", fetch_interpolation("{", 5));
    }
}
