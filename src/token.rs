// Tokens shared by the lexer, pipeline, and parser
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

//! Tokens of the defscript language.
//!
//! A [`Token`] is a [`TokenKind`] paired with the slice of source text it
//!   was lexed from and the [`Span`] of that slice.
//! The set of kinds is closed:
//!   it contains every kind the [lexer](crate::lex) produces,
//!   plus every kind that the [pipeline](crate::pipeline) synthesizes
//!     or reclassifies into.
//!
//! Each kind has a canonical name,
//!   which is the name of the terminal that the grammar uses for it
//!   (see [`TokenKind::as_str`]).
//! Parse tables are keyed by these names.

use crate::span::{SourceLocation, Span};
use std::{fmt::Display, str::FromStr};

/// Generate [`TokenKind`] along with its name mapping.
///
/// This keeps the variant list and the terminal names in lockstep.
macro_rules! token_kinds {
    ($(
        $(#[$attr:meta])*
        $variant:ident => $name:literal,
    )+) => {
        /// Kind of a [`Token`].
        ///
        /// See the [module-level documentation](self) for more
        ///   information.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u8)]
        pub enum TokenKind {
            $(
                $(#[$attr])*
                $variant,
            )+
        }

        impl TokenKind {
            /// Every kind,
            ///   in declaration order.
            ///
            /// The index of each kind in this array is its discriminant.
            pub const ALL: &'static [TokenKind] = &[$(TokenKind::$variant,)+];

            /// Canonical terminal name of this kind.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(TokenKind::$variant => $name,)+
                }
            }
        }

        impl FromStr for TokenKind {
            type Err = UnknownTokenKind;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(TokenKind::$variant),)+
                    _ => Err(UnknownTokenKind(s.into())),
                }
            }
        }
    };
}

token_kinds! {
    /// Horizontal whitespace.
    Ws => "ws",
    /// Line comment beginning with `#`.
    Comment => "comment",
    /// One or more line breaks,
    ///   including the indentation of the line that follows.
    Newline => "nl",

    /// Single-quoted string without interpolation.
    SimpleString => "simple-string",
    /// Double-quoted string that may contain `{…}` interpolations.
    RichString => "rich-string",
    /// Snippet of an embedded language.
    Embedded => "embedded",
    Number => "number",
    Id => "id",
    /// `@` or `this`.
    This => "this",
    /// `@@`.
    SymbolRef => "@@",
    True => "true",
    False => "false",
    Null => "null",
    Undefined => "undefined",

    Def => "def",
    In => "in",
    On => "on",
    Do => "do",
    For => "for",
    And => "and",
    Or => "or",
    Not => "not",
    If => "if",
    Else => "else",
    Return => "return",
    While => "while",
    Function => "function",
    Await => "await",
    Yield => "yield",
    Break => "break",
    Continue => "continue",
    Try => "try",
    Catch => "catch",
    Finally => "finally",
    Throw => "throw",
    New => "new",
    Class => "class",
    Static => "static",
    Import => "import",
    Export => "export",
    As => "as",
    From => "from",
    Default => "default",

    LBrace => "{",
    RBrace => "}",
    LBracket => "[",
    RBracket => "]",
    LParen => "(",
    RParen => ")",
    /// A run of one or more `|`.
    Pipes => "pipes",
    Arrow => "->",
    FatArrow => "=>",
    /// `==`, `!=`, `<=`, `>=`, `<`, or `>`.
    Compare => "compare",
    /// `+=`, `-=`, `*=`, or `/=`.
    Reassign => "reassign",
    Assign => "=",
    Define => ":=",
    Dot => ".",
    Spread => "...",
    Comma => ",",
    Colon => ":",
    Tilde => "~",
    TildeStar => "~*",
    /// `+` or `-`.
    Linear => "linear",
    /// `*`, `/`, `//`, or `%`.
    Scalar => "scalar",
    Pow => "pow",
    Bang => "!",

    /// Opens an implicit block.
    Indent => "indent",
    /// Closes an implicit block.
    Dedent => "dedent",
    /// Marks a parenthesized parameter list as a function literal.
    Fn => "fn",
    /// Marks an object or array pattern as a destructuring assignment.
    AssignMarker => "assign",
    /// Implicit receiver of a cascade.
    Obj => "obj",
    /// Cascade reference;
    ///   a run of pipes followed by `.`.
    Ref => "ref",
    /// `*` in a spread or import/export position.
    Star => "*",
    /// Literal run of a rich string.
    StringLiteral => "string-literal",
    /// Delimiter of a rich string.
    Quote => "\"",
    /// Embedded snippet contained on a single line.
    EmbeddedSingleLine => "embedded-sl",
    /// Embedded snippet spanning multiple lines.
    EmbeddedMultiLine => "embedded-ml",
}

assert_eq_size!(TokenKind, u8);

impl TokenKind {
    /// Index of this kind within [`TokenKind::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether this kind is insignificant to the grammar.
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Ws | TokenKind::Comment)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A string did not name any [`TokenKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTokenKind(pub String);

impl Display for UnknownTokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown token kind `{}`", self.0)
    }
}

impl std::error::Error for UnknownTokenKind {}

/// A lexeme of source text.
///
/// Tokens are small [`Copy`] values borrowing their text from the source
///   string.
/// Pseudo-tokens synthesized by the pipeline have empty text and a
///   zero-length span at the point of synthesis.
///
/// The location is populated only after all pipeline rewriting is
///   complete;
///     see [`Locator`](crate::span::Locator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'s> {
    pub kind: TokenKind,
    pub text: &'s str,
    pub span: Span,
    pub loc: Option<SourceLocation>,
}

impl<'s> Token<'s> {
    pub fn new(kind: TokenKind, text: &'s str, span: Span) -> Self {
        Self {
            kind,
            text,
            span,
            loc: None,
        }
    }

    /// A zero-width token of the given kind at byte `offset`.
    pub fn pseudo(
        kind: TokenKind,
        offset: crate::global::SourceOffset,
    ) -> Self {
        Self::new(kind, "", Span::at(offset))
    }

    /// Copy of this token with its kind replaced.
    pub fn with_kind(self, kind: TokenKind) -> Self {
        Self { kind, ..self }
    }

    pub fn with_loc(self, loc: SourceLocation) -> Self {
        Self {
            loc: Some(loc),
            ..self
        }
    }

    /// Whether this token was synthesized rather than lexed.
    pub fn is_pseudo(&self) -> bool {
        self.text.is_empty() && self.span.is_empty()
    }
}

impl<'s> Display for Token<'s> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.text.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "`{}`", self.text)
        }
    }
}

/// A lazy stream of tokens borrowing from a source string.
///
/// This is the currency of every boundary in the front end:
///   the lexer produces one,
///   each pipeline stage consumes one and produces another,
///   and the parsing engine is fed from one.
pub type TokenStream<'s> = Box<dyn Iterator<Item = Token<'s>> + 's>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn kind_name_round_trip() {
        for &kind in TokenKind::ALL {
            assert_eq!(Ok(kind), kind.as_str().parse::<TokenKind>());
        }
    }

    #[test]
    fn index_matches_position_in_all() {
        for (i, &kind) in TokenKind::ALL.iter().enumerate() {
            assert_eq!(i, kind.index());
        }
    }

    #[test]
    fn unknown_kind_name() {
        assert_eq!(
            Err(UnknownTokenKind("nope".into())),
            "nope".parse::<TokenKind>()
        );
    }

    #[test]
    fn display_prefers_text() {
        let tok = Token::new(TokenKind::Id, "foo", Span::new(0, 3));
        assert_eq!("`foo`", tok.to_string());

        assert_eq!("indent", Token::pseudo(TokenKind::Indent, 3).to_string());
    }

    #[test]
    fn pseudo_tokens_are_zero_width() {
        let tok = Token::pseudo(TokenKind::Fn, 7);

        assert!(tok.is_pseudo());
        assert_eq!(Span::at(7), tok.span);
        assert_eq!("", tok.text);
    }
}
