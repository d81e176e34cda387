// Front end facade
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

//! Source text to semantic value.
//!
//! [`Frontend`] ties together the three phases of the front end:
//!
//!   1. lexing with a caller-provided [`Lexer`];
//!   2. rewriting with the [standard pipeline](Pipeline::standard); and
//!   3. parsing with a [`Grammar`],
//!        after stamping each token with its [`SourceLocation`].
//!
//! The frontend is also the [`Retokenize`] implementation used to expand
//!   rich string interpolations,
//!     so that the body of each `{…}` is lexed by the same lexer and
//!     rewritten by the same pipeline as the enclosing source.
//!
//! ```
//! use defscript::{frontend::Frontend, lex::WordLexer, token::TokenKind};
//!
//! let frontend = Frontend::new(WordLexer);
//! let kinds: Vec<_> = frontend.tokenize("x = 1").map(|t| t.kind).collect();
//!
//! assert_eq!(
//!     vec![TokenKind::Id, TokenKind::Assign, TokenKind::Number],
//!     kinds,
//! );
//! ```
//!
//! [`SourceLocation`]: crate::span::SourceLocation

use crate::{
    lex::{Lexer, Retokenize},
    parse::{Context, Grammar, ParseError},
    pipeline::Pipeline,
    span::Locator,
    token::{Token, TokenStream},
};
use std::rc::Rc;

/// Lexer and pipeline for a single language.
///
/// Cloning is cheap;
///   the lexer is shared.
pub struct Frontend<L> {
    lexer: Rc<L>,
}

impl<L> Clone for Frontend<L> {
    fn clone(&self) -> Self {
        Self {
            lexer: Rc::clone(&self.lexer),
        }
    }
}

impl<L: Lexer> Frontend<L> {
    pub fn new(lexer: L) -> Self {
        Self {
            lexer: Rc::new(lexer),
        }
    }

    /// Lazily lex and rewrite `src`.
    ///
    /// Tokens do not yet carry locations;
    ///   see [`Frontend::located`].
    pub fn tokenize<'s>(&self, src: &'s str) -> TokenStream<'s>
    where
        L: 's,
    {
        self.tokenize_with(src, |pipeline| pipeline)
    }

    /// Like [`Frontend::tokenize`],
    ///   but letting `extend` append stages to the standard pipeline.
    ///
    /// Appended stages see the output of every standard stage.
    /// They are not applied to the bodies of rich string interpolations,
    ///   which are always retokenized by the standard pipeline alone.
    pub fn tokenize_with<'s, F>(
        &self,
        src: &'s str,
        extend: F,
    ) -> TokenStream<'s>
    where
        L: 's,
        F: FnOnce(Pipeline<'s>) -> Pipeline<'s>,
    {
        extend(Pipeline::standard(Rc::new(self.clone())))
            .process(self.lexer.lex(src))
    }

    /// Lazily lex `src` without rewriting.
    pub fn raw<'s>(&self, src: &'s str) -> TokenStream<'s>
    where
        L: 's,
    {
        self.lexer.lex(src)
    }

    /// Like [`Frontend::tokenize`],
    ///   but stamping each token with its line and column within `src`.
    pub fn located<'s>(&self, src: &'s str) -> impl Iterator<Item = Token<'s>>
    where
        L: 's,
    {
        let locator = Locator::new(src);
        self.tokenize(src).map(move |tok| locator.locate(tok))
    }

    /// Parse `src` with `grammar`,
    ///   reducing within `ctx`.
    pub fn parse<'s, C, V>(
        &self,
        src: &'s str,
        grammar: &Grammar<C, V>,
        ctx: &mut C,
    ) -> Result<V, ParseError>
    where
        L: 's,
        C: Context<V>,
        V: Default + From<Token<'s>>,
    {
        grammar.parse(ctx, self.located(src))
    }
}

impl<'s, L: Lexer + 's> Retokenize<'s> for Frontend<L> {
    fn retokenize(&self, fragment: &'s str) -> TokenStream<'s> {
        self.tokenize(fragment)
    }
}
