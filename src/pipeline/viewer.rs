// Bounded lookahead/lookbehind cursor over a token stream
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

//! Cursor through which every pipeline stage observes its input.
//!
//! A [`Viewer`] wraps an upstream [`TokenStream`].
//! Tokens are consumed with [`Iterator::next`];
//!   the most recently consumed token is the _current_ token,
//!   which is the one a [`Rewriter`](super::Rewriter) is rewriting.
//!
//! Lookahead is unbounded but lazy:
//!   [`Viewer::look_ahead`] pulls from upstream only as far as it is asked
//!   to peek and caches what it pulled for later consumption.
//! Lookbehind is bounded by [`global::VIEWER_LOOKBEHIND`];
//!   the oldest tokens are forgotten.

use crate::{
    global::{self, SourceOffset},
    token::{Token, TokenKind, TokenStream},
};
use arrayvec::ArrayVec;
use std::collections::VecDeque;

pub struct Viewer<'s> {
    upstream: TokenStream<'s>,

    /// Tokens pulled from upstream but not yet consumed.
    ahead: VecDeque<Token<'s>>,

    /// Consumed tokens,
    ///   most recent last.
    behind: ArrayVec<Token<'s>, { global::VIEWER_LOOKBEHIND }>,
}

impl<'s> Viewer<'s> {
    pub fn new(upstream: TokenStream<'s>) -> Self {
        Self {
            upstream,
            ahead: VecDeque::new(),
            behind: ArrayVec::new(),
        }
    }

    /// Kind of the token `n` positions after the current token without
    ///   consuming it.
    ///
    /// `look_ahead(0)` is the next token that [`Iterator::next`] will
    ///   yield.
    /// Returns [`None`] if the stream ends first.
    pub fn look_ahead(&mut self, n: usize) -> Option<TokenKind> {
        while self.ahead.len() <= n {
            match self.upstream.next() {
                Some(tok) => self.ahead.push_back(tok),
                None => break,
            }
        }

        self.ahead.get(n).map(|tok| tok.kind)
    }

    /// Kind of the token `n` positions before the current token.
    ///
    /// `look_back(0)` is the current token and `look_back(1)` its
    ///   predecessor.
    /// Returns [`None`] at the start of the stream or when `n` exceeds the
    ///   lookbehind capacity.
    pub fn look_back(&self, n: usize) -> Option<TokenKind> {
        self.behind
            .len()
            .checked_sub(n + 1)
            .and_then(|i| self.behind.get(i))
            .map(|tok| tok.kind)
    }

    /// The most recently consumed token.
    pub fn current(&self) -> Option<&Token<'s>> {
        self.behind.last()
    }

    /// Byte offset immediately following the current token,
    ///   or `0` if nothing has yet been consumed.
    pub fn offset(&self) -> SourceOffset {
        self.current().map(|tok| tok.span.end()).unwrap_or(0)
    }

    /// A zero-width token at [`Viewer::offset`].
    pub fn pseudo_token(&self, kind: TokenKind) -> Token<'s> {
        Token::pseudo(kind, self.offset())
    }

    /// A zero-width token at `offset`.
    pub fn pseudo_token_at(
        &self,
        kind: TokenKind,
        offset: SourceOffset,
    ) -> Token<'s> {
        Token::pseudo(kind, offset)
    }

    /// Copy of `tok` reclassified as `kind`.
    pub fn change_type(&self, tok: Token<'s>, kind: TokenKind) -> Token<'s> {
        tok.with_kind(kind)
    }

    /// A token of kind `kind` covering `len` bytes of the current token
    ///   beginning `offset` bytes into it.
    ///
    /// The chunk is clamped to the current token.
    /// If the requested range does not fall on character boundaries,
    ///   the chunk retains its span but has no text.
    pub fn chunk_token(
        &self,
        kind: TokenKind,
        offset: usize,
        len: usize,
    ) -> Token<'s> {
        match self.current() {
            Some(parent) => {
                let start = offset.min(parent.text.len());
                let end = start.saturating_add(len).min(parent.text.len());

                Token {
                    kind,
                    text: parent.text.get(start..end).unwrap_or(""),
                    span: parent.span.slice(offset, len),
                    loc: None,
                }
            }

            None => self.pseudo_token(kind),
        }
    }
}

impl<'s> Iterator for Viewer<'s> {
    type Item = Token<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        let tok = self.ahead.pop_front().or_else(|| self.upstream.next())?;

        if self.behind.is_full() {
            self.behind.remove(0);
        }
        self.behind.push(tok);

        Some(tok)
    }
}
