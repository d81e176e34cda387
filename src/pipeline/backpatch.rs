// Buffer-and-replay insertion of pseudo-tokens
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

//! Backpatching of bracketed groups.
//!
//! Some markers can only be placed _before_ a group once the token
//!   _after_ the group is known:
//!     `(a, b)` is a parameter list only if followed by `=>`,
//!     and `{a, b}` is a pattern only if followed by `=`.
//! [`Backpatch`] withholds every token from the opening of the outermost
//!   group until its close,
//!     recording the buffer position of each opener.
//! When a group closes,
//!   the stage may [`mark`](Backpatch::mark) that opener's position;
//!     when the outermost group closes,
//!     [`replay`](Backpatch::replay) emits the buffer with a pseudo-token
//!     inserted before every marked position.
//!
//! Positions are plain buffer indexes,
//!   so marks never need to reference tokens directly.

use super::Emit;
use crate::token::{Token, TokenKind};
use fxhash::FxHashSet;

/// Group buffer with per-opener data `O`.
#[derive(Debug)]
pub struct Backpatch<'s, O = ()> {
    buffer: Vec<Token<'s>>,
    opens: Vec<(usize, O)>,
    marks: FxHashSet<usize>,
}

impl<'s, O> Default for Backpatch<'s, O> {
    fn default() -> Self {
        Self {
            buffer: Vec::new(),
            opens: Vec::new(),
            marks: FxHashSet::default(),
        }
    }
}

impl<'s, O> Backpatch<'s, O> {
    /// Whether any group is open,
    ///   in which case every token must be [`buffer`](Self::buffer)ed.
    pub fn is_open(&self) -> bool {
        !self.opens.is_empty()
    }

    /// Open a group at the current end of the buffer.
    ///
    /// Call this _before_ buffering the opening token,
    ///   so that the recorded position is that of the opener.
    pub fn open(&mut self, data: O) {
        self.opens.push((self.buffer.len(), data));
    }

    /// Close the innermost group,
    ///   returning the position of its opener and its data.
    ///
    /// Returns [`None`] if no group is open;
    ///   the stack never underflows.
    pub fn close(&mut self) -> Option<(usize, O)> {
        self.opens.pop()
    }

    pub fn buffer(&mut self, tok: Token<'s>) {
        self.buffer.push(tok);
    }

    /// Request that a pseudo-token be inserted before the buffered token
    ///   at `pos` on replay.
    pub fn mark(&mut self, pos: usize) {
        self.marks.insert(pos);
    }

    /// Emit the buffer,
    ///   inserting a pseudo-token of kind `kind` before every marked
    ///   position,
    ///     and clear all marks.
    ///
    /// Each pseudo-token is placed at the start of the token it precedes.
    pub fn replay(&mut self, kind: TokenKind, out: &mut Emit<'s>) {
        for (i, tok) in self.buffer.drain(..).enumerate() {
            if self.marks.contains(&i) {
                out.emit(Token::pseudo(kind, tok.span.start()));
            }

            out.emit(tok);
        }

        self.marks.clear();
    }

    /// Abandon all open groups and replay whatever was buffered.
    ///
    /// This is used at the end of input so that unbalanced groups do
    ///   not swallow the remainder of the stream.
    pub fn flush(&mut self, kind: TokenKind, out: &mut Emit<'s>) {
        self.opens.clear();
        self.replay(kind, out);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::*;
    use TokenKind::*;

    #[test]
    fn replay_inserts_before_marked_positions() {
        let mut sut = Backpatch::<()>::default();
        let mut out = Emit::default();

        for tok in kinds(&[LParen, Id, RParen]) {
            if tok.kind == LParen {
                sut.open(());
            }
            sut.buffer(tok);
        }

        assert_eq!(Some((0, ())), sut.close());
        assert!(!sut.is_open());

        sut.mark(0);
        sut.mark(2);
        sut.replay(Fn, &mut out);

        assert_eq!(vec![Fn, LParen, Id, Fn, RParen], emitted_kinds(out));
    }

    #[test]
    fn marks_do_not_survive_replay() {
        let mut sut = Backpatch::<()>::default();
        let mut out = Emit::default();

        sut.open(());
        sut.buffer(tok(LParen, "(", 0));
        sut.mark(0);
        sut.close();
        sut.replay(Fn, &mut out);

        sut.open(());
        sut.buffer(tok(LParen, "(", 1));
        sut.close();
        sut.replay(Fn, &mut out);

        assert_eq!(vec![Fn, LParen, LParen], emitted_kinds(out));
    }

    #[test]
    fn close_without_open_is_none() {
        let mut sut = Backpatch::<bool>::default();

        assert_eq!(None, sut.close());
    }

    #[test]
    fn pseudo_token_placed_at_marked_token() {
        let mut sut = Backpatch::<()>::default();
        let mut out = Emit::default();

        sut.open(());
        sut.buffer(tok(LBrace, "{", 5));
        sut.mark(0);
        sut.flush(AssignMarker, &mut out);

        let toks: Vec<_> = std::iter::from_fn(|| out.pop()).collect();
        assert_eq!(crate::span::Span::at(5), toks[0].span);
        assert!(!sut.is_open());
    }
}
