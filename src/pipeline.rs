// Token-transduction pipeline
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

//! Token-transduction pipeline.
//!
//! The lexer is deliberately context-free:
//!   it cannot tell a call from a function literal,
//!   an object literal from a destructuring pattern,
//!   or where an implicit block ends.
//! The pipeline recovers that structure by rewriting the token stream
//!   in a series of independent stages,
//!     each using only a small window of lookahead and lookbehind plus
//!     state proportional to bracket depth.
//!
//! Each stage is a [`Rewriter`].
//! A stage receives every token of its input in order through
//!   [`Rewriter::rewrite`] along with a [`Viewer`] positioned on that
//!   token,
//!     and pushes zero or more tokens onto an [`Emit`] queue.
//! [`Rewrite`] drives a single stage as a lazy [`Iterator`],
//!   and a [`Pipeline`] chains stages such that the [`Viewer`] of stage
//!   _n_ wraps the output of stage _n-1_:
//!
//! ```text
//!   lexer -> Viewer -> stage 1 -> Viewer -> stage 2 -> ... -> parser
//! ```
//!
//! Everything is pull-driven;
//!   a token is requested from the lexer only when some downstream stage
//!   demands it,
//!     and a consumer may stop pulling at any time.
//!
//! Stages never fail.
//! Malformed input
//!   (unbalanced brackets, for example)
//!   passes through on a best-effort basis and is rejected by the
//!   [parsing engine](crate::parse).
//!
//! The standard stages,
//!   in the order that [`Pipeline::standard`] applies them,
//!   are:
//!
//!   1. [`Trivia`] drops whitespace and comments;
//!   2. [`NewlineElision`] drops newlines that cannot separate statements;
//!   3. [`Indentation`] synthesizes `indent` and `dedent` markers;
//!   4. [`StarOperator`] distinguishes `*` from multiplication;
//!   5. [`FnLiteral`] marks parameter lists with `fn`;
//!   6. [`NewlineCleanup`] drops newlines made redundant by markers;
//!   7. [`Destructure`] marks destructuring patterns with `assign`;
//!   8. [`Cascade`] converts `|.` into `ref` and `obj`;
//!   9. [`MemberName`] turns keywords after `.` into identifiers;
//!   10. [`Interpolation`] expands rich strings; and
//!   11. [`EmbeddedSnippet`] classifies embedded snippets.
//!
//! Tracing
//! =======
//! When the `pipeline-trace-stderr` feature is enabled,
//!   every token emitted by every stage is written to stderr prefixed by
//!   the name of the stage.
//! _These traces are not meant to be machine-readable!_

mod backpatch;
mod stage;
mod viewer;

pub use backpatch::Backpatch;
pub use stage::{
    Cascade, Destructure, EmbeddedSnippet, FnLiteral, Indentation,
    Interpolation, MemberName, NewlineCleanup, NewlineElision, StarOperator,
    Trivia,
};
pub use viewer::Viewer;

use crate::{
    lex::Retokenize,
    token::{Token, TokenStream},
};
use std::{collections::VecDeque, rc::Rc};

/// A single stream-rewriting stage.
///
/// See the [module-level documentation](self) for more information.
pub trait Rewriter<'s> {
    /// Rewrite the token `tok`,
    ///   which the [`Viewer`] has just consumed,
    ///   by pushing its replacement
    ///     (if any)
    ///   onto `out`.
    ///
    /// A stage may also withhold tokens and emit them during a later
    ///   call.
    fn rewrite(
        &mut self,
        tok: Token<'s>,
        view: &mut Viewer<'s>,
        out: &mut Emit<'s>,
    );

    /// Input is exhausted.
    ///
    /// Any withheld tokens must be emitted here,
    ///   since they are otherwise lost.
    fn finish(&mut self, _view: &mut Viewer<'s>, _out: &mut Emit<'s>) {}

    /// Human-readable name of the stage for tracing.
    fn name(&self) -> &'static str;
}

/// Output queue of a [`Rewriter`].
#[derive(Debug, Default)]
pub struct Emit<'s> {
    queue: VecDeque<Token<'s>>,
}

impl<'s> Emit<'s> {
    pub fn emit(&mut self, tok: Token<'s>) {
        self.queue.push_back(tok);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Remove and yield all queued tokens in order.
    pub fn drain(&mut self) -> impl Iterator<Item = Token<'s>> + '_ {
        self.queue.drain(..)
    }

    fn pop(&mut self) -> Option<Token<'s>> {
        self.queue.pop_front()
    }
}

impl<'s> Extend<Token<'s>> for Emit<'s> {
    fn extend<I: IntoIterator<Item = Token<'s>>>(&mut self, iter: I) {
        self.queue.extend(iter)
    }
}

/// Lazy [`Iterator`] applying a single [`Rewriter`] to a [`Viewer`].
pub struct Rewrite<'s> {
    stage: Box<dyn Rewriter<'s> + 's>,
    view: Viewer<'s>,
    out: Emit<'s>,
    finished: bool,
}

impl<'s> Rewrite<'s> {
    pub fn new(stage: Box<dyn Rewriter<'s> + 's>, view: Viewer<'s>) -> Self {
        Self {
            stage,
            view,
            out: Emit::default(),
            finished: false,
        }
    }

    #[cfg(feature = "pipeline-trace-stderr")]
    fn trace(&self, tok: &Token<'s>) {
        eprintln!("[{}] {tok} {:?} {}", self.stage.name(), tok.kind, tok.span);
    }

    #[cfg(not(feature = "pipeline-trace-stderr"))]
    fn trace(&self, _tok: &Token<'s>) {}
}

impl<'s> Iterator for Rewrite<'s> {
    type Item = Token<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(tok) = self.out.pop() {
                self.trace(&tok);
                return Some(tok);
            }

            if self.finished {
                return None;
            }

            match self.view.next() {
                Some(tok) => {
                    self.stage.rewrite(tok, &mut self.view, &mut self.out)
                }
                None => {
                    self.stage.finish(&mut self.view, &mut self.out);
                    self.finished = true;
                }
            }
        }
    }
}

/// An ordered list of [`Rewriter`]s.
///
/// Stages hold state for a single run,
///   and so a pipeline is consumed by [`Pipeline::process`];
///     build a new one for each token stream.
#[derive(Default)]
pub struct Pipeline<'s> {
    stages: Vec<Box<dyn Rewriter<'s> + 's>>,
}

impl<'s> Pipeline<'s> {
    /// An empty pipeline that passes tokens through unchanged.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append a stage,
    ///   which will receive the output of all prior stages.
    pub fn with<R: Rewriter<'s> + 's>(mut self, stage: R) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// The complete defscript pipeline.
    ///
    /// `retok` is used to tokenize string interpolations;
    ///   see [`Interpolation`].
    pub fn standard(retok: Rc<dyn Retokenize<'s> + 's>) -> Self {
        Self::new()
            .with(Trivia)
            .with(NewlineElision::default())
            .with(Indentation::default())
            .with(StarOperator)
            .with(FnLiteral::default())
            .with(NewlineCleanup)
            .with(Destructure::default())
            .with(Cascade)
            .with(MemberName)
            .with(Interpolation::new(retok))
            .with(EmbeddedSnippet)
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Lazily apply each stage in order to `toks`.
    pub fn process(self, toks: TokenStream<'s>) -> TokenStream<'s> {
        self.stages.into_iter().fold(toks, |upstream, stage| {
            Box::new(Rewrite::new(stage, Viewer::new(upstream)))
        })
    }
}

#[cfg(test)]
mod test;
