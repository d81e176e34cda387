// Table-driven LR parsing engine
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

//! Table-driven LR parsing engine.
//!
//! A [`Grammar`] pairs a [`ParseTable`] with an optional reducer for each
//!   production;
//!     an [`Engine`] executes that grammar over a stream of tokens that
//!     is pushed into it one token at a time,
//!       after which [`Engine::finish`] yields the semantic value of the
//!       start symbol.
//!
//! The engine maintains four stacks that always have equal depth:
//!
//!   - states;
//!   - grammar symbols;
//!   - semantic values; and
//!   - source locations.
//!
//! An empty state stack is equivalent to [`INITIAL_STATE`].
//!
//! Semantic values are opaque to the engine.
//! Shifting a token produces a value via [`From<Token>`],
//!   and reducing a production without a reducer yields the first of its
//!   values,
//!     or [`Default::default`] for an empty production.

use super::{
    trace::{DefaultTrace, ParserTrace},
    Action, Context, ParseError, ParseTable, ProductionId, StateId, Symbol,
    TableFault,
};
use crate::{
    global::INITIAL_STATE,
    span::{Position, SourceLocation},
    token::{Token, TokenKind},
};

/// Semantic action performed on reduction.
///
/// A reducer receives the context,
///   the values popped for each symbol of the production's right-hand side
///   in source order,
///   and the location spanning those symbols.
/// Any `Fn` of the same shape is a reducer.
pub trait Reducer<C, V> {
    fn reduce(&self, ctx: &mut C, values: Vec<V>, loc: SourceLocation) -> V;
}

impl<C, V, F> Reducer<C, V> for F
where
    F: Fn(&mut C, Vec<V>, SourceLocation) -> V,
{
    fn reduce(&self, ctx: &mut C, values: Vec<V>, loc: SourceLocation) -> V {
        self(ctx, values, loc)
    }
}

/// Parse tables along with the semantic actions of each production.
///
/// A grammar is immutable once built and may be shared by any number of
///   parses on the same thread,
///     including parses that are interleaved with one another.
/// Reducers are not required to be [`Send`] or [`Sync`].
pub struct Grammar<C, V> {
    table: ParseTable,
    reducers: Vec<Option<Box<dyn Reducer<C, V>>>>,

    /// Terminal of each [`TokenKind`],
    ///   indexed by [`TokenKind::index`].
    terminals: Vec<Option<Symbol>>,
}

impl<C, V> Grammar<C, V> {
    /// Prepare `table` for parsing.
    ///
    /// Token kinds are matched to terminals by name;
    ///   a kind whose name is not a terminal of the table cannot be
    ///   parsed.
    pub fn new(table: ParseTable) -> Self {
        let terminals = TokenKind::ALL
            .iter()
            .map(|kind| {
                table
                    .symbols()
                    .get(kind.as_str())
                    .filter(|sym| table.symbols().is_terminal(*sym))
                    .filter(|sym| *sym != Symbol::END)
            })
            .collect();

        Self {
            table,
            reducers: Vec::new(),
            terminals,
        }
    }

    /// Perform `reducer` whenever production `prod` is reduced.
    pub fn with_reducer<R>(mut self, prod: ProductionId, reducer: R) -> Self
    where
        R: Reducer<C, V> + 'static,
    {
        let i = prod as usize;
        if self.reducers.len() <= i {
            self.reducers.resize_with(i + 1, || None);
        }

        self.reducers[i] = Some(Box::new(reducer));
        self
    }

    pub fn table(&self) -> &ParseTable {
        &self.table
    }

    /// Terminal corresponding to a token kind,
    ///   if any.
    pub fn terminal(&self, kind: TokenKind) -> Option<Symbol> {
        self.terminals.get(kind.index()).copied().flatten()
    }

    fn reducer(&self, prod: ProductionId) -> Option<&dyn Reducer<C, V>> {
        self.reducers
            .get(prod as usize)
            .and_then(Option::as_deref)
    }

    /// Begin a new parse using `ctx` as the reduction context.
    pub fn parser<'g, 'c>(&'g self, ctx: &'c mut C) -> Engine<'g, 'c, C, V>
    where
        C: Context<V>,
        V: Default,
    {
        Engine::new(self, ctx)
    }

    /// Parse an entire token stream.
    ///
    /// This is a convenience for pushing every token into a new
    ///   [`Engine`] and then finishing it.
    pub fn parse<'s, I>(&self, ctx: &mut C, toks: I) -> Result<V, ParseError>
    where
        I: IntoIterator<Item = Token<'s>>,
        C: Context<V>,
        V: Default + From<Token<'s>>,
    {
        let mut engine = self.parser(ctx);

        for tok in toks {
            engine.push(tok)?;
        }

        engine.finish()
    }
}

/// A single parse in progress.
///
/// See the [module-level documentation](self) for more information.
pub struct Engine<'g, 'c, C, V, T: ParserTrace = DefaultTrace> {
    grammar: &'g Grammar<C, V>,
    ctx: &'c mut C,

    states: Vec<StateId>,
    symbols: Vec<Symbol>,
    values: Vec<V>,
    positions: Vec<SourceLocation>,

    /// End of the most recently shifted token.
    ///
    /// Used as the location of tokens that lack their own and of empty
    ///   reductions.
    last_position: Position,

    trace: T,
}

impl<'g, 'c, C, V, T> Engine<'g, 'c, C, V, T>
where
    C: Context<V>,
    V: Default,
    T: ParserTrace,
{
    pub fn new(grammar: &'g Grammar<C, V>, ctx: &'c mut C) -> Self {
        Self {
            grammar,
            ctx,
            states: Vec::new(),
            symbols: Vec::new(),
            values: Vec::new(),
            positions: Vec::new(),
            last_position: Position::default(),
            trace: T::default(),
        }
    }

    /// Current state.
    pub fn state(&self) -> StateId {
        self.states.last().copied().unwrap_or(INITIAL_STATE)
    }

    /// Number of symbols on the stack.
    pub fn depth(&self) -> usize {
        self.states.len()
    }

    /// Symbols currently on the stack,
    ///   bottom first.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Feed a single token,
    ///   performing every reduction that it triggers and then shifting it.
    pub fn push<'s>(&mut self, tok: Token<'s>) -> Result<(), ParseError>
    where
        V: From<Token<'s>>,
    {
        self.trace.trace_tok_begin(self.state(), &tok);

        let result = self.push_traced(tok);

        self.trace.trace_tok_end(self.state(), result.as_ref().err());
        result
    }

    fn push_traced<'s>(&mut self, tok: Token<'s>) -> Result<(), ParseError>
    where
        V: From<Token<'s>>,
    {
        let loc = tok.loc.unwrap_or(SourceLocation::at(self.last_position));

        let sym = self.grammar.terminal(tok.kind).ok_or(
            ParseError::InvalidToken {
                kind: tok.kind,
                loc,
            },
        )?;

        loop {
            match self.grammar.table.action(self.state(), sym) {
                Some(Action::Shift(to)) => {
                    self.states.push(to);
                    self.symbols.push(sym);
                    self.values.push(V::from(tok));
                    self.positions.push(loc);
                    self.last_position = loc.end;

                    return Ok(());
                }

                Some(Action::Reduce(prod)) => self.reduce(prod, loc)?,

                Some(Action::Accept) | None => {
                    return Err(ParseError::UnexpectedToken {
                        kind: tok.kind,
                        text: tok.text.into(),
                        loc,
                        expected: self.expected(),
                    })
                }
            }
        }
    }

    /// Signal end of input,
    ///   performing any remaining reductions and yielding the value of the
    ///   start symbol.
    pub fn finish(mut self) -> Result<V, ParseError> {
        self.trace.trace_tok_begin(self.state(), &"$");

        let result = self.finish_traced();

        self.trace.trace_tok_end(self.state(), result.as_ref().err());
        result.map(|()| self.values.into_iter().next().unwrap_or_default())
    }

    fn finish_traced(&mut self) -> Result<(), ParseError> {
        let loc = SourceLocation::at(self.last_position);

        loop {
            match self.grammar.table.action(self.state(), Symbol::END) {
                Some(Action::Accept) => return Ok(()),
                Some(Action::Reduce(prod)) => self.reduce(prod, loc)?,

                Some(Action::Shift(_)) | None => {
                    return Err(ParseError::UnexpectedEnd {
                        loc,
                        expected: self.expected(),
                    })
                }
            }
        }
    }

    /// Reduce by production `prod` while processing a token at `at`.
    fn reduce(
        &mut self,
        prod: ProductionId,
        at: SourceLocation,
    ) -> Result<(), ParseError> {
        let grammar = self.grammar;
        let fault = |state, fault| ParseError::InvalidTable {
            state,
            fault,
            loc: at,
        };

        let production = grammar
            .table
            .get_production(prod)
            .ok_or_else(|| {
                fault(self.state(), TableFault::UnknownProduction(prod))
            })?;

        let split = self
            .values
            .len()
            .checked_sub(production.len)
            .ok_or_else(|| {
                fault(self.state(), TableFault::StackUnderflow(prod))
            })?;

        let values = self.values.split_off(split);
        let positions = self.positions.split_off(split);
        self.symbols.truncate(split);
        self.states.truncate(split);

        let loc = match (positions.first(), positions.last()) {
            (Some(first), Some(last)) => first.through(*last),
            _ => SourceLocation::at(self.last_position),
        };

        let lhs_name = grammar.table.symbols().name(production.lhs);
        self.trace.trace_reduce(prod, lhs_name, production.len, loc);

        self.ctx.reduce_start(prod, &values, loc);

        let value = match grammar.reducer(prod) {
            Some(reducer) => reducer.reduce(self.ctx, values, loc),
            None => values.into_iter().next().unwrap_or_default(),
        };

        self.ctx.reduce_end(prod, &value, loc);

        let state = self.state();
        let to = grammar
            .table
            .goto_state(state, production.lhs)
            .ok_or_else(|| {
                fault(state, TableFault::MissingGoto(lhs_name.into()))
            })?;

        self.states.push(to);
        self.symbols.push(production.lhs);
        self.values.push(value);
        self.positions.push(loc);

        Ok(())
    }

    /// Names of the terminals having an action in the current state.
    fn expected(&self) -> Vec<String> {
        let table = &self.grammar.table;

        table
            .expected(self.state())
            .into_iter()
            .map(|sym| table.symbols().name(sym).into())
            .collect()
    }
}

#[cfg(test)]
mod test;
