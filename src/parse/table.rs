// Parse tables
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

//! Action and goto tables driving the [`Engine`](super::Engine).
//!
//! Tables are produced ahead of time by a parser generator and are only
//!   _executed_ here;
//!     no conflict detection is performed.
//! A [`ParseTable`] may be built programmatically,
//!   one entry at a time,
//!   or loaded with [`ParseTable::from_encoded`] from the generator's
//!   encoded form,
//!     in which every entry is keyed by `"state-symbol"` with the symbol
//!     given by its numeric identifier:
//!
//! ```
//! # use defscript::parse::{Action, ParseTable, SymbolTable};
//! let symbols = SymbolTable::new(["id"], ["$accept", "S"]);
//!
//! let table = ParseTable::from_encoded(
//!     symbols,
//!     [("0-1", "s1"), ("1-0", "r1"), ("2-0", "r0")],
//!     [("0-3", 2)],
//!     [("$accept", 1), ("S", 1)],
//! )
//! .unwrap();
//!
//! let end = table.symbols().get("$").unwrap();
//! assert_eq!(Some(Action::Accept), table.action(2, end));
//! ```
//!
//! Symbol Identifiers
//! ==================
//! Symbols are numbered densely:
//!   `$` (end of input) is always `0`,
//!   followed by every terminal,
//!   followed by every nonterminal.
//! Whether a symbol is a terminal is therefore a single comparison.

use crate::global::{StateSize, SymbolSize};
use fxhash::FxHashMap;
use std::{error::Error, fmt::Display, str::FromStr};

pub type StateId = StateSize;
pub type ProductionId = u32;

/// A terminal or nonterminal grammar symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(SymbolSize);

impl Symbol {
    /// End of input.
    pub const END: Symbol = Symbol(0);

    pub fn id(self) -> SymbolSize {
        self.0
    }
}

/// Name of the end-of-input terminal.
pub const END_NAME: &str = "$";

/// Names and identifiers of every grammar symbol.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    names: Vec<String>,
    ids: FxHashMap<String, Symbol>,

    /// Identifier of the first nonterminal.
    nonterminal_start: SymbolSize,
}

impl SymbolTable {
    /// Number `terminals` and then `nonterminals` after `$`.
    ///
    /// A name that has already been numbered is skipped.
    pub fn new<T, N>(
        terminals: impl IntoIterator<Item = T>,
        nonterminals: impl IntoIterator<Item = N>,
    ) -> Self
    where
        T: AsRef<str>,
        N: AsRef<str>,
    {
        let mut table = Self {
            names: Vec::new(),
            ids: FxHashMap::default(),
            nonterminal_start: 0,
        };

        table.add(END_NAME);
        terminals.into_iter().for_each(|t| table.add(t.as_ref()));
        table.nonterminal_start = table.names.len() as SymbolSize;
        nonterminals.into_iter().for_each(|n| table.add(n.as_ref()));

        table
    }

    fn add(&mut self, name: &str) {
        if !self.ids.contains_key(name) {
            let sym = Symbol(self.names.len() as SymbolSize);
            self.names.push(name.into());
            self.ids.insert(name.into(), sym);
        }
    }

    pub fn get(&self, name: &str) -> Option<Symbol> {
        self.ids.get(name).copied()
    }

    /// The symbol with the given numeric identifier,
    ///   if any.
    pub fn from_id(&self, id: SymbolSize) -> Option<Symbol> {
        ((id as usize) < self.names.len()).then_some(Symbol(id))
    }

    pub fn name(&self, sym: Symbol) -> &str {
        self.names
            .get(sym.0 as usize)
            .map(String::as_str)
            .unwrap_or("<unknown>")
    }

    /// Whether `sym` is a terminal,
    ///   including `$`.
    pub fn is_terminal(&self, sym: Symbol) -> bool {
        sym.0 < self.nonterminal_start
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Action to take in a given state upon a given terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Consume the terminal and enter the given state.
    Shift(StateId),

    /// Reduce by the given production without consuming the terminal.
    Reduce(ProductionId),

    /// Input is complete.
    Accept,
}

/// Parse the encoded form `sN`, `rN`, or `a`/`acc`.
///
/// `r0` is accept,
///   since production 0 is always the augmented start production.
impl FromStr for Action {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || TableError::BadAction(s.into());

        match s {
            "a" | "acc" => return Ok(Action::Accept),
            _ => {}
        }

        let mut chars = s.chars();
        let op = chars.next();
        let n = chars.as_str().parse::<u32>().map_err(|_| bad())?;

        match op {
            Some('s') => Ok(Action::Shift(n)),
            Some('r') if n == 0 => Ok(Action::Accept),
            Some('r') => Ok(Action::Reduce(n)),
            _ => Err(bad()),
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Shift(s) => write!(f, "s{s}"),
            Action::Reduce(p) => write!(f, "r{p}"),
            Action::Accept => write!(f, "acc"),
        }
    }
}

/// A production `lhs -> …` with a right-hand side of `len` symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Production {
    pub lhs: Symbol,
    pub len: usize,
}

/// Immutable tables for a single grammar.
#[derive(Debug, Clone)]
pub struct ParseTable {
    symbols: SymbolTable,
    actions: FxHashMap<(StateId, Symbol), Action>,
    gotos: FxHashMap<(StateId, Symbol), StateId>,
    productions: Vec<Production>,
}

impl ParseTable {
    /// An empty table over `symbols`.
    ///
    /// Populate it using the builder methods
    ///   [`shift`](Self::shift),
    ///   [`reduce`](Self::reduce),
    ///   [`accept`](Self::accept),
    ///   [`goto`](Self::goto),
    ///   and [`production`](Self::production).
    pub fn new(symbols: SymbolTable) -> Self {
        Self {
            symbols,
            actions: FxHashMap::default(),
            gotos: FxHashMap::default(),
            productions: Vec::new(),
        }
    }

    /// Load tables from their encoded form.
    ///
    /// See the [module-level documentation](self) for the format.
    pub fn from_encoded<K, A, G, P>(
        symbols: SymbolTable,
        actions: impl IntoIterator<Item = (K, A)>,
        gotos: impl IntoIterator<Item = (G, StateId)>,
        productions: impl IntoIterator<Item = (P, usize)>,
    ) -> Result<Self, TableError>
    where
        K: AsRef<str>,
        A: AsRef<str>,
        G: AsRef<str>,
        P: AsRef<str>,
    {
        let mut table = Self::new(symbols);

        for (key, action) in actions {
            let (state, sym) = table.decode_key(key.as_ref())?;
            let action = action.as_ref().parse()?;
            table.set_action(state, sym, action)?;
        }

        for (key, to) in gotos {
            let (state, sym) = table.decode_key(key.as_ref())?;
            table.set_goto(state, sym, to)?;
        }

        for (lhs, len) in productions {
            table = table.production(lhs.as_ref(), len)?;
        }

        Ok(table)
    }

    fn decode_key(&self, key: &str) -> Result<(StateId, Symbol), TableError> {
        let bad = || TableError::BadKey(key.into());

        let (state, id) = key.split_once('-').ok_or_else(bad)?;
        let state = state.parse().map_err(|_| bad())?;
        let id = id.parse().map_err(|_| bad())?;
        let sym = self
            .symbols
            .from_id(id)
            .ok_or_else(|| TableError::UnknownSymbol(id.to_string()))?;

        Ok((state, sym))
    }

    fn lookup(&self, name: &str) -> Result<Symbol, TableError> {
        self.symbols
            .get(name)
            .ok_or_else(|| TableError::UnknownSymbol(name.into()))
    }

    fn set_action(
        &mut self,
        state: StateId,
        sym: Symbol,
        action: Action,
    ) -> Result<(), TableError> {
        if !self.symbols.is_terminal(sym) {
            let name = self.symbols.name(sym);
            return Err(TableError::ExpectedTerminal(name.into()));
        }

        self.actions.insert((state, sym), action);
        Ok(())
    }

    fn set_goto(
        &mut self,
        state: StateId,
        sym: Symbol,
        to: StateId,
    ) -> Result<(), TableError> {
        if self.symbols.is_terminal(sym) {
            let name = self.symbols.name(sym);
            return Err(TableError::ExpectedNonterminal(name.into()));
        }

        self.gotos.insert((state, sym), to);
        Ok(())
    }

    /// In `state`,
    ///   shift `terminal` and enter state `to`.
    pub fn shift(
        mut self,
        state: StateId,
        terminal: &str,
        to: StateId,
    ) -> Result<Self, TableError> {
        let sym = self.lookup(terminal)?;
        self.set_action(state, sym, Action::Shift(to))?;
        Ok(self)
    }

    /// In `state`,
    ///   upon `terminal`,
    ///   reduce by production `prod`.
    pub fn reduce(
        mut self,
        state: StateId,
        terminal: &str,
        prod: ProductionId,
    ) -> Result<Self, TableError> {
        let sym = self.lookup(terminal)?;
        self.set_action(state, sym, Action::Reduce(prod))?;
        Ok(self)
    }

    /// In `state`,
    ///   accept upon `terminal`
    ///     (which ought to be `$`).
    pub fn accept(
        mut self,
        state: StateId,
        terminal: &str,
    ) -> Result<Self, TableError> {
        let sym = self.lookup(terminal)?;
        self.set_action(state, sym, Action::Accept)?;
        Ok(self)
    }

    /// After reducing to `nonterminal` in `state`,
    ///   enter state `to`.
    pub fn goto(
        mut self,
        state: StateId,
        nonterminal: &str,
        to: StateId,
    ) -> Result<Self, TableError> {
        let sym = self.lookup(nonterminal)?;
        self.set_goto(state, sym, to)?;
        Ok(self)
    }

    /// Append the production `lhs -> …` of length `len`.
    ///
    /// Productions are numbered in the order they are added,
    ///   starting at `0`.
    pub fn production(
        mut self,
        lhs: &str,
        len: usize,
    ) -> Result<Self, TableError> {
        let lhs = self.lookup(lhs)?;
        if self.symbols.is_terminal(lhs) {
            let name = self.symbols.name(lhs);
            return Err(TableError::ExpectedNonterminal(name.into()));
        }

        self.productions.push(Production { lhs, len });
        Ok(self)
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn action(&self, state: StateId, terminal: Symbol) -> Option<Action> {
        self.actions.get(&(state, terminal)).copied()
    }

    pub fn goto_state(
        &self,
        state: StateId,
        nonterminal: Symbol,
    ) -> Option<StateId> {
        self.gotos.get(&(state, nonterminal)).copied()
    }

    pub fn get_production(&self, prod: ProductionId) -> Option<Production> {
        self.productions.get(prod as usize).copied()
    }

    pub fn production_count(&self) -> usize {
        self.productions.len()
    }

    /// Terminals having an action in `state`,
    ///   ordered by identifier.
    pub fn expected(&self, state: StateId) -> Vec<Symbol> {
        let mut expected: Vec<_> = self
            .actions
            .keys()
            .filter(|(s, _)| *s == state)
            .map(|(_, sym)| *sym)
            .collect();

        expected.sort_unstable();
        expected
    }
}

/// Failure to construct a [`ParseTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A name or identifier does not refer to any symbol.
    UnknownSymbol(String),

    /// An encoded key was not of the form `"state-symbol"`.
    BadKey(String),

    /// An encoded action was not of the form `sN`, `rN`, or `acc`.
    BadAction(String),

    /// An action was provided for a nonterminal.
    ExpectedTerminal(String),

    /// A goto or production was provided for a terminal.
    ExpectedNonterminal(String),
}

impl Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use TableError::*;

        match self {
            UnknownSymbol(s) => write!(f, "unknown grammar symbol `{s}`"),
            BadKey(k) => write!(f, "malformed table key `{k}`"),
            BadAction(a) => write!(f, "malformed table action `{a}`"),
            ExpectedTerminal(s) => write!(
                f,
                "actions are keyed by terminals, but `{s}` is a nonterminal"
            ),
            ExpectedNonterminal(s) => {
                write!(f, "expected nonterminal, but `{s}` is a terminal")
            }
        }
    }
}

impl Error for TableError {}

#[cfg(test)]
mod test;
