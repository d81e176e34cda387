// Parsing framework
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

//! Table-driven LR parsing of a rewritten token stream.
//!
//! This is the final stage of the front end:
//!   tokens that have passed through the [pipeline](crate::pipeline) and
//!   been assigned [`SourceLocation`]s are pushed into an [`Engine`],
//!     which executes the action and goto tables of a [`ParseTable`].
//!
//! The tables are generated ahead of time and are not validated beyond
//!   what is needed to execute them;
//!     conflicts are resolved by whatever generated the table.
//! Semantic actions are attached per-production as [`Reducer`]s,
//!   which build arbitrary values
//!     (typically AST nodes)
//!   within a caller-provided context `C`.
//!
//! Observers that need to know about every reduction,
//!   such as those tracking node locations,
//!   implement [`Context`];
//!     its methods default to doing nothing,
//!       so `()` is a suitable context for grammars that need none.

mod engine;
mod error;
mod table;
mod trace;

pub use engine::{Engine, Grammar, Reducer};
pub use error::{ParseError, TableFault};
pub use table::{
    Action, ParseTable, Production, ProductionId, StateId, Symbol,
    SymbolTable, TableError, END_NAME,
};
pub use trace::{DefaultTrace, HumanReadableTrace, ParserTrace, VoidTrace};

use crate::span::SourceLocation;

/// Context threaded through each reduction.
///
/// Notifications are delivered in the order
///   [`reduce_start`](Context::reduce_start),
///   the production's [`Reducer`],
///   and then [`reduce_end`](Context::reduce_end).
pub trait Context<V> {
    /// A production is about to be reduced from `values`.
    fn reduce_start(
        &mut self,
        _prod: ProductionId,
        _values: &[V],
        _loc: SourceLocation,
    ) {
    }

    /// A production has been reduced to `value`.
    fn reduce_end(
        &mut self,
        _prod: ProductionId,
        _value: &V,
        _loc: SourceLocation,
    ) {
    }
}

impl<V> Context<V> for () {}
