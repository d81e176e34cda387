// Parser tracing
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

//! Tracing for parsing operations.
//!
//! This provides human-readable traces on standard error any time a token
//!   is fed to the [`Engine`](super::Engine).
//! These traces are provided automatically when `cfg(test)`,
//!   which means that they are automatically included in the output of any
//!   test failure.
//!
//! Outside of tests,
//!   this can be enabled using the `parser-trace-stderr` feature flag.
//!
//! _These traces are not meant to be machine-readable!_
//! Do not try to use the human-readable traces in that way since the format
//!   is subject to change without notice.

use super::{ParseError, ProductionId, StateId};
use crate::span::SourceLocation;
use std::fmt::{Debug, Display};

pub trait ParserTrace: Default {
    /// Output the upper portion of a token trace.
    ///
    /// This begins the trace with the current state and the token that was
    ///   received.
    /// Post-transition tracing is handled by [`Self::trace_tok_end`].
    ///
    /// There is no means to return an error and a failure to output the
    ///   trace should not interrupt processing.
    fn trace_tok_begin<T: Display + Debug>(&mut self, state: StateId, tok: &T);

    /// Output a reduction performed while processing the current token.
    fn trace_reduce(
        &mut self,
        prod: ProductionId,
        lhs: &str,
        len: usize,
        loc: SourceLocation,
    );

    /// Output the lower portion of a token trace.
    ///
    /// This ends the trace with the resulting state and any error that
    ///   caused processing to halt.
    fn trace_tok_end(&mut self, state: StateId, err: Option<&ParseError>);
}

/// Perform no tracing.
///
/// This should be used by default for non-test builds,
///   since tracing can incur a significant performance cost.
#[derive(Debug, PartialEq, Default)]
pub struct VoidTrace;

impl ParserTrace for VoidTrace {
    fn trace_tok_begin<T: Display + Debug>(
        &mut self,
        _state: StateId,
        _tok: &T,
    ) {
        // Do nothing at all.
    }

    fn trace_reduce(
        &mut self,
        _prod: ProductionId,
        _lhs: &str,
        _len: usize,
        _loc: SourceLocation,
    ) {
        // Do nothing at all.
    }

    fn trace_tok_end(&mut self, _state: StateId, _err: Option<&ParseError>) {
        // Do nothing at all.
    }
}

/// Human-readable [`ParserTrace`].
///
/// Note: if one of these trace blocks does not fully output,
///   then you may have a `Display::fmt` or `Debug::fmt` panic in a token
///   being traced.
///
/// See [module-level](self) documentation for more information.
#[derive(Debug, PartialEq, Default)]
pub struct HumanReadableTrace;

impl ParserTrace for HumanReadableTrace {
    fn trace_tok_begin<T: Display + Debug>(&mut self, state: StateId, tok: &T) {
        eprint!(
            "\
[Engine::push] state {state}
| ==> tok: {tok}
|  |  {tok:?}
|\n",
        );
    }

    fn trace_reduce(
        &mut self,
        prod: ProductionId,
        lhs: &str,
        len: usize,
        loc: SourceLocation,
    ) {
        eprint!("| ==> reduce r{prod}: {lhs} <- {len} symbol(s) at {loc}\n");
    }

    fn trace_tok_end(&mut self, state: StateId, err: Option<&ParseError>) {
        eprint!("|\n| ==> state after tok is {state}.\n");

        if let Some(err) = err {
            eprint!(
                "\
|
| ==> !!! error: {err}.
|  |  {err:?}\n",
            );
        }

        #[allow(unused_variables)]
        let cfg = ""; // so that this compiles without matching cfg
        #[cfg(feature = "parser-trace-stderr")]
        #[allow(unused_variables)]
        let cfg = "feature = \"parser-trace-stderr\"";
        #[cfg(test)] // takes precedence if both are set
        let cfg = "test";
        eprint!(
            "= note: this trace was output as a debugging aid \
                because `cfg({cfg})`.\n\n",
        );
    }
}

/// Trace used by [`Grammar::parser`](super::Grammar::parser).
#[cfg(any(test, feature = "parser-trace-stderr"))]
pub type DefaultTrace = HumanReadableTrace;

/// Trace used by [`Grammar::parser`](super::Grammar::parser).
#[cfg(not(any(test, feature = "parser-trace-stderr")))]
pub type DefaultTrace = VoidTrace;
