// Parse errors
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

//! Errors raised by the parsing [`Engine`](super::Engine).
//!
//! Every error carries the [`SourceLocation`] at which it was detected so
//!   that it can be reported via the [diagnostic system](crate::diagnose).
//! The engine is not error-recovering;
//!   once an error is returned,
//!     the parse cannot continue.

use super::{ProductionId, StateId};
use crate::{
    diagnose::{Annotate, AnnotatedLoc, Diagnostic},
    fmt::{DisplayWrapper, ListDisplayWrapper, OrConjList, TtQuote},
    span::SourceLocation,
    token::TokenKind,
};
use std::{error::Error, fmt::Display};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A token's kind is not a terminal of the grammar.
    InvalidToken { kind: TokenKind, loc: SourceLocation },

    /// The table has no usable action for a token in the current state.
    UnexpectedToken {
        kind: TokenKind,
        text: String,
        loc: SourceLocation,
        expected: Vec<String>,
    },

    /// Input ended in a state from which it could not be accepted.
    UnexpectedEnd {
        loc: SourceLocation,
        expected: Vec<String>,
    },

    /// The tables themselves are inconsistent.
    ///
    /// This is never the fault of the input.
    InvalidTable {
        state: StateId,
        fault: TableFault,
        loc: SourceLocation,
    },
}

impl ParseError {
    /// Location at which the error was detected.
    pub fn location(&self) -> SourceLocation {
        use ParseError::*;

        match self {
            InvalidToken { loc, .. }
            | UnexpectedToken { loc, .. }
            | UnexpectedEnd { loc, .. }
            | InvalidTable { loc, .. } => *loc,
        }
    }

    /// Names of the terminals that would have been accepted,
    ///   if known.
    pub fn expected(&self) -> &[String] {
        match self {
            ParseError::UnexpectedToken { expected, .. }
            | ParseError::UnexpectedEnd { expected, .. } => expected,
            _ => &[],
        }
    }
}

/// Inconsistency discovered in a parse table during a reduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableFault {
    /// A reduce action named a production that does not exist.
    UnknownProduction(ProductionId),

    /// A production is longer than the stack it is reducing.
    StackUnderflow(ProductionId),

    /// No goto exists for the named nonterminal.
    MissingGoto(String),
}

impl Display for TableFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableFault::UnknownProduction(p) => {
                write!(f, "reduce by unknown production {p}")
            }
            TableFault::StackUnderflow(p) => {
                write!(f, "production {p} is longer than the parse stack")
            }
            TableFault::MissingGoto(sym) => {
                write!(f, "no goto for {}", TtQuote::wrap(sym))
            }
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ParseError::*;

        match self {
            InvalidToken { kind, .. } => write!(
                f,
                "token kind {} is not recognized by this grammar",
                TtQuote::wrap(kind)
            ),

            UnexpectedToken { kind, text, .. } => {
                if text.is_empty() {
                    write!(f, "unexpected {}", TtQuote::wrap(kind))?;
                } else {
                    write!(f, "unexpected {}", TtQuote::wrap(text))?;
                }

                write_expected(f, self.expected())
            }

            UnexpectedEnd { .. } => {
                f.write_str("unexpected end of input")?;
                write_expected(f, self.expected())
            }

            InvalidTable { state, fault, .. } => {
                write!(f, "malformed parse table in state {state}: {fault}")
            }
        }
    }
}

fn write_expected(
    f: &mut std::fmt::Formatter<'_>,
    expected: &[String],
) -> std::fmt::Result {
    match expected {
        [] => Ok(()),
        _ => write!(f, "; expected {}", OrConjList::<TtQuote>::wrap(expected)),
    }
}

impl Error for ParseError {}

impl Diagnostic for ParseError {
    fn describe(&self) -> Vec<AnnotatedLoc> {
        use ParseError::*;

        let loc = self.location();
        let expected = || {
            format!("expected {}", OrConjList::<TtQuote>::wrap(self.expected()))
        };

        match self {
            InvalidToken { .. } => {
                loc.error("this token cannot appear in any input").into()
            }

            UnexpectedToken { expected: e, .. } if e.is_empty() => {
                loc.error("unexpected token").into()
            }
            UnexpectedToken { .. } => {
                loc.error("unexpected token").with_help(expected()).into()
            }

            UnexpectedEnd { expected: e, .. } if e.is_empty() => {
                loc.error("input ended here").into()
            }
            UnexpectedEnd { .. } => {
                loc.error("input ended here").with_help(expected()).into()
            }

            InvalidTable { fault, .. } => vec![
                loc.internal_error(fault.to_string()),
                loc.help("the grammar tables are inconsistent;"),
                loc.help("  this is a bug in the parser generator."),
            ],
        }
    }
}
