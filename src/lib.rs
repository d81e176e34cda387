// defscript front end library
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

//! An incremental compiler front end for defscript.
//!
//! This crate turns a stream of primitive lexical tokens into a parse
//!   through two layers:
//!
//!   - the [token pipeline](pipeline),
//!       a chain of lazily-pulled rewriting stages that normalize trivia
//!       and newlines,
//!       synthesize implicit block delimiters,
//!       reclassify context-dependent tokens,
//!       and expand string interpolations; and
//!   - the [parsing engine](parse),
//!       a table-driven LR automaton that invokes a semantic action for
//!       each reduced production.
//!
//! The character-level lexer and the grammar tables are supplied by the
//!   caller;
//!     see [`lex::Lexer`] and [`parse::ParseTable`].
//! [`frontend::Frontend`] composes the two layers.
//!
//! Errors describe themselves through the [diagnostic system](diagnose)
//!   using [source locations](span).

#[macro_use]
extern crate static_assertions;

pub mod global;

pub mod diagnose;
pub mod fmt;
pub mod frontend;
pub mod lex;
pub mod parse;
pub mod pipeline;
pub mod span;
pub mod token;
