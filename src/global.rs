// Global constants across the entirety of the front end
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

//! System-wide static configuration.
//!
//! This module provides a system-wide configuration.
//! Subsystems should reference these values rather than defining their own
//!   and risk incompatibilities or maintenance issues as requirements
//!   change.
//!
//! By convention,
//!   import this entire module rather than individual members and reference
//!   them as `global::foo` to emphasize their nature and risk.

/// A size capable of representing any byte offset into a single source
///   file.
///
/// This limits source files to 4GiB,
///   which is well beyond anything a human will write by hand;
///     generated sources that large should be split.
pub type SourceOffset = u32;

/// Number of already-emitted tokens each pipeline
///   [`Viewer`](crate::pipeline::Viewer) remembers.
///
/// No stage looks further behind than its immediate predecessor today,
///   but stages are free to use anything up to this capacity.
/// Older tokens are silently forgotten.
pub const VIEWER_LOOKBEHIND: usize = 10;

/// Identifier of a state in a parse table.
pub type StateSize = u32;

/// State in which every parse begins.
///
/// An empty state stack is equivalent to a stack containing only this
///   state.
pub const INITIAL_STATE: StateSize = 0;

/// A size capable of representing every grammar symbol,
///   terminal and nonterminal alike.
pub type SymbolSize = u16;
