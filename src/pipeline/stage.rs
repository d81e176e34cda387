// Standard pipeline stages
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

//! The standard pipeline stages.
//!
//! Each stage is independent of the others and may be tested in
//!   isolation,
//!     but the standard order matters:
//!       later stages rely on adjacency established by earlier ones
//!       (see [`NewlineCleanup`]).

mod cascade;
mod destructure;
mod embedded;
mod fn_literal;
mod indent;
mod interp;
mod member;
mod newline;
mod star;
mod trivia;

pub use cascade::Cascade;
pub use destructure::Destructure;
pub use embedded::EmbeddedSnippet;
pub use fn_literal::FnLiteral;
pub use indent::Indentation;
pub use interp::Interpolation;
pub use member::MemberName;
pub use newline::{NewlineCleanup, NewlineElision};
pub use star::StarOperator;
pub use trivia::Trivia;
