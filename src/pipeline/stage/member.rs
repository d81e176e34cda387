// Member name reclassification
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

//! Keywords as member names.

use crate::{
    pipeline::{Emit, Rewriter, Viewer},
    token::{Token, TokenKind},
};

/// Reclassify a lowercase word following `.` as an identifier.
///
/// Keywords are valid member names
///   (`promise.catch`, `range.from`),
///   but the lexer cannot know that.
/// Any token whose text consists solely of lowercase ASCII letters is
///   reclassified,
///     which is a no-op for identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct MemberName;

fn is_lower_word(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_lowercase())
}

impl<'s> Rewriter<'s> for MemberName {
    fn rewrite(
        &mut self,
        tok: Token<'s>,
        view: &mut Viewer<'s>,
        out: &mut Emit<'s>,
    ) {
        if view.look_back(1) == Some(TokenKind::Dot) && is_lower_word(tok.text)
        {
            out.emit(view.change_type(tok, TokenKind::Id));
        } else {
            out.emit(tok);
        }
    }

    fn name(&self) -> &'static str {
        "member-name"
    }
}
