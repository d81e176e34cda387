// Diagnostic system
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

//! Diagnostic system for error reporting.
//!
//! This system is heavily motivated by Rust's.
//! An error describes itself as a series of [`AnnotatedLoc`]s,
//!   each a [`SourceLocation`] paired with a severity [`Level`] and an
//!   optional [`Label`];
//!     rendering those annotations alongside the source text is the
//!     responsibility of the caller,
//!       which owns the file and knows how to present it.

use std::{borrow::Cow, error::Error, fmt, fmt::Display};

use crate::span::SourceLocation;

/// Diagnostic report.
///
/// This describes an error condition or other special event using a series
///   of [`SourceLocation`]s to describe the source, cause, and
///   circumstances around an event.
pub trait Diagnostic: Error + Sized {
    /// Produce a series of [`AnnotatedLoc`]s describing the source and
    ///   circumstances of the diagnostic event.
    fn describe(&self) -> Vec<AnnotatedLoc>;
}

/// Diagnostic severity level.
///
/// Lower levels are more severe
///   (e.g. level 1 is the worst).
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default)]
#[repr(u8)]
pub enum Level {
    /// An error internal to the front end that the user cannot resolve,
    ///   but may be able to work around.
    ///
    /// For example,
    ///   a malformed parse table.
    InternalError = 1,

    /// A user-resolvable error.
    ///
    /// These represent errors resulting from the user's input.
    #[default]
    Error,

    /// Additional advice to the user that may help in debugging or fixing a
    ///   problem.
    Help,
}

impl Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::InternalError => write!(f, "internal error"),
            Level::Error => write!(f, "error"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A label associated with a report or [`SourceLocation`].
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Label<'a>(Cow<'a, str>);

impl<'a> Display for Label<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<'a> From<String> for Label<'a> {
    fn from(s: String) -> Self {
        Self(Cow::Owned(s))
    }
}

impl<'a> From<&'a str> for Label<'a> {
    fn from(s: &'a str) -> Self {
        Self(Cow::Borrowed(s))
    }
}

/// A location with an associated severity level and optional label.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct AnnotatedLoc<'l>(SourceLocation, Level, Option<Label<'l>>);

impl<'l> AnnotatedLoc<'l> {
    pub fn loc(&self) -> SourceLocation {
        self.0
    }

    pub fn level(&self) -> Level {
        self.1
    }

    pub fn label(&self) -> Option<&Label<'l>> {
        self.2.as_ref()
    }

    pub fn with_help<L: Into<Label<'l>>>(
        self,
        label: L,
    ) -> [AnnotatedLoc<'l>; 2] {
        let loc = self.0;
        [self, loc.help(label)]
    }
}

impl<'l> Display for AnnotatedLoc<'l> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.2 {
            Some(label) => write!(f, "{} at {}: {label}", self.1, self.0),
            None => write!(f, "{} at {}", self.1, self.0),
        }
    }
}

impl<'l> From<AnnotatedLoc<'l>> for Vec<AnnotatedLoc<'l>> {
    fn from(x: AnnotatedLoc<'l>) -> Self {
        vec![x]
    }
}

pub trait Annotate: Sized {
    /// Annotate a location with a severity [`Level`] and an optional
    ///   [`Label`] to display alongside of it.
    fn annotate(self, level: Level, label: Option<Label>) -> AnnotatedLoc;

    /// Annotate a location as an internal error that the user is not
    ///   expected to be able to resolve,
    ///     but may be able to work around.
    fn internal_error<'l, L: Into<Label<'l>>>(
        self,
        label: L,
    ) -> AnnotatedLoc<'l> {
        self.annotate(Level::InternalError, Some(label.into()))
    }

    /// Annotate a location with a clarifying label styled as an error.
    ///
    /// (This is not named `err` since it does not return an [`Err`].)
    fn error<'l, L: Into<Label<'l>>>(self, label: L) -> AnnotatedLoc<'l> {
        self.annotate(Level::Error, Some(label.into()))
    }

    fn help<'l, L: Into<Label<'l>>>(self, label: L) -> AnnotatedLoc<'l> {
        self.annotate(Level::Help, Some(label.into()))
    }
}

impl<S: Into<SourceLocation>> Annotate for S {
    fn annotate(self, level: Level, label: Option<Label>) -> AnnotatedLoc {
        AnnotatedLoc(self.into(), level, label)
    }
}
