// Typed formatting helpers for diagnostics
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

//! Typed formatting helpers.
//!
//! These types create composable formatters for use with [`Display`].
//! Whereas [`Display`] operates on data owned by the type implementing it,
//!   these formatters compose into functions that operate on data provided
//!   _to_ it.
//! Consequently,
//!   formatters are simply types,
//!   and writes can be streamed just as they are with [`Display`].
//!
//! There are two types of wrappers:
//!
//!   - [`DisplayWrapper`] formats objects as atoms; and
//!   - [`ListDisplayWrapper`] formats a slice as an English list,
//!       mapping a [`DisplayWrapper`] over each of its items.
//!
//! For example:
//!
//! ```
//! # use defscript::fmt::*;
//! assert_eq!(
//!     OrConjList::<Tt<Raw>>::wrap(&["id", "(", "{"]).to_string(),
//!     "`id`, `(`, or `{`",
//! );
//! ```
//!
//! This is in contrast to the approach taken by the
//!   [diagnostic system](crate::diagnose),
//!     which is to produce a data structure representing the data to be
//!     formatted.

use std::{
    fmt::{Display, Formatter, Result},
    marker::PhantomData,
};

/// Wrapper for a [`Display`]-able type.
///
/// See the [module-level documentation](self) for more information.
pub trait DisplayWrapper {
    /// Transform inner data and output using the provided [`Formatter`].
    fn fmt<T: Display>(inner: T, f: &mut Formatter) -> Result;

    /// Associate data with a [`DisplayWrapper`] for rendering using
    ///   [`Display`].
    ///
    /// This has the effect of creating an arbitrary [`Display`]
    ///   implementation for the wrapped object,
    ///     which will work well with [`format!`] and anything else that
    ///     does not have access to an explicit [`Formatter`].
    fn wrap<T: Display>(inner: T) -> Wrap<Self, T> {
        Wrap {
            inner,
            _phantom: PhantomData,
        }
    }
}

/// Wrapper with associated data.
pub struct Wrap<W: DisplayWrapper + ?Sized, T: Display> {
    inner: T,
    _phantom: PhantomData<W>,
}

impl<W: DisplayWrapper + ?Sized, T: Display> Display for Wrap<W, T> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        W::fmt(&self.inner, f)
    }
}

/// Echo data as-is without any wrapping.
///
/// This is primarily used at the root of a wrapper composition.
pub struct Raw;

impl DisplayWrapper for Raw {
    fn fmt<T: Display>(inner: T, f: &mut Formatter) -> Result {
        inner.fmt(f)
    }
}

/// Denote text that would conventionally be delimited in a teletypewriter
///   font.
///
/// This produces a markdown-style quote using backticks.
///
/// NB: This does not defend against nested quotes,
///   so this is _not_ safe against format escapes.
pub struct Tt<W: DisplayWrapper>(PhantomData<W>);

impl<W: DisplayWrapper> DisplayWrapper for Tt<W> {
    fn fmt<T: Display>(inner: T, f: &mut Formatter) -> Result {
        f.write_str("`")?;
        W::fmt(inner, f)?;
        f.write_str("`")
    }
}

/// Quote a value using [`Tt`].
pub type TtQuote = Tt<Raw>;

/// Conjunctive term placed before the final item of a [`ConjList`].
pub trait Conj {
    const TERM: &'static str;
}

pub struct Or;

/// Terminology note:
///   English refers to the term "or" here as a conjunction between words,
///     which differs from "or" in logic as a disjunction.
impl Conj for Or {
    const TERM: &'static str = "or";
}

/// Wrapper for a list that maps each element to a [`DisplayWrapper`].
///
/// This uses the slice API for wrapping since [`Display`] takes objects by
///   non-mutable reference,
///     and so we cannot consume an iterator.
pub trait ListDisplayWrapper {
    fn fmt<T: Display>(list: &[T], f: &mut Formatter) -> Result;

    /// Associate data with a [`ListDisplayWrapper`] for rendering using
    ///   [`Display`].
    fn wrap<T: Display>(list: &[T]) -> ListWrap<Self, T> {
        ListWrap {
            list,
            _phantom: PhantomData,
        }
    }
}

/// Format each item of a slice using a [`DisplayWrapper`] formatter,
///   outputting an English list with a serial comma and conjunctive term.
///
/// No formatting is done to a single item,
///   and the serial comma is omitted for only two items.
///
/// For example:
///   If we have a slice `[1, 2, 3]`,
///     this will output "1, 2, or 3".
///   If we have a slice `[1, 2]`,
///     it will omit the serial comma and output "1 or 2".
pub struct ConjList<C: Conj, W: DisplayWrapper>(PhantomData<(C, W)>);

impl<C: Conj, W: DisplayWrapper> ListDisplayWrapper for ConjList<C, W> {
    fn fmt<T: Display>(list: &[T], f: &mut Formatter) -> Result {
        let maxi = list.len().saturating_sub(1);

        for (i, x) in list.iter().enumerate() {
            match i {
                0 => {}
                1 if maxi == 1 => write!(f, " {} ", C::TERM)?,
                _ if i == maxi => write!(f, ", {} ", C::TERM)?,
                _ => f.write_str(", ")?,
            }

            W::fmt(x, f)?;
        }

        Ok(())
    }
}

/// A list of values with a serial comma and the term "or" as a
///   conjunction between the penultimate and final items.
pub type OrConjList<W> = ConjList<Or, W>;

/// List wrapper with associated data.
pub struct ListWrap<'a, W: ListDisplayWrapper + ?Sized, T: Display> {
    list: &'a [T],
    _phantom: PhantomData<W>,
}

impl<'a, W: ListDisplayWrapper + ?Sized, T: Display> Display
    for ListWrap<'a, W, T>
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        W::fmt(self.list, f)
    }
}
