// Tests for the token-transduction pipeline
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

use super::*;
use crate::{
    frontend::Frontend,
    lex::{Lexer, WordLexer},
    test::*,
    token::TokenKind::{self, *},
};

fn standard(src: &str) -> Vec<TokenKind> {
    let retok = Rc::new(Frontend::new(WordLexer));
    kinds_of(Pipeline::standard(retok).process(WordLexer.lex(src)))
}

#[test]
fn empty_pipeline_is_identity() {
    let toks = kinds(&[Ws, Id, Newline]);
    let out: Vec<_> = Pipeline::new()
        .process(Box::new(toks.clone().into_iter()))
        .collect();

    assert_eq!(toks, out);
}

#[test]
fn stages_apply_in_order() {
    // Trivia must be removed before the second stage sees its
    //   predecessor,
    //     otherwise the newline would follow whitespace rather than `[`.
    let toks = kinds(&[LBracket, Ws, Newline, Id, RBracket]);
    let out = Pipeline::new()
        .with(Trivia)
        .with(NewlineElision::default())
        .process(Box::new(toks.into_iter()));

    assert_eq!(vec![LBracket, Id, RBracket], kinds_of(out));
}

#[test]
fn standard_has_every_stage() {
    let retok = Rc::new(Frontend::new(WordLexer));
    assert_eq!(11, Pipeline::standard(retok).len());
}

#[test]
fn function_literal() {
    assert_eq!(
        vec![Fn, LParen, Id, Comma, Id, RParen, FatArrow, Id],
        standard("( a , b ) => a"),
    );
}

#[test]
fn destructuring_assignment() {
    assert_eq!(
        vec![AssignMarker, LBrace, Id, Colon, Id, RBrace, Assign, Id],
        standard("{ a : b } = c"),
    );
}

#[test]
fn newlines_in_array() {
    assert_eq!(
        vec![LBracket, Id, Comma, Id, RBracket],
        standard("[\n  a ,\n  b\n]"),
    );
}

#[test]
fn implicit_block() {
    assert_eq!(
        vec![Try, Indent, Id, Dedent, Finally, Indent, Id, Dedent],
        standard("try\n  a\nfinally\n  b"),
    );
}

#[test]
fn cascade_with_keyword_member() {
    assert_eq!(
        vec![Id, Ref, Obj, Dot, Id, LParen, RParen],
        standard("p\n| . catch ( )"),
    );
}

#[test]
fn generator_literal() {
    assert_eq!(
        vec![Fn, LParen, RParen, Star, LBrace, Id, RBrace],
        standard("( ) * { a }"),
    );
}

#[test]
fn destructured_parameter() {
    assert_eq!(
        vec![
            Def, AssignMarker, LBracket, Id, RBracket, Assign, Fn, LParen,
            LBrace, Id, RBrace, RParen, FatArrow, Id,
        ],
        standard("def [ f ] = ( { a } ) => a"),
    );
}

#[test]
fn snippet_and_string() {
    assert_eq!(
        vec![
            Id,
            Assign,
            EmbeddedSingleLine,
            Newline,
            Quote,
            StringLiteral,
            Quote
        ],
        standard("a = `x`\n\"s\""),
    );
}

// Stopping early has no side effects,
//   and so a consumer may abandon the stream at any point.
#[test]
fn consumer_may_stop_early() {
    let retok = Rc::new(Frontend::new(WordLexer));
    let mut toks =
        Pipeline::standard(retok).process(WordLexer.lex("( a ) => { b }"));

    assert_eq!(Some(Fn), toks.next().map(|t| t.kind));
    drop(toks);
}
