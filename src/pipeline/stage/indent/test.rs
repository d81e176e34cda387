// Tests for indentation block synthesis
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
    lex::{Lexer, WordLexer},
    pipeline::{NewlineElision, Pipeline, Trivia},
    test::*,
};

fn indented(src: &str) -> Vec<TokenKind> {
    let toks = Pipeline::new()
        .with(Trivia)
        .with(NewlineElision::default())
        .with(Indentation::default())
        .process(WordLexer.lex(src));

    kinds_of(toks)
}

fn balance(kinds: &[TokenKind]) -> (usize, usize) {
    (
        kinds.iter().filter(|&&k| k == Indent).count(),
        kinds.iter().filter(|&&k| k == Dedent).count(),
    )
}

#[test]
fn width_is_trailing_whitespace() {
    assert_eq!(0, indent_width(&nl(0, 0)));
    assert_eq!(4, indent_width(&nl(4, 0)));
    assert_eq!(2, indent_width(&tok(Newline, "\n    \n\t ", 0)));
}

#[test]
fn block_after_indenter() {
    let src = "try\n  a\nb";

    assert_eq!(
        vec![Try, Indent, Newline, Id, Dedent, Newline, Id],
        indented(src),
    );
}

#[test]
fn markers_at_newline_start() {
    let toks = run(
        Indentation::default(),
        vec![
            tok(Do, "do", 0),
            nl(2, 2),
            tok(Id, "a", 5),
            nl(0, 6),
            tok(Id, "b", 7),
        ],
    );

    assert_eq!(Indent, toks[1].kind);
    assert_eq!(crate::span::Span::at(2), toks[1].span);
    assert_eq!(Dedent, toks[4].kind);
    assert_eq!(crate::span::Span::at(6), toks[4].span);
}

#[test]
fn nested_blocks_close_together() {
    let src = "try\n  do\n    a\nb";

    assert_eq!(
        vec![
            Try, Indent, Newline, Do, Indent, Newline, Id, Dedent, Dedent,
            Newline, Id,
        ],
        indented(src),
    );
}

#[test]
fn open_blocks_closed_at_end_of_stream() {
    let toks = run(
        Indentation::default(),
        vec![tok(Else, "else", 0), nl(2, 4), tok(Id, "a", 7)],
    );

    assert_eq!(vec![Else, Indent, Newline, Id, Dedent], kinds_of(toks.clone()));

    // After the final token.
    assert_eq!(crate::span::Span::at(8), toks[4].span);
}

#[test]
fn brace_closes_inner_blocks() {
    let src = "{ do\n  a }";

    assert_eq!(
        vec![LBrace, Do, Indent, Newline, Id, Dedent, RBrace],
        indented(src),
    );
}

// Dedenting must never close a block outside of the innermost brace,
//   even if the brace is indented less than that block.
#[test]
fn dedent_stops_at_brace() {
    let toks = run(
        Indentation::default(),
        vec![
            tok(Try, "try", 0),
            nl(4, 3),
            tok(LBrace, "{", 8),
            nl(0, 9),
            tok(Id, "a", 10),
            tok(RBrace, "}", 11),
            nl(0, 12),
            tok(Id, "b", 13),
        ],
    );

    assert_eq!(
        vec![
            Try, Indent, Newline, LBrace, Newline, Id, RBrace, Dedent, Newline,
            Id,
        ],
        kinds_of(toks),
    );
}

#[test]
fn unmatched_closing_brace_is_ignored() {
    let src = "do\n  a }\nb";

    assert_eq!(
        vec![Do, Indent, Newline, Id, RBrace, Dedent, Newline, Id],
        indented(src),
    );
}

#[test]
fn unclosed_brace_does_not_emit_dedent() {
    let src = "{ a";

    assert_eq!(vec![LBrace, Id], indented(src));
}

#[test]
fn indent_and_dedent_balance() {
    let srcs = [
        "try\n  a\ncatch e\n  b",
        "do\n  do\n    do\n      a",
        "{ do\n  a } } }",
        "do\n  { try\n    a\n  }\nb",
        "try\n  a\n      b\n    c\n d",
        "{ { do\n  a",
        "else\n}\ndo",
    ];

    for src in srcs {
        let (indents, dedents) = balance(&indented(src));
        assert_eq!(indents, dedents, "unbalanced markers for {src:?}");
    }
}

#[test]
fn end_of_stream_closes_block_inside_unclosed_brace() {
    let toks = Pipeline::new()
        .with(Trivia)
        .with(NewlineElision::default())
        .with(Indentation::default())
        .process(WordLexer.lex("{ do\n  a"))
        .collect::<Vec<_>>();

    assert_eq!(
        vec![LBrace, Do, Indent, Newline, Id, Dedent],
        kinds_of(toks.iter().copied()),
    );
    assert_eq!(Some(crate::span::Span::at(8)), toks.last().map(|t| t.span));
}

#[test]
fn malformed_and_interpolated_input_balances() {
    for src in ["{ do\n  a", "do\n  { a\n} }", "try\n  { do\n    a"] {
        let (indents, dedents) = balance(&indented(src));
        assert_eq!(indents, dedents, "unbalanced markers for {src:?}");
    }

    let frontend = crate::frontend::Frontend::new(WordLexer);
    for src in [
        "do\n  \"a{ b }\"",
        "\"x{ do\n  y }\"",
        "do\n  \"a{ \"b{ do\n  c }\" }\"",
    ] {
        let (indents, dedents) = balance(&kinds_of(frontend.tokenize(src)));
        assert_eq!(indents, dedents, "unbalanced markers for {src:?}");
    }
}
