// Tests for the parsing engine
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
    parse::SymbolTable,
    span::{Position, Span},
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum Node {
    #[default]
    Empty,
    Leaf(String),
    Branch(&'static str, Vec<Node>),
}

impl<'s> From<Token<'s>> for Node {
    fn from(tok: Token<'s>) -> Self {
        Node::Leaf(tok.text.into())
    }
}

fn loc(line: u32, start: u32, end: u32) -> SourceLocation {
    SourceLocation::new(Position::new(line, start), Position::new(line, end))
}

fn id(text: &'static str, col: u32) -> Token<'static> {
    let len = text.len() as u32;

    Token::new(TokenKind::Id, text, Span::new(col, col + len))
        .with_loc(loc(1, col, col + len))
}

/// `S -> id`
fn single_table() -> ParseTable {
    ParseTable::new(SymbolTable::new(["id", "number"], ["$accept", "S"]))
        .production("$accept", 1)
        .and_then(|t| t.production("S", 1))
        .and_then(|t| t.shift(0, "id", 1))
        .and_then(|t| t.reduce(1, "$", 1))
        .and_then(|t| t.goto(0, "S", 2))
        .and_then(|t| t.accept(2, "$"))
        .unwrap()
}

/// `L -> L id | id`
fn list_table() -> ParseTable {
    ParseTable::new(SymbolTable::new(["id"], ["$accept", "L"]))
        .production("$accept", 1)
        .and_then(|t| t.production("L", 2))
        .and_then(|t| t.production("L", 1))
        .and_then(|t| t.shift(0, "id", 1))
        .and_then(|t| t.goto(0, "L", 2))
        .and_then(|t| t.reduce(1, "id", 2))
        .and_then(|t| t.reduce(1, "$", 2))
        .and_then(|t| t.accept(2, "$"))
        .and_then(|t| t.shift(2, "id", 3))
        .and_then(|t| t.reduce(3, "id", 1))
        .and_then(|t| t.reduce(3, "$", 1))
        .unwrap()
}

fn branch(
    name: &'static str,
) -> impl Fn(&mut (), Vec<Node>, SourceLocation) -> Node {
    move |_, values, _| Node::Branch(name, values)
}

#[test]
fn accepts_single_token() {
    let grammar = Grammar::<(), Node>::new(single_table());
    let mut ctx = ();
    let mut engine = grammar.parser(&mut ctx);

    assert_eq!(INITIAL_STATE, engine.state());
    assert_eq!(Ok(()), engine.push(id("x", 0)));
    assert_eq!(1, engine.depth());

    assert_eq!(Ok(Node::Leaf("x".into())), engine.finish());
}

#[test]
fn reducer_builds_value() {
    let grammar = Grammar::new(single_table()).with_reducer(1, branch("S"));

    assert_eq!(
        Ok(Node::Branch("S", vec![Node::Leaf("x".into())])),
        grammar.parse(&mut (), [id("x", 0)]),
    );
}

#[test]
fn left_recursive_list() {
    let grammar = Grammar::new(list_table())
        .with_reducer(1, branch("L"))
        .with_reducer(2, branch("L"));

    let result = grammar.parse(&mut (), [id("a", 0), id("b", 2), id("c", 4)]);

    let leaf = |s: &str| Node::Leaf(s.into());
    let expected = Node::Branch(
        "L",
        vec![
            Node::Branch(
                "L",
                vec![Node::Branch("L", vec![leaf("a")]), leaf("b")],
            ),
            leaf("c"),
        ],
    );

    assert_eq!(Ok(expected), result);
}

#[test]
fn parse_is_deterministic() {
    let grammar = Grammar::new(list_table()).with_reducer(1, branch("L"));
    let toks = [id("a", 0), id("b", 2)];

    assert_eq!(grammar.parse(&mut (), toks), grammar.parse(&mut (), toks));
}

#[test]
fn interleaved_parsers_share_grammar() {
    let grammar = Grammar::new(list_table())
        .with_reducer(1, branch("L"))
        .with_reducer(2, branch("L"));

    let (mut ctx_a, mut ctx_b) = ((), ());
    let mut a = grammar.parser(&mut ctx_a);
    let mut b = grammar.parser(&mut ctx_b);

    assert_eq!(Ok(()), a.push(id("a", 0)));
    assert_eq!(Ok(()), b.push(id("x", 0)));
    assert_eq!(Ok(()), a.push(id("b", 2)));

    let leaf = |s: &str| Node::Leaf(s.into());

    assert_eq!(Ok(Node::Branch("L", vec![leaf("x")])), b.finish());
    assert_eq!(
        Ok(Node::Branch(
            "L",
            vec![Node::Branch("L", vec![leaf("a")]), leaf("b")],
        )),
        a.finish(),
    );
}

#[test]
fn unexpected_token_in_initial_state() {
    let grammar = Grammar::<(), Node>::new(single_table());
    let mut ctx = ();
    let mut engine = grammar.parser(&mut ctx);

    let tok = Token::new(TokenKind::Number, "5", Span::new(0, 1))
        .with_loc(loc(1, 0, 1));

    assert_eq!(
        Err(ParseError::UnexpectedToken {
            kind: TokenKind::Number,
            text: "5".into(),
            loc: loc(1, 0, 1),
            expected: vec!["id".into()],
        }),
        engine.push(tok),
    );
}

#[test]
fn unexpected_token_after_complete_input() {
    let grammar = Grammar::<(), Node>::new(single_table());
    let mut ctx = ();
    let mut engine = grammar.parser(&mut ctx);

    assert_eq!(Ok(()), engine.push(id("x", 0)));

    // `S -> id` reduces only upon `$`.
    assert_eq!(
        Err(ParseError::UnexpectedToken {
            kind: TokenKind::Id,
            text: "y".into(),
            loc: loc(1, 2, 3),
            expected: vec!["$".into()],
        }),
        engine.push(id("y", 2)),
    );
}

#[test]
fn token_kind_not_in_grammar() {
    let grammar = Grammar::<(), Node>::new(single_table());
    let mut ctx = ();
    let mut engine = grammar.parser(&mut ctx);

    assert_eq!(None, grammar.terminal(TokenKind::Comma));
    assert_eq!(
        Err(ParseError::InvalidToken {
            kind: TokenKind::Comma,
            loc: SourceLocation::default(),
        }),
        engine.push(Token::pseudo(TokenKind::Comma, 0)),
    );
}

#[test]
fn located_tokens_missing_loc_use_last_position() {
    let grammar = Grammar::<(), Node>::new(single_table());
    let mut ctx = ();
    let mut engine = grammar.parser(&mut ctx);

    assert_eq!(Ok(()), engine.push(id("abc", 0)));

    let result = engine.push(Token::pseudo(TokenKind::Number, 3));

    assert_eq!(
        Some(SourceLocation::at(Position::new(1, 3))),
        result.err().map(|e| e.location()),
    );
}

#[test]
fn unexpected_end_of_input() {
    let grammar = Grammar::<(), Node>::new(single_table());

    assert_eq!(
        Err(ParseError::UnexpectedEnd {
            loc: SourceLocation::default(),
            expected: vec!["id".into()],
        }),
        grammar.parse(&mut (), []),
    );
}

#[test]
fn empty_production_yields_default() {
    let table =
        ParseTable::new(SymbolTable::new(["id"], ["$accept", "L"]))
            .production("$accept", 1)
            .and_then(|t| t.production("L", 0))
            .and_then(|t| t.reduce(0, "$", 1))
            .and_then(|t| t.goto(0, "L", 1))
            .and_then(|t| t.accept(1, "$"))
            .unwrap();

    let grammar = Grammar::<(), Node>::new(table.clone());
    assert_eq!(Ok(Node::Empty), grammar.parse(&mut (), []));

    let grammar = Grammar::new(table).with_reducer(1, branch("L"));
    assert_eq!(Ok(Node::Branch("L", vec![])), grammar.parse(&mut (), []));
}

#[test]
fn missing_goto_is_invalid_table() {
    let table =
        ParseTable::new(SymbolTable::new(["id"], ["$accept", "S"]))
            .production("$accept", 1)
            .and_then(|t| t.production("S", 1))
            .and_then(|t| t.shift(0, "id", 1))
            .and_then(|t| t.reduce(1, "$", 1))
            .unwrap();

    let grammar = Grammar::<(), Node>::new(table);

    assert_eq!(
        Err(ParseError::InvalidTable {
            state: 0,
            fault: TableFault::MissingGoto("S".into()),
            loc: SourceLocation::at(Position::new(1, 1)),
        }),
        grammar.parse(&mut (), [id("x", 0)]),
    );
}

#[test]
fn bad_productions_are_invalid_table() {
    let table =
        ParseTable::new(SymbolTable::new(["id"], ["$accept", "S"]))
            .production("$accept", 1)
            .and_then(|t| t.production("S", 3))
            .and_then(|t| t.shift(0, "id", 1))
            .and_then(|t| t.reduce(1, "$", 1))
            .and_then(|t| t.reduce(1, "id", 7))
            .unwrap();

    let grammar = Grammar::<(), Node>::new(table);

    assert!(matches!(
        grammar.parse(&mut (), [id("x", 0)]),
        Err(ParseError::InvalidTable {
            state: 1,
            fault: TableFault::StackUnderflow(1),
            ..
        })
    ));

    assert!(matches!(
        grammar.parse(&mut (), [id("x", 0), id("y", 2)]),
        Err(ParseError::InvalidTable {
            state: 1,
            fault: TableFault::UnknownProduction(7),
            ..
        })
    ));
}

#[derive(Debug, Default)]
struct Log(Vec<String>);

impl Context<Node> for Log {
    fn reduce_start(
        &mut self,
        prod: ProductionId,
        values: &[Node],
        loc: SourceLocation,
    ) {
        let n = values.len();
        self.0.push(format!("start r{prod} ({n} values) at {loc}"));
    }

    fn reduce_end(
        &mut self,
        prod: ProductionId,
        value: &Node,
        loc: SourceLocation,
    ) {
        let desc = match value {
            Node::Branch(name, _) => name,
            _ => "other",
        };

        self.0.push(format!("end r{prod} {desc} at {loc}"));
    }
}

#[test]
fn notifications_bracket_reducer() {
    let grammar = Grammar::new(list_table())
        .with_reducer(1, |log: &mut Log, values: Vec<Node>, _: SourceLocation| {
            log.0.push("reduce r1".into());
            Node::Branch("L", values)
        })
        .with_reducer(2, |log: &mut Log, values: Vec<Node>, _: SourceLocation| {
            log.0.push("reduce r2".into());
            Node::Branch("L", values)
        });

    let mut log = Log::default();
    let result = grammar.parse(&mut log, [id("a", 0), id("bc", 2)]);

    assert!(result.is_ok());
    assert_eq!(
        vec![
            "start r2 (1 values) at 1:0-1:1",
            "reduce r2",
            "end r2 L at 1:0-1:1",
            "start r1 (2 values) at 1:0-1:4",
            "reduce r1",
            "end r1 L at 1:0-1:4",
        ],
        log.0,
    );
}

#[test]
fn stacks_shrink_on_reduction() {
    let grammar = Grammar::<(), Node>::new(list_table());
    let mut ctx = ();
    let mut engine = grammar.parser(&mut ctx);

    assert_eq!(Ok(()), engine.push(id("a", 0)));
    assert_eq!(Ok(()), engine.push(id("b", 2)));

    // `L id` after reducing the first `id` to `L`.
    let l = grammar.table().symbols().get("L").unwrap();
    let idsym = grammar.terminal(TokenKind::Id).unwrap();
    assert_eq!(&[l, idsym], engine.symbols());
    assert_eq!(3, engine.state());
}
