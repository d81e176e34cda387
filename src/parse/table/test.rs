// Tests for parse tables
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

fn symbols() -> SymbolTable {
    SymbolTable::new(["id", "+"], ["$accept", "E"])
}

#[test]
fn symbols_numbered_densely_from_end() {
    let syms = symbols();

    assert_eq!(Some(Symbol::END), syms.get("$"));
    assert_eq!(Some(1), syms.get("id").map(Symbol::id));
    assert_eq!(Some(2), syms.get("+").map(Symbol::id));
    assert_eq!(Some(3), syms.get("$accept").map(Symbol::id));
    assert_eq!(Some(4), syms.get("E").map(Symbol::id));
    assert_eq!(5, syms.len());
}

#[test]
fn symbol_classification() {
    let syms = symbols();
    let get = |name| syms.get(name).unwrap();

    assert!(syms.is_terminal(Symbol::END));
    assert!(syms.is_terminal(get("+")));
    assert!(!syms.is_terminal(get("E")));
    assert_eq!("E", syms.name(get("E")));
}

#[test]
fn duplicate_symbols_are_skipped() {
    let syms = SymbolTable::new(["id", "id", "$"], ["S", "id"]);

    assert_eq!(3, syms.len());
    assert!(syms.is_terminal(syms.get("id").unwrap()));
    assert!(!syms.is_terminal(syms.get("S").unwrap()));
}

#[test]
fn unknown_symbol_id() {
    assert_eq!(None, symbols().from_id(5));
    assert_eq!("<unknown>", symbols().name(Symbol(42)));
}

#[test]
fn action_from_encoded_str() {
    assert_eq!(Ok(Action::Shift(12)), "s12".parse());
    assert_eq!(Ok(Action::Reduce(3)), "r3".parse());
    assert_eq!(Ok(Action::Accept), "r0".parse());
    assert_eq!(Ok(Action::Accept), "acc".parse());
    assert_eq!(Ok(Action::Accept), "a".parse());

    for bad in ["", "s", "x1", "s-1", "r1.5", "é1"] {
        assert_eq!(
            Err(TableError::BadAction(bad.into())),
            bad.parse::<Action>(),
            "{bad}",
        );
    }
}

#[test]
fn action_display() {
    assert_eq!("s4", Action::Shift(4).to_string());
    assert_eq!("r2", Action::Reduce(2).to_string());
    assert_eq!("acc", Action::Accept.to_string());
}

#[test]
fn builder_populates_tables() {
    let table = ParseTable::new(symbols())
        .shift(0, "id", 1)
        .and_then(|t| t.reduce(1, "$", 1))
        .and_then(|t| t.accept(2, "$"))
        .and_then(|t| t.goto(0, "E", 2))
        .and_then(|t| t.production("$accept", 1))
        .and_then(|t| t.production("E", 1))
        .unwrap();

    let id = table.symbols().get("id").unwrap();
    let e = table.symbols().get("E").unwrap();

    assert_eq!(Some(Action::Shift(1)), table.action(0, id));
    assert_eq!(Some(Action::Reduce(1)), table.action(1, Symbol::END));
    assert_eq!(Some(Action::Accept), table.action(2, Symbol::END));
    assert_eq!(None, table.action(0, Symbol::END));
    assert_eq!(Some(2), table.goto_state(0, e));
    assert_eq!(None, table.goto_state(1, e));

    assert_eq!(2, table.production_count());
    assert_eq!(Some(Production { lhs: e, len: 1 }), table.get_production(1));
    assert_eq!(None, table.get_production(2));
}

#[test]
fn builder_rejects_misplaced_symbols() {
    let table = || ParseTable::new(symbols());

    assert_eq!(
        Err(TableError::ExpectedTerminal("E".into())),
        table().shift(0, "E", 1).map(|_| ()),
    );
    assert_eq!(
        Err(TableError::ExpectedNonterminal("id".into())),
        table().goto(0, "id", 1).map(|_| ()),
    );
    assert_eq!(
        Err(TableError::ExpectedNonterminal("+".into())),
        table().production("+", 2).map(|_| ()),
    );
    assert_eq!(
        Err(TableError::UnknownSymbol("nope".into())),
        table().reduce(0, "nope", 1).map(|_| ()),
    );
}

#[test]
fn expected_terminals_sorted_by_id() {
    let table = ParseTable::new(symbols())
        .shift(0, "+", 1)
        .and_then(|t| t.shift(0, "id", 2))
        .and_then(|t| t.accept(0, "$"))
        .and_then(|t| t.shift(1, "id", 2))
        .unwrap();

    let names: Vec<_> = table
        .expected(0)
        .into_iter()
        .map(|sym| table.symbols().name(sym))
        .collect();

    assert_eq!(vec!["$", "id", "+"], names);
    assert!(table.expected(7).is_empty());
}

#[test]
fn from_encoded_tables() {
    let table = ParseTable::from_encoded(
        symbols(),
        [("0-1", "s1"), ("1-0", "r1"), ("1-2", "r1"), ("2-0", "r0")],
        [("0-4", 2)],
        [("$accept", 1), ("E", 1)],
    )
    .unwrap();

    let plus = table.symbols().get("+").unwrap();

    assert_eq!(Some(Action::Reduce(1)), table.action(1, plus));
    assert_eq!(Some(Action::Accept), table.action(2, Symbol::END));
    assert_eq!(Some(2), table.goto_state(0, Symbol(4)));
}

#[test]
fn from_encoded_rejects_bad_keys() {
    let load = |key: &str| {
        ParseTable::from_encoded(
            symbols(),
            [(key, "s1")],
            [] as [(&str, StateId); 0],
            [] as [(&str, usize); 0],
        )
        .map(|_| ())
    };

    assert_eq!(Err(TableError::BadKey("01".into())), load("01"));
    assert_eq!(Err(TableError::BadKey("x-1".into())), load("x-1"));
    assert_eq!(Err(TableError::UnknownSymbol("9".into())), load("0-9"));
    assert_eq!(Err(TableError::ExpectedTerminal("E".into())), load("0-4"));
}
