#![allow(non_snake_case)]

use super::*;
use crate::fixtures;

fn steps(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn walk___no_steps___names_root() {
    let lines = walk(Session::new(fixtures::graph()), &[]);

    assert_eq!(lines, vec!["start: Home (home)"]);
}

#[test]
fn walk___link_speak_and_back() {
    let lines = walk(
        Session::new(fixtures::graph()),
        &steps(&["food", "apple", "back", "hi"]),
    );

    assert_eq!(
        lines,
        vec![
            "start: Home (home)",
            "food: -> Food (food)",
            "apple: says \"apple\"",
            "back: Home (home)",
            "hi: says \"hello\"",
        ]
    );
}

#[test]
fn walk___dangling_link___stays_put() {
    let lines = walk(Session::new(fixtures::graph()), &steps(&["drinks", "food"]));

    assert_eq!(
        lines[1],
        "drinks: dangling link (id=drinks path=boards/drinks.obf), staying on Home (home)"
    );
    assert_eq!(lines[2], "food: -> Food (food)");
}

#[test]
fn walk___unknown_button_and_empty_history() {
    let lines = walk(Session::new(fixtures::graph()), &steps(&["nope", "back"]));

    assert_eq!(lines[1], "nope: no such button on Home (home)");
    assert_eq!(lines[2], "back: no history");
}

#[test]
fn walk___link_by_path___returns_home() {
    let lines = walk(Session::new(fixtures::graph()), &steps(&["food", "home"]));

    assert_eq!(lines[2], "home: -> Home (home)");
}
