use pqlex_core::ClassTable;

use crate::test_utils::{assert_covers, mini};
use crate::{Token, TokenPrinter};

#[test]
fn token_text_and_span() {
    let mut classes = ClassTable::new("");
    let token = Token::new(4..7, classes.intern("keyword"));

    assert_eq!(token.text("let let"), "let");
    assert_eq!(token.span(), 4..7);
    assert_eq!(token.len(), 3);
    assert!(!token.is_empty());
    assert_eq!(token.bracket, None);
}

#[test]
fn coalesce_merges_runs_of_same_class() {
    let lang = mini();
    let line = "/* ab */ 1";
    let tokens = lang.tokenize_line(line, &lang.initial_stack());
    let merged = tokens.coalesced();

    assert_eq!(tokens.tokens.len(), 8);
    assert_eq!(merged.tokens.len(), 3);
    assert_eq!(merged.tokens[0].text(line), "/* ab */");
    assert_eq!(merged.end_stack, tokens.end_stack);
    assert_covers(line, &merged);
}

#[test]
fn coalesce_keeps_brackets_apart() {
    let lang = mini();
    let line = "(()) [";
    let merged = lang.tokenize_line(line, &lang.initial_stack()).coalesced();

    assert_eq!(merged.tokens.len(), 6);
    assert!(merged.tokens.iter().filter(|t| t.bracket.is_some()).all(|t| t.len() == 1));
}

#[test]
fn coalesced_dump() {
    let lang = mini();
    let res = TokenPrinter::new(&lang)
        .coalesce(true)
        .spans(true)
        .dump(r#"x "a b"#);

    insta::assert_snapshot!(res, @r#"
    L1
      0..1    identifier.t "x"
      1..2    white.t " "
      2..6    string.t "\"a b"
      -> [root, string]
    "#);
}

#[test]
fn class_at_merged_token() {
    let lang = mini();
    let merged = lang.tokenize_line("/* ab", &lang.initial_stack()).coalesced();

    assert_eq!(merged.tokens.len(), 1);
    assert_eq!(merged.class_at(3), merged.class_at(0));
}
