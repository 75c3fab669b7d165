use std::path::Path;

use super::error::CliError;
use super::lang_resolver::{levenshtein, resolve_lang, suggest_language};

#[test]
fn explicit_name_wins_over_extension() {
    let lang = resolve_lang(Some("M"), Some(Path::new("query.txt"))).unwrap();
    assert_eq!(lang.name(), "powerquery");
}

#[test]
fn extension_then_default() {
    let from_ext = resolve_lang(None, Some(Path::new("dir/query.pqm"))).unwrap();
    assert_eq!(from_ext.name(), "powerquery");

    let unknown_ext = resolve_lang(None, Some(Path::new("notes.txt"))).unwrap();
    assert_eq!(unknown_ext.name(), "powerquery");

    let stdin = resolve_lang(None, Some(Path::new("-"))).unwrap();
    assert_eq!(stdin.name(), "powerquery");

    let nothing = resolve_lang(None, None).unwrap();
    assert_eq!(nothing.name(), "powerquery");
}

#[test]
fn unknown_name_carries_suggestion() {
    let err = resolve_lang(Some("powrquery"), None).unwrap_err();

    assert_eq!(err.to_string(), "unknown language: 'powrquery'");
    let CliError::UnknownLang { suggestion, .. } = err else {
        panic!("expected unknown language error");
    };
    assert_eq!(suggestion.as_deref(), Some("powerquery"));
}

#[test]
fn suggestion_matches_aliases() {
    assert_eq!(suggest_language("pqq").as_deref(), Some("powerquery"));
    assert_eq!(suggest_language("PowerQueryM").as_deref(), Some("powerquery"));
    assert_eq!(suggest_language("javascript"), None);
}

#[test]
fn levenshtein_distance() {
    assert_eq!(levenshtein("", "abc"), 3);
    assert_eq!(levenshtein("abc", ""), 3);
    assert_eq!(levenshtein("kitten", "sitting"), 3);
    assert_eq!(levenshtein("pq", "pq"), 0);
}
