use super::*;

#[test]
#[cfg(feature = "lang-powerquery")]
fn lang_from_name() {
    assert_eq!(from_name("powerquery").unwrap().name(), "powerquery");
    assert_eq!(from_name("PQ").unwrap().name(), "powerquery");
    assert_eq!(from_name("m").unwrap().name(), "powerquery");
    assert_eq!(from_name("PowerQuery-M").unwrap().name(), "powerquery");
    assert!(from_name("unknown").is_none());
}

#[test]
#[cfg(feature = "lang-powerquery")]
fn lang_from_extension() {
    assert_eq!(from_ext("pq").unwrap().name(), "powerquery");
    assert_eq!(from_ext("PQM").unwrap().name(), "powerquery");
    assert!(from_ext("rs").is_none());
}

#[test]
#[cfg(feature = "lang-powerquery")]
fn builtin_is_compiled_once() {
    let a = powerquery();
    let b = powerquery();

    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(a.aliases(), ["powerquery", "pq", "m", "powerquery-m"]);
    assert_eq!(a.extensions(), ["pq", "pqm"]);
}

#[test]
#[cfg(feature = "lang-powerquery")]
fn builtin_table_shape() {
    let lang = powerquery();
    let compiled = lang.compiled();

    let states: Vec<&str> = compiled.states().map(|(_, name, _)| name).collect();
    assert_eq!(
        states,
        ["root", "whitespace", "comments", "comment", "strings", "string"]
    );
    assert_eq!(compiled.state_name(compiled.start_state()), "root");
    assert_eq!(compiled.classes().postfix(), ".pq");
    assert_eq!(compiled.class_name(compiled.default_class()), "");
    assert_eq!(lang.definition().keyword_sets.len(), 5);
}

#[test]
fn all_returns_enabled_langs() {
    let langs = all();
    for lang in &langs {
        assert!(!lang.name().is_empty());
        assert!(lang.aliases().iter().any(|alias| *alias == lang.name()));
    }
    #[cfg(feature = "lang-powerquery")]
    assert_eq!(langs.len(), 1);
}
