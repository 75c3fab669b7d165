use crate::test_utils::{mini, mini_definition};
use crate::{Action, Cases, CompileError, CompiledLanguage, LanguageDefinition, RuleDef};

fn compile_err(def: LanguageDefinition) -> CompileError {
    CompiledLanguage::compile(&def).unwrap_err()
}

#[test]
fn includes_are_flattened_in_place() {
    let lang = mini();
    let root = lang.state_id("root").unwrap();
    let whitespace = lang.state_id("@whitespace").unwrap();

    let patterns: Vec<&str> = lang.rules(root).iter().map(|r| r.pattern.as_str()).collect();
    assert_eq!(
        patterns,
        ["[0-9]+", "[a-z]+", r"[ \t]+", r"/\*", "\"", r"[()\[\]]", "="]
    );
    assert_eq!(lang.rules(root)[2].origin, whitespace);
    assert_eq!(lang.rules(root)[3].origin, root);
}

#[test]
fn nested_includes_flatten_depth_first() {
    let def = LanguageDefinition::new("nest")
        .state("root", vec![RuleDef::include("a"), RuleDef::new("z", "z")])
        .state("a", vec![RuleDef::new("x", "x"), RuleDef::include("b")])
        .state("b", vec![RuleDef::new("y", "y")]);
    let lang = CompiledLanguage::compile(&def).unwrap();

    let root = lang.start_state();
    let patterns: Vec<&str> = lang.rules(root).iter().map(|r| r.pattern.as_str()).collect();
    assert_eq!(patterns, ["x", "y", "z"]);
}

#[test]
fn classes_get_postfix_except_default() {
    let lang = mini();

    assert_eq!(lang.class_name(lang.default_class()), "");
    let names: Vec<&str> = lang.classes().iter().map(|(_, name)| name).collect();
    assert!(names.contains(&"string.escape.t"));
    assert!(names.contains(&"delimiter.square.t"));
}

#[test]
fn explicit_start_state() {
    let def = mini_definition().start("comment");
    let lang = CompiledLanguage::compile(&def).unwrap();

    assert_eq!(lang.state_name(lang.start_state()), "comment");
    assert_eq!(lang.format_stack(&lang.initial_stack()), "[comment]");
}

#[test]
fn states_in_declaration_order() {
    let lang = mini();
    let names: Vec<&str> = lang.states().map(|(_, name, _)| name).collect();

    assert_eq!(names, ["root", "whitespace", "comment", "string"]);
    assert_eq!(lang.state_count(), 4);
    assert_eq!(lang.state_id("missing"), None);
}

#[test]
fn compiled_language_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CompiledLanguage>();
}

#[test]
fn error_missing_start_state() {
    let err = compile_err(LanguageDefinition::new("x"));
    insta::assert_snapshot!(err, @"start state 'root' is not defined");

    let err = compile_err(mini_definition().start("main"));
    assert_eq!(err, CompileError::MissingState("main".to_owned()));
}

#[test]
fn error_unknown_include() {
    let def = LanguageDefinition::new("x").state("root", vec![RuleDef::include("@nope")]);

    insta::assert_snapshot!(compile_err(def), @"state 'root' includes undefined state 'nope'");
}

#[test]
fn error_include_cycle() {
    let def = LanguageDefinition::new("x")
        .state("root", vec![RuleDef::include("a")])
        .state("a", vec![RuleDef::new("x", "x"), RuleDef::include("b")])
        .state("b", vec![RuleDef::include("a")]);

    insta::assert_snapshot!(compile_err(def), @"include cycle: root -> a -> b -> a");
}

#[test]
fn error_self_include() {
    let def = LanguageDefinition::new("x").state("root", vec![RuleDef::include("root")]);

    assert_eq!(
        compile_err(def),
        CompileError::IncludeCycle(vec!["root".to_owned(), "root".to_owned()])
    );
}

#[test]
fn error_unknown_push_target() {
    let def = LanguageDefinition::new("x").state(
        "root",
        vec![RuleDef::new("a", Action::class("a").push("@nowhere"))],
    );

    insta::assert_snapshot!(
        compile_err(def),
        @"rule /a/ in state 'root' pushes undefined state 'nowhere'"
    );
}

#[test]
fn error_unknown_keyword_set() {
    let def = LanguageDefinition::new("x").state(
        "root",
        vec![RuleDef::new("[a-z]+", Cases::new().when("@words", "keyword"))],
    );

    insta::assert_snapshot!(
        compile_err(def),
        @"rule /[a-z]+/ in state 'root' refers to undefined keyword set 'words'"
    );
}

#[test]
fn error_brackets_without_table() {
    let def = LanguageDefinition::new("x").state("root", vec![RuleDef::new("[()]", "@brackets")]);

    insta::assert_snapshot!(
        compile_err(def),
        @"rule /[()]/ in state 'root' uses @brackets but no brackets are defined"
    );
}

#[test]
fn error_invalid_bracket() {
    let def = LanguageDefinition::new("x")
        .bracket("(", "", "delimiter")
        .state("root", vec![]);

    insta::assert_snapshot!(
        compile_err(def),
        @"bracket pair '(' '' must have non-empty delimiters and class"
    );
}

#[test]
fn error_invalid_regex() {
    let def = LanguageDefinition::new("x").state("root", vec![RuleDef::new("(", "x")]);

    let err = compile_err(def);
    let CompileError::Regex { state, pattern, .. } = &err else {
        panic!("expected regex error, got {err:?}");
    };
    assert_eq!(state, "root");
    assert_eq!(pattern, "(");
}

#[test]
fn error_in_included_rule_names_declaring_state() {
    let def = LanguageDefinition::new("x")
        .state("root", vec![RuleDef::include("inner")])
        .state("inner", vec![RuleDef::new("a", Action::class("a").push("gone"))]);

    assert_eq!(
        compile_err(def),
        CompileError::UnknownPushTarget {
            state: "inner".to_owned(),
            pattern: "a".to_owned(),
            target: "gone".to_owned(),
        }
    );
}
