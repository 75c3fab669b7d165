use crate::{Action, Cases, CompiledLanguage, LanguageDefinition, LineTokens, RuleDef};

/// Small language exercising every action kind.
pub fn mini_definition() -> LanguageDefinition {
    LanguageDefinition::new("mini")
        .token_postfix(".t")
        .bracket("(", ")", "delimiter.parenthesis")
        .bracket("[", "]", "delimiter.square")
        .keyword_set("types", &["null", "text"])
        .keyword_set("keywords", &["let", "in", "null"])
        .state(
            "root",
            vec![
                RuleDef::new("[0-9]+", "number"),
                RuleDef::new(
                    "[a-z]+",
                    Cases::new()
                        .when("@types", "type")
                        .when("@keywords", "keyword")
                        .otherwise("identifier"),
                ),
                RuleDef::include("@whitespace"),
                RuleDef::new(r"/\*", Action::class("comment").push("@comment")),
                RuleDef::new("\"", Action::class("string").push("@string")),
                RuleDef::new(r"[()\[\]]", "@brackets"),
                RuleDef::new("=", "operators"),
            ],
        )
        .state("whitespace", vec![RuleDef::new(r"[ \t]+", "white")])
        .state(
            "comment",
            vec![
                RuleDef::new(r"\*/", Action::class("comment").pop()),
                RuleDef::new(".", "comment"),
            ],
        )
        .state(
            "string",
            vec![
                RuleDef::new("\"\"", "string.escape"),
                RuleDef::new("\"", Action::class("string").pop()),
                RuleDef::new(".", "string"),
            ],
        )
}

pub fn mini() -> CompiledLanguage {
    CompiledLanguage::compile(&mini_definition()).expect("mini table compiles")
}

/// Asserts that tokens are contiguous, non-empty and cover `line` exactly.
pub fn assert_covers(line: &str, tokens: &LineTokens) {
    let mut pos = 0;
    for token in &tokens.tokens {
        assert_eq!(token.start, pos, "gap or overlap at {pos} in {line:?}");
        assert!(token.end > token.start, "empty token at {pos} in {line:?}");
        pos = token.end;
    }
    assert_eq!(pos, line.len(), "tokens do not reach the end of {line:?}");
}
