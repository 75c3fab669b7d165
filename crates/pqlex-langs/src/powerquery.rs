//! Power Query formula language ("M").
//!
//! Patterns use explicit ASCII classes (`[0-9A-Za-z_]`, `(?-u:\b)`) so word
//! characters and word boundaries mean the same thing as in browser regexes.

use pqlex_lib::{Action, Cases, LanguageConfiguration, LanguageDefinition, RuleDef};

const OPERATOR_KEYWORDS: &[&str] = &["and", "not", "or"];

const KEYWORDS: &[&str] = &[
    "as",
    "each",
    "else",
    "error",
    "false",
    "if",
    "in",
    "is",
    "let",
    "meta",
    "otherwise",
    "section",
    "shared",
    "then",
    "true",
    "try",
    "type",
];

const CONSTRUCTORS: &[&str] = &[
    "#binary",
    "#date",
    "#datetime",
    "#datetimezone",
    "#duration",
    "#table",
    "#time",
];

const CONSTANTS: &[&str] = &["#infinity", "#nan", "#sections", "#shared"];

const TYPE_KEYWORDS: &[&str] = &[
    "action",
    "any",
    "anynonnull",
    "none",
    "null",
    "logical",
    "number",
    "time",
    "date",
    "datetime",
    "datetimezone",
    "duration",
    "text",
    "binary",
    "list",
    "record",
    "table",
    "function",
];

/// Classes inside which typing an opening delimiter does not auto-close it.
const NO_AUTO_CLOSE: &[&str] = &["string", "comment", "identifier.quote"];

pub fn definition() -> LanguageDefinition {
    LanguageDefinition::new("powerquery")
        .default_token("")
        .token_postfix(".pq")
        .ignore_case(false)
        .bracket("[", "]", "delimiter.square")
        .bracket("{", "}", "delimiter.brackets")
        .bracket("(", ")", "delimiter.parenthesis")
        .keyword_set("operatorKeywords", OPERATOR_KEYWORDS)
        .keyword_set("keywords", KEYWORDS)
        .keyword_set("constructors", CONSTRUCTORS)
        .keyword_set("constants", CONSTANTS)
        .keyword_set("typeKeywords", TYPE_KEYWORDS)
        .state("root", root())
        .state("whitespace", vec![RuleDef::new(r"\s+", "white")])
        .state(
            "comments",
            vec![
                RuleDef::new(r"/\*", Action::class("comment").push("@comment")),
                RuleDef::new(r"//+.*", "comment"),
            ],
        )
        .state(
            "comment",
            vec![
                RuleDef::new(r"\*/", Action::class("comment").pop()),
                RuleDef::new(".", "comment"),
            ],
        )
        .state(
            "strings",
            vec![RuleDef::new("\"", Action::class("string").push("@string"))],
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

fn root() -> Vec<RuleDef> {
    vec![
        // quoted identifier
        RuleDef::new(r#"#"[0-9A-Za-z_ .]+""#, "identifier.quote"),
        // numbers
        RuleDef::new(r"[0-9]*\.[0-9]+([eE][\-+]?[0-9]+)?", "number.float"),
        RuleDef::new(r"0[xX][0-9a-fA-F]+", "number.hex"),
        RuleDef::new(r"[0-9]+([eE][\-+]?[0-9]+)?", "number"),
        // keywords
        RuleDef::new(
            r"#?[a-z]+(?-u:\b)",
            Cases::new()
                .when("@typeKeywords", "type")
                .when("@keywords", "keyword")
                .when("@constants", "constant")
                .when("@constructors", "constructor")
                .when("@operatorKeywords", "operators")
                .otherwise("identifier"),
        ),
        // other identifiers
        RuleDef::new(r"(?-u:\b)[a-zA-Z_][0-9A-Za-z_.]*(?-u:\b)", "identifier"),
        RuleDef::include("@whitespace"),
        RuleDef::include("@comments"),
        RuleDef::include("@strings"),
        RuleDef::new(r"[{}()\[\]]", "@brackets"),
        RuleDef::new(r"([=+<>\-*&@?/!])|([<>]=)|(<>)|(=>)|(\.\.\.)|(\.\.)", "operators"),
        RuleDef::new("[,;]", "delimiter"),
    ]
}

pub fn configuration() -> LanguageConfiguration {
    LanguageConfiguration::new()
        .line_comment("//")
        .block_comment("/*", "*/")
        .bracket("[", "]")
        .bracket("(", ")")
        .bracket("{", "}")
        .auto_closing_pair("\"", "\"", NO_AUTO_CLOSE)
        .auto_closing_pair("[", "]", NO_AUTO_CLOSE)
        .auto_closing_pair("(", ")", NO_AUTO_CLOSE)
        .auto_closing_pair("{", "}", NO_AUTO_CLOSE)
}
