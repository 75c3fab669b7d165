use crate::LanguageConfiguration;

fn config() -> LanguageConfiguration {
    LanguageConfiguration::new()
        .line_comment("//")
        .block_comment("/*", "*/")
        .bracket("(", ")")
        .auto_closing_pair("\"", "\"", &["string", "comment", "identifier.quote"])
        .auto_closing_pair("(", ")", &["string", "comment"])
        .auto_closing_pair("<", ">", &[])
}

#[test]
fn auto_close_outside_suppressed_classes() {
    let c = config();

    assert_eq!(c.auto_close("\"", None), Some("\""));
    assert_eq!(c.auto_close("\"", Some("keyword")), Some("\""));
    assert_eq!(c.auto_close("(", Some("")), Some(")"));
    assert_eq!(c.auto_close("<", Some("string")), Some(">"));
}

#[test]
fn auto_close_suppressed_in_class_and_subclasses() {
    let c = config();

    assert_eq!(c.auto_close("\"", Some("string")), None);
    assert_eq!(c.auto_close("\"", Some("string.escape")), None);
    assert_eq!(c.auto_close("(", Some("comment")), None);
    assert_eq!(c.auto_close("\"", Some("identifier.quote")), None);
}

#[test]
fn auto_close_matches_whole_segments() {
    let c = config();

    assert_eq!(c.auto_close("\"", Some("identifier")), Some("\""));
    assert_eq!(c.auto_close("\"", Some("strings")), Some("\""));
    assert_eq!(c.auto_close("(", Some("identifier.quote")), Some(")"));
}

#[test]
fn auto_close_unknown_open() {
    assert_eq!(config().auto_close("{", None), None);
}

#[test]
fn serializes_to_editor_shape() {
    let res = serde_json::to_string_pretty(&config()).unwrap();

    insta::assert_snapshot!(res, @r#"
    {
      "comments": {
        "lineComment": "//",
        "blockComment": [
          "/*",
          "*/"
        ]
      },
      "brackets": [
        [
          "(",
          ")"
        ]
      ],
      "autoClosingPairs": [
        {
          "open": "\"",
          "close": "\"",
          "notIn": [
            "string",
            "comment",
            "identifier.quote"
          ]
        },
        {
          "open": "(",
          "close": ")",
          "notIn": [
            "string",
            "comment"
          ]
        },
        {
          "open": "<",
          "close": ">"
        }
      ]
    }
    "#);
}
