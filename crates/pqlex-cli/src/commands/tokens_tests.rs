use super::lang::render_list;
use super::tokens::render_json;

#[test]
fn json_tokens_with_brackets() {
    let lang = pqlex_langs::powerquery();
    let res = render_json(lang.compiled(), "(1", false).unwrap();

    insta::assert_snapshot!(res, @r#"
    [
      {
        "line": 1,
        "tokens": [
          {
            "start": 0,
            "end": 1,
            "class": "delimiter.parenthesis.pq",
            "text": "(",
            "bracket": "open"
          },
          {
            "start": 1,
            "end": 2,
            "class": "number.pq",
            "text": "1"
          }
        ],
        "endStack": [
          "root"
        ]
      }
    ]
    "#);
}

#[test]
fn json_tokens_coalesced_across_lines() {
    let lang = pqlex_langs::powerquery();
    let res = render_json(lang.compiled(), "/* ab\n*/", true).unwrap();

    insta::assert_snapshot!(res, @r#"
    [
      {
        "line": 1,
        "tokens": [
          {
            "start": 0,
            "end": 5,
            "class": "comment.pq",
            "text": "/* ab"
          }
        ],
        "endStack": [
          "root",
          "comment"
        ]
      },
      {
        "line": 2,
        "tokens": [
          {
            "start": 0,
            "end": 2,
            "class": "comment.pq",
            "text": "*/"
          }
        ],
        "endStack": [
          "root"
        ]
      }
    ]
    "#);
}

#[test]
fn lang_list() {
    insta::assert_snapshot!(render_list(), @"powerquery (pq, m, powerquery-m)  [.pq .pqm]");
}
