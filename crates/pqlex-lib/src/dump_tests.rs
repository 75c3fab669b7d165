use crate::test_utils::mini;
use crate::{Colors, TablePrinter, TokenPrinter};

#[test]
fn dump_table() {
    let lang = mini();

    insta::assert_snapshot!(TablePrinter::new(&lang).dump(), @r#"
    [language]
    name = mini
    postfix = ".t"
    default = (none)
    ignore_case = false

    [root] (start)
      00  /[0-9]+/  number
      01  /[a-z]+/  { @types: type, @keywords: keyword, @default: identifier }
      02  /[ \t]+/  white  ; from whitespace
      03  //\*/  comment -> @comment
      04  /"/  string -> @string
      05  /[()\[\]]/  @brackets
      06  /=/  operators

    [whitespace]
      00  /[ \t]+/  white

    [comment]
      00  /\*//  comment -> @pop
      01  /./  comment

    [string]
      00  /""/  string.escape
      01  /"/  string -> @pop
      02  /./  string
    "#);
}

#[test]
fn dump_tokens_with_spans() {
    let lang = mini();
    let res = TokenPrinter::new(&lang).spans(true).dump("f(1)\n\"x");

    insta::assert_snapshot!(res, @r#"
    L1
      0..1    identifier.t "f"
      1..2    delimiter.parenthesis.t "("
      2..3    number.t "1"
      3..4    delimiter.parenthesis.t ")"
    L2
      0..1    string.t "\""
      1..2    string.t "x"
      -> [root, string]
    "#);
}

#[test]
fn colored_dump_wraps_classes() {
    let lang = mini();
    let res = TokenPrinter::new(&lang).colored(Colors::ON).dump("1");

    assert!(res.contains("\x1b[33mnumber.t\x1b[0m"));
}
