//! Print the tokens of a document.

use std::path::PathBuf;

use pqlex_lib::{BracketSide, Colors, CompiledLanguage, TokenPrinter, document_lines};
use serde::Serialize;

use super::error::{CliError, or_exit};
use super::lang_resolver::resolve_lang;
use super::source_loader::load_source;

pub struct TokensArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub lang: Option<String>,
    pub spans: bool,
    pub coalesce: bool,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: TokensArgs) {
    let source = or_exit(load_source(
        args.source_text.as_deref(),
        args.source_path.as_deref(),
    ));
    let lang = or_exit(resolve_lang(args.lang.as_deref(), args.source_path.as_deref()));

    if args.json {
        let json = or_exit(render_json(lang.compiled(), &source, args.coalesce));
        println!("{json}");
        return;
    }

    let out = TokenPrinter::new(lang.compiled())
        .colored(Colors::new(args.color))
        .spans(args.spans)
        .coalesce(args.coalesce)
        .dump(&source);
    print!("{out}");
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonLine<'a> {
    line: usize,
    tokens: Vec<JsonToken<'a>>,
    end_stack: Vec<&'a str>,
}

#[derive(Serialize)]
struct JsonToken<'a> {
    start: usize,
    end: usize,
    class: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    bracket: Option<BracketSide>,
}

/// Tokens of every line as pretty-printed JSON.
pub fn render_json(
    lang: &CompiledLanguage,
    source: &str,
    coalesce: bool,
) -> Result<String, CliError> {
    let tokenized = lang.tokenize_document(source);
    let mut lines = Vec::with_capacity(tokenized.len());

    for (n, (text, line)) in document_lines(source).zip(&tokenized).enumerate() {
        let coalesced;
        let line = if coalesce {
            coalesced = line.coalesced();
            &coalesced
        } else {
            line
        };

        lines.push(JsonLine {
            line: n + 1,
            tokens: line
                .tokens
                .iter()
                .map(|t| JsonToken {
                    start: t.start,
                    end: t.end,
                    class: lang.class_name(t.class),
                    text: t.text(text),
                    bracket: t.bracket,
                })
                .collect(),
            end_stack: line.end_stack.iter().map(|s| lang.state_name(s)).collect(),
        });
    }

    Ok(serde_json::to_string_pretty(&lines)?)
}
