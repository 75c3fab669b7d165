//! Trace rule matching for debugging a table.

use std::path::PathBuf;

use pqlex_lib::{PrintTracer, Verbosity};

use super::error::or_exit;
use super::lang_resolver::resolve_lang;
use super::source_loader::load_source;

pub struct TraceArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub lang: Option<String>,
    pub verbosity: Verbosity,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let source = or_exit(load_source(
        args.source_text.as_deref(),
        args.source_path.as_deref(),
    ));
    let lang = or_exit(resolve_lang(args.lang.as_deref(), args.source_path.as_deref()));

    let mut tracer = PrintTracer::builder()
        .verbosity(args.verbosity)
        .colored(args.color)
        .build();
    lang.compiled().tokenize_document_traced(&source, &mut tracer);
    tracer.print();
}
