use pqlex_lib::{Colors, TablePrinter};

use super::error::or_exit;
use super::lang_resolver::resolve_lang;

pub struct DumpArgs {
    pub lang: Option<String>,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let lang = or_exit(resolve_lang(args.lang.as_deref(), None));
    let out = TablePrinter::new(lang.compiled())
        .colored(Colors::new(args.color))
        .dump();
    print!("{out}");
}
