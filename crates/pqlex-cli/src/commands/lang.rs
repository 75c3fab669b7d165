/// List builtin languages with aliases and extensions.
pub fn run_list() {
    print!("{}", render_list());
}

pub(crate) fn render_list() -> String {
    let mut out = String::new();
    for lang in pqlex_langs::all() {
        let aliases: Vec<&str> = lang
            .aliases()
            .iter()
            .copied()
            .filter(|alias| *alias != lang.name())
            .collect();
        let exts: Vec<String> = lang.extensions().iter().map(|e| format!(".{e}")).collect();

        out.push_str(lang.name());
        if !aliases.is_empty() {
            out.push_str(&format!(" ({})", aliases.join(", ")));
        }
        if !exts.is_empty() {
            out.push_str(&format!("  [{}]", exts.join(" ")));
        }
        out.push('\n');
    }
    out
}
