use pqlex_lib::LanguageConfiguration;

use super::error::{CliError, or_exit};
use super::lang_resolver::resolve_lang;

pub struct ConfigArgs {
    pub lang: Option<String>,
    pub compact: bool,
}

pub fn run(args: ConfigArgs) {
    let lang = or_exit(resolve_lang(args.lang.as_deref(), None));
    let json = or_exit(render_config(lang.configuration(), args.compact));
    println!("{json}");
}

fn render_config(config: &LanguageConfiguration, compact: bool) -> Result<String, CliError> {
    let json = if compact {
        serde_json::to_string(config)?
    } else {
        serde_json::to_string_pretty(config)?
    };
    Ok(json)
}
