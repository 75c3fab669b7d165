use std::path::Path;

use pqlex_langs::Lang;

use super::error::CliError;

/// Language used when neither a flag nor an extension names one.
pub const DEFAULT_LANG: &str = "powerquery";

/// Resolve language from explicit flag, else source extension, else the default.
///
/// An unknown extension falls through to the default; an unknown explicit
/// name is an error.
pub fn resolve_lang(explicit: Option<&str>, source_path: Option<&Path>) -> Result<Lang, CliError> {
    // Explicit flag takes precedence
    if let Some(name) = explicit {
        return pqlex_langs::from_name(name).ok_or_else(|| CliError::UnknownLang {
            name: name.to_owned(),
            suggestion: suggest_language(name),
        });
    }

    if let Some(path) = source_path
        && path.as_os_str() != "-"
        && let Some(ext) = path.extension().and_then(|e| e.to_str())
        && let Some(lang) = pqlex_langs::from_ext(ext)
    {
        return Ok(lang);
    }

    pqlex_langs::from_name(DEFAULT_LANG).ok_or(CliError::NoLanguages)
}

/// Suggest the closest language for a typo, matching against every alias.
pub fn suggest_language(input: &str) -> Option<String> {
    let input_lower = input.to_lowercase();
    pqlex_langs::all()
        .into_iter()
        .filter_map(|lang| {
            let distance = lang
                .aliases()
                .iter()
                .map(|alias| levenshtein(alias, &input_lower))
                .min()?;
            (distance <= 2).then(|| (distance, lang.name().to_owned()))
        })
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, name)| name)
}

pub(crate) fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}
