//! Editor language configuration.
//!
//! Static data the host editor reads alongside the tokenizer: comment
//! delimiters, bracket pairs and auto-closing pairs. Serializes to the JSON
//! shape editors expect (`lineComment`, `blockComment`, `autoClosingPairs`).

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageConfiguration {
    pub comments: CommentRule,
    pub brackets: Vec<(String, String)>,
    pub auto_closing_pairs: Vec<AutoClosingPair>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_comment: Option<(String, String)>,
}

/// Pair the editor closes automatically after the opening text is typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoClosingPair {
    pub open: String,
    pub close: String,
    /// Token classes (base names) inside which the pair is not closed.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub not_in: Vec<String>,
}

impl LanguageConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line_comment(mut self, text: &str) -> Self {
        self.comments.line_comment = Some(text.to_owned());
        self
    }

    pub fn block_comment(mut self, open: &str, close: &str) -> Self {
        self.comments.block_comment = Some((open.to_owned(), close.to_owned()));
        self
    }

    pub fn bracket(mut self, open: &str, close: &str) -> Self {
        self.brackets.push((open.to_owned(), close.to_owned()));
        self
    }

    pub fn auto_closing_pair(mut self, open: &str, close: &str, not_in: &[&str]) -> Self {
        self.auto_closing_pairs.push(AutoClosingPair {
            open: open.to_owned(),
            close: close.to_owned(),
            not_in: not_in.iter().map(|c| (*c).to_owned()).collect(),
        });
        self
    }

    /// Closing text to insert after typing `open`, if any.
    ///
    /// `class` is the base class (no postfix) of the token at the cursor.
    /// A `notIn` entry suppresses its class and every subclass of it, so
    /// `string` covers `string.escape` while `identifier.quote` leaves plain
    /// `identifier` alone.
    pub fn auto_close(&self, open: &str, class: Option<&str>) -> Option<&str> {
        let pair = self.auto_closing_pairs.iter().find(|p| p.open == open)?;
        if let Some(class) = class
            && pair.not_in.iter().any(|n| is_subclass(class, n))
        {
            return None;
        }
        Some(&pair.close)
    }
}

/// `class` equals `parent` or extends it by further dot segments.
fn is_subclass(class: &str, parent: &str) -> bool {
    match class.strip_prefix(parent) {
        Some("") => true,
        Some(rest) => rest.starts_with('.'),
        None => false,
    }
}
