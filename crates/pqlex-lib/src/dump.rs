//! Dump helpers for token streams and compiled tables.
//!
//! Provides formatted output suitable for snapshot testing and for the
//! `tokens` and `dump` commands.

use std::fmt::Write;

use pqlex_core::{ClassId, Colors};

use crate::compile::CompiledLanguage;
use crate::token::LineTokens;
use crate::tokenizer::document_lines;

/// Printer for tokenized documents, one token per output line.
pub struct TokenPrinter<'a> {
    lang: &'a CompiledLanguage,
    colors: Colors,
    spans: bool,
    coalesce: bool,
}

impl<'a> TokenPrinter<'a> {
    pub fn new(lang: &'a CompiledLanguage) -> Self {
        Self {
            lang,
            colors: Colors::OFF,
            spans: false,
            coalesce: false,
        }
    }

    pub fn colored(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }

    /// Prefix each token with its byte span.
    pub fn spans(mut self, spans: bool) -> Self {
        self.spans = spans;
        self
    }

    /// Merge adjacent tokens of the same class before printing.
    pub fn coalesce(mut self, coalesce: bool) -> Self {
        self.coalesce = coalesce;
        self
    }

    pub fn dump(&self, text: &str) -> String {
        let mut out = String::new();
        self.format(&mut out, text).expect("String write never fails");
        out
    }

    fn format(&self, w: &mut String, text: &str) -> std::fmt::Result {
        let lines = self.lang.tokenize_document(text);
        for (n, (line, tokens)) in document_lines(text).zip(&lines).enumerate() {
            writeln!(w, "{}L{}{}", self.colors.dim, n + 1, self.colors.reset)?;
            self.format_line(w, line, tokens)?;
        }
        Ok(())
    }

    fn format_line(&self, w: &mut String, line: &str, tokens: &LineTokens) -> std::fmt::Result {
        let coalesced;
        let tokens = if self.coalesce {
            coalesced = tokens.coalesced();
            &coalesced
        } else {
            tokens
        };

        for token in &tokens.tokens {
            w.push_str("  ");
            if self.spans {
                let span = format!("{}..{}", token.start, token.end);
                write!(w, "{}{:<8}{}", self.colors.dim, span, self.colors.reset)?;
            }
            write!(w, "{} ", class_label(self.lang, token.class, self.colors))?;
            writeln!(w, "{:?}", token.text(line))?;
        }

        if tokens.end_stack.depth() > 1 {
            writeln!(
                w,
                "  {}-> {}{}",
                self.colors.dim,
                self.lang.format_stack(&tokens.end_stack),
                self.colors.reset
            )?;
        }
        Ok(())
    }
}

/// Printer for the flattened rule table of a compiled language.
pub struct TablePrinter<'a> {
    lang: &'a CompiledLanguage,
    colors: Colors,
}

impl<'a> TablePrinter<'a> {
    pub fn new(lang: &'a CompiledLanguage) -> Self {
        Self {
            lang,
            colors: Colors::OFF,
        }
    }

    pub fn colored(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    fn format(&self, w: &mut String) -> std::fmt::Result {
        let lang = self.lang;
        let c = self.colors;

        writeln!(w, "[language]")?;
        writeln!(w, "name = {}", lang.name())?;
        writeln!(w, "postfix = {:?}", lang.classes().postfix())?;
        writeln!(w, "default = {}", class_label(lang, lang.default_class(), c))?;
        writeln!(w, "ignore_case = {}", lang.ignore_case())?;

        for (id, name, rules) in lang.states() {
            writeln!(w)?;
            if id == lang.start_state() {
                writeln!(w, "[{name}] (start)")?;
            } else {
                writeln!(w, "[{name}]")?;
            }
            for (i, rule) in rules.iter().enumerate() {
                write!(w, "  {i:02}  {}/{}/{}  {}", c.dim, rule.pattern, c.reset, rule.action)?;
                if rule.origin != id {
                    write!(w, "  {}; from {}{}", c.dim, lang.state_name(rule.origin), c.reset)?;
                }
                writeln!(w)?;
            }
        }
        Ok(())
    }
}

/// Full class name, colored by family; the empty default class prints as `(none)`.
pub(crate) fn class_label(lang: &CompiledLanguage, class: ClassId, colors: Colors) -> String {
    let name = lang.class_name(class);
    if name.is_empty() {
        return format!("{}(none){}", colors.dim, colors.reset);
    }
    format!("{}{}{}", colors.for_class(name), name, colors.reset)
}
