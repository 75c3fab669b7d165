#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Builtin languages for pqlex.
//!
//! Each language bundles its rule table, its editor configuration and the
//! compiled tokenizer. Tables compile on first use and are shared for the
//! rest of the process.

use std::sync::Arc;

use pqlex_lib::{CompiledLanguage, LanguageConfiguration, LanguageDefinition, LineTokens};

pub mod builtin;
mod invariants;

#[cfg(feature = "lang-powerquery")]
pub mod powerquery;

#[cfg(test)]
mod lib_tests;

pub use builtin::*;

/// User-facing language handle. Cheap to clone.
pub type Lang = Arc<LangInner>;

#[derive(Debug)]
pub struct LangInner {
    name: &'static str,
    aliases: &'static [&'static str],
    extensions: &'static [&'static str],
    definition: LanguageDefinition,
    configuration: LanguageConfiguration,
    compiled: CompiledLanguage,
}

impl LangInner {
    /// Compiles a builtin table. Builtin tables are known to be valid.
    pub fn new_builtin(
        name: &'static str,
        aliases: &'static [&'static str],
        extensions: &'static [&'static str],
        definition: LanguageDefinition,
        configuration: LanguageConfiguration,
    ) -> Self {
        let compiled = invariants::ensure_compiled(name, &definition);
        Self {
            name,
            aliases,
            extensions,
            definition,
            configuration,
            compiled,
        }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    /// Names accepted by [`from_name`], the canonical name included.
    pub fn aliases(&self) -> &[&'static str] {
        self.aliases
    }

    pub fn extensions(&self) -> &[&'static str] {
        self.extensions
    }

    pub fn definition(&self) -> &LanguageDefinition {
        &self.definition
    }

    pub fn configuration(&self) -> &LanguageConfiguration {
        &self.configuration
    }

    pub fn compiled(&self) -> &CompiledLanguage {
        &self.compiled
    }

    /// Closing text to auto-insert after typing `open` with the cursor at
    /// byte `offset` of a tokenized line.
    ///
    /// The cursor is "in" the token holding the character before it.
    pub fn auto_close(&self, open: &str, line: &LineTokens, offset: usize) -> Option<&str> {
        let class = line
            .class_before(offset)
            .map(|id| self.compiled.classes().base_name(id));
        self.configuration.auto_close(open, class)
    }
}
