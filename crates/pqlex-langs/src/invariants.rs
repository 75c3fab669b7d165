//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use pqlex_lib::{CompiledLanguage, LanguageDefinition};

pub(crate) fn ensure_compiled(name: &str, definition: &LanguageDefinition) -> CompiledLanguage {
    CompiledLanguage::compile(definition).unwrap_or_else(|err| {
        panic!("builtin language '{name}' failed to compile: {err}")
    })
}
