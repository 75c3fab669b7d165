//! pqlex: table-driven line tokenizer for editor syntax highlighting.
//!
//! A language is described by a [`LanguageDefinition`] (named states holding
//! ordered regex rules), compiled once into a [`CompiledLanguage`], and then
//! run one line at a time. The only context carried between lines is the
//! [`StateStack`], so a host can re-tokenize any line in isolation.
//!
//! # Example
//!
//! ```
//! use pqlex_lib::{Action, CompiledLanguage, LanguageDefinition, RuleDef};
//!
//! let def = LanguageDefinition::new("tiny").token_postfix(".t").state(
//!     "root",
//!     vec![
//!         RuleDef::new("[0-9]+", "number"),
//!         RuleDef::new("/\\*", Action::class("comment").push("comment")),
//!     ],
//! ).state(
//!     "comment",
//!     vec![
//!         RuleDef::new("\\*/", Action::class("comment").pop()),
//!         RuleDef::new(".", "comment"),
//!     ],
//! );
//!
//! let lang = CompiledLanguage::compile(&def).expect("valid table");
//! let line = lang.tokenize_line("42 /*", &lang.initial_stack());
//! assert_eq!(lang.class_name(line.tokens[0].class), "number.t");
//! assert_eq!(lang.format_stack(&line.end_stack), "[root, comment]");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod compile;
pub mod config;
pub mod definition;
pub mod dump;
pub mod error;
pub mod state;
pub mod token;
pub mod tokenizer;
pub mod trace;

#[cfg(test)]
mod compile_tests;
#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod token_tests;

pub use compile::{CompiledLanguage, CompiledRule};
pub use config::{AutoClosingPair, CommentRule, LanguageConfiguration};
pub use definition::{
    Action, BracketDef, CaseGuard, Cases, LanguageDefinition, NextState, RuleDef, TokenSpec,
};
pub use dump::{TablePrinter, TokenPrinter};
pub use error::{CompileError, Result};
pub use state::{StateId, StateStack};
pub use token::{BracketSide, LineTokens, Token};
pub use tokenizer::{LineTokenizer, document_lines};
pub use trace::{NoopTracer, PrintTracer, PrintTracerBuilder, Tracer, Verbosity};

pub use pqlex_core::{ClassId, ClassTable, Colors};
