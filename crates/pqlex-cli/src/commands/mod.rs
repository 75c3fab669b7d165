pub mod config;
pub mod dump;
pub mod error;
pub mod lang;
pub mod lang_resolver;
pub mod source_loader;
pub mod tokens;
pub mod trace;

#[cfg(test)]
mod lang_resolver_tests;
#[cfg(test)]
mod tokens_tests;
