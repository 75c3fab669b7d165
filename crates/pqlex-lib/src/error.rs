//! Errors raised while compiling a language definition.
//!
//! Tokenization itself never fails; every problem a table can have is
//! reported here, once, when the table is built.

/// Errors that can occur during table compilation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error("start state '{0}' is not defined")]
    MissingState(String),

    #[error("state '{state}' includes undefined state '{include}'")]
    UnknownInclude { state: String, include: String },

    #[error("include cycle: {}", .0.join(" -> "))]
    IncludeCycle(Vec<String>),

    #[error("rule /{pattern}/ in state '{state}' pushes undefined state '{target}'")]
    UnknownPushTarget {
        state: String,
        pattern: String,
        target: String,
    },

    #[error("rule /{pattern}/ in state '{state}' refers to undefined keyword set '{set}'")]
    UnknownKeywordSet {
        state: String,
        pattern: String,
        set: String,
    },

    #[error("rule /{pattern}/ in state '{state}' uses @brackets but no brackets are defined")]
    MissingBrackets { state: String, pattern: String },

    #[error("bracket pair '{open}' '{close}' must have non-empty delimiters and class")]
    InvalidBracket { open: String, close: String },

    #[error("invalid pattern /{pattern}/ in state '{state}': {message}")]
    Regex {
        state: String,
        pattern: String,
        message: String,
    },

    #[error("too many states ({0}), at most 65535 are supported")]
    TooManyStates(usize),
}

/// Result type for table compilation.
pub type Result<T> = std::result::Result<T, CompileError>;
