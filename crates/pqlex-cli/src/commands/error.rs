//! Errors reported by CLI commands.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read stdin: {0}")]
    Stdin(std::io::Error),

    #[error("no input: pass a source file, '-' for stdin, or -s <TEXT>")]
    NoInput,

    #[error("unknown language: '{name}'")]
    UnknownLang {
        name: String,
        suggestion: Option<String>,
    },

    #[error("no languages are enabled in this build")]
    NoLanguages,

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Prints the error with any hint and exits with status 1.
    pub fn exit(&self) -> ! {
        eprintln!("error: {self}");
        if let CliError::UnknownLang { suggestion, .. } = self {
            if let Some(suggestion) = suggestion {
                eprintln!();
                eprintln!("Did you mean '{suggestion}'?");
            }
            eprintln!();
            eprintln!("Run 'pqlex lang list' for the full list.");
        }
        std::process::exit(1)
    }
}

/// Unwraps a command result or reports the error and exits.
pub fn or_exit<T>(result: Result<T, CliError>) -> T {
    result.unwrap_or_else(|err| err.exit())
}
