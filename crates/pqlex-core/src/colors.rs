//! ANSI color codes for terminal output.
//!
//! Token classes are colored by family, so every language that follows the
//! `<family>.<subfamily>` naming convention gets a sensible palette:
//! - Blue: keywords, types, constants, constructors
//! - Green: strings
//! - Yellow: numbers
//! - Magenta: operators and delimiters
//! - Dim: comments, whitespace, structure
//! - Reset: Return to default

use crate::class_family;

/// ANSI color palette for CLI output.
///
/// Uses only standard 16-color ANSI codes (no RGB) so it reads on both light
/// and dark themes.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub blue: &'static str,
    pub green: &'static str,
    pub yellow: &'static str,
    pub magenta: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    /// Colors enabled (ANSI escape codes).
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        green: "\x1b[32m",
        yellow: "\x1b[33m",
        magenta: "\x1b[35m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    /// Colors disabled (empty strings).
    pub const OFF: Self = Self {
        blue: "",
        green: "",
        yellow: "",
        magenta: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.blue.is_empty()
    }

    /// Color for a token class, chosen by its family.
    pub fn for_class(&self, class: &str) -> &'static str {
        match class_family(class) {
            "keyword" | "type" | "constant" | "constructor" => self.blue,
            "string" => self.green,
            "number" => self.yellow,
            "operators" | "delimiter" => self.magenta,
            "comment" | "white" => self.dim,
            _ => "",
        }
    }
}
