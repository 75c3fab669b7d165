//! Span-based tokens.
//!
//! Tokens store byte offsets into their line, never text. Slice the line with
//! [`Token::text`] when the text is needed.

use std::ops::Range;

use pqlex_core::ClassId;
use serde::Serialize;

use crate::state::StateStack;

/// Which side of a bracket pair a bracket token is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BracketSide {
    Open,
    Close,
}

/// Zero-copy token: class + byte span within one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    pub start: usize,
    pub end: usize,
    pub class: ClassId,
    /// Set for tokens produced through the bracket table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bracket: Option<BracketSide>,
}

impl Token {
    #[inline]
    pub fn new(span: Range<usize>, class: ClassId) -> Self {
        Self {
            start: span.start,
            end: span.end,
            class,
            bracket: None,
        }
    }

    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Slice of `line` covered by this token. O(1).
    #[inline]
    pub fn text<'l>(&self, line: &'l str) -> &'l str {
        &line[self.span()]
    }
}

/// Tokens of one line plus the stack to carry into the next line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineTokens {
    pub tokens: Vec<Token>,
    pub end_stack: StateStack,
}

impl LineTokens {
    /// Merges runs of adjacent tokens with the same class.
    ///
    /// Bracket tokens are kept apart so bracket matching still sees one token
    /// per bracket. Coverage and classification are unchanged.
    pub fn coalesced(&self) -> LineTokens {
        let mut tokens: Vec<Token> = Vec::with_capacity(self.tokens.len());
        for &token in &self.tokens {
            if let Some(last) = tokens.last_mut()
                && last.class == token.class
                && last.bracket.is_none()
                && token.bracket.is_none()
                && last.end == token.start
            {
                last.end = token.end;
                continue;
            }
            tokens.push(token);
        }
        LineTokens {
            tokens,
            end_stack: self.end_stack.clone(),
        }
    }

    /// Token covering byte `offset`.
    ///
    /// An offset at or past the end of the line resolves to the last token,
    /// which is what a cursor sitting at the end of the line "is in".
    pub fn token_at(&self, offset: usize) -> Option<&Token> {
        self.tokens
            .iter()
            .find(|t| t.start <= offset && offset < t.end)
            .or_else(|| self.tokens.last().filter(|t| offset >= t.end))
    }

    /// Class of the token covering byte `offset`.
    pub fn class_at(&self, offset: usize) -> Option<ClassId> {
        self.token_at(offset).map(|t| t.class)
    }

    /// Class of the token holding the character just before a cursor at byte
    /// `offset`. A cursor at the start of the line has none.
    pub fn class_before(&self, offset: usize) -> Option<ClassId> {
        let prev = offset.checked_sub(1)?;
        self.class_at(prev)
    }

    /// Texts of all tokens, in order.
    pub fn texts<'l>(&'l self, line: &'l str) -> impl Iterator<Item = &'l str> + 'l {
        self.tokens.iter().map(move |t| t.text(line))
    }
}
