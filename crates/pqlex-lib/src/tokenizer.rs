//! Line tokenizer.
//!
//! Each line is scanned left to right. At the cursor, the rules of the active
//! state are tried in order against the rest of the line; the first non-empty
//! match wins and its action emits a token and may push or pop a state. When
//! nothing matches, one character is emitted with the default class, so every
//! call makes progress and covers the whole line.

use pqlex_core::ClassId;
use regex_automata::{Anchored, Input};

use crate::compile::{CompiledLanguage, CompiledNext, CompiledRule, CompiledToken};
use crate::state::StateStack;
use crate::token::{BracketSide, LineTokens, Token};
use crate::trace::{NoopTracer, Tracer};

/// Lazy tokenizer over one line.
///
/// Yields tokens in order. Call [`finish`](Self::finish) to get the stack to
/// carry into the next line.
pub struct LineTokenizer<'a, T: Tracer = NoopTracer> {
    lang: &'a CompiledLanguage,
    line: &'a str,
    pos: usize,
    stack: StateStack,
    tracer: T,
    done: bool,
}

impl<'a> LineTokenizer<'a, NoopTracer> {
    pub fn new(lang: &'a CompiledLanguage, line: &'a str, stack: StateStack) -> Self {
        Self::with_tracer(lang, line, stack, NoopTracer)
    }
}

impl<'a, T: Tracer> LineTokenizer<'a, T> {
    pub fn with_tracer(
        lang: &'a CompiledLanguage,
        line: &'a str,
        stack: StateStack,
        mut tracer: T,
    ) -> Self {
        tracer.trace_line_start(lang, line, &stack);
        Self {
            lang,
            line,
            pos: 0,
            stack,
            tracer,
            done: false,
        }
    }

    /// Current stack. Reflects only the tokens yielded so far.
    pub fn stack(&self) -> &StateStack {
        &self.stack
    }

    /// Drains the remaining tokens and returns the outgoing stack.
    pub fn finish(mut self) -> StateStack {
        for _ in self.by_ref() {}
        self.stack
    }

    fn step(&mut self) -> Token {
        let lang = self.lang;
        let line = self.line;
        let rest = &line[self.pos..];
        let state = self.stack.top();

        for (index, rule) in lang.rules(state).iter().enumerate() {
            let Some(len) = match_len(rule, rest) else {
                continue;
            };
            if len == 0 {
                self.tracer.trace_empty_match(lang, state, index);
                continue;
            }

            let span = self.pos..self.pos + len;
            let mut token = Token::new(span.clone(), lang.default_class());
            match &rule.token {
                CompiledToken::Class(class) => token.class = *class,
                CompiledToken::Cases(cases) => {
                    let text = &rest[..len];
                    let class = if lang.ignore_case() {
                        cases.lookup.get(text.to_lowercase().as_str())
                    } else {
                        cases.lookup.get(text)
                    };
                    token.class = class.copied().unwrap_or(cases.default);
                }
                CompiledToken::Brackets => {
                    if let Some((class, side)) = bracket(lang, &rest[..len]) {
                        token.class = class;
                        token.bracket = Some(side);
                    }
                }
            }
            self.tracer.trace_match(lang, state, index, span, token.class);

            match rule.next {
                Some(CompiledNext::Push(target)) => {
                    self.stack.push(target);
                    self.tracer.trace_push(lang, &self.stack);
                }
                Some(CompiledNext::Pop) => {
                    if self.stack.pop().is_some() {
                        self.tracer.trace_pop(lang, &self.stack);
                    }
                }
                Some(CompiledNext::PopAll) => {
                    self.stack.pop_all();
                    self.tracer.trace_pop(lang, &self.stack);
                }
                None => {}
            }

            self.pos += len;
            return token;
        }

        // Nothing matched: consume one character so the scan always advances.
        let len = rest.chars().next().map_or(1, char::len_utf8);
        let span = self.pos..self.pos + len;
        let token = Token::new(span.clone(), lang.default_class());
        self.tracer.trace_fallback(lang, state, span, token.class);
        self.pos += len;
        token
    }
}

impl<T: Tracer> Iterator for LineTokenizer<'_, T> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.pos < self.line.len() {
            return Some(self.step());
        }
        if !self.done {
            self.done = true;
            self.tracer.trace_line_end(self.lang, &self.stack);
        }
        None
    }
}

/// Bracket-table entry for a matched bracket. Unknown text gets no entry.
fn bracket(lang: &CompiledLanguage, text: &str) -> Option<(ClassId, BracketSide)> {
    lang.brackets.iter().find_map(|b| {
        if b.open == text {
            Some((b.class, BracketSide::Open))
        } else if b.close == text {
            Some((b.class, BracketSide::Close))
        } else {
            None
        }
    })
}

/// Length of the rule's match at the start of `rest`, if any.
#[inline]
fn match_len(rule: &CompiledRule, rest: &str) -> Option<usize> {
    let input = Input::new(rest).anchored(Anchored::Yes);
    rule.regex.find(input).map(|m| m.end())
}

impl CompiledLanguage {
    /// Lazy token stream for one line.
    pub fn line_tokens<'a>(&'a self, line: &'a str, stack: StateStack) -> LineTokenizer<'a> {
        LineTokenizer::new(self, line, stack)
    }

    /// Tokenizes one line. Pure: same line and stack give the same result.
    pub fn tokenize_line(&self, line: &str, stack: &StateStack) -> LineTokens {
        self.tokenize_line_traced(line, stack, &mut NoopTracer)
    }

    pub fn tokenize_line_traced<T: Tracer>(
        &self,
        line: &str,
        stack: &StateStack,
        tracer: &mut T,
    ) -> LineTokens {
        let mut tokenizer = LineTokenizer::with_tracer(self, line, stack.clone(), tracer);
        let tokens: Vec<Token> = tokenizer.by_ref().collect();
        LineTokens {
            tokens,
            end_stack: tokenizer.finish(),
        }
    }

    /// Tokenizes a whole document, threading the stack from line to line.
    ///
    /// Lines are split on `\n`; a trailing `\r` is not part of the line.
    pub fn tokenize_document(&self, text: &str) -> Vec<LineTokens> {
        self.tokenize_document_traced(text, &mut NoopTracer)
    }

    pub fn tokenize_document_traced<T: Tracer>(
        &self,
        text: &str,
        tracer: &mut T,
    ) -> Vec<LineTokens> {
        let mut stack = self.initial_stack();
        document_lines(text)
            .map(|line| {
                let tokens = self.tokenize_line_traced(line, &stack, &mut *tracer);
                stack = tokens.end_stack.clone();
                tokens
            })
            .collect()
    }
}

/// Lines of a document as the tokenizer sees them.
pub fn document_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}
