//! Tracing infrastructure for debugging rule tables.
//!
//! # Design: Zero-Cost Abstraction
//!
//! The tokenizer is generic over a [`Tracer`]. With [`NoopTracer`] every hook
//! is an `#[inline(always)]` empty function and the calls disappear, so the
//! untraced path pays nothing. [`PrintTracer`] records one line per event for
//! the `trace` command.
//!
//! Hooks receive raw data the tokenizer already has (state ids, rule indices,
//! spans). Name resolution and formatting happen in the tracer.

use std::ops::Range;

use pqlex_core::{ClassId, Colors};

use crate::compile::CompiledLanguage;
use crate::dump::class_label;
use crate::state::{StateId, StateStack};

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Default: matches, fallbacks, push/pop, line boundaries.
    #[default]
    Default,
    /// Verbose (-v): also the pattern of each matching rule.
    Verbose,
    /// Very verbose (-vv): also rules skipped for matching the empty string.
    VeryVerbose,
}

/// Tokenizer instrumentation hooks.
///
/// Called in this order for each line:
/// - `trace_line_start` - before the first token
/// - `trace_empty_match` - a rule matched zero characters and was skipped
/// - `trace_match` - a rule produced a token
/// - `trace_push` / `trace_pop` - after the stack changed
/// - `trace_fallback` - no rule matched, one character was emitted
/// - `trace_line_end` - after the last token
pub trait Tracer {
    fn trace_line_start(&mut self, lang: &CompiledLanguage, line: &str, stack: &StateStack);

    fn trace_empty_match(&mut self, lang: &CompiledLanguage, state: StateId, rule: usize);

    fn trace_match(
        &mut self,
        lang: &CompiledLanguage,
        state: StateId,
        rule: usize,
        span: Range<usize>,
        class: ClassId,
    );

    fn trace_fallback(
        &mut self,
        lang: &CompiledLanguage,
        state: StateId,
        span: Range<usize>,
        class: ClassId,
    );

    fn trace_push(&mut self, lang: &CompiledLanguage, stack: &StateStack);

    fn trace_pop(&mut self, lang: &CompiledLanguage, stack: &StateStack);

    fn trace_line_end(&mut self, lang: &CompiledLanguage, stack: &StateStack);
}

impl<T: Tracer + ?Sized> Tracer for &mut T {
    #[inline(always)]
    fn trace_line_start(&mut self, lang: &CompiledLanguage, line: &str, stack: &StateStack) {
        (**self).trace_line_start(lang, line, stack)
    }

    #[inline(always)]
    fn trace_empty_match(&mut self, lang: &CompiledLanguage, state: StateId, rule: usize) {
        (**self).trace_empty_match(lang, state, rule)
    }

    #[inline(always)]
    fn trace_match(
        &mut self,
        lang: &CompiledLanguage,
        state: StateId,
        rule: usize,
        span: Range<usize>,
        class: ClassId,
    ) {
        (**self).trace_match(lang, state, rule, span, class)
    }

    #[inline(always)]
    fn trace_fallback(
        &mut self,
        lang: &CompiledLanguage,
        state: StateId,
        span: Range<usize>,
        class: ClassId,
    ) {
        (**self).trace_fallback(lang, state, span, class)
    }

    #[inline(always)]
    fn trace_push(&mut self, lang: &CompiledLanguage, stack: &StateStack) {
        (**self).trace_push(lang, stack)
    }

    #[inline(always)]
    fn trace_pop(&mut self, lang: &CompiledLanguage, stack: &StateStack) {
        (**self).trace_pop(lang, stack)
    }

    #[inline(always)]
    fn trace_line_end(&mut self, lang: &CompiledLanguage, stack: &StateStack) {
        (**self).trace_line_end(lang, stack)
    }
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_line_start(&mut self, _lang: &CompiledLanguage, _line: &str, _stack: &StateStack) {}

    #[inline(always)]
    fn trace_empty_match(&mut self, _lang: &CompiledLanguage, _state: StateId, _rule: usize) {}

    #[inline(always)]
    fn trace_match(
        &mut self,
        _lang: &CompiledLanguage,
        _state: StateId,
        _rule: usize,
        _span: Range<usize>,
        _class: ClassId,
    ) {
    }

    #[inline(always)]
    fn trace_fallback(
        &mut self,
        _lang: &CompiledLanguage,
        _state: StateId,
        _span: Range<usize>,
        _class: ClassId,
    ) {
    }

    #[inline(always)]
    fn trace_push(&mut self, _lang: &CompiledLanguage, _stack: &StateStack) {}

    #[inline(always)]
    fn trace_pop(&mut self, _lang: &CompiledLanguage, _stack: &StateStack) {}

    #[inline(always)]
    fn trace_line_end(&mut self, _lang: &CompiledLanguage, _stack: &StateStack) {}
}

/// Tracer that collects a readable log of tokenizer decisions.
pub struct PrintTracer {
    verbosity: Verbosity,
    colors: Colors,
    /// Collected trace lines.
    lines: Vec<String>,
    /// Text of the line being tokenized, for slicing spans.
    text: String,
    /// 1-based number of the line being tokenized.
    line_no: usize,
}

/// Builder for [`PrintTracer`].
pub struct PrintTracerBuilder {
    verbosity: Verbosity,
    colored: bool,
}

impl PrintTracerBuilder {
    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    pub fn build(self) -> PrintTracer {
        PrintTracer {
            verbosity: self.verbosity,
            colors: Colors::new(self.colored),
            lines: Vec::new(),
            text: String::new(),
            line_no: 0,
        }
    }
}

impl PrintTracer {
    pub fn builder() -> PrintTracerBuilder {
        PrintTracerBuilder {
            verbosity: Verbosity::Default,
            colored: false,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All collected lines, newline-terminated.
    pub fn output(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    pub fn print(&self) {
        print!("{}", self.output());
    }

    fn class(&self, lang: &CompiledLanguage, class: ClassId) -> String {
        class_label(lang, class, self.colors)
    }

    fn span_text(&self, span: &Range<usize>) -> String {
        let text = self.text.get(span.clone()).unwrap_or_default();
        format!("{}{:?}{}", self.colors.green, text, self.colors.reset)
    }
}

impl Tracer for PrintTracer {
    fn trace_line_start(&mut self, lang: &CompiledLanguage, line: &str, stack: &StateStack) {
        self.line_no += 1;
        self.text = line.to_owned();
        self.lines.push(format!(
            "line {} {}{}{}",
            self.line_no,
            self.colors.dim,
            lang.format_stack(stack),
            self.colors.reset
        ));
    }

    fn trace_empty_match(&mut self, lang: &CompiledLanguage, state: StateId, rule: usize) {
        if self.verbosity != Verbosity::VeryVerbose {
            return;
        }
        let pattern = &lang.rules(state)[rule].pattern;
        self.lines.push(format!(
            "  {}{}#{rule}{} skipped empty match /{pattern}/",
            self.colors.dim,
            lang.state_name(state),
            self.colors.reset
        ));
    }

    fn trace_match(
        &mut self,
        lang: &CompiledLanguage,
        state: StateId,
        rule: usize,
        span: Range<usize>,
        class: ClassId,
    ) {
        let mut line = format!(
            "  {}{}#{rule}{} {}..{} {} {}",
            self.colors.dim,
            lang.state_name(state),
            self.colors.reset,
            span.start,
            span.end,
            self.span_text(&span),
            self.class(lang, class),
        );
        if self.verbosity != Verbosity::Default {
            line.push_str(&format!(" /{}/", lang.rules(state)[rule].pattern));
        }
        self.lines.push(line);
    }

    fn trace_fallback(
        &mut self,
        lang: &CompiledLanguage,
        state: StateId,
        span: Range<usize>,
        class: ClassId,
    ) {
        self.lines.push(format!(
            "  {}{}{} fallback {}..{} {} {}",
            self.colors.dim,
            lang.state_name(state),
            self.colors.reset,
            span.start,
            span.end,
            self.span_text(&span),
            self.class(lang, class),
        ));
    }

    fn trace_push(&mut self, lang: &CompiledLanguage, stack: &StateStack) {
        self.lines.push(format!("  push {}", lang.format_stack(stack)));
    }

    fn trace_pop(&mut self, lang: &CompiledLanguage, stack: &StateStack) {
        self.lines.push(format!("  pop {}", lang.format_stack(stack)));
    }

    fn trace_line_end(&mut self, lang: &CompiledLanguage, stack: &StateStack) {
        self.lines.push(format!(
            "  end {}{}{}",
            self.colors.dim,
            lang.format_stack(stack),
            self.colors.reset
        ));
    }
}
