//! Lexer state stack.
//!
//! The stack is the only context carried from one line to the next. The
//! bottom entry is always the start state; the top is the active state.

use serde::Serialize;

/// Index of a state in a [`CompiledLanguage`](crate::CompiledLanguage).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StateId(u16);

impl StateId {
    #[inline]
    pub(crate) fn new(index: u16) -> Self {
        Self(index)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Ordered stack of active states, innermost last. Never empty.
///
/// Stacks are owned per document. They are cheap to clone and compare, so a
/// host can keep one per line and stop re-tokenizing once an end-of-line
/// stack matches the previously stored one.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(transparent)]
pub struct StateStack {
    states: Vec<StateId>,
}

impl StateStack {
    pub fn new(start: StateId) -> Self {
        Self {
            states: vec![start],
        }
    }

    /// Active state.
    #[inline]
    pub fn top(&self) -> StateId {
        // Invariant: never empty.
        self.states[self.states.len() - 1]
    }

    /// The state at the bottom of the stack.
    #[inline]
    pub fn start(&self) -> StateId {
        self.states[0]
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.states.len()
    }

    pub fn push(&mut self, state: StateId) {
        self.states.push(state);
    }

    /// Pops the active state and returns it.
    ///
    /// The start state is never popped; popping it is a no-op returning `None`.
    pub fn pop(&mut self) -> Option<StateId> {
        if self.states.len() > 1 {
            self.states.pop()
        } else {
            None
        }
    }

    /// Drops everything above the start state.
    pub fn pop_all(&mut self) {
        self.states.truncate(1);
    }

    /// States from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states.iter().copied()
    }
}
