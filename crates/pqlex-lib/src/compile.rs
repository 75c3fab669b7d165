//! Table compilation.
//!
//! Turns a [`LanguageDefinition`] into a [`CompiledLanguage`]:
//! - includes are spliced into a flat rule list per state, once
//! - patterns are compiled to anchored regex matchers (deduplicated by text)
//! - each case table becomes a single `word -> class` map
//! - class names are interned with the language postfix
//!
//! Everything that can be wrong with a table is reported here, so the
//! tokenizer never has an error path.

use std::collections::HashMap;

use indexmap::IndexMap;
use regex_automata::meta::Regex;
use regex_automata::util::syntax;

use pqlex_core::{ClassId, ClassTable};

use crate::definition::{
    Action, CaseGuard, Cases, LanguageDefinition, NextState, RuleDef, TokenSpec,
};
use crate::error::{CompileError, Result};
use crate::state::{StateId, StateStack};

/// A rule after include resolution.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    /// Pattern text, kept for dumps and traces.
    pub pattern: String,
    /// Declared action, kept for dumps.
    pub action: Action,
    /// State the rule was declared in (differs from the owner for included rules).
    pub origin: StateId,
    pub(crate) regex: Regex,
    pub(crate) token: CompiledToken,
    pub(crate) next: Option<CompiledNext>,
}

#[derive(Debug, Clone)]
pub(crate) enum CompiledToken {
    Class(ClassId),
    Brackets,
    Cases(CompiledCases),
}

/// Case table flattened to one lookup; first arm wins on overlap.
#[derive(Debug, Clone)]
pub(crate) struct CompiledCases {
    pub(crate) lookup: HashMap<String, ClassId>,
    pub(crate) default: ClassId,
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum CompiledNext {
    Push(StateId),
    Pop,
    PopAll,
}

#[derive(Debug, Clone)]
pub(crate) struct CompiledBracket {
    pub(crate) open: String,
    pub(crate) close: String,
    pub(crate) class: ClassId,
}

/// Immutable, ready-to-run tokenizer table. `Send + Sync`.
#[derive(Debug, Clone)]
pub struct CompiledLanguage {
    name: String,
    ignore_case: bool,
    classes: ClassTable,
    state_names: Vec<String>,
    states: Vec<Vec<CompiledRule>>,
    start: StateId,
    default_class: ClassId,
    pub(crate) brackets: Vec<CompiledBracket>,
}

impl CompiledLanguage {
    pub fn compile(def: &LanguageDefinition) -> Result<Self> {
        let start_name = def.start_state().unwrap_or("root");
        let Some(start_index) = def.tokenizer.get_index_of(start_name) else {
            return Err(CompileError::MissingState(start_name.to_owned()));
        };
        if def.tokenizer.len() > u16::MAX as usize {
            return Err(CompileError::TooManyStates(def.tokenizer.len()));
        }

        let mut classes = ClassTable::new(def.token_postfix.as_str());
        let default_class = classes.intern(&def.default_token);

        let mut brackets = Vec::with_capacity(def.brackets.len());
        for b in &def.brackets {
            if b.open.is_empty() || b.close.is_empty() || b.token.is_empty() {
                return Err(CompileError::InvalidBracket {
                    open: b.open.clone(),
                    close: b.close.clone(),
                });
            }
            brackets.push(CompiledBracket {
                open: b.open.clone(),
                close: b.close.clone(),
                class: classes.intern(&b.token),
            });
        }

        let mut builder = TableBuilder {
            def,
            classes,
            default_class,
            regexes: HashMap::new(),
        };

        let mut states = Vec::with_capacity(def.tokenizer.len());
        for state in def.tokenizer.keys() {
            let mut flat = Vec::new();
            let mut chain = Vec::new();
            flatten(&def.tokenizer, state.as_str(), &mut chain, &mut flat)?;

            let rules = flat
                .into_iter()
                .map(|(origin, pattern, action)| builder.rule(origin, pattern, action))
                .collect::<Result<Vec<_>>>()?;
            states.push(rules);
        }

        Ok(Self {
            name: def.name.clone(),
            ignore_case: def.ignore_case,
            classes: builder.classes,
            state_names: def.tokenizer.keys().cloned().collect(),
            states,
            start: StateId::new(start_index as u16),
            default_class,
            brackets,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn classes(&self) -> &ClassTable {
        &self.classes
    }

    /// Full class name (postfix included) for a token class.
    pub fn class_name(&self, class: ClassId) -> &str {
        self.classes.resolve(class)
    }

    /// Class emitted for characters no rule matches.
    pub fn default_class(&self) -> ClassId {
        self.default_class
    }

    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }

    pub fn start_state(&self) -> StateId {
        self.start
    }

    /// Fresh stack for the first line of a document.
    pub fn initial_stack(&self) -> StateStack {
        StateStack::new(self.start)
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn state_name(&self, state: StateId) -> &str {
        &self.state_names[state.index()]
    }

    pub fn state_id(&self, name: &str) -> Option<StateId> {
        let name = name.strip_prefix('@').unwrap_or(name);
        self.state_names
            .iter()
            .position(|n| n == name)
            .map(|i| StateId::new(i as u16))
    }

    /// Flattened rules of a state, in match order.
    pub fn rules(&self, state: StateId) -> &[CompiledRule] {
        &self.states[state.index()]
    }

    /// All states with their flattened rules, in declaration order.
    pub fn states(&self) -> impl Iterator<Item = (StateId, &str, &[CompiledRule])> {
        self.state_names
            .iter()
            .zip(&self.states)
            .enumerate()
            .map(|(i, (name, rules))| (StateId::new(i as u16), name.as_str(), rules.as_slice()))
    }

    /// Renders a stack as `[root, comment]`.
    pub fn format_stack(&self, stack: &StateStack) -> String {
        let names: Vec<&str> = stack.iter().map(|s| self.state_name(s)).collect();
        format!("[{}]", names.join(", "))
    }
}

/// Splices includes depth-first. `chain` holds the states being expanded.
fn flatten<'d>(
    tokenizer: &'d IndexMap<String, Vec<RuleDef>>,
    state: &'d str,
    chain: &mut Vec<&'d str>,
    out: &mut Vec<(StateId, &'d str, &'d Action)>,
) -> Result<()> {
    if chain.contains(&state) {
        let mut cycle: Vec<String> = chain.iter().map(|s| (*s).to_owned()).collect();
        cycle.push(state.to_owned());
        return Err(CompileError::IncludeCycle(cycle));
    }

    let Some((index, _, rules)) = tokenizer.get_full(state) else {
        // Callers only pass names checked by the including rule or the key set.
        return Err(CompileError::MissingState(state.to_owned()));
    };

    chain.push(state);
    for rule in rules {
        match rule {
            RuleDef::Match { pattern, action } => {
                out.push((StateId::new(index as u16), pattern.as_str(), action));
            }
            RuleDef::Include(include) => {
                let include = include.as_str();
                let include = include.strip_prefix('@').unwrap_or(include);
                if !tokenizer.contains_key(include) {
                    return Err(CompileError::UnknownInclude {
                        state: state.to_owned(),
                        include: include.to_owned(),
                    });
                }
                flatten(tokenizer, include, chain, out)?;
            }
        }
    }
    chain.pop();
    Ok(())
}

struct TableBuilder<'d> {
    def: &'d LanguageDefinition,
    classes: ClassTable,
    default_class: ClassId,
    /// Compiled patterns by source text; included rules share one matcher.
    regexes: HashMap<&'d str, Regex>,
}

impl<'d> TableBuilder<'d> {
    fn rule(
        &mut self,
        origin: StateId,
        pattern: &'d str,
        action: &'d Action,
    ) -> Result<CompiledRule> {
        let state = self.state_name(origin);
        let regex = self.regex(&state, pattern)?;
        let token = self.token(&state, pattern, &action.token)?;
        let next = action
            .next
            .as_ref()
            .map(|next| self.next(&state, pattern, next))
            .transpose()?;

        Ok(CompiledRule {
            pattern: pattern.to_owned(),
            action: action.clone(),
            origin,
            regex,
            token,
            next,
        })
    }

    fn state_name(&self, state: StateId) -> String {
        self.def
            .tokenizer
            .get_index(state.index())
            .map(|(name, _)| name.clone())
            .unwrap_or_default()
    }

    fn regex(&mut self, state: &str, pattern: &'d str) -> Result<Regex> {
        if let Some(regex) = self.regexes.get(pattern) {
            return Ok(regex.clone());
        }

        let regex = Regex::builder()
            .syntax(syntax::Config::new().case_insensitive(self.def.ignore_case))
            .build(pattern)
            .map_err(|e| CompileError::Regex {
                state: state.to_owned(),
                pattern: pattern.to_owned(),
                message: e.to_string(),
            })?;

        self.regexes.insert(pattern, regex.clone());
        Ok(regex)
    }

    fn token(&mut self, state: &str, pattern: &str, spec: &TokenSpec) -> Result<CompiledToken> {
        match spec {
            TokenSpec::Class(name) => Ok(CompiledToken::Class(self.classes.intern(name))),
            TokenSpec::Brackets => {
                if self.def.brackets.is_empty() {
                    return Err(CompileError::MissingBrackets {
                        state: state.to_owned(),
                        pattern: pattern.to_owned(),
                    });
                }
                Ok(CompiledToken::Brackets)
            }
            TokenSpec::Cases(cases) => self.cases(state, pattern, cases).map(CompiledToken::Cases),
        }
    }

    fn cases(&mut self, state: &str, pattern: &str, cases: &Cases) -> Result<CompiledCases> {
        let mut lookup = HashMap::new();
        let mut default = None;

        for (guard, class) in &cases.arms {
            let class = self.classes.intern(class);
            match guard {
                CaseGuard::InSet(set) => {
                    let Some(words) = self.def.keyword_sets.get(set.as_str()) else {
                        return Err(CompileError::UnknownKeywordSet {
                            state: state.to_owned(),
                            pattern: pattern.to_owned(),
                            set: set.clone(),
                        });
                    };
                    // A word in several sets keeps the class of the earliest arm.
                    for word in words {
                        let key = if self.def.ignore_case {
                            word.to_lowercase()
                        } else {
                            word.clone()
                        };
                        lookup.entry(key).or_insert(class);
                    }
                }
                CaseGuard::Default => {
                    default.get_or_insert(class);
                }
            }
        }

        Ok(CompiledCases {
            lookup,
            default: default.unwrap_or(self.default_class),
        })
    }

    fn next(&self, state: &str, pattern: &str, next: &NextState) -> Result<CompiledNext> {
        match next {
            NextState::Pop => Ok(CompiledNext::Pop),
            NextState::PopAll => Ok(CompiledNext::PopAll),
            NextState::Push(target) => {
                let target = target.as_str();
                let target = target.strip_prefix('@').unwrap_or(target);
                self.def
                    .tokenizer
                    .get_index_of(target)
                    .map(|i| CompiledNext::Push(StateId::new(i as u16)))
                    .ok_or_else(|| CompileError::UnknownPushTarget {
                        state: state.to_owned(),
                        pattern: pattern.to_owned(),
                        target: target.to_owned(),
                    })
            }
        }
    }
}
