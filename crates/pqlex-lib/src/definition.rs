//! Declarative language definitions.
//!
//! A definition is plain data: named states holding ordered rules, keyword
//! sets, and a bracket table. It is written once per language and handed to
//! [`CompiledLanguage::compile`](crate::CompiledLanguage::compile), which
//! validates it and produces the matcher used at tokenization time.
//!
//! State names and push targets may be written with or without the leading
//! `@` (`"@comment"` and `"comment"` are the same state).

use std::fmt;

use indexmap::IndexMap;
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

/// Complete tokenizer definition for one language.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageDefinition {
    pub name: String,
    /// Class for characters no rule matches.
    pub default_token: String,
    /// Appended to every non-empty class (e.g. `.pq`).
    pub token_postfix: String,
    pub ignore_case: bool,
    /// Start state. Defaults to the first declared state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    pub brackets: Vec<BracketDef>,
    pub keyword_sets: IndexMap<String, Vec<String>>,
    pub tokenizer: IndexMap<String, Vec<RuleDef>>,
}

impl LanguageDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_token: String::new(),
            token_postfix: String::new(),
            ignore_case: false,
            start: None,
            brackets: Vec::new(),
            keyword_sets: IndexMap::new(),
            tokenizer: IndexMap::new(),
        }
    }

    pub fn default_token(mut self, class: impl Into<String>) -> Self {
        self.default_token = class.into();
        self
    }

    pub fn token_postfix(mut self, postfix: impl Into<String>) -> Self {
        self.token_postfix = postfix.into();
        self
    }

    pub fn ignore_case(mut self, ignore: bool) -> Self {
        self.ignore_case = ignore;
        self
    }

    pub fn start(mut self, state: &str) -> Self {
        self.start = Some(state_name(state).to_owned());
        self
    }

    pub fn bracket(mut self, open: &str, close: &str, class: &str) -> Self {
        self.brackets.push(BracketDef {
            open: open.to_owned(),
            close: close.to_owned(),
            token: class.to_owned(),
        });
        self
    }

    pub fn keyword_set(mut self, name: &str, words: &[&str]) -> Self {
        self.keyword_sets.insert(
            state_name(name).to_owned(),
            words.iter().map(|w| (*w).to_owned()).collect(),
        );
        self
    }

    pub fn state(mut self, name: &str, rules: Vec<RuleDef>) -> Self {
        self.tokenizer.insert(state_name(name).to_owned(), rules);
        self
    }

    /// Resolved start state name: explicit `start`, else the first state.
    pub fn start_state(&self) -> Option<&str> {
        match &self.start {
            Some(start) => Some(start),
            None => self.tokenizer.keys().next().map(String::as_str),
        }
    }
}

/// Bracket pair with the class its tokens receive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BracketDef {
    pub open: String,
    pub close: String,
    pub token: String,
}

/// One entry of a state's rule list.
#[derive(Debug, Clone)]
pub enum RuleDef {
    /// Pattern anchored at the scan position, with the action to apply.
    Match { pattern: String, action: Action },
    /// Splice another state's rules in at this position.
    Include(String),
}

impl RuleDef {
    pub fn new(pattern: impl Into<String>, action: impl Into<Action>) -> Self {
        RuleDef::Match {
            pattern: pattern.into(),
            action: action.into(),
        }
    }

    pub fn include(state: &str) -> Self {
        RuleDef::Include(state_name(state).to_owned())
    }
}

impl Serialize for RuleDef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RuleDef::Match { pattern, action } => {
                let mut s = serializer.serialize_struct("Rule", 2)?;
                s.serialize_field("regex", pattern)?;
                s.serialize_field("action", action)?;
                s.end()
            }
            RuleDef::Include(state) => {
                let mut s = serializer.serialize_struct("Include", 1)?;
                s.serialize_field("include", &format!("@{state}"))?;
                s.end()
            }
        }
    }
}

/// What a matched rule emits and how it moves the state stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    pub token: TokenSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<NextState>,
}

impl Action {
    pub fn class(name: &str) -> Self {
        Self {
            token: TokenSpec::Class(name.to_owned()),
            next: None,
        }
    }

    pub fn brackets() -> Self {
        Self {
            token: TokenSpec::Brackets,
            next: None,
        }
    }

    pub fn cases(cases: Cases) -> Self {
        Self {
            token: TokenSpec::Cases(cases),
            next: None,
        }
    }

    pub fn push(mut self, state: &str) -> Self {
        self.next = Some(NextState::Push(state_name(state).to_owned()));
        self
    }

    pub fn pop(mut self) -> Self {
        self.next = Some(NextState::Pop);
        self
    }

    pub fn pop_all(mut self) -> Self {
        self.next = Some(NextState::PopAll);
        self
    }
}

/// `"@brackets"` selects the bracket table; anything else is a class name.
impl From<&str> for Action {
    fn from(token: &str) -> Self {
        if token == "@brackets" {
            Action::brackets()
        } else {
            Action::class(token)
        }
    }
}

impl From<Cases> for Action {
    fn from(cases: Cases) -> Self {
        Action::cases(cases)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token)?;
        if let Some(next) = &self.next {
            write!(f, " -> {next}")?;
        }
        Ok(())
    }
}

/// How the token class of a match is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenSpec {
    Class(String),
    /// Class comes from the bracket table entry for the matched text.
    Brackets,
    /// Class comes from keyword-set membership of the matched text.
    Cases(Cases),
}

impl fmt::Display for TokenSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenSpec::Class(name) => f.write_str(name),
            TokenSpec::Brackets => f.write_str("@brackets"),
            TokenSpec::Cases(cases) => {
                f.write_str("{ ")?;
                for (i, (guard, class)) in cases.arms.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{guard}: {class}")?;
                }
                f.write_str(" }")
            }
        }
    }
}

impl Serialize for TokenSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TokenSpec::Class(_) | TokenSpec::Brackets => serializer.collect_str(self),
            TokenSpec::Cases(cases) => {
                let mut map = serializer.serialize_map(Some(cases.arms.len()))?;
                for (guard, class) in &cases.arms {
                    map.serialize_entry(&guard.to_string(), class)?;
                }
                map.end()
            }
        }
    }
}

/// Ordered case table; the first arm whose guard holds wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cases {
    pub arms: Vec<(CaseGuard, String)>,
}

impl Cases {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm taken when the matched text is in the named keyword set.
    pub fn when(mut self, set: &str, class: &str) -> Self {
        self.arms
            .push((CaseGuard::InSet(state_name(set).to_owned()), class.to_owned()));
        self
    }

    /// Arm taken when no earlier arm applies.
    pub fn otherwise(mut self, class: &str) -> Self {
        self.arms.push((CaseGuard::Default, class.to_owned()));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseGuard {
    InSet(String),
    Default,
}

impl fmt::Display for CaseGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseGuard::InSet(set) => write!(f, "@{set}"),
            CaseGuard::Default => f.write_str("@default"),
        }
    }
}

/// State-stack transition applied after emitting the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextState {
    Push(String),
    Pop,
    /// Pop back to the start state.
    PopAll,
}

impl fmt::Display for NextState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NextState::Push(state) => write!(f, "@{state}"),
            NextState::Pop => f.write_str("@pop"),
            NextState::PopAll => f.write_str("@popall"),
        }
    }
}

impl Serialize for NextState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn state_name(name: &str) -> &str {
    name.strip_prefix('@').unwrap_or(name)
}
