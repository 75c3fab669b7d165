//! Token-class interning.
//!
//! Rule tables name token classes by their base name (`keyword`,
//! `string.escape`). Hosts see the full name with the language postfix
//! appended (`keyword.pq`). The table stores both and hands out `ClassId`
//! handles so tokens stay `Copy` and comparing classes is an integer compare.

use std::collections::HashMap;

/// A lightweight handle to an interned token class.
///
/// Ids are assigned in insertion order and are only meaningful for the
/// `ClassTable` that produced them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, serde::Serialize)]
#[serde(transparent)]
pub struct ClassId(u32);

impl ClassId {
    /// Raw index for serialization/debugging.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone)]
struct ClassName {
    base: String,
    full: String,
}

/// Interns token-class names for one language.
///
/// The empty base name is the "no class" default token. It never receives
/// the postfix, so hosts see an empty string for it.
#[derive(Debug, Clone, Default)]
pub struct ClassTable {
    postfix: String,
    /// Map from base name to id for deduplication.
    lookup: HashMap<String, ClassId>,
    /// Storage indexed by `ClassId`.
    names: Vec<ClassName>,
}

impl ClassTable {
    pub fn new(postfix: impl Into<String>) -> Self {
        Self {
            postfix: postfix.into(),
            ..Self::default()
        }
    }

    /// Postfix appended to every non-empty class (e.g. `.pq`).
    pub fn postfix(&self) -> &str {
        &self.postfix
    }

    /// Intern a base class name, returning its id.
    /// If the name was already interned, returns the existing id.
    pub fn intern(&mut self, base: &str) -> ClassId {
        if let Some(&id) = self.lookup.get(base) {
            return id;
        }

        let full = if base.is_empty() {
            String::new()
        } else {
            format!("{base}{}", self.postfix)
        };
        let id = ClassId(self.names.len() as u32);
        self.names.push(ClassName {
            base: base.to_owned(),
            full,
        });
        self.lookup.insert(base.to_owned(), id);
        id
    }

    /// Look up a base name without interning it.
    pub fn get(&self, base: &str) -> Option<ClassId> {
        self.lookup.get(base).copied()
    }

    /// Full class name as the host sees it (postfix included).
    ///
    /// # Panics
    /// Panics if the id was not created by this table.
    #[inline]
    pub fn resolve(&self, id: ClassId) -> &str {
        &self.names[id.0 as usize].full
    }

    /// Base class name as written in the rule table.
    ///
    /// # Panics
    /// Panics if the id was not created by this table.
    #[inline]
    pub fn base_name(&self, id: ClassId) -> &str {
        &self.names[id.0 as usize].base
    }

    /// Try to resolve an id, returning None if invalid.
    #[inline]
    pub fn try_resolve(&self, id: ClassId) -> Option<&str> {
        self.names.get(id.0 as usize).map(|n| n.full.as_str())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over all classes as `(id, full name)`.
    pub fn iter(&self) -> impl Iterator<Item = (ClassId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, n)| (ClassId(i as u32), n.full.as_str()))
    }
}

/// First dot-separated segment of a class name: `string.escape.pq` -> `string`.
pub fn class_family(class: &str) -> &str {
    class.split('.').next().unwrap_or(class)
}
