use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A propositional atom: an opaque label naming one proposition.
///
/// Atoms compare by exact string match. The core performs no
/// normalization; input boundaries (CLI, import) trim whitespace
/// before constructing one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Atom(String);

impl Atom {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Atom {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl From<String> for Atom {
    fn from(label: String) -> Self {
        Self(label)
    }
}

/// An inference rule: a conjunction of premise atoms implying one
/// conclusion atom.
///
/// Rules are immutable for the duration of an inference run. Their
/// position in the containing slice is their evaluation priority: both
/// engines scan rules in list order. An empty premise list is legal and
/// means the conclusion holds unconditionally.
///
/// The serde aliases accept the legacy `{"if": [...], "then": "..."}`
/// file shape alongside the canonical `premises`/`conclusion` fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(alias = "if")]
    pub premises: Vec<Atom>,
    #[serde(alias = "then")]
    pub conclusion: Atom,
}

impl Rule {
    pub fn new(premises: Vec<Atom>, conclusion: Atom) -> Self {
        Self {
            premises,
            conclusion,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IF ")?;
        if self.premises.is_empty() {
            write!(f, "-")?;
        } else {
            for (i, premise) in self.premises.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", premise)?;
            }
        }
        write!(f, " THEN {}", self.conclusion)
    }
}

/// A duplicate-free set of atoms with insertion order preserved.
///
/// Membership checks are O(1). Insertion order is irrelevant to forward
/// chaining; backward chaining appends proved goals to the same
/// collection it reads, so a stable order keeps traces and output
/// reproducible.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Atom>", into = "Vec<Atom>")]
pub struct FactSet {
    items: Vec<Atom>,
    index: HashSet<Atom>,
}

impl FactSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an atom. Returns false if it was already present.
    pub fn insert(&mut self, atom: Atom) -> bool {
        if self.index.contains(&atom) {
            return false;
        }
        self.index.insert(atom.clone());
        self.items.push(atom);
        true
    }

    pub fn remove(&mut self, atom: &Atom) -> bool {
        if self.index.remove(atom) {
            self.items.retain(|a| a != atom);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, atom: &Atom) -> bool {
        self.index.contains(atom)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Atoms in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Atom> {
        self.items.iter()
    }

    /// Atoms in sorted order, for display.
    pub fn sorted(&self) -> Vec<Atom> {
        let mut atoms = self.items.clone();
        atoms.sort();
        atoms
    }

    pub fn is_subset(&self, other: &FactSet) -> bool {
        self.items.iter().all(|a| other.contains(a))
    }
}

/// Set equality: insertion order does not matter.
impl PartialEq for FactSet {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for FactSet {}

impl From<Vec<Atom>> for FactSet {
    fn from(atoms: Vec<Atom>) -> Self {
        let mut set = FactSet::new();
        for atom in atoms {
            set.insert(atom);
        }
        set
    }
}

impl From<FactSet> for Vec<Atom> {
    fn from(set: FactSet) -> Self {
        set.items
    }
}

impl FromIterator<Atom> for FactSet {
    fn from_iter<I: IntoIterator<Item = Atom>>(iter: I) -> Self {
        let mut set = FactSet::new();
        for atom in iter {
            set.insert(atom);
        }
        set
    }
}

impl<'a> IntoIterator for &'a FactSet {
    type Item = &'a Atom;
    type IntoIter = std::slice::Iter<'a, Atom>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// The caller-owned pair both engines operate on: the facts known to be
/// true and the ordered rule store.
///
/// This is also the persisted rule-set file shape; see
/// [`crate::serializers::json`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    #[serde(default)]
    pub facts: FactSet,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every atom mentioned anywhere: known facts, premises, and
    /// conclusions. Sorted for stable presentation.
    pub fn atoms(&self) -> Vec<Atom> {
        let mut seen = FactSet::new();
        for fact in &self.facts {
            seen.insert(fact.clone());
        }
        for rule in &self.rules {
            for premise in &rule.premises {
                seen.insert(premise.clone());
            }
            seen.insert(rule.conclusion.clone());
        }
        seen.sorted()
    }
}
