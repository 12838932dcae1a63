use crate::{
    backward, forward, serializers, Atom, FactSet, HornResult, Inference, KnowledgeBase, Proof,
    Rule,
};

/// The Horn host engine.
///
/// Owns a [`KnowledgeBase`] and exposes the editing surface a host UI
/// needs: add and remove facts and rules, import and export rule-set
/// files, and run either chaining engine over the current knowledge.
///
/// The engine is plain caller-owned data. The chaining algorithms
/// themselves are stateless free functions ([`forward::infer`],
/// [`backward::prove`]); every call here is a fresh, self-contained
/// inference run over the owned knowledge, and concurrent hosts simply
/// give each run its own `Engine` or clone.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    base: KnowledgeBase,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_knowledge(base: KnowledgeBase) -> Self {
        Self { base }
    }

    /// Parse a rule-set JSON document and merge it into the owned
    /// knowledge: imported facts and rules are appended after the
    /// existing ones.
    pub fn load_json(&mut self, json: &str) -> HornResult<()> {
        let imported = serializers::json::parse_ruleset(json)?;
        for fact in &imported.facts {
            self.base.facts.insert(fact.clone());
        }
        self.base.rules.extend(imported.rules);
        Ok(())
    }

    /// The owned knowledge in persisted form (pretty-printed JSON).
    pub fn export_json(&self) -> HornResult<String> {
        serializers::json::to_json(&self.base)
    }

    /// Add a fact. Returns false if it was already known.
    pub fn add_fact(&mut self, atom: Atom) -> bool {
        self.base.facts.insert(atom)
    }

    pub fn remove_fact(&mut self, atom: &Atom) -> bool {
        self.base.facts.remove(atom)
    }

    /// Append a rule after validating it the way the import layer does.
    pub fn add_rule(&mut self, rule: Rule) -> HornResult<()> {
        serializers::json::validate_rule(&rule, self.base.rules.len())?;
        self.base.rules.push(rule);
        Ok(())
    }

    pub fn remove_rule(&mut self, index: usize) -> Option<Rule> {
        if index < self.base.rules.len() {
            Some(self.base.rules.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.base = KnowledgeBase::new();
    }

    pub fn facts(&self) -> &FactSet {
        &self.base.facts
    }

    pub fn rules(&self) -> &[Rule] {
        &self.base.rules
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.base
    }

    /// Every atom mentioned in the knowledge, sorted.
    pub fn atoms(&self) -> Vec<Atom> {
        self.base.atoms()
    }

    /// Forward chaining over the owned knowledge. The owned fact set is
    /// not modified; the closure comes back in the result.
    pub fn infer(&self) -> Inference {
        forward::infer(&self.base.facts, &self.base.rules)
    }

    /// Backward chaining over a working copy of the owned facts. The
    /// owned fact set is not modified; sub-goals proved along the way
    /// are visible in the returned proof's fact set.
    pub fn prove(&self, goal: &Atom) -> Proof {
        backward::prove(goal, &self.base.facts, &self.base.rules)
    }
}
