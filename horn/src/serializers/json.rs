//! Rule-set JSON import/export
//!
//! The persisted form is a single object with optional `facts` and
//! `rules` fields:
//!
//! ```json
//! {
//!   "facts": ["A"],
//!   "rules": [
//!     { "premises": ["A"], "conclusion": "B" },
//!     { "if": ["B"], "then": "C" }
//!   ]
//! }
//! ```
//!
//! `if`/`then` are accepted as aliases for `premises`/`conclusion` so
//! legacy rule files load unchanged; exports use the canonical names.
//! Import trims every atom and rejects rules with an empty conclusion
//! or blank premises; the engines themselves assume well-formed rules
//! and never re-validate.

use crate::{Atom, HornError, HornResult, KnowledgeBase, Rule};

/// Parse, normalize, and validate a rule-set document.
pub fn parse_ruleset(json: &str) -> HornResult<KnowledgeBase> {
    let raw: KnowledgeBase =
        serde_json::from_str(json).map_err(|e| HornError::Import(e.to_string()))?;
    normalize(raw)
}

/// Serialize a knowledge base to the persisted form.
pub fn to_json(base: &KnowledgeBase) -> HornResult<String> {
    serde_json::to_string_pretty(base).map_err(|e| HornError::Engine(e.to_string()))
}

/// Check one rule the way import does: a conclusion is required and no
/// premise may be blank.
pub fn validate_rule(rule: &Rule, index: usize) -> HornResult<()> {
    if rule.conclusion.as_str().trim().is_empty() {
        return Err(HornError::InvalidRule {
            index,
            message: "conclusion must not be empty".to_string(),
        });
    }
    for premise in &rule.premises {
        if premise.as_str().trim().is_empty() {
            return Err(HornError::InvalidRule {
                index,
                message: "premises must not contain empty atoms".to_string(),
            });
        }
    }
    Ok(())
}

/// Trim atoms at the boundary and validate every rule, collecting all
/// failures rather than stopping at the first.
fn normalize(raw: KnowledgeBase) -> HornResult<KnowledgeBase> {
    let mut base = KnowledgeBase::new();

    for fact in &raw.facts {
        let trimmed = fact.as_str().trim();
        if !trimmed.is_empty() {
            base.facts.insert(Atom::new(trimmed));
        }
    }

    let mut errors = Vec::new();
    for (index, rule) in raw.rules.into_iter().enumerate() {
        let rule = Rule::new(
            rule.premises
                .iter()
                .map(|p| Atom::new(p.as_str().trim()))
                .collect(),
            Atom::new(rule.conclusion.as_str().trim()),
        );
        match validate_rule(&rule, index) {
            Ok(()) => base.rules.push(rule),
            Err(e) => errors.push(e),
        }
    }

    match errors.len() {
        0 => Ok(base),
        1 => Err(errors.remove(0)),
        _ => Err(HornError::MultipleErrors(errors)),
    }
}
