//! Forward chaining
//!
//! Data-driven saturation: starting from the known facts, repeatedly
//! apply every rule whose premises hold until a full pass adds nothing.

use crate::{Atom, FactSet, Rule, TraceStep};
use serde::Serialize;

/// The outcome of one forward-chaining run.
#[derive(Debug, Clone, Serialize)]
pub struct Inference {
    /// The minimal superset of the input facts closed under the rules
    pub derived: FactSet,
    /// Every rule application, in firing order
    pub trace: Vec<TraceStep>,
}

impl Inference {
    /// Atoms derived beyond the initial facts, in derivation order.
    pub fn new_facts<'a>(&'a self, initial: &'a FactSet) -> impl Iterator<Item = &'a Atom> {
        self.derived.iter().filter(|atom| !initial.contains(atom))
    }
}

/// Saturate `facts` under `rules` and return the closure plus a trace.
///
/// A rule fires when every premise is in the working set and its
/// conclusion is not yet. Passes repeat in rule-list order until a full
/// pass fires nothing. Termination is guaranteed: the atom universe is
/// bounded by the atoms appearing in the rules, and every pass either
/// adds an atom or is the last.
///
/// The returned set is the unique fixed point, independent of rule
/// order; rule order only decides the trace ordering when several rules
/// could fire in the same pass. The input fact set is not mutated.
pub fn infer(facts: &FactSet, rules: &[Rule]) -> Inference {
    let mut derived = facts.clone();
    let mut trace = Vec::new();

    let mut changed = true;
    while changed {
        changed = false;
        for rule in rules {
            let premises_hold = rule.premises.iter().all(|p| derived.contains(p));
            if premises_hold && derived.insert(rule.conclusion.clone()) {
                trace.push(TraceStep::RuleApplied {
                    premises: rule.premises.clone(),
                    conclusion: rule.conclusion.clone(),
                });
                changed = true;
            }
        }
    }

    Inference { derived, trace }
}
