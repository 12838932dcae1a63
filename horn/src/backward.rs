//! Backward chaining
//!
//! Goal-driven proof search: work backward from a target atom to
//! supporting facts, depth first. Rule order is a priority order — only
//! the first rule concluding a goal is ever tried, with no backtracking
//! to later candidates. A goal that forward chaining could derive
//! through a lower-priority rule may therefore still fail here; that is
//! a documented policy, not a bug.

use crate::{Atom, FactSet, Rule, TraceStep};
use serde::Serialize;
use std::collections::HashSet;

/// The outcome of one backward-chaining run.
#[derive(Debug, Clone, Serialize)]
pub struct Proof {
    pub proved: bool,
    /// The working fact set after the run: the input facts plus every
    /// sub-goal that was proved along the way
    pub facts: FactSet,
    pub trace: Vec<TraceStep>,
}

/// Prove `goal` against a clone of `facts`.
///
/// Convenience wrapper over [`prove_into`] for callers that want their
/// canonical fact set left untouched; the mutated working copy comes
/// back in the returned [`Proof`].
pub fn prove(goal: &Atom, facts: &FactSet, rules: &[Rule]) -> Proof {
    let mut working = facts.clone();
    let mut trace = Vec::new();
    let proved = prove_into(goal, &mut working, rules, &mut trace);
    Proof {
        proved,
        facts: working,
        trace,
    }
}

/// Prove `goal`, mutating the caller's working fact set and appending
/// to the caller's trace.
///
/// Every successfully proved goal is inserted into `facts`, so later
/// sub-goal proofs in the same run reuse it without re-derivation.
/// "Cannot be proven" is a normal negative result, never an error.
///
/// Cyclic goal dependencies (A needs B needs A) are guarded: a goal
/// re-encountered while still being explored fails immediately with a
/// [`TraceStep::CycleDetected`] entry instead of recursing forever.
pub fn prove_into(
    goal: &Atom,
    facts: &mut FactSet,
    rules: &[Rule],
    trace: &mut Vec<TraceStep>,
) -> bool {
    let mut in_progress = HashSet::new();
    prove_goal(goal, facts, rules, trace, &mut in_progress)
}

fn prove_goal(
    goal: &Atom,
    facts: &mut FactSet,
    rules: &[Rule],
    trace: &mut Vec<TraceStep>,
    in_progress: &mut HashSet<Atom>,
) -> bool {
    if facts.contains(goal) {
        trace.push(TraceStep::GoalKnown { goal: goal.clone() });
        return true;
    }

    // Re-entering a goal that is still open means the first matching
    // rule chain loops back on itself; fail this branch immediately.
    if !in_progress.insert(goal.clone()) {
        trace.push(TraceStep::CycleDetected { goal: goal.clone() });
        return false;
    }

    // First matching rule only; rule order is a priority order.
    let proved = match rules.iter().find(|rule| rule.conclusion == *goal) {
        Some(rule) => {
            trace.push(TraceStep::TryingRule {
                premises: rule.premises.clone(),
                conclusion: rule.conclusion.clone(),
            });
            // Premises left to right, stopping at the first failure.
            let satisfied = rule
                .premises
                .iter()
                .all(|premise| prove_goal(premise, facts, rules, trace, in_progress));
            if satisfied {
                facts.insert(goal.clone());
                trace.push(TraceStep::GoalProved { goal: goal.clone() });
            }
            satisfied
        }
        None => false,
    };

    in_progress.remove(goal);

    if !proved {
        trace.push(TraceStep::GoalFailed { goal: goal.clone() });
    }
    proved
}
