//! Reasoning traces
//!
//! Both engines record every reasoning decision as a [`TraceStep`]. The
//! order of steps in a trace is the exact order in which decisions were
//! made and is reproducible: identical inputs always yield an identical
//! trace.

use crate::Atom;
use serde::Serialize;
use std::fmt;

/// One reasoning event recorded during an inference run.
///
/// `Display` renders the human-readable trace line shown by the CLI and
/// HTTP API; the serde form is a tagged object for machine consumers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TraceStep {
    /// Forward chaining fired a rule and added its conclusion
    RuleApplied {
        premises: Vec<Atom>,
        conclusion: Atom,
    },
    /// A backward-chaining goal was already in the fact set
    GoalKnown { goal: Atom },
    /// Backward chaining selected a rule concluding the current goal
    TryingRule {
        premises: Vec<Atom>,
        conclusion: Atom,
    },
    /// All premises succeeded; the goal was added to the working facts
    GoalProved { goal: Atom },
    /// No rule concludes the goal, or the selected rule's premises failed
    GoalFailed { goal: Atom },
    /// The goal was re-encountered while already being explored
    CycleDetected { goal: Atom },
}

fn join_premises(premises: &[Atom]) -> String {
    if premises.is_empty() {
        return "-".to_string();
    }
    premises
        .iter()
        .map(Atom::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for TraceStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceStep::RuleApplied {
                premises,
                conclusion,
            } => {
                write!(
                    f,
                    "Applied: IF {} THEN {}",
                    join_premises(premises),
                    conclusion
                )
            }
            TraceStep::GoalKnown { goal } => write!(f, "Goal '{}' is already known.", goal),
            TraceStep::TryingRule {
                premises,
                conclusion,
            } => {
                write!(
                    f,
                    "Trying rule: IF {} THEN {}",
                    join_premises(premises),
                    conclusion
                )
            }
            TraceStep::GoalProved { goal } => write!(f, "Goal '{}' proved.", goal),
            TraceStep::GoalFailed { goal } => write!(f, "Goal '{}' cannot be proven.", goal),
            TraceStep::CycleDetected { goal } => {
                write!(f, "Goal '{}' depends on itself; cycle detected.", goal)
            }
        }
    }
}

/// Render a trace as display lines, one per step.
pub fn render(trace: &[TraceStep]) -> Vec<String> {
    trace.iter().map(|step| step.to_string()).collect()
}
