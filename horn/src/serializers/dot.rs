//! Graphviz DOT rendering of the rule dependency graph.
//!
//! One edge per (premise, conclusion) pair. Pure text generation; no
//! graphviz binding is involved, the output feeds `dot` or any viewer.

use crate::Rule;

/// Render `rules` as a Graphviz digraph.
pub fn to_dot(rules: &[Rule]) -> String {
    let mut out = String::from("digraph rules {\n");
    for rule in rules {
        for premise in &rule.premises {
            out.push_str(&format!(
                "    {} -> {};\n",
                quote(premise.as_str()),
                quote(rule.conclusion.as_str())
            ));
        }
        // Unconditional rules still show their conclusion as a node.
        if rule.premises.is_empty() {
            out.push_str(&format!("    {};\n", quote(rule.conclusion.as_str())));
        }
    }
    out.push_str("}\n");
    out
}

fn quote(label: &str) -> String {
    format!("\"{}\"", label.replace('\\', "\\\\").replace('"', "\\\""))
}
