use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};
use horn::{trace, Atom, FactSet, Inference, KnowledgeBase, Proof};

pub struct Formatter {}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn format_inference(&self, initial: &FactSet, inference: &Inference, raw: bool) -> String {
        if raw {
            let mut output = String::new();
            for atom in inference.derived.sorted() {
                output.push_str(atom.as_str());
                output.push('\n');
            }
            return output;
        }

        let mut output = String::new();
        output.push_str(&self.format_derived_table(initial, &inference.derived));
        output.push('\n');
        output.push_str(&self.format_trace(&inference.trace));
        output
    }

    pub fn format_proof(&self, goal: &Atom, proof: &Proof, raw: bool) -> String {
        if raw {
            return format!("{}\n", proof.proved);
        }

        let mut output = String::new();
        if proof.proved {
            output.push_str(&format!("Goal '{}' proved.\n\n", goal));
        } else {
            output.push_str(&format!("Goal '{}' cannot be proven.\n\n", goal));
        }
        output.push_str(&self.format_trace(&proof.trace));
        output
    }

    pub fn format_knowledge(&self, base: &KnowledgeBase) -> String {
        let mut output = String::new();

        let mut facts_table = Table::new();
        facts_table.load_preset(UTF8_FULL);
        facts_table.set_header(Row::from(vec![
            Cell::new("Fact").set_alignment(CellAlignment::Left)
        ]));
        for atom in base.facts.sorted() {
            facts_table.add_row(Row::from(vec![Cell::new(atom.as_str())]));
        }
        output.push_str(&facts_table.to_string());
        output.push('\n');

        let mut rules_table = Table::new();
        rules_table.load_preset(UTF8_FULL);
        rules_table.set_header(Row::from(vec![
            Cell::new("#").set_alignment(CellAlignment::Right),
            Cell::new("IF").set_alignment(CellAlignment::Left),
            Cell::new("THEN").set_alignment(CellAlignment::Left),
        ]));
        for (index, rule) in base.rules.iter().enumerate() {
            let premises = rule
                .premises
                .iter()
                .map(Atom::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            rules_table.add_row(Row::from(vec![
                Cell::new(index.to_string()),
                Cell::new(if premises.is_empty() { "-" } else { &premises }),
                Cell::new(rule.conclusion.as_str()),
            ]));
        }
        output.push_str(&rules_table.to_string());
        output.push('\n');

        output
    }

    fn format_derived_table(&self, initial: &FactSet, derived: &FactSet) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("Fact").set_alignment(CellAlignment::Left),
            Cell::new("Origin").set_alignment(CellAlignment::Left),
        ]));

        for atom in derived.sorted() {
            let origin = if initial.contains(&atom) {
                "given"
            } else {
                "derived"
            };
            table.add_row(Row::from(vec![
                Cell::new(atom.as_str()),
                Cell::new(origin),
            ]));
        }

        format!("{}\n", table)
    }

    fn format_trace(&self, steps: &[horn::TraceStep]) -> String {
        let lines = trace::render(steps);
        if lines.is_empty() {
            return "Trace: (no reasoning steps)\n".to_string();
        }

        let mut output = String::from("Trace:\n");
        for (index, line) in lines.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", index + 1, line));
        }
        output
    }
}
