use anyhow::{Context, Result};
use horn::{Atom, Engine};
use inquire::{Select, Text};

/// Pick a goal atom for backward chaining.
///
/// Offers every atom mentioned in the loaded knowledge; falls back to a
/// free-text prompt when the workspace is empty.
pub fn select_goal(engine: &Engine) -> Result<Atom> {
    let atoms = engine.atoms();

    if atoms.is_empty() {
        let entered = Text::new("Goal to prove:")
            .with_help_message("The workspace has no atoms yet; type one")
            .prompt()
            .context("Failed to get goal")?;
        return Ok(Atom::new(entered.trim()));
    }

    let display_options: Vec<String> = atoms
        .iter()
        .map(|atom| {
            if engine.facts().contains(atom) {
                format!("{} (known fact)", atom)
            } else {
                atom.to_string()
            }
        })
        .collect();

    let selected = Select::new("Select a goal to prove:", display_options.clone())
        .with_help_message("Use arrow keys to navigate, Enter to select")
        .prompt()
        .context("Failed to get goal selection")?;

    let index = display_options
        .iter()
        .position(|option| option == &selected)
        .context("Failed to find selected goal index")?;

    Ok(atoms[index].clone())
}
