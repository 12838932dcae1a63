mod formatter;
mod interactive;
#[cfg(feature = "server")]
mod server;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use formatter::Formatter;
use horn::{Atom, Engine};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "horn")]
#[command(about = "A propositional forward/backward chaining inference engine.")]
#[command(
    long_about = "Horn derives facts from IF/THEN rules over plain propositional atoms.\nThe CLI loads every rule-set JSON file from a workspace directory, then either saturates the fact set (forward chaining) or proves a single goal (backward chaining), showing the reasoning trace either way."
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive every reachable fact (forward chaining)
    ///
    /// Loads all .json rule-set files from the workspace, adds any extra facts
    /// given on the command line, and saturates the fact set until no rule can
    /// fire. Prints the derived facts and the full reasoning trace.
    Infer {
        /// Extra fact atoms to assume before saturation
        ///
        /// Examples: horn infer A "engine cranks"
        facts: Vec<String>,
        /// Workspace root directory containing rule-set .json files
        #[arg(short = 'd', long = "dir", default_value = ".")]
        workdir: PathBuf,
        /// Output derived atoms only, one per line (for piping to other tools)
        #[arg(short = 'r', long)]
        raw: bool,
    },
    /// Prove a single goal atom (backward chaining)
    ///
    /// Works backward from the goal to supporting facts, trying the first rule
    /// that concludes each sub-goal. An unprovable goal is a normal negative
    /// result, not an error.
    Prove {
        /// Goal atom to prove (selected interactively when omitted)
        goal: Option<String>,
        /// Extra fact atoms to assume before the proof
        facts: Vec<String>,
        /// Workspace root directory containing rule-set .json files
        #[arg(short = 'd', long = "dir", default_value = ".")]
        workdir: PathBuf,
        /// Output only "true" or "false" (for piping to other tools)
        #[arg(short = 'r', long)]
        raw: bool,
        /// Select the goal interactively even when one is given
        #[arg(short = 'i', long)]
        interactive: bool,
    },
    /// Show the loaded facts and rules
    ///
    /// Useful for checking what a workspace contains before running inference.
    Show {
        /// Workspace root directory containing rule-set .json files
        #[arg(short = 'd', long = "dir", default_value = ".")]
        workdir: PathBuf,
    },
    /// Render the rule dependency graph as Graphviz DOT
    ///
    /// One edge per premise/conclusion pair. Pipe into `dot -Tsvg` to render.
    Graph {
        /// Workspace root directory containing rule-set .json files
        #[arg(short = 'd', long = "dir", default_value = ".")]
        workdir: PathBuf,
        /// Write DOT to a file instead of stdout
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
    /// Export the merged knowledge as one rule-set JSON document
    Export {
        /// Workspace root directory containing rule-set .json files
        #[arg(short = 'd', long = "dir", default_value = ".")]
        workdir: PathBuf,
        /// Write JSON to a file instead of stdout
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
    /// Start HTTP REST API server (default: localhost:3000)
    ///
    /// Runs a server that answers forward and backward chaining requests over
    /// HTTP POST. API: POST /infer with {facts, rules}, POST /prove with
    /// {goal, facts, rules}.
    Server {
        /// Workspace root directory containing rule-set .json files
        #[arg(short = 'd', long = "dir", default_value = ".")]
        workdir: PathBuf,
        /// Host address to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port number to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Infer {
            workdir,
            facts,
            raw,
        } => infer_command(workdir, facts, *raw),
        Commands::Prove {
            workdir,
            goal,
            facts,
            raw,
            interactive,
        } => prove_command(workdir, goal.as_deref(), facts, *raw, *interactive),
        Commands::Show { workdir } => show_command(workdir),
        Commands::Graph { workdir, output } => graph_command(workdir, output.as_deref()),
        Commands::Export { workdir, output } => export_command(workdir, output.as_deref()),
        Commands::Server {
            workdir,
            host,
            port,
        } => server_command(workdir, host, *port),
    };

    if let Err(e) = result {
        // Format HornErrors through their Display; anything else as-is.
        if let Some(horn_err) = e.downcast_ref::<horn::HornError>() {
            eprintln!("{}", horn_err);
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

fn infer_command(workdir: &Path, facts: &[String], raw: bool) -> Result<()> {
    let mut engine = Engine::new();
    load_workspace(&mut engine, workdir)?;
    add_extra_facts(&mut engine, facts);

    let initial = engine.facts().clone();
    let inference = engine.infer();

    let formatter = Formatter::default();
    print!("{}", formatter.format_inference(&initial, &inference, raw));

    Ok(())
}

fn prove_command(
    workdir: &Path,
    goal: Option<&str>,
    facts: &[String],
    raw: bool,
    interactive: bool,
) -> Result<()> {
    let mut engine = Engine::new();
    load_workspace(&mut engine, workdir)?;
    add_extra_facts(&mut engine, facts);

    let goal = match goal {
        Some(g) if !interactive => Atom::new(g.trim()),
        _ => interactive::select_goal(&engine)?,
    };

    let proof = engine.prove(&goal);

    let formatter = Formatter::default();
    print!("{}", formatter.format_proof(&goal, &proof, raw));

    Ok(())
}

fn show_command(workdir: &Path) -> Result<()> {
    let mut engine = Engine::new();
    load_workspace(&mut engine, workdir)?;

    let formatter = Formatter::default();
    print!("{}", formatter.format_knowledge(engine.knowledge()));

    Ok(())
}

fn graph_command(workdir: &Path, output: Option<&Path>) -> Result<()> {
    let mut engine = Engine::new();
    load_workspace(&mut engine, workdir)?;

    let dot = horn::serializers::dot::to_dot(engine.rules());
    write_or_print(output, &dot)
}

fn export_command(workdir: &Path, output: Option<&Path>) -> Result<()> {
    let mut engine = Engine::new();
    load_workspace(&mut engine, workdir)?;

    let json = engine.export_json()?;
    write_or_print(output, &json)
}

fn server_command(workdir: &Path, host: &str, port: u16) -> Result<()> {
    #[cfg(feature = "server")]
    {
        use tokio::runtime::Runtime;
        let rt = Runtime::new()?;
        rt.block_on(async {
            let mut engine = Engine::new();
            load_workspace(&mut engine, workdir)?;

            println!(
                "Starting HTTP server with {} fact(s) and {} rule(s) loaded",
                engine.facts().len(),
                engine.rules().len()
            );
            server::http::start_server(engine, host, port).await
        })?;
    }

    #[cfg(not(feature = "server"))]
    {
        let _ = (workdir, host, port);
        eprintln!("Error: Server feature not enabled");
        eprintln!("Recompile with: cargo build --features server");
        std::process::exit(1);
    }

    Ok(())
}

/// Load every rule-set .json file from the workspace directory
fn load_workspace(engine: &mut Engine, workdir: &Path) -> Result<()> {
    for entry in WalkDir::new(workdir) {
        let entry = entry?;
        if entry.path().extension().and_then(|s| s.to_str()) == Some("json") {
            let path = entry.path();
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            engine
                .load_json(&content)
                .with_context(|| format!("Failed to load {}", path.display()))?;
        }
    }

    Ok(())
}

/// Add command-line fact atoms; blank entries are ignored.
fn add_extra_facts(engine: &mut Engine, facts: &[String]) {
    for fact in facts {
        let trimmed = fact.trim();
        if !trimmed.is_empty() {
            engine.add_fact(Atom::new(trimmed));
        }
    }
}

fn write_or_print(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => print!("{}", content),
    }
    Ok(())
}
