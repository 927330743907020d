//! tasktree - replay a command script against an in-memory task forest.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tasktree_core::render::render_outline;
use tasktree_core::script::{Command, Script, SCRIPT_VERSION};
use tasktree_core::{InMemoryTaskStore, Priority, TaskStore};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Outline,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "tasktree")]
#[command(about = "Replay task commands against an in-memory task forest", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON command script. Runs the built-in demo when omitted.
    #[arg(long, env = "TASKTREE_SCRIPT")]
    script: Option<PathBuf>,

    /// How to print the final forest
    #[arg(long, value_enum, default_value_t = Format::Outline)]
    format: Format,

    /// Do not print per-command outcomes
    #[arg(short, long)]
    quiet: bool,
}

/// demo：2 つの root と入れ子の subtask、葉だけ完了させる
fn demo_script() -> Script {
    let add = |title: &str, priority: f64| Command::AddTask {
        title: title.to_string(),
        priority: Priority::new(priority),
    };
    let sub = |parent: &str, title: &str| Command::AddSubtask {
        parent: parent.to_string(),
        title: title.to_string(),
    };
    Script {
        version: SCRIPT_VERSION,
        commands: vec![
            add("Task 1", 3.0),
            add("Task 2", 1.0),
            sub("Task 1", "Subtask 1"),
            sub("Subtask 1", "Subtask 2"),
            Command::CompleteTask {
                title: "Subtask 2".to_string(),
            },
            Command::IncompleteTasks,
        ],
    }
}

fn load_script(path: &Path) -> Result<Script> {
    let input = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read script {}", path.display()))?;
    Script::parse(&input).with_context(|| format!("invalid script {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("TASKTREE_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let script = match &cli.script {
        Some(path) => load_script(path)?,
        None => demo_script(),
    };
    info!(commands = script.commands.len(), "replaying script");

    let store = InMemoryTaskStore::new();
    let outcomes = script.run(&store).await;

    if !cli.quiet {
        for (command, outcome) in script.commands.iter().zip(&outcomes) {
            println!(
                "{} => {}",
                serde_json::to_string(command)?,
                serde_json::to_string(outcome)?
            );
        }
    }

    let tree = store.snapshot().await;
    match cli.format {
        Format::Outline => print!("{}", render_outline(&tree)),
        Format::Json => println!("{}", serde_json::to_string_pretty(tree.roots())?),
    }

    Ok(())
}
