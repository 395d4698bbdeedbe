//! TaskList - terminal task-list manager
//!
//! CLI entry point. With no subcommand the interactive TUI launches;
//! subcommands offer a scriptable surface over the same store.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result};
use tracing::{info, warn};

use tasklist::cli::{Cli, Command};
use tasklist::config::Config;
use tasklist::tui;

use taskcore::{Action, JsonFileStorage, Outcome, Priority, SortKey, Storage, TaskList};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tasklist")
        .join("logs");
    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Level priority: CLI --log-level > config file > default (INFO)
    let level = cli_log_level
        .or(config_log_level)
        .and_then(|s| s.to_uppercase().parse::<tracing::Level>().ok())
        .unwrap_or(tracing::Level::INFO);

    let log_file = fs::File::options()
        .create(true)
        .append(true)
        .open(log_dir.join("tasklist.log"))
        .context("Failed to open log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!(?level, "Logging initialized");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    setup_logging(cli.log_level.as_deref(), config.log_level.as_deref()).context("Failed to setup logging")?;

    let store_path = cli.store.clone().unwrap_or_else(|| config.store_path.clone());
    info!(store_path = %store_path.display(), "tasklist starting");

    let storage = JsonFileStorage::new(&store_path);
    // Read the slot once at startup; absent or malformed data yields an
    // empty collection.
    let list = storage.load().context("Failed to load task store")?;

    match cli.command {
        None => tui::run(Box::new(storage), list),
        Some(Command::Add { title, priority }) => cmd_add(&storage, list, title, priority),
        Some(Command::List { query, sort }) => cmd_list(&list, &query, sort),
        Some(Command::Toggle { id }) => cmd_toggle(&storage, list, &id),
        Some(Command::Rm { id }) => cmd_rm(&storage, list, &id),
    }
}

fn cmd_add(storage: &dyn Storage, list: TaskList, title: String, priority: Priority) -> Result<()> {
    let transition = list.apply(Action::Add { title, priority });
    match &transition.outcome {
        Outcome::Added(task) => {
            storage.save(&transition.list)?;
            println!("{} Added task: {} ({})", "✓".green(), task.title, task.id.cyan());
        }
        _ => {
            // Whitespace-only title: silently ignored, no feedback
            info!("add ignored: empty title");
        }
    }
    Ok(())
}

fn cmd_list(list: &TaskList, query: &str, sort: SortKey) -> Result<()> {
    let view = taskcore::derive(list.tasks(), query, sort);
    if view.is_empty() {
        println!("No tasks found");
        return Ok(());
    }
    for task in view {
        let icon = if task.completed {
            "✓".green()
        } else {
            "○".normal()
        };
        let priority = match task.priority {
            Priority::High => task.priority.to_string().red(),
            Priority::Medium => task.priority.to_string().blue(),
            Priority::Low => task.priority.to_string().green(),
        };
        let title = if task.completed {
            task.title.dimmed().strikethrough()
        } else {
            task.title.normal()
        };
        println!("{} {} [{}] {}", icon, task.id.dimmed(), priority, title);
    }
    Ok(())
}

fn cmd_toggle(storage: &dyn Storage, list: TaskList, id: &str) -> Result<()> {
    let Some(id) = resolve_id(&list, id) else {
        // Unknown id: silent no-op
        info!(%id, "toggle ignored: no matching task");
        return Ok(());
    };
    let transition = list.apply(Action::ToggleComplete { id });
    if let Outcome::Toggled(id) = &transition.outcome {
        storage.save(&transition.list)?;
        let task = transition.list.get(id).ok_or_else(|| eyre::eyre!("toggled task vanished"))?;
        let status = if task.completed { "done" } else { "open" };
        println!("{} {}: {}", "✓".green(), status, task.title);
    }
    Ok(())
}

fn cmd_rm(storage: &dyn Storage, list: TaskList, id: &str) -> Result<()> {
    let Some(id) = resolve_id(&list, id) else {
        info!(%id, "rm ignored: no matching task");
        return Ok(());
    };
    let transition = list.apply(Action::Remove { id: id.clone() });
    if transition.changed() {
        storage.save(&transition.list)?;
        println!("{} Removed task: {}", "✓".green(), id.cyan());
    }
    Ok(())
}

/// Resolve a full id or unambiguous prefix to a full id
fn resolve_id(list: &TaskList, prefix: &str) -> Option<String> {
    if prefix.is_empty() {
        return None;
    }
    if list.get(prefix).is_some() {
        return Some(prefix.to_string());
    }
    let mut matches = list.tasks().iter().filter(|t| t.id.starts_with(prefix));
    let first = matches.next()?;
    if matches.next().is_some() {
        warn!(%prefix, "ambiguous id prefix");
        return None;
    }
    Some(first.id.clone())
}
