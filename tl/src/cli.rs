//! CLI command definitions and subcommands

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use taskcore::{Priority, SortKey};

/// TaskList - terminal task-list manager
#[derive(Parser)]
#[command(name = "tl", about = "Create, complete, search, and sort tasks from the terminal", version)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Path to the task store (overrides config)
    #[arg(long, global = true, help = "Path to the task store file")]
    pub store: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Subcommand to execute (launches the TUI when omitted)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a task
    Add {
        /// Task title (whitespace-only titles are silently ignored)
        title: String,

        /// Priority tag
        #[arg(short, long, default_value = "medium")]
        priority: Priority,
    },

    /// List tasks through the search/sort pipeline
    List {
        /// Case-insensitive substring to search titles for
        #[arg(short, long, default_value = "")]
        query: String,

        /// Sort key
        #[arg(short, long, default_value = "date")]
        sort: SortKey,
    },

    /// Toggle a task's completed flag
    Toggle {
        /// Task ID (or unambiguous prefix)
        id: String,
    },

    /// Delete a task
    #[command(alias = "remove")]
    Rm {
        /// Task ID (or unambiguous prefix)
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_verifies() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add_with_priority() {
        let cli = Cli::parse_from(["tl", "add", "Write report", "--priority", "high"]);
        match cli.command {
            Some(Command::Add { title, priority }) => {
                assert_eq!(title, "Write report");
                assert_eq!(priority, Priority::High);
            }
            other => panic!("expected Add, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_list_defaults() {
        let cli = Cli::parse_from(["tl", "list"]);
        match cli.command {
            Some(Command::List { query, sort }) => {
                assert_eq!(query, "");
                assert_eq!(sort, SortKey::Date);
            }
            other => panic!("expected List, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_bad_sort_key() {
        assert!(Cli::try_parse_from(["tl", "list", "--sort", "created"]).is_err());
    }
}
