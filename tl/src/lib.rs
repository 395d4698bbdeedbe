//! TaskList - terminal task-list manager
//!
//! A small front end over [`taskcore`]: users create, complete, delete,
//! search, and sort short text tasks with a priority tag, persisted in a
//! local JSON slot.
//!
//! # Modules
//!
//! - [`cli`] - command-line interface (scriptable surface)
//! - [`config`] - YAML configuration (store path, log level)
//! - [`tui`] - interactive ratatui interface (default surface)

pub mod cli;
pub mod config;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::Config;
