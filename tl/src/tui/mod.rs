//! Terminal User Interface for tasklist
//!
//! Single-screen task manager:
//! - Add tasks with a priority selector, toggle and delete them
//! - Live search (`/`) and a cycling sort key (`s`)
//! - Transient success banner after each add
//!
//! Module split keeps concerns apart: `state` holds pure data, `app`
//! handles keys, `views` renders, `events` polls the terminal, and
//! `runner` owns the terminal plus the persistence side-effect.

mod app;
mod events;
mod runner;
pub mod state;
mod views;

pub use app::App;
pub use events::{Event, EventHandler};
pub use runner::TuiRunner;
pub use state::{InputMode, UiState};

use std::io::{self, Stdout};

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use eyre::Result;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use taskcore::{Storage, TaskList};

/// Terminal type alias
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode
pub fn restore() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI over the given storage backend
pub fn run(storage: Box<dyn Storage>, list: TaskList) -> Result<()> {
    let terminal = init()?;

    // Guard so the terminal is restored even on early return/error
    struct TerminalGuard;
    impl Drop for TerminalGuard {
        fn drop(&mut self) {
            let _ = restore();
        }
    }
    let _guard = TerminalGuard;

    let mut runner = TuiRunner::new(terminal, storage, list);
    runner.run()
}
