//! TUI Runner - main loop that owns terminal and storage
//!
//! The TuiRunner is responsible for:
//! - Rendering on every loop iteration
//! - Dispatching events to App for handling
//! - Applying queued actions through taskcore
//! - Mirroring the collection to storage after every change

use std::time::{Duration, Instant};

use eyre::Result;
use tracing::{debug, info, warn};

use taskcore::{Outcome, Storage, TaskList};

use super::Tui;
use super::app::App;
use super::events::{Event, EventHandler};
use super::state::{Notice, UiState};
use super::views;

/// Event poll timeout; timeouts become ticks (notice expiry, clamping)
const TICK_RATE: Duration = Duration::from_millis(100);

/// TUI Runner that manages the terminal and event loop
pub struct TuiRunner {
    /// Application (key handling + state)
    app: App,
    /// Terminal handle
    terminal: Tui,
    /// Persistence bridge: written after every collection change
    storage: Box<dyn Storage>,
    /// Event handler
    event_handler: EventHandler,
}

impl TuiRunner {
    /// Create a new TuiRunner around a loaded task list
    pub fn new(terminal: Tui, storage: Box<dyn Storage>, list: TaskList) -> Self {
        debug!(count = list.len(), "TuiRunner::new");
        Self {
            app: App::new(UiState::new(list)),
            terminal,
            storage,
            event_handler: EventHandler::new(TICK_RATE),
        }
    }

    /// Run the main loop until quit
    pub fn run(&mut self) -> Result<()> {
        info!("TUI started");
        loop {
            self.terminal.draw(|frame| views::render(self.app.state(), frame))?;

            match self.event_handler.next()? {
                Event::Key(key) => self.app.handle_key(key),
                Event::Resize(_, _) => {}
                Event::Tick => {}
            }

            self.apply_pending();
            self.app.state_mut().tick(Instant::now());

            if self.app.state().should_quit {
                info!("TUI quitting");
                break;
            }
        }
        Ok(())
    }

    fn apply_pending(&mut self) {
        apply_pending(self.app.state_mut(), self.storage.as_ref());
    }
}

/// Apply a queued action and mirror the result to storage
///
/// Control flow per the state design: handler queues action -> transition
/// produces a new collection -> storage is rewritten -> the view derives
/// from the new state on the next draw. Free function so it is testable
/// without a terminal.
fn apply_pending(state: &mut UiState, storage: &dyn Storage) {
    let Some(action) = state.pending_action.take() else {
        return;
    };

    let transition = state.list.apply(action);
    match &transition.outcome {
        Outcome::Added(task) => {
            debug!(id = %task.id, title = %task.title, "apply_pending: task added");
            // Clearing the input and showing the banner happen only on a
            // successful add; overwriting the notice restarts its 2s
            // window on rapid consecutive adds.
            state.input.clear();
            state.notice = Some(Notice::success("Task added successfully!"));
        }
        Outcome::Removed(id) => {
            debug!(%id, "apply_pending: task removed");
        }
        Outcome::Toggled(id) => {
            debug!(%id, "apply_pending: task toggled");
        }
        Outcome::Ignored => {
            debug!("apply_pending: action ignored");
        }
    }

    if transition.changed() {
        state.list = transition.list;
        if let Err(e) = storage.save(&state.list) {
            // Non-fatal: keep the in-memory state, surface the failure
            warn!(error = %e, "failed to persist task list");
            state.notice = Some(Notice::error(format!("Save failed: {}", e)));
        }
    }
}
