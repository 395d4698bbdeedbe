//! TUI application - event handling
//!
//! The App struct owns the UiState and handles all keyboard events.
//! It does not render and it does not persist: mutations are queued as
//! `taskcore::Action`s for the runner to apply.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use taskcore::Action;

use super::state::{InputMode, UiState};

/// TUI application
#[derive(Debug)]
pub struct App {
    state: UiState,
}

impl App {
    /// Create a new application instance around a loaded list
    pub fn new(state: UiState) -> Self {
        Self { state }
    }

    /// Get reference to state
    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Get mutable reference to state
    pub fn state_mut(&mut self) -> &mut UiState {
        &mut self.state
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        debug!(?key, mode = ?self.state.mode, "App::handle_key");

        // Ctrl+C quits from any mode
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.state.should_quit = true;
            return;
        }

        match self.state.mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::Insert => self.handle_insert_key(key),
            InputMode::Search => self.handle_search_key(key),
        }
    }

    /// Handle key in normal mode
    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => {
                debug!("App::handle_normal_key: quit");
                self.state.should_quit = true;
            }

            // === Mode switching ===
            KeyCode::Char('a') | KeyCode::Char('i') => {
                debug!("App::handle_normal_key: entering insert mode");
                self.state.mode = InputMode::Insert;
            }
            KeyCode::Char('/') => {
                debug!("App::handle_normal_key: entering search mode");
                self.state.mode = InputMode::Search;
            }

            // === Selectors ===
            KeyCode::Char('s') => {
                self.state.sort_key = self.state.sort_key.cycle();
                debug!(sort_key = %self.state.sort_key, "App::handle_normal_key: sort key cycled");
            }
            KeyCode::Char('p') => {
                self.state.priority = self.state.priority.cycle();
                debug!(priority = %self.state.priority, "App::handle_normal_key: priority cycled");
            }

            // === Navigation ===
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.selection.select_prev();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let max = self.state.visible().len();
                self.state.selection.select_next(max);
            }

            // === Task operations on the selected row ===
            KeyCode::Char(' ') | KeyCode::Enter => {
                if let Some(id) = self.state.selected_id() {
                    self.state.queue(Action::ToggleComplete { id });
                }
            }
            KeyCode::Char('d') | KeyCode::Char('x') => {
                if let Some(id) = self.state.selected_id() {
                    self.state.queue(Action::Remove { id });
                }
            }

            _ => {}
        }
    }

    /// Handle key in insert mode (typing a new task title)
    fn handle_insert_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                debug!("App::handle_insert_key: cancel");
                self.state.input.clear();
                self.state.mode = InputMode::Normal;
            }
            // Tab cycles the priority selector without leaving the input
            KeyCode::Tab => {
                self.state.priority = self.state.priority.cycle();
            }
            KeyCode::Enter => {
                debug!(input = %self.state.input, "App::handle_insert_key: submit");
                // Whitespace-only titles are ignored by the core; the
                // input is only cleared on a successful add (runner).
                self.state.queue(Action::Add {
                    title: self.state.input.clone(),
                    priority: self.state.priority,
                });
            }
            KeyCode::Backspace => {
                self.state.input.pop();
            }
            KeyCode::Char(c) => {
                self.state.input.push(c);
            }
            _ => {}
        }
    }

    /// Handle key in search mode - the query updates on every keystroke
    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                debug!("App::handle_search_key: clear and exit");
                self.state.search.clear();
                self.state.mode = InputMode::Normal;
            }
            KeyCode::Enter => {
                debug!(search = %self.state.search, "App::handle_search_key: accept");
                self.state.mode = InputMode::Normal;
            }
            KeyCode::Backspace => {
                self.state.search.pop();
            }
            KeyCode::Char(c) => {
                self.state.search.push(c);
            }
            _ => {}
        }
    }
}
