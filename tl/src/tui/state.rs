//! TUI application state
//!
//! Pure data structures for the TUI. No rendering logic here. The task
//! collection itself lives in [`taskcore::TaskList`]; this module adds
//! the UI-local fields: input buffer, priority selector, search query,
//! sort key, selection, and the transient notice.

use std::time::{Duration, Instant};

use tracing::debug;

use taskcore::{Action, Priority, SortKey, Task, TaskList};

/// How long the add-success banner stays visible
pub const NOTICE_TTL: Duration = Duration::from_millis(2000);

/// How long error notices stay visible
pub const ERROR_TTL: Duration = Duration::from_secs(5);

/// Interaction mode (modal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Typing a new task title (a key)
    Insert,
    /// Live search (/ key)
    Search,
}

/// Kind of transient notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient banner with an explicit expiry deadline
///
/// Overwriting the notice restarts the window, which is the
/// cancel-and-restart behavior for rapid consecutive adds.
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    expires_at: Instant,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Success,
            expires_at: Instant::now() + NOTICE_TTL,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Error,
            expires_at: Instant::now() + ERROR_TTL,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    #[cfg(test)]
    pub fn expires_at(&self) -> Instant {
        self.expires_at
    }
}

/// Selection state for the task list view
#[derive(Debug, Default, Clone)]
pub struct SelectionState {
    pub selected_index: usize,
}

impl SelectionState {
    pub fn select_next(&mut self, max_items: usize) {
        if max_items > 0 && self.selected_index < max_items - 1 {
            self.selected_index += 1;
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Ensure selection is within bounds
    pub fn clamp(&mut self, max_items: usize) {
        if max_items == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= max_items {
            self.selected_index = max_items - 1;
        }
    }
}

/// Main TUI application state
#[derive(Debug)]
pub struct UiState {
    /// The task collection (persisted by the runner on change)
    pub list: TaskList,
    /// New-task input buffer
    pub input: String,
    /// Priority selector for the next added task
    pub priority: Priority,
    /// Live search query
    pub search: String,
    /// Current sort key
    pub sort_key: SortKey,
    /// Current interaction mode
    pub mode: InputMode,
    /// Selection within the derived view
    pub selection: SelectionState,
    /// Transient banner (success or error)
    pub notice: Option<Notice>,
    /// Should the app quit
    pub should_quit: bool,
    /// Action queued for the runner to apply and persist
    pub pending_action: Option<Action>,
}

impl UiState {
    /// Create state around a loaded task list
    pub fn new(list: TaskList) -> Self {
        debug!(count = list.len(), "UiState::new");
        Self {
            list,
            input: String::new(),
            priority: Priority::default(),
            search: String::new(),
            sort_key: SortKey::default(),
            mode: InputMode::default(),
            selection: SelectionState::default(),
            notice: None,
            should_quit: false,
            pending_action: None,
        }
    }

    /// The derived display list: filter by search, then sort
    ///
    /// Recomputed on every call from current state, never stored.
    pub fn visible(&self) -> Vec<&Task> {
        taskcore::derive(self.list.tasks(), &self.search, self.sort_key)
    }

    /// Id of the currently selected task in the derived view
    pub fn selected_id(&self) -> Option<String> {
        self.visible().get(self.selection.selected_index).map(|t| t.id.clone())
    }

    /// Queue an action for the runner
    pub fn queue(&mut self, action: Action) {
        debug!(?action, "UiState::queue");
        self.pending_action = Some(action);
    }

    /// Tick - clear expired notices and keep selection in bounds
    pub fn tick(&mut self, now: Instant) {
        if let Some(notice) = &self.notice
            && notice.is_expired(now)
        {
            debug!("UiState::tick: notice expired");
            self.notice = None;
        }
        let count = self.visible().len();
        self.selection.clamp(count);
    }
}
