//! TaskCore - task collection, transitions, and persistence port
//!
//! The core of the task-list manager, kept free of any rendering or
//! terminal concern so the logic is testable on its own:
//!
//! - [`task`] - the `Task` record and `Priority` enum
//! - [`list`] - the ordered `TaskList` and pure `(state, action) -> state`
//!   transitions
//! - [`view`] - the non-persisted filter+sort display pipeline
//! - [`storage`] - the storage port and its JSON-file / in-memory backends
//!
//! # Invariants
//!
//! - `TaskList` preserves insertion order in storage; sorting is a view
//!   concern and never mutates the stored order.
//! - Transitions never mutate the previous collection value; callers get
//!   a new list plus an [`Outcome`] describing what changed.

pub mod list;
pub mod storage;
pub mod task;
pub mod view;

pub use list::{Action, Outcome, TaskList, Transition};
pub use storage::{JsonFileStorage, MemoryStorage, Storage, StorageError};
pub use task::{Priority, Task};
pub use view::{SortKey, derive, filter, sort};
