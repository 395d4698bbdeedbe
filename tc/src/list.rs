//! Ordered task collection and pure state transitions
//!
//! All mutations are expressed as `(state, action) -> state` transitions:
//! [`TaskList::apply`] never touches the previous collection value, it
//! returns a fresh list plus an [`Outcome`] describing what happened.
//! That keeps the logic testable without any rendering layer, and lets
//! the persistence side detect "list changed" by outcome alone.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::task::{Priority, Task};

/// Ordered sequence of tasks
///
/// Insertion order is preserved in storage regardless of display sort.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

/// A user intent against the task list
#[derive(Debug, Clone)]
pub enum Action {
    /// Append a new task; no-op if the trimmed title is empty
    Add { title: String, priority: Priority },
    /// Remove the task with this id; no-op if not found
    Remove { id: String },
    /// Flip `completed` on the task with this id; no-op if not found
    ToggleComplete { id: String },
}

/// What an applied action did
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A task was appended (carries the new task)
    Added(Task),
    /// The task with this id was removed
    Removed(String),
    /// The task with this id had its completed flag flipped
    Toggled(String),
    /// Nothing changed (empty title, or unknown id)
    Ignored,
}

/// Result of applying an action: the next list value plus the outcome
#[derive(Debug, Clone)]
pub struct Transition {
    pub list: TaskList,
    pub outcome: Outcome,
}

impl Transition {
    /// True when the list value differs from the one the action was
    /// applied to, i.e. the caller should re-persist.
    pub fn changed(&self) -> bool {
        !matches!(self.outcome, Outcome::Ignored)
    }
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Look up a task by id
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Apply an action, producing a new collection value
    pub fn apply(&self, action: Action) -> Transition {
        debug!(?action, len = self.tasks.len(), "TaskList::apply");
        match action {
            Action::Add { title, priority } => {
                if title.trim().is_empty() {
                    debug!("TaskList::apply: empty title, ignoring add");
                    return self.unchanged();
                }
                let task = Task::new(title, priority);
                let mut tasks = self.tasks.clone();
                tasks.push(task.clone());
                Transition {
                    list: Self { tasks },
                    outcome: Outcome::Added(task),
                }
            }
            Action::Remove { id } => {
                if self.get(&id).is_none() {
                    debug!(%id, "TaskList::apply: unknown id, ignoring remove");
                    return self.unchanged();
                }
                let tasks = self.tasks.iter().filter(|t| t.id != id).cloned().collect();
                Transition {
                    list: Self { tasks },
                    outcome: Outcome::Removed(id),
                }
            }
            Action::ToggleComplete { id } => {
                if self.get(&id).is_none() {
                    debug!(%id, "TaskList::apply: unknown id, ignoring toggle");
                    return self.unchanged();
                }
                let tasks = self
                    .tasks
                    .iter()
                    .map(|t| {
                        if t.id == id {
                            let mut flipped = t.clone();
                            flipped.completed = !t.completed;
                            flipped
                        } else {
                            t.clone()
                        }
                    })
                    .collect();
                Transition {
                    list: Self { tasks },
                    outcome: Outcome::Toggled(id),
                }
            }
        }
    }

    fn unchanged(&self) -> Transition {
        Transition {
            list: self.clone(),
            outcome: Outcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(list: &TaskList, title: &str, priority: Priority) -> Transition {
        list.apply(Action::Add {
            title: title.to_string(),
            priority,
        })
    }

    #[test]
    fn test_add_appends_one_incomplete_task() {
        let list = TaskList::new();
        let t = add(&list, "Write report", Priority::High);
        assert!(t.changed());
        assert_eq!(t.list.len(), 1);
        let task = &t.list.tasks()[0];
        assert!(!task.completed);
        assert_eq!(task.title, "Write report");
        // Source list untouched
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_whitespace_only_is_ignored() {
        let list = TaskList::new();
        let t = add(&list, "   ", Priority::Low);
        assert_eq!(t.outcome, Outcome::Ignored);
        assert!(!t.changed());
        assert!(t.list.is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_flag() {
        let list = add(&TaskList::new(), "Buy milk", Priority::Medium).list;
        let id = list.tasks()[0].id.clone();

        let once = list.apply(Action::ToggleComplete { id: id.clone() });
        assert!(once.list.tasks()[0].completed);

        let twice = once.list.apply(Action::ToggleComplete { id });
        assert!(!twice.list.tasks()[0].completed);
    }

    #[test]
    fn test_toggle_unknown_id_is_ignored() {
        let list = add(&TaskList::new(), "Buy milk", Priority::Medium).list;
        let t = list.apply(Action::ToggleComplete {
            id: "nosuchtask".to_string(),
        });
        assert_eq!(t.outcome, Outcome::Ignored);
        assert_eq!(t.list, list);
    }

    #[test]
    fn test_remove_deletes_exactly_that_id() {
        let a = add(&TaskList::new(), "First", Priority::High).list;
        let b = add(&a, "Second", Priority::Low).list;
        let first_id = b.tasks()[0].id.clone();
        let second = b.tasks()[1].clone();

        let t = b.apply(Action::Remove { id: first_id.clone() });
        assert_eq!(t.outcome, Outcome::Removed(first_id));
        assert_eq!(t.list.len(), 1);
        // The surviving task is unchanged field-for-field
        assert_eq!(t.list.tasks()[0], second);
    }

    #[test]
    fn test_remove_unknown_id_is_ignored() {
        let list = add(&TaskList::new(), "Only", Priority::Medium).list;
        let t = list.apply(Action::Remove {
            id: "missing".to_string(),
        });
        assert_eq!(t.outcome, Outcome::Ignored);
        assert_eq!(t.list, list);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut list = TaskList::new();
        for title in ["one", "two", "three"] {
            list = add(&list, title, Priority::Medium).list;
        }
        let titles: Vec<_> = list.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_end_to_end_scenario() {
        // start empty -> add("Write report", high) -> add("  ", low) ignored
        // -> add("Email team", low) -> 2 tasks in insertion order
        let mut list = TaskList::new();
        list = add(&list, "Write report", Priority::High).list;
        let ignored = add(&list, "  ", Priority::Low);
        assert_eq!(ignored.outcome, Outcome::Ignored);
        list = add(&list, "Email team", Priority::Low).list;

        let titles: Vec<_> = list.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Write report", "Email team"]);
    }
}
