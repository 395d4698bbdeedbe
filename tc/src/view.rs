//! View derivation - the filter+sort display pipeline
//!
//! Pure functions recomputed on every render from current state, never
//! persisted. Filter is applied before sort:
//! `display = sort(filter(tasks, query), key)`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::task::Task;

/// Display sort criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Descending by creation time (newest first)
    #[default]
    Date,
    /// Ascending case-insensitive lexicographic by title
    Title,
    /// Ascending by priority rank (high before medium before low)
    Priority,
    /// Incomplete tasks before completed ones
    Status,
}

impl SortKey {
    /// All keys in selector order
    pub const ALL: [Self; 4] = [Self::Date, Self::Title, Self::Priority, Self::Status];

    /// Next key in selector order
    pub fn cycle(self) -> Self {
        match self {
            Self::Date => Self::Title,
            Self::Title => Self::Priority,
            Self::Priority => Self::Status,
            Self::Status => Self::Date,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Date => "date",
            Self::Title => "title",
            Self::Priority => "priority",
            Self::Status => "status",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "date" => Ok(Self::Date),
            "title" => Ok(Self::Title),
            "priority" => Ok(Self::Priority),
            "status" => Ok(Self::Status),
            other => Err(format!("unknown sort key: {}", other)),
        }
    }
}

/// Filter tasks by a case-insensitive substring match on the title
///
/// An empty query matches all tasks; order is preserved.
pub fn filter<'a>(tasks: &'a [Task], query: &str) -> Vec<&'a Task> {
    trace!(%query, count = tasks.len(), "filter: called");
    if query.is_empty() {
        return tasks.iter().collect();
    }
    let needle = query.to_lowercase();
    tasks
        .iter()
        .filter(|t| t.title.to_lowercase().contains(&needle))
        .collect()
}

/// Sort a filtered view by the given key
///
/// Stable, so ties retain filtered-list relative order.
pub fn sort<'a>(mut tasks: Vec<&'a Task>, key: SortKey) -> Vec<&'a Task> {
    trace!(%key, count = tasks.len(), "sort: called");
    tasks.sort_by(|a, b| compare(a, b, key));
    tasks
}

fn compare(a: &Task, b: &Task, key: SortKey) -> Ordering {
    match key {
        SortKey::Date => b.created_at.cmp(&a.created_at),
        SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortKey::Priority => a.priority.rank().cmp(&b.priority.rank()),
        SortKey::Status => a.completed.cmp(&b.completed),
    }
}

/// The full display pipeline: filter, then sort
pub fn derive<'a>(tasks: &'a [Task], query: &str, key: SortKey) -> Vec<&'a Task> {
    sort(filter(tasks, query), key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Priority;
    use chrono::{Duration, Utc};

    fn task(title: &str, priority: Priority, completed: bool, age_secs: i64) -> Task {
        let mut t = Task::new(title, priority);
        t.completed = completed;
        t.created_at = Utc::now() - Duration::seconds(age_secs);
        t
    }

    fn titles<'a>(view: &[&'a Task]) -> Vec<&'a str> {
        view.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn test_empty_query_matches_all_in_order() {
        let tasks = vec![
            task("Buy milk", Priority::Low, false, 0),
            task("Call Bob", Priority::High, true, 10),
        ];
        let view = filter(&tasks, "");
        assert_eq!(titles(&view), vec!["Buy milk", "Call Bob"]);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let tasks = vec![
            task("Buy milk", Priority::Low, false, 0),
            task("Call Bob", Priority::High, false, 0),
        ];
        let view = filter(&tasks, "bo");
        assert_eq!(titles(&view), vec!["Call Bob"]);

        let view = filter(&tasks, "MILK");
        assert_eq!(titles(&view), vec!["Buy milk"]);
    }

    #[test]
    fn test_filter_no_match_is_empty() {
        let tasks = vec![task("Buy milk", Priority::Low, false, 0)];
        assert!(filter(&tasks, "report").is_empty());
    }

    #[test]
    fn test_sort_by_date_newest_first() {
        let tasks = vec![
            task("older", Priority::Medium, false, 100),
            task("newest", Priority::Medium, false, 0),
            task("oldest", Priority::Medium, false, 200),
        ];
        let view = sort(tasks.iter().collect(), SortKey::Date);
        assert_eq!(titles(&view), vec!["newest", "older", "oldest"]);
    }

    #[test]
    fn test_sort_by_title_lexicographic() {
        let tasks = vec![
            task("call Bob", Priority::Medium, false, 0),
            task("Buy milk", Priority::Medium, false, 0),
            task("answer email", Priority::Medium, false, 0),
        ];
        let view = sort(tasks.iter().collect(), SortKey::Title);
        assert_eq!(titles(&view), vec!["answer email", "Buy milk", "call Bob"]);
    }

    #[test]
    fn test_sort_by_priority_rank() {
        let tasks = vec![
            task("low", Priority::Low, false, 0),
            task("high", Priority::High, false, 0),
            task("medium", Priority::Medium, false, 0),
        ];
        let view = sort(tasks.iter().collect(), SortKey::Priority);
        assert_eq!(titles(&view), vec!["high", "medium", "low"]);
    }

    #[test]
    fn test_sort_by_status_incomplete_first() {
        let tasks = vec![
            task("done-1", Priority::Medium, true, 0),
            task("open-1", Priority::Medium, false, 0),
            task("done-2", Priority::Medium, true, 0),
            task("open-2", Priority::Medium, false, 0),
        ];
        let view = sort(tasks.iter().collect(), SortKey::Status);
        let split = view.iter().position(|t| t.completed).unwrap();
        assert!(view[..split].iter().all(|t| !t.completed));
        assert!(view[split..].iter().all(|t| t.completed));
    }

    #[test]
    fn test_derive_filters_before_sorting() {
        let tasks = vec![
            task("Write report", Priority::High, false, 100),
            task("Email team", Priority::Low, false, 0),
            task("Water plants", Priority::Medium, false, 50),
        ];
        // Only the titles containing "team" survive the filter; the sort
        // then applies to that subset alone.
        let view = derive(&tasks, "team", SortKey::Priority);
        assert_eq!(titles(&view), vec!["Email team"]);
    }

    #[test]
    fn test_end_to_end_view_scenario() {
        let tasks = vec![
            task("Write report", Priority::High, false, 10),
            task("Email team", Priority::Low, false, 0),
        ];
        let by_priority = derive(&tasks, "", SortKey::Priority);
        assert_eq!(titles(&by_priority), vec!["Write report", "Email team"]);

        let searched = derive(&tasks, "email", SortKey::Date);
        assert_eq!(titles(&searched), vec!["Email team"]);
    }

    #[test]
    fn test_sort_key_cycle_and_parse() {
        assert_eq!(SortKey::Date.cycle(), SortKey::Title);
        assert_eq!(SortKey::Status.cycle(), SortKey::Date);
        for key in SortKey::ALL {
            assert_eq!(key.to_string().parse::<SortKey>().unwrap(), key);
        }
        assert!("created".parse::<SortKey>().is_err());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_tasks() -> impl Strategy<Value = Vec<Task>> {
            prop::collection::vec(
                ("[a-zA-Z ]{1,12}", 0u8..3, any::<bool>(), 0i64..1000).prop_map(|(title, p, done, age)| {
                    let priority = match p {
                        0 => Priority::Low,
                        1 => Priority::Medium,
                        _ => Priority::High,
                    };
                    task(&title, priority, done, age)
                }),
                0..16,
            )
        }

        proptest! {
            #[test]
            fn filter_returns_a_subsequence(tasks in arb_tasks(), query in "[a-z]{0,3}") {
                let view = filter(&tasks, &query);
                let ids: Vec<_> = view.iter().map(|t| t.id.clone()).collect();
                let mut remaining = ids.iter();
                let mut cursor = remaining.next();
                for t in &tasks {
                    if let Some(id) = cursor
                        && *id == t.id {
                            cursor = remaining.next();
                        }
                }
                prop_assert!(cursor.is_none(), "filtered view must preserve input order");
            }

            #[test]
            fn priority_sort_is_ordered_by_rank(tasks in arb_tasks()) {
                let view = sort(tasks.iter().collect(), SortKey::Priority);
                for pair in view.windows(2) {
                    prop_assert!(pair[0].priority.rank() <= pair[1].priority.rank());
                }
            }

            #[test]
            fn sorting_never_changes_membership(tasks in arb_tasks(), key in 0u8..4) {
                let key = SortKey::ALL[key as usize];
                let view = sort(tasks.iter().collect(), key);
                prop_assert_eq!(view.len(), tasks.len());
            }
        }
    }
}
