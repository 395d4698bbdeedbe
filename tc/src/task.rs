//! Task record and priority tag

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Length of the generated task id token
const ID_LEN: usize = 9;

/// Priority tag for a task
///
/// Set at creation only, immutable thereafter. The display sort rank is
/// fixed: high before medium before low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Fixed sort rank: `high=0 < medium=1 < low=2`
    pub fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }

    /// Next priority in selector order (low -> medium -> high -> low)
    pub fn cycle(self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High => Self::Low,
        }
    }

    /// All priorities in selector order
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!("unknown priority: {}", other)),
        }
    }
}

/// A single to-do item
///
/// Serde field names match the persisted slot layout: a flat record with
/// `id`, `title`, `completed`, `priority`, and `createdAt` (RFC 3339).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque id, generated at creation. Uniqueness is best-effort.
    pub id: String,
    /// Trimmed, non-empty title
    pub title: String,
    /// Completion flag, the only field that changes after creation
    #[serde(default)]
    pub completed: bool,
    /// Priority tag, set at creation
    #[serde(default)]
    pub priority: Priority,
    /// Creation timestamp, used for the default sort order
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a new task with a fresh id and the current timestamp
    ///
    /// The title is trimmed here; callers must reject whitespace-only
    /// titles before constructing (see `TaskList::apply`).
    pub fn new(title: impl Into<String>, priority: Priority) -> Self {
        Self {
            id: generate_id(),
            title: title.into().trim().to_string(),
            completed: false,
            priority,
            created_at: Utc::now(),
        }
    }
}

/// Generate a short pseudo-random id token (9 lowercase base-36 chars)
///
/// Collision probability is non-zero but unhandled, matching the
/// best-effort uniqueness contract of the id field.
pub fn generate_id() -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::rng();
    (0..ID_LEN)
        .map(|_| {
            let idx = rng.random_range(0..ALPHABET.len());
            ALPHABET[idx] as char
        })
        .collect()
}
