//! Task and subtask records, and the total order used for persistence.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A single to-do item.
///
/// Stored as one element of the persisted JSON array. Fields that older
/// payloads may lack are defaulted on load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Timestamp-derived id, unique within the store's lifetime
    pub id: u64,

    /// Non-empty after trimming (enforced at creation)
    pub title: String,

    /// Free-form details, empty when unset
    #[serde(default)]
    pub description: String,

    /// Calendar date the task is due, no time zone attached
    #[serde(default)]
    pub due_date: Option<NaiveDate>,

    /// Time of day the task is due, with or without a date
    #[serde(default)]
    pub due_time: Option<NaiveTime>,

    #[serde(default)]
    pub priority: Priority,

    /// Checklist lines in insertion order
    #[serde(default)]
    pub subtasks: Vec<Subtask>,

    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Build a stored task from a creation request. Title and description
    /// are trimmed; the title must already be known non-empty.
    pub fn new(id: u64, req: NewTask) -> Self {
        Self {
            id,
            title: req.title.trim().to_string(),
            description: req.description.trim().to_string(),
            due_date: req.due_date,
            due_time: req.due_time,
            priority: req.priority,
            subtasks: Vec::new(),
            completed: false,
        }
    }

    /// The task's effective instant for ordering.
    ///
    /// Date + time combine into one instant; a date alone counts as the
    /// start of that day; a time without a date forms no instant at all.
    pub fn due_instant(&self) -> Option<NaiveDateTime> {
        let date = self.due_date?;
        match self.due_time {
            Some(time) => Some(date.and_time(time)),
            None => Some(date.and_time(NaiveTime::MIN)),
        }
    }
}

/// Fields collected when creating a task (the "add" form).
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub due_time: Option<NaiveTime>,
    pub priority: Priority,
}

/// A checklist line owned by its parent task. No independent identity;
/// position in the parent's vector is its only address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subtask {
    pub text: String,

    #[serde(default)]
    pub completed: bool,
}

impl Subtask {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }
}

/// Task priority, the tie-break sort key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Numeric rank for descending-priority comparisons.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }

    /// Parse one of `low | medium | high`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Low
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Total order for the persisted/default task list.
///
/// Earlier due instant first; a task with an instant sorts before one
/// without; remaining ties fall back to priority descending. Full ties
/// are left to the caller's stable sort.
pub fn compare_tasks(a: &Task, b: &Task) -> Ordering {
    match (a.due_instant(), b.due_instant()) {
        (Some(ia), Some(ib)) => ia
            .cmp(&ib)
            .then_with(|| b.priority.rank().cmp(&a.priority.rank())),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.priority.rank().cmp(&a.priority.rank()),
    }
}
