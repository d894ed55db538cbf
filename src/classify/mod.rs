//! Classification of the task collection into date buckets.
//!
//! The store keeps tasks in comparator order; this module turns that flat
//! list into the five sections a view renders: overdue, today, tomorrow,
//! future, and completed. Bucketing is a pure function of the task and the
//! caller-supplied current date, so views and tests stay deterministic.

mod summary;

pub use summary::{DailySummary, format_date};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Priority, Task};

/// The active priority filter.
///
/// Recognized input values are `all | low | medium | high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityFilter {
    All,
    Only(Priority),
}

impl PriorityFilter {
    /// Parse a filter selection string.
    pub fn parse(s: &str) -> Option<Self> {
        if s == "all" {
            return Some(PriorityFilter::All);
        }
        Priority::parse(s).map(PriorityFilter::Only)
    }

    /// Whether a task survives this filter.
    ///
    /// Completed tasks always pass: they belong in the completed section
    /// no matter which priority is selected.
    pub fn admits(&self, task: &Task) -> bool {
        if task.completed {
            return true;
        }
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Only(priority) => task.priority == *priority,
        }
    }
}

impl Default for PriorityFilter {
    fn default() -> Self {
        PriorityFilter::All
    }
}

/// The section a task lands in for a given current date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Overdue,
    Today,
    Tomorrow,
    Future,
    Completed,
}

impl Bucket {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Overdue => "overdue",
            Bucket::Today => "today",
            Bucket::Tomorrow => "tomorrow",
            Bucket::Future => "future",
            Bucket::Completed => "completed",
        }
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify a single task relative to `today`.
///
/// Completion wins over any date; an undated pending task counts as
/// future work.
pub fn bucket_for(task: &Task, today: NaiveDate) -> Bucket {
    if task.completed {
        return Bucket::Completed;
    }
    let Some(due) = task.due_date else {
        return Bucket::Future;
    };
    if due < today {
        Bucket::Overdue
    } else if due == today {
        Bucket::Today
    } else if Some(due) == today.succ_opt() {
        Bucket::Tomorrow
    } else {
        Bucket::Future
    }
}

/// The five classified sections, each preserving the input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Buckets {
    pub overdue: Vec<Task>,
    pub today: Vec<Task>,
    pub tomorrow: Vec<Task>,
    pub future: Vec<Task>,
    pub completed: Vec<Task>,
}

impl Buckets {
    /// Number of tasks in the completed section.
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Total tasks across all five sections.
    pub fn total(&self) -> usize {
        self.overdue.len() + self.today.len() + self.tomorrow.len() + self.future.len() + self.completed.len()
    }
}

/// Split `tasks` into the five sections, applying the priority filter.
///
/// The input is expected to already be in comparator order (the store
/// sorts before every persist); relative order within each bucket is
/// preserved, never re-sorted here.
pub fn classify(tasks: &[Task], filter: &PriorityFilter, today: NaiveDate) -> Buckets {
    let mut buckets = Buckets::default();

    for task in tasks {
        if !filter.admits(task) {
            continue;
        }
        let bucket = match bucket_for(task, today) {
            Bucket::Overdue => &mut buckets.overdue,
            Bucket::Today => &mut buckets.today,
            Bucket::Tomorrow => &mut buckets.tomorrow,
            Bucket::Future => &mut buckets.future,
            Bucket::Completed => &mut buckets.completed,
        };
        bucket.push(task.clone());
    }

    buckets
}
