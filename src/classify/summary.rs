//! Daily summary counts and the status line derived from them.

use chrono::NaiveDate;

use crate::domain::Task;

/// Counts behind the "how is my day looking" status line.
///
/// Derived from the full unfiltered collection; the active priority
/// filter never changes these numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DailySummary {
    /// Pending tasks whose due date already passed
    pub overdue: usize,

    /// Tasks due today and still pending
    pub today_pending: usize,

    /// Tasks due today and already completed
    pub today_done: usize,
}

impl DailySummary {
    /// Compute the summary for `tasks` relative to `today`.
    pub fn for_tasks(tasks: &[Task], today: NaiveDate) -> Self {
        let mut summary = Self::default();

        for task in tasks {
            match task.due_date {
                Some(due) if due < today && !task.completed => summary.overdue += 1,
                Some(due) if due == today => {
                    if task.completed {
                        summary.today_done += 1;
                    } else {
                        summary.today_pending += 1;
                    }
                }
                _ => {}
            }
        }

        summary
    }

    /// All tasks due today, completed or not.
    pub fn today_total(&self) -> usize {
        self.today_pending + self.today_done
    }

    /// Render the human-readable status line.
    ///
    /// Leads with an overdue alert when there is one, appends the today
    /// summary when any today-tasks exist, and falls back to a quiet-day
    /// message when neither applies.
    pub fn status_line(&self) -> String {
        let mut parts = Vec::new();

        if self.overdue > 0 {
            let noun = if self.overdue == 1 { "overdue task" } else { "overdue tasks" };
            parts.push(format!("You have {} {}!", self.overdue, noun));
        }

        if self.today_total() > 0 {
            let pending_noun = if self.today_pending == 1 { "task" } else { "tasks" };
            parts.push(format!(
                "For today: {} {} pending, {} already done.",
                self.today_pending, pending_noun, self.today_done
            ));
        }

        if parts.is_empty() {
            return "No tasks due today.".to_string();
        }
        parts.join(" ")
    }
}

/// Format a date for display as DD/MM/YYYY.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
