//! Typed partial updates for tasks.
//!
//! Edits coming from the detail panel arrive as tagged field/value pairs
//! rather than untyped field access; the store applies them through
//! `TaskPatch`. A `None` patch field means "leave unchanged", while the
//! date/time fields nest a second `Option` so an edit can also clear them.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::task::{Subtask, Task};

/// One staged edit to a field of the open task.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Title(String),
    Description(String),
    DueDate(Option<NaiveDate>),
    DueTime(Option<NaiveTime>),
}

impl FieldEdit {
    /// Apply this edit to a task in place. Text fields are trimmed.
    pub fn apply_to(&self, task: &mut Task) {
        match self {
            FieldEdit::Title(title) => task.title = title.trim().to_string(),
            FieldEdit::Description(desc) => task.description = desc.trim().to_string(),
            FieldEdit::DueDate(date) => task.due_date = *date,
            FieldEdit::DueTime(time) => task.due_time = *time,
        }
    }
}

/// A partial task update. Carries the editable fields plus the subtask
/// vector, which edit-session reconciliation writes back wholesale.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<Option<NaiveDate>>,
    pub due_time: Option<Option<NaiveTime>>,
    pub subtasks: Option<Vec<Subtask>>,
}

impl TaskPatch {
    /// A full patch mirroring every editable field of `task`, used to
    /// reconcile an edit-session draft back into the store.
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: Some(task.title.clone()),
            description: Some(task.description.clone()),
            due_date: Some(task.due_date),
            due_time: Some(task.due_time),
            subtasks: Some(task.subtasks.clone()),
        }
    }

    /// True when the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.due_date.is_none()
            && self.due_time.is_none()
            && self.subtasks.is_none()
    }

    /// Apply the populated fields to `task` in place.
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.trim().to_string();
        }
        if let Some(description) = &self.description {
            task.description = description.trim().to_string();
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(due_time) = self.due_time {
            task.due_time = due_time;
        }
        if let Some(subtasks) = &self.subtasks {
            task.subtasks = subtasks.clone();
        }
    }
}
