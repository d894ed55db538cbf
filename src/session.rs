//! Edit session for the single currently-open task.
//!
//! The session holds a *copy* of the task being edited (plus its id)
//! rather than a live reference into the store, so the store keeps sole
//! ownership of the collection. Field edits stage into the copy and only
//! reach the store on reconciliation; subtask operations reconcile
//! immediately, matching the detail panel's behavior.

use crate::domain::{FieldEdit, Subtask, Task, TaskPatch};
use crate::error::{DayplanError, Result};
use crate::store::TaskStore;

/// At most one task open for editing.
#[derive(Debug, Default)]
pub struct EditSession {
    draft: Option<Task>,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    /// Id of the open task, if any.
    pub fn open_task_id(&self) -> Option<u64> {
        self.draft.as_ref().map(|t| t.id)
    }

    /// The working copy, for panel display.
    pub fn draft(&self) -> Option<&Task> {
        self.draft.as_ref()
    }

    /// Open a task for editing, staging its current field values.
    ///
    /// Opening while another task is open replaces the draft; that
    /// draft's staged-but-unreconciled field edits are discarded, the
    /// same way switching panels drops unsaved inputs.
    pub fn open(&mut self, task: &Task) {
        if let Some(prev) = &self.draft {
            if prev.id != task.id {
                log::debug!("Replacing open task {} with {}", prev.id, task.id);
            }
        }
        self.draft = Some(task.clone());
    }

    /// Stage a field edit into the draft. No-op while closed; the store
    /// is untouched until reconciliation.
    pub fn stage_field_edit(&mut self, edit: FieldEdit) {
        if let Some(draft) = &mut self.draft {
            edit.apply_to(draft);
        }
    }

    /// Append a checklist line to the open task and commit immediately.
    ///
    /// Fails with a validation error when the text trims to empty; the
    /// draft and the store are left untouched in that case.
    pub fn add_subtask(&mut self, store: &mut TaskStore, text: &str) -> Result<()> {
        let Some(draft) = &mut self.draft else {
            return Ok(());
        };

        let text = text.trim();
        if text.is_empty() {
            return Err(DayplanError::Validation("subtask text must not be empty".to_string()));
        }

        draft.subtasks.push(Subtask::new(text));
        Self::reconcile(draft, store)
    }

    /// Flip the checklist line at `index` and commit immediately.
    pub fn toggle_subtask(&mut self, store: &mut TaskStore, index: usize) -> Result<()> {
        let Some(draft) = &mut self.draft else {
            return Ok(());
        };

        let Some(subtask) = draft.subtasks.get_mut(index) else {
            return Err(DayplanError::SubtaskIndex(index));
        };
        subtask.completed = !subtask.completed;
        Self::reconcile(draft, store)
    }

    /// Reconcile staged edits into the store and close the session.
    /// Safe to call when already closed.
    pub fn close(&mut self, store: &mut TaskStore) -> Result<()> {
        if let Some(draft) = self.draft.take() {
            Self::reconcile(&draft, store)?;
        }
        Ok(())
    }

    /// Write the draft's current state (staged fields + subtasks) back
    /// through the store. A draft whose task was deleted meanwhile is a
    /// silent no-op at the store.
    fn reconcile(draft: &Task, store: &mut TaskStore) -> Result<()> {
        store.update(draft.id, TaskPatch::from_task(draft))
    }
}
