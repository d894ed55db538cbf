//! Application context: the one object owning store, session, and filter.
//!
//! Replaces ambient global state with an explicit context created once
//! per application lifetime. `init` loads the saved collection and draws
//! the first frame; every user intent runs to completion, persists, and
//! hands the renderer a fresh snapshot; `shutdown` reconciles any open
//! session and writes a final save.

use chrono::{Local, NaiveDate};

use crate::classify::{Buckets, DailySummary, PriorityFilter, classify};
use crate::domain::{FieldEdit, NewTask, Task};
use crate::error::Result;
use crate::session::EditSession;
use crate::storage::PersistenceGateway;
use crate::store::TaskStore;

/// Everything a view needs to draw one full frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot {
    /// The five classified sections, filter already applied
    pub buckets: Buckets,

    /// Size of the completed section
    pub completed_count: usize,

    /// Daily status line, computed from the unfiltered collection
    pub status_line: String,
}

/// Receives a full snapshot after every state change. No diffing
/// contract: implementations redraw from scratch.
pub trait Renderer {
    fn render(&mut self, view: &ViewSnapshot);
}

/// A renderer that draws nothing. Useful headless and in tests.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _view: &ViewSnapshot) {}
}

/// The application context.
pub struct TaskApp {
    store: TaskStore,
    session: EditSession,
    filter: PriorityFilter,
    renderer: Box<dyn Renderer>,
}

impl TaskApp {
    /// Load the saved collection and render the first frame.
    pub fn init(gateway: Box<dyn PersistenceGateway>, renderer: Box<dyn Renderer>) -> Result<Self> {
        let store = TaskStore::open(gateway)?;
        let mut app = Self {
            store,
            session: EditSession::new(),
            filter: PriorityFilter::All,
            renderer,
        };
        app.refresh();
        Ok(app)
    }

    /// Add a new task from the form fields.
    pub fn create(&mut self, req: NewTask) -> Result<Task> {
        let task = self.store.create(req)?;
        self.refresh();
        Ok(task)
    }

    /// Flip a task's completion state.
    pub fn toggle_completed(&mut self, id: u64) -> Result<()> {
        self.store.toggle_completed(id)?;
        self.refresh();
        Ok(())
    }

    /// Remove a task. Deleting the task currently open for editing is
    /// allowed; the session's eventual close reconciles into nothing.
    pub fn delete(&mut self, id: u64) -> Result<()> {
        self.store.delete(id)?;
        self.refresh();
        Ok(())
    }

    /// Open a task's detail panel. Unknown ids are ignored.
    pub fn open(&mut self, id: u64) {
        if let Some(task) = self.store.get(id) {
            self.session.open(task);
        }
    }

    /// Close the detail panel, reconciling staged edits.
    pub fn close(&mut self) -> Result<()> {
        self.session.close(&mut self.store)?;
        self.refresh();
        Ok(())
    }

    /// Stage a field edit on the open task. Store untouched until close
    /// or the next subtask commit.
    pub fn stage_field_edit(&mut self, edit: FieldEdit) {
        self.session.stage_field_edit(edit);
    }

    /// Add a checklist line to the open task.
    pub fn add_subtask(&mut self, text: &str) -> Result<()> {
        self.session.add_subtask(&mut self.store, text)?;
        self.refresh();
        Ok(())
    }

    /// Toggle the checklist line at `index` on the open task.
    pub fn toggle_subtask(&mut self, index: usize) -> Result<()> {
        self.session.toggle_subtask(&mut self.store, index)?;
        self.refresh();
        Ok(())
    }

    /// Change the active priority filter. View state only, no persist.
    pub fn set_filter(&mut self, filter: PriorityFilter) {
        self.filter = filter;
        self.refresh();
    }

    pub fn filter(&self) -> PriorityFilter {
        self.filter
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    /// Build a snapshot for the local calendar day.
    pub fn snapshot(&self) -> ViewSnapshot {
        self.snapshot_for(Local::now().date_naive())
    }

    /// Build a snapshot for an explicit date. Deterministic, for tests
    /// and for views that pin "today" across a midnight rollover.
    pub fn snapshot_for(&self, today: NaiveDate) -> ViewSnapshot {
        let buckets = classify(self.store.list(), &self.filter, today);
        let summary = DailySummary::for_tasks(self.store.list(), today);
        ViewSnapshot {
            completed_count: buckets.completed_count(),
            status_line: summary.status_line(),
            buckets,
        }
    }

    /// Reconcile any open session and write a final save.
    pub fn shutdown(mut self) -> Result<()> {
        self.session.close(&mut self.store)?;
        self.store.flush()
    }

    fn refresh(&mut self) {
        let view = self.snapshot();
        self.renderer.render(&view);
    }
}
