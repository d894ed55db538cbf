//! TaskStore implementation: in-memory collection plus full-save persistence.

use crate::domain::{NewTask, Task, TaskPatch, compare_tasks};
use crate::error::{DayplanError, Result};
use crate::id;
use crate::storage::PersistenceGateway;

/// Owns the authoritative task collection.
///
/// Operations referencing a missing id are silent no-ops, matching the
/// forgiving semantics of the surrounding UI: a stale button click must
/// not surface an error. Validation failures abort before any mutation
/// or save.
pub struct TaskStore {
    tasks: Vec<Task>,

    /// Highest id handed out or loaded, the watermark for `id::next_id`
    last_id: u64,

    gateway: Box<dyn PersistenceGateway>,
}

impl TaskStore {
    /// Open a store, loading whatever collection the gateway has.
    pub fn open(gateway: Box<dyn PersistenceGateway>) -> Result<Self> {
        let tasks = gateway.load_all()?;
        let last_id = tasks.iter().map(|t| t.id).max().unwrap_or(0);
        log::debug!("Loaded {} tasks", tasks.len());
        Ok(Self {
            tasks,
            last_id,
            gateway,
        })
    }

    /// Create a task from the add-form fields.
    ///
    /// Fails with a validation error when the title trims to empty;
    /// nothing is mutated or saved in that case. Returns a clone of the
    /// stored task.
    pub fn create(&mut self, req: NewTask) -> Result<Task> {
        if req.title.trim().is_empty() {
            return Err(DayplanError::Validation("task title must not be empty".to_string()));
        }

        let id = id::next_id(self.last_id);
        self.last_id = id;

        let task = Task::new(id, req);
        self.tasks.push(task.clone());
        self.persist()?;
        Ok(task)
    }

    /// Flip the completion flag of the task with the given id.
    pub fn toggle_completed(&mut self, id: u64) -> Result<()> {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.completed = !task.completed;
        }
        self.persist()
    }

    /// Remove the task with the given id.
    pub fn delete(&mut self, id: u64) -> Result<()> {
        self.tasks.retain(|t| t.id != id);
        self.persist()
    }

    /// Apply a typed partial update to the task with the given id.
    pub fn update(&mut self, id: u64, patch: TaskPatch) -> Result<()> {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            patch.apply_to(task);
        }
        self.persist()
    }

    /// The live collection, in the order of the last persist.
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a task by id.
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Sort and save without another mutation. Used at teardown.
    pub fn flush(&mut self) -> Result<()> {
        self.persist()
    }

    /// Sort the collection into comparator order and save it whole.
    /// Stable sort keeps prior relative order among full ties.
    fn persist(&mut self) -> Result<()> {
        self.tasks.sort_by(compare_tasks);
        self.gateway.save_all(&self.tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FieldEdit, Priority, Subtask};
    use crate::storage::JsonFileGateway;
    use chrono::{NaiveDate, NaiveTime};
    use std::cell::Cell;
    use std::rc::Rc;
    use tempfile::TempDir;

    /// Gateway that counts saves, for asserting persist behavior.
    struct CountingGateway {
        saves: Rc<Cell<usize>>,
        seeded: Vec<Task>,
    }

    impl PersistenceGateway for CountingGateway {
        fn save_all(&self, _tasks: &[Task]) -> Result<()> {
            self.saves.set(self.saves.get() + 1);
            Ok(())
        }

        fn load_all(&self) -> Result<Vec<Task>> {
            Ok(self.seeded.clone())
        }
    }

    fn counting_store() -> (TaskStore, Rc<Cell<usize>>) {
        let saves = Rc::new(Cell::new(0));
        let gateway = CountingGateway {
            saves: Rc::clone(&saves),
            seeded: Vec::new(),
        };
        (TaskStore::open(Box::new(gateway)).unwrap(), saves)
    }

    fn file_store(temp_dir: &TempDir) -> TaskStore {
        let gateway = JsonFileGateway::new(temp_dir.path().join("tasks.json"));
        TaskStore::open(Box::new(gateway)).unwrap()
    }

    fn new_task(title: &str) -> NewTask {
        NewTask {
            title: title.to_string(),
            ..Default::default()
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_create_assigns_unique_ids() {
        let (mut store, _) = counting_store();

        let mut ids = std::collections::HashSet::new();
        for i in 0..50 {
            let task = store.create(new_task(&format!("task {}", i))).unwrap();
            assert!(ids.insert(task.id), "duplicate id {}", task.id);
        }
        assert_eq!(store.len(), 50);
    }

    #[test]
    fn test_create_empty_title_rejected_without_persist() {
        let (mut store, saves) = counting_store();

        let result = store.create(new_task("   "));
        assert!(matches!(result, Err(DayplanError::Validation(_))));
        assert!(store.is_empty());
        assert_eq!(saves.get(), 0);
    }

    #[test]
    fn test_create_persists_once() {
        let (mut store, saves) = counting_store();
        store.create(new_task("laundry")).unwrap();
        assert_eq!(saves.get(), 1);
    }

    #[test]
    fn test_toggle_completed_flips_flag() {
        let (mut store, _) = counting_store();
        let task = store.create(new_task("laundry")).unwrap();

        store.toggle_completed(task.id).unwrap();
        assert!(store.get(task.id).unwrap().completed);

        store.toggle_completed(task.id).unwrap();
        assert!(!store.get(task.id).unwrap().completed);
    }

    #[test]
    fn test_toggle_completed_missing_id_is_noop() {
        let (mut store, _) = counting_store();
        store.create(new_task("laundry")).unwrap();

        store.toggle_completed(999).unwrap();
        assert_eq!(store.len(), 1);
        assert!(!store.list()[0].completed);
    }

    #[test]
    fn test_delete_removes_task() {
        let (mut store, _) = counting_store();
        let task = store.create(new_task("laundry")).unwrap();
        let keep = store.create(new_task("dishes")).unwrap();

        store.delete(task.id).unwrap();
        assert!(store.get(task.id).is_none());
        assert!(store.get(keep.id).is_some());
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let (mut store, _) = counting_store();
        store.create(new_task("laundry")).unwrap();
        store.delete(999).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_applies_patch() {
        let (mut store, _) = counting_store();
        let task = store.create(new_task("laundry")).unwrap();

        let mut draft = store.get(task.id).unwrap().clone();
        FieldEdit::Title("fold laundry".to_string()).apply_to(&mut draft);
        draft.subtasks.push(Subtask::new("whites first"));

        store.update(task.id, TaskPatch::from_task(&draft)).unwrap();

        let updated = store.get(task.id).unwrap();
        assert_eq!(updated.title, "fold laundry");
        assert_eq!(updated.subtasks.len(), 1);
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let (mut store, _) = counting_store();
        let task = store.create(new_task("laundry")).unwrap();

        store
            .update(999, TaskPatch {
                title: Some("ghost".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(store.get(task.id).unwrap().title, "laundry");
    }

    #[test]
    fn test_persisted_order_is_comparator_order() {
        let (mut store, _) = counting_store();

        store
            .create(NewTask {
                title: "undated low".to_string(),
                ..Default::default()
            })
            .unwrap();
        store
            .create(NewTask {
                title: "later".to_string(),
                due_date: Some(date(2026, 6, 1)),
                ..Default::default()
            })
            .unwrap();
        store
            .create(NewTask {
                title: "soon".to_string(),
                due_date: Some(date(2026, 5, 1)),
                due_time: NaiveTime::from_hms_opt(8, 0, 0),
                ..Default::default()
            })
            .unwrap();
        store
            .create(NewTask {
                title: "undated high".to_string(),
                priority: Priority::High,
                ..Default::default()
            })
            .unwrap();

        let titles: Vec<&str> = store.list().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["soon", "later", "undated high", "undated low"]);
    }

    #[test]
    fn test_reopen_restores_collection_and_id_watermark() {
        let temp_dir = TempDir::new().unwrap();
        let first_id;

        {
            let mut store = file_store(&temp_dir);
            first_id = store.create(new_task("persisted")).unwrap().id;
        }

        {
            let mut store = file_store(&temp_dir);
            assert_eq!(store.len(), 1);
            assert_eq!(store.list()[0].title, "persisted");

            // New ids keep climbing past what was loaded
            let second = store.create(new_task("another")).unwrap();
            assert!(second.id > first_id);
        }
    }

    #[test]
    fn test_flush_writes_current_collection() {
        let (mut store, saves) = counting_store();
        store.create(new_task("laundry")).unwrap();
        let before = saves.get();
        store.flush().unwrap();
        assert_eq!(saves.get(), before + 1);
    }
}
