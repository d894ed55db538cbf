//! Domain types for Dayplan
//!
//! This module contains all core domain types:
//! - Task: a to-do item with optional due date/time, priority, and checklist
//! - Subtask: a checklist line owned by its parent task
//! - Priority: low/medium/high, the secondary sort key
//! - TaskPatch/FieldEdit: typed partial updates applied through the store

pub mod patch;
pub mod task;

pub use patch::{FieldEdit, TaskPatch};
pub use task::{NewTask, Priority, Subtask, Task, compare_tasks};
