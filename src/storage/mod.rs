//! Persistence layer for the task collection.
//!
//! The store talks to a `PersistenceGateway`, which always moves the full
//! collection: every mutation ends in a complete save, and startup does a
//! complete load. The shipped implementation keeps a JSON array on disk.

mod json_file;

pub use json_file::JsonFileGateway;

use crate::domain::Task;
use crate::error::Result;

/// Durable storage for the whole task collection.
pub trait PersistenceGateway {
    /// Persist the full collection, replacing any prior data.
    fn save_all(&self, tasks: &[Task]) -> Result<()>;

    /// Load the full collection. Absent or unreadable prior data yields
    /// an empty collection, never an error.
    fn load_all(&self) -> Result<Vec<Task>>;
}
