//! JSON-file-backed persistence gateway.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::Task;
use crate::error::Result;
use crate::storage::PersistenceGateway;

/// Stores the task collection as a pretty-printed JSON array in a single
/// file. The parent directory is created on first save.
pub struct JsonFileGateway {
    path: PathBuf,
}

impl JsonFileGateway {
    /// Create a gateway backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PersistenceGateway for JsonFileGateway {
    fn save_all(&self, tasks: &[Task]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.path, json)?;
        log::debug!("Saved {} tasks to {}", tasks.len(), self.path.display());
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        match serde_json::from_str(&content) {
            Ok(tasks) => Ok(tasks),
            Err(e) => {
                // Corrupt saved data counts as "no saved data"
                log::warn!("Ignoring unreadable task data in {}: {}", self.path.display(), e);
                Ok(Vec::new())
            }
        }
    }
}
