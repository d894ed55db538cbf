//! Error types for Dayplan
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in Dayplan
#[derive(Debug, Error)]
pub enum DayplanError {
    /// A required text field was empty after trimming
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Subtask index out of range for the open task
    #[error("No subtask at index {0}")]
    SubtaskIndex(usize),

    /// Configuration load/parse error
    #[error("Config error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Dayplan operations
pub type Result<T> = std::result::Result<T, DayplanError>;
