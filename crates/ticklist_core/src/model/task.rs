//! Task domain model.
//!
//! # Responsibility
//! - Define the single to-do entry record and its construction rules.
//! - Provide the lifecycle helper for the completion flag.
//!
//! # Invariants
//! - `id` is stable for the task's lifetime and never reused by the store.
//! - `text` is trimmed, non-empty, and immutable after creation.
//! - `completed` is the only mutable field.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a task.
///
/// Kept as a type alias to make semantic intent explicit in signatures. The
/// id is the key that matches UI rows to entries across re-renders.
pub type TaskId = Uuid;

/// Validation failures for task construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Input text is empty after trimming.
    BlankText,
    /// Caller supplied the nil UUID as task id.
    NilId,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankText => write!(f, "task text is blank after trimming"),
            Self::NilId => write!(f, "task id must not be the nil UUID"),
        }
    }
}

impl Error for TaskValidationError {}

/// One to-do entry.
///
/// There is no edit operation: after creation only `completed` ever changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable ID, unique for as long as the task stays in its store.
    pub id: TaskId,
    /// Trimmed user-provided text.
    pub text: String,
    /// Completion flag, `false` at creation.
    pub completed: bool,
}

impl Task {
    /// Creates a task from raw user input with a freshly generated id.
    ///
    /// # Errors
    /// - `TaskValidationError::BlankText` when `text` trims to empty.
    pub fn new(text: &str) -> Result<Self, TaskValidationError> {
        Self::with_id(Uuid::new_v4(), text)
    }

    /// Creates a task with a caller-provided stable id.
    ///
    /// Used by tests and snapshot-driven callers where identity is fixed
    /// up front.
    ///
    /// # Errors
    /// - `TaskValidationError::BlankText` when `text` trims to empty.
    /// - `TaskValidationError::NilId` when `id` is the nil UUID.
    pub fn with_id(id: TaskId, text: &str) -> Result<Self, TaskValidationError> {
        if id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(TaskValidationError::BlankText);
        }
        Ok(Self {
            id,
            text: trimmed.to_string(),
            completed: false,
        })
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}
