//! Screen render projection.
//!
//! # Responsibility
//! - Render the current store state into one list of visual rows plus the
//!   input control state.
//! - Own no task data: every snapshot is a pure function of the store.
//!
//! # Invariants
//! - Rows appear in store order, one per task.
//! - `can_submit` is `false` exactly when the draft trims to empty.

use crate::model::task::{Task, TaskId};
use crate::store::task_store::TaskStore;
use serde::Serialize;

/// One visual row of the task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRow {
    /// Stable row key, matching the task id across re-renders.
    pub id: TaskId,
    /// Task text to display.
    pub text: String,
    /// Drives the completion indicator and struck-through presentation.
    pub completed: bool,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            text: task.text.clone(),
            completed: task.completed,
        }
    }
}

/// Full screen state for one render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenSnapshot {
    /// Task rows in insertion order.
    pub rows: Vec<TaskRow>,
    /// Current draft input text.
    pub draft: String,
    /// Submit control enabled state.
    pub can_submit: bool,
    /// Store revision this snapshot was rendered from.
    pub revision: u64,
}

/// Renders the store into a display snapshot.
///
/// Pure read: calling this any number of times between mutations yields
/// equal snapshots.
pub fn render_screen(store: &TaskStore) -> ScreenSnapshot {
    ScreenSnapshot {
        rows: store.tasks().iter().map(TaskRow::from).collect(),
        draft: store.draft().to_string(),
        can_submit: !store.draft().trim().is_empty(),
        revision: store.revision(),
    }
}

/// Plain-text presentation of one row.
///
/// Completed rows get an `[x]` marker and struck-through text (combining
/// long stroke overlay), open rows an `[ ]` marker.
pub fn format_row(row: &TaskRow) -> String {
    if !row.completed {
        return format!("[ ] {}", row.text);
    }
    let mut struck = String::with_capacity(row.text.len() * 3);
    for ch in row.text.chars() {
        struck.push(ch);
        struck.push('\u{0336}');
    }
    format!("[x] {struck}")
}
