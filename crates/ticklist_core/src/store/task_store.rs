//! Ordered in-memory task store.
//!
//! # Responsibility
//! - Hold the ordered task sequence and the not-yet-submitted draft text.
//! - Apply add/toggle/delete mutations and notify change listeners.
//!
//! # Invariants
//! - Task ids are unique for as long as the task remains in the store.
//! - Insertion order is preserved; new tasks append at the tail.
//! - Blank input never produces a task; unknown ids are silent no-ops.
//! - `revision` increases exactly once per applied mutation.

use crate::model::task::{Task, TaskId};
use log::debug;

/// Callback invoked after each applied mutation.
///
/// Listeners receive the change record only; they re-read store state after
/// the mutating call returns (the store is mutably borrowed while notifying).
pub type ChangeListener = Box<dyn FnMut(&StoreChange)>;

/// Mutation kind carried in a change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    /// A task was appended at the tail.
    Added(TaskId),
    /// A task's completion flag was flipped.
    Toggled(TaskId),
    /// A task was removed.
    Deleted(TaskId),
}

/// Change notification delivered to subscribed views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreChange {
    /// Mutation that triggered this notification.
    pub op: StoreOp,
    /// Store revision after the mutation was applied.
    pub revision: u64,
}

/// Sole owner of task state for one screen.
///
/// Created when the screen is shown and dropped with all contents when the
/// screen is torn down. Single-threaded by design: one gesture is processed
/// at a time and no operation suspends mid-mutation.
#[derive(Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    draft: String,
    revision: u64,
    listeners: Vec<ChangeListener>,
}

impl TaskStore {
    /// Creates an empty store with an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new task built from `text`.
    ///
    /// Trims the input first; blank input is silently ignored (client-side
    /// form-validation policy, not an error path). Returns the created id
    /// when a task was inserted.
    pub fn add_task(&mut self, text: &str) -> Option<TaskId> {
        let task = match Task::new(text) {
            Ok(task) => task,
            Err(_) => {
                debug!("event=task_add module=store status=ignored reason=blank_text");
                return None;
            }
        };
        debug_assert!(self.tasks.iter().all(|existing| existing.id != task.id));
        let id = task.id;
        self.tasks.push(task);
        debug!(
            "event=task_add module=store status=ok id={id} count={}",
            self.tasks.len()
        );
        self.applied(StoreOp::Added(id));
        Some(id)
    }

    /// Flips the completion flag of the task matching `id`.
    ///
    /// Unknown ids leave the store untouched. No other task is affected.
    /// Returns whether a task was toggled.
    pub fn toggle_complete(&mut self, id: TaskId) -> bool {
        let completed = match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.toggle();
                task.completed
            }
            None => {
                debug!("event=task_toggle module=store status=ignored reason=unknown_id id={id}");
                return false;
            }
        };
        debug!("event=task_toggle module=store status=ok id={id} completed={completed}");
        self.applied(StoreOp::Toggled(id));
        true
    }

    /// Removes the task matching `id`, preserving the order of the rest.
    ///
    /// Unknown ids are an idempotent no-op. Returns whether a task was
    /// removed.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let Some(position) = self.tasks.iter().position(|task| task.id == id) else {
            debug!("event=task_delete module=store status=ignored reason=unknown_id id={id}");
            return false;
        };
        self.tasks.remove(position);
        debug!(
            "event=task_delete module=store status=ok id={id} count={}",
            self.tasks.len()
        );
        self.applied(StoreOp::Deleted(id));
        true
    }

    /// Ordered read projection of all tasks, insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up one task by id.
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Number of tasks currently in the store.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the store holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Current draft input text.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Mirrors the input field into the draft.
    ///
    /// Pure scratch-state bookkeeping; listeners are not notified because the
    /// platform text field already displays the draft.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Submits the draft as a new task.
    ///
    /// On success the draft is cleared. A draft that trims to empty is a
    /// no-op and the draft text is left as-is.
    pub fn submit_draft(&mut self) -> Option<TaskId> {
        let draft = std::mem::take(&mut self.draft);
        match self.add_task(&draft) {
            Some(id) => Some(id),
            None => {
                self.draft = draft;
                None
            }
        }
    }

    /// Store revision, bumped once per applied mutation.
    ///
    /// No-op calls (blank add, unknown id) leave the revision unchanged, so
    /// an unchanged revision means no re-render is needed.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Registers a listener invoked after each applied mutation.
    pub fn subscribe(&mut self, listener: ChangeListener) {
        self.listeners.push(listener);
    }

    fn applied(&mut self, op: StoreOp) {
        self.revision += 1;
        let change = StoreChange {
            op,
            revision: self.revision,
        };
        for listener in &mut self.listeners {
            listener(&change);
        }
    }
}
