//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the task-list screen lifecycle and gestures to Dart via FRB.
//! - Hold the screen's store for exactly the screen's lifetime.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Every mutation endpoint returns the fresh screen snapshot, so the UI
//!   always re-renders from the state it just produced.
//! - No state survives `screen_close`.

use log::info;
use std::sync::{Mutex, OnceLock};
use ticklist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    render_screen, TaskId, TaskRow, TaskStore,
};
use uuid::Uuid;

static SCREEN: OnceLock<Mutex<Option<TaskStore>>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One task row as presented to the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenRowItem {
    /// Stable task ID in string form; row key across re-renders.
    pub task_id: String,
    /// Task text to display.
    pub text: String,
    /// Whether the row shows the completed presentation.
    pub completed: bool,
}

/// Screen state envelope returned by lifecycle and gesture endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenStateResponse {
    /// Whether the screen was available for this call.
    pub ok: bool,
    /// Task rows in insertion order.
    pub rows: Vec<ScreenRowItem>,
    /// Current draft input text.
    pub draft: String,
    /// Submit control enabled state.
    pub can_submit: bool,
    /// Store revision behind this snapshot.
    pub revision: u64,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ScreenStateResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            rows: Vec::new(),
            draft: String::new(),
            can_submit: false,
            revision: 0,
            message: message.into(),
        }
    }
}

/// Generic action response envelope for calls without a snapshot payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ScreenActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// Opens the task-list screen with a fresh, empty store.
///
/// An already-open screen is replaced: a new screen means a new store, and
/// the previous contents are dropped.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Never panics.
/// - Returns the initial (empty) screen snapshot.
#[flutter_rust_bridge::frb(sync)]
pub fn screen_open() -> ScreenStateResponse {
    let mut guard = match screen_cell().lock() {
        Ok(guard) => guard,
        Err(_) => return ScreenStateResponse::failure("screen state lock poisoned"),
    };
    let replaced = guard.is_some();
    let store = guard.insert(TaskStore::new());
    info!("event=screen_open module=ffi status=ok replaced={replaced}");
    state_response(store, "Screen opened.")
}

/// Tears the screen down, dropping the store and all tasks.
///
/// # FFI contract
/// - Sync call; idempotent (closing a closed screen succeeds).
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn screen_close() -> ScreenActionResponse {
    let mut guard = match screen_cell().lock() {
        Ok(guard) => guard,
        Err(_) => return ScreenActionResponse::failure("screen state lock poisoned"),
    };
    let was_open = guard.take().is_some();
    info!("event=screen_close module=ffi status=ok was_open={was_open}");
    if was_open {
        ScreenActionResponse::success("Screen closed.")
    } else {
        ScreenActionResponse::success("Screen was not open.")
    }
}

/// Returns the current screen snapshot without mutating anything.
///
/// # FFI contract
/// - Sync call, read-only.
/// - Never panics; `ok = false` when the screen is not open.
#[flutter_rust_bridge::frb(sync)]
pub fn screen_state() -> ScreenStateResponse {
    snapshot_call(|store| state_response(store, "Screen state."))
}

/// Mirrors the input field text into the screen draft.
///
/// # FFI contract
/// - Sync call; does not trigger a list re-render on its own.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn screen_set_draft(text: String) -> ScreenActionResponse {
    match with_screen(|store| store.set_draft(text)) {
        Ok(()) => ScreenActionResponse::success("Draft updated."),
        Err(message) => ScreenActionResponse::failure(message),
    }
}

/// Submit gesture: adds the draft as a new task and clears the draft.
///
/// A draft that trims to empty is accepted as a no-op; the snapshot in the
/// response is unchanged in that case.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Never panics.
/// - Returns the post-submit screen snapshot.
#[flutter_rust_bridge::frb(sync)]
pub fn screen_submit_draft() -> ScreenStateResponse {
    snapshot_call(|store| {
        let message = match store.submit_draft() {
            Some(_) => "Task added.",
            None => "Draft is blank; nothing added.",
        };
        state_response(store, message)
    })
}

/// Tap-row gesture: flips the completion flag of one task.
///
/// Unparsable or unknown ids are accepted as no-ops to match the silent
/// in-store policy; the snapshot in the response is unchanged then.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Never panics.
/// - Returns the post-toggle screen snapshot.
#[flutter_rust_bridge::frb(sync)]
pub fn screen_toggle_task(task_id: String) -> ScreenStateResponse {
    snapshot_call(|store| {
        let toggled = parse_task_id(&task_id)
            .map(|id| store.toggle_complete(id))
            .unwrap_or(false);
        let message = if toggled {
            "Task toggled."
        } else {
            "Unknown task id; nothing toggled."
        };
        state_response(store, message)
    })
}

/// Tap-delete gesture: removes one task from the list.
///
/// # FFI contract
/// - Sync call, in-memory only; idempotent per id.
/// - Never panics.
/// - Returns the post-delete screen snapshot.
#[flutter_rust_bridge::frb(sync)]
pub fn screen_delete_task(task_id: String) -> ScreenStateResponse {
    snapshot_call(|store| {
        let deleted = parse_task_id(&task_id)
            .map(|id| store.delete_task(id))
            .unwrap_or(false);
        let message = if deleted {
            "Task deleted."
        } else {
            "Unknown task id; nothing deleted."
        };
        state_response(store, message)
    })
}

fn screen_cell() -> &'static Mutex<Option<TaskStore>> {
    SCREEN.get_or_init(|| Mutex::new(None))
}

fn with_screen<T>(f: impl FnOnce(&mut TaskStore) -> T) -> Result<T, String> {
    let mut guard = screen_cell()
        .lock()
        .map_err(|_| "screen state lock poisoned".to_string())?;
    match guard.as_mut() {
        Some(store) => Ok(f(store)),
        None => Err("screen is not open".to_string()),
    }
}

fn snapshot_call(f: impl FnOnce(&mut TaskStore) -> ScreenStateResponse) -> ScreenStateResponse {
    match with_screen(f) {
        Ok(response) => response,
        Err(message) => ScreenStateResponse::failure(message),
    }
}

fn state_response(store: &TaskStore, message: impl Into<String>) -> ScreenStateResponse {
    let snapshot = render_screen(store);
    ScreenStateResponse {
        ok: true,
        rows: snapshot.rows.iter().map(to_row_item).collect(),
        draft: snapshot.draft,
        can_submit: snapshot.can_submit,
        revision: snapshot.revision,
        message: message.into(),
    }
}

fn to_row_item(row: &TaskRow) -> ScreenRowItem {
    ScreenRowItem {
        task_id: row.id.to_string(),
        text: row.text.clone(),
        completed: row.completed,
    }
}

fn parse_task_id(text: &str) -> Option<TaskId> {
    Uuid::try_parse(text.trim()).ok().filter(|id| !id.is_nil())
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, init_logging, parse_task_id, ping, screen_close, screen_delete_task,
        screen_open, screen_set_draft, screen_state, screen_submit_draft, screen_toggle_task,
    };

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn parse_task_id_rejects_garbage_and_nil() {
        assert!(parse_task_id("not-a-uuid").is_none());
        assert!(parse_task_id("00000000-0000-0000-0000-000000000000").is_none());
        assert!(parse_task_id(" 11111111-2222-4333-8444-555555555555 ").is_some());
    }

    // The screen store is process-global, so the whole lifecycle runs in one
    // sequential test instead of several parallel ones.
    #[test]
    fn screen_flow_covers_lifecycle_and_gestures() {
        let opened = screen_open();
        assert!(opened.ok, "{}", opened.message);
        assert!(opened.rows.is_empty());
        assert!(!opened.can_submit);
        assert_eq!(opened.revision, 0);

        assert!(screen_set_draft("Buy milk".to_string()).ok);
        let after_first = screen_submit_draft();
        assert!(after_first.ok);
        assert_eq!(after_first.rows.len(), 1);
        assert_eq!(after_first.rows[0].text, "Buy milk");
        assert_eq!(after_first.draft, "");

        assert!(screen_set_draft("Walk dog".to_string()).ok);
        let after_second = screen_submit_draft();
        assert_eq!(after_second.rows.len(), 2);
        assert_eq!(after_second.rows[1].text, "Walk dog");

        let blank = {
            assert!(screen_set_draft("   ".to_string()).ok);
            screen_submit_draft()
        };
        assert!(blank.ok);
        assert_eq!(blank.rows.len(), 2);
        assert_eq!(blank.message, "Draft is blank; nothing added.");

        let milk_id = after_second.rows[0].task_id.clone();
        let toggled = screen_toggle_task(milk_id.clone());
        assert!(toggled.ok);
        assert!(toggled.rows[0].completed);
        assert!(!toggled.rows[1].completed);

        let bogus = screen_toggle_task("not-a-uuid".to_string());
        assert!(bogus.ok);
        assert_eq!(bogus.revision, toggled.revision);
        assert_eq!(bogus.message, "Unknown task id; nothing toggled.");

        let dog_id = after_second.rows[1].task_id.clone();
        let deleted = screen_delete_task(dog_id.clone());
        assert!(deleted.ok);
        assert_eq!(deleted.rows.len(), 1);
        assert_eq!(deleted.rows[0].task_id, milk_id);
        assert!(deleted.rows[0].completed);

        let repeat = screen_delete_task(dog_id);
        assert!(repeat.ok);
        assert_eq!(repeat.rows.len(), 1);
        assert_eq!(repeat.message, "Unknown task id; nothing deleted.");

        assert!(screen_close().ok);
        let closed_state = screen_state();
        assert!(!closed_state.ok);
        assert_eq!(closed_state.message, "screen is not open");

        let close_again = screen_close();
        assert!(close_again.ok);
        assert_eq!(close_again.message, "Screen was not open.");
    }
}
