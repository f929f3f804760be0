//! Domain model for the task-list screen.
//!
//! # Responsibility
//! - Define the canonical task record shared by store, view and FFI layers.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Task text is trimmed and non-empty from construction onward.

pub mod task;
