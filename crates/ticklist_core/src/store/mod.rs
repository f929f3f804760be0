//! In-memory task state container.
//!
//! # Responsibility
//! - Own the ordered task list and draft input for one screen.
//! - Apply mutations and notify subscribed views.
//!
//! # Invariants
//! - The store is the sole owner of task state for the screen's lifetime.
//! - Nothing survives store teardown.

pub mod task_store;
