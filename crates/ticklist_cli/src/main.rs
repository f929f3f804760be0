//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `ticklist_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use ticklist_core::{format_row, render_screen, TaskStore};

fn main() {
    // Tiny CLI probe to validate core crate wiring independently from the
    // Flutter/FFI runtime setup.
    println!("ticklist_core ping={}", ticklist_core::ping());
    println!("ticklist_core version={}", ticklist_core::core_version());

    // One scripted screen walkthrough: add two tasks, complete the first,
    // delete the second.
    let mut store = TaskStore::new();
    store.set_draft("Buy milk");
    store.submit_draft();
    store.set_draft("Walk dog");
    store.submit_draft();
    if let Some(first) = store.tasks().first().map(|task| task.id) {
        store.toggle_complete(first);
    }
    if let Some(last) = store.tasks().last().map(|task| task.id) {
        store.delete_task(last);
    }

    let snapshot = render_screen(&store);
    println!(
        "screen rows={} revision={}",
        snapshot.rows.len(),
        snapshot.revision
    );
    for row in &snapshot.rows {
        println!("{}", format_row(row));
    }
}
