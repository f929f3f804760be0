//! Rendering projections of store state.
//!
//! # Responsibility
//! - Project current store state into display-ready structures.
//! - Keep rendering a pure function of store state.

pub mod screen;
