//! brandkit-core: generic snapshot history for undo/redo.
//!
//! Design rules:
//! - One linear timeline, no branches: a new commit discards the redo tail.
//! - Snapshots are compared by value; committing the current state is a no-op.
//! - Undo/redo never fail; at the boundary they simply do nothing.

pub mod history;

pub use history::{History, HistoryError};
