//! Linear undo/redo history over whole-state snapshots.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

/// A linear undo/redo timeline over successive snapshots of `T`.
///
/// The timeline is never empty: it is created with exactly one snapshot and
/// only grows through [`History::commit`]. Undo and redo move a cursor over
/// the stored snapshots without mutating them; committing while undone
/// discards everything after the cursor (the redo tail), so exactly one
/// branch survives any edit.
///
/// Snapshots are plain values compared with `PartialEq`. Callers must treat
/// the value returned by [`History::current`] as read-only and hand a fresh
/// value to `commit` instead of mutating in place.
///
/// Deserialization is validated: persisted data with no snapshots or a
/// cursor outside the stored range is rejected rather than admitted as a
/// history that would panic on first use.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawHistory<T>")]
pub struct History<T> {
    states: Vec<T>,
    cursor: usize,

    /// Optional cap on stored snapshots; `None` means unbounded.
    max_depth: Option<usize>,
}

/// Unvalidated mirror of [`History`] used as the deserialization input.
#[derive(Deserialize)]
struct RawHistory<T> {
    states: Vec<T>,
    cursor: usize,
    #[serde(default)]
    max_depth: Option<usize>,
}

/// Why persisted history data was rejected.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history must contain at least one snapshot")]
    Empty,

    #[error("cursor {cursor} out of range for {len} snapshots")]
    CursorOutOfRange { cursor: usize, len: usize },
}

impl<T> TryFrom<RawHistory<T>> for History<T> {
    type Error = HistoryError;

    fn try_from(raw: RawHistory<T>) -> Result<Self, HistoryError> {
        if raw.states.is_empty() {
            return Err(HistoryError::Empty);
        }
        if raw.cursor >= raw.states.len() {
            return Err(HistoryError::CursorOutOfRange {
                cursor: raw.cursor,
                len: raw.states.len(),
            });
        }
        Ok(Self {
            states: raw.states,
            cursor: raw.cursor,
            max_depth: raw.max_depth.map(|max| max.max(1)),
        })
    }
}

impl<T: Clone + PartialEq> History<T> {
    /// Create a history containing only `initial`, with no depth limit.
    pub fn new(initial: T) -> Self {
        Self {
            states: vec![initial],
            cursor: 0,
            max_depth: None,
        }
    }

    /// Create a history that keeps at most `max_depth` snapshots, dropping
    /// the oldest ones as new states are committed. A depth of zero would
    /// violate the never-empty invariant, so it is raised to one.
    pub fn with_max_depth(initial: T, max_depth: usize) -> Self {
        Self {
            states: vec![initial],
            cursor: 0,
            max_depth: Some(max_depth.max(1)),
        }
    }

    /// The snapshot the cursor points at. Always defined.
    pub fn current(&self) -> &T {
        &self.states[self.cursor]
    }

    /// Number of stored snapshots.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false by construction; the timeline starts with one snapshot
    /// and never shrinks past it.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Record `next` as the new current state.
    ///
    /// If `next` equals the current snapshot this is a silent no-op, so
    /// redundant edits and cosmetic re-renders neither grow the timeline nor
    /// break a pending redo chain. Otherwise the redo tail is discarded,
    /// `next` is appended, and the cursor moves to it.
    pub fn commit(&mut self, next: T) {
        if next == self.states[self.cursor] {
            trace!("duplicate commit suppressed");
            return;
        }

        self.states.truncate(self.cursor + 1);
        self.states.push(next);

        if let Some(max) = self.max_depth {
            while self.states.len() > max {
                self.states.remove(0);
            }
        }

        self.cursor = self.states.len() - 1;
        debug!(depth = self.states.len(), cursor = self.cursor, "committed snapshot");
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor < self.states.len() - 1
    }

    /// Step back one snapshot. Does nothing at the oldest state.
    pub fn undo(&mut self) {
        if self.can_undo() {
            self.cursor -= 1;
            debug!(cursor = self.cursor, "undo");
        }
    }

    /// Step forward one snapshot. Does nothing at the newest state.
    pub fn redo(&mut self) {
        if self.can_redo() {
            self.cursor += 1;
            debug!(cursor = self.cursor, "redo");
        }
    }
}
