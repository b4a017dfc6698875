//! Undo/redo over full layout snapshots.
//!
//! Every mutating action pushes the pre-mutation layout; viewport-only
//! changes never do. The stack is bounded: past the cap, the oldest
//! snapshot is discarded.

use std::collections::VecDeque;

use shopfloor_core::constants::HISTORY_DEPTH;

use crate::layout::Layout;

/// Bounded snapshot stack with a redo side.
#[derive(Debug, Clone, Default)]
pub struct HistoryStack {
    undo: VecDeque<Layout>,
    redo: Vec<Layout>,
    depth: usize,
}

impl HistoryStack {
    /// Creates a stack with the default depth.
    pub fn new() -> Self {
        Self::with_depth(HISTORY_DEPTH)
    }

    /// Creates a stack keeping at most `depth` snapshots.
    pub fn with_depth(depth: usize) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            depth,
        }
    }

    /// Pushes a pre-mutation snapshot. Any redo state is invalidated by
    /// a new mutation.
    pub fn push(&mut self, snapshot: Layout) {
        self.undo.push_back(snapshot);
        while self.undo.len() > self.depth {
            self.undo.pop_front();
        }
        self.redo.clear();
    }

    /// Pops the most recent snapshot, moving `current` onto the redo
    /// stack. Returns `None` (a no-op) when there is nothing to undo.
    pub fn undo(&mut self, current: &Layout) -> Option<Layout> {
        let snapshot = self.undo.pop_back()?;
        self.redo.push(current.clone());
        Some(snapshot)
    }

    /// Re-applies the most recently undone state, moving `current` back
    /// onto the undo stack.
    pub fn redo(&mut self, current: &Layout) -> Option<Layout> {
        let snapshot = self.redo.pop()?;
        self.undo.push_back(current.clone());
        Some(snapshot)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Drops all history, e.g. when switching to another model.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}
