//! Undo/redo wiring for the editor state.

use super::EditorState;

impl EditorState {
    /// Pushes the current layout as a pre-mutation snapshot.
    pub(crate) fn push_history(&mut self) {
        self.history.push(self.layout.clone());
    }

    /// Restores the most recent snapshot. Viewport changes are exempt
    /// from undo, so the live viewport survives the swap. No-op when
    /// the history is empty.
    pub fn undo(&mut self) {
        if let Some(mut previous) = self.history.undo(&self.layout) {
            previous.viewport = self.layout.viewport.clone();
            self.layout = previous;
            self.selection.retain_existing(&self.layout.elements);
            self.touch();
        }
    }

    /// Re-applies the most recently undone mutation, keeping the live
    /// viewport as well.
    pub fn redo(&mut self) {
        if let Some(mut next) = self.history.redo(&self.layout) {
            next.viewport = self.layout.viewport.clone();
            self.layout = next;
            self.selection.retain_existing(&self.layout.elements);
            self.touch();
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }
}
