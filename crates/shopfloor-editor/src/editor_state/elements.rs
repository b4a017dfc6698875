//! Element operations (add, delete, clipboard) for the editor state.
//!
//! Every mutating operation here pushes the pre-mutation layout onto
//! the history stack before applying itself. Operations referencing
//! missing ids are no-ops, never errors.

use shopfloor_core::constants::PASTE_OFFSET;

use super::EditorState;
use crate::model::{ConnectionKind, Element, ElementKind};

impl EditorState {
    /// Adds an element of `kind` with variant defaults at the default
    /// position, selects it, and returns its id.
    pub fn add_element(&mut self, kind: ElementKind) -> u64 {
        self.push_history();
        let id = self.layout.add_element(kind);
        self.selection.select([id]);
        self.touch();
        tracing::debug!(id, %kind, "added element");
        id
    }

    /// Applies a property edit to one element. No-op when the id is
    /// absent.
    pub fn update_element(&mut self, id: u64, f: impl FnOnce(&mut Element)) {
        if !self.layout.elements.contains(id) {
            return;
        }
        self.push_history();
        self.layout.update_element(id, f);
        self.touch();
    }

    /// Applies a per-element derivation to every selected element, as
    /// one history entry.
    pub fn update_selected(&mut self, f: impl FnMut(&mut Element)) {
        if self.selection.is_empty() {
            return;
        }
        self.push_history();
        let ids: Vec<u64> = self.selection.ids().to_vec();
        self.layout.update_elements(&ids, f);
        self.touch();
    }

    /// Deletes the given elements (and their connections) as one
    /// history entry. Ids that don't exist are ignored.
    pub fn delete_elements(&mut self, ids: &[u64]) {
        let existing: Vec<u64> = ids
            .iter()
            .copied()
            .filter(|&id| self.layout.elements.contains(id))
            .collect();
        if existing.is_empty() {
            return;
        }
        self.push_history();
        self.layout.delete_elements(&existing);
        self.selection.remove_ids(&existing);
        self.touch();
        tracing::debug!(count = existing.len(), "deleted elements");
    }

    /// Deletes the current selection.
    pub fn delete_selected(&mut self) {
        let ids: Vec<u64> = self.selection.ids().to_vec();
        self.delete_elements(&ids);
    }

    /// Selects every element in the layout.
    pub fn select_all(&mut self) {
        let ids: Vec<u64> = self.layout.elements.order_iter().collect();
        self.selection.select(ids);
    }

    /// Captures value copies of the selected elements. The captured
    /// positions are what repeated pastes offset from.
    pub fn copy_selected(&mut self) {
        self.clipboard = self
            .selection
            .ids()
            .iter()
            .filter_map(|&id| self.layout.elements.get(id))
            .cloned()
            .collect();
    }

    /// Pastes the clipboard as fresh elements offset (+20, +20) from
    /// each captured original, as one history entry, and selects them.
    /// Pasting again without re-copying offsets from the same captured
    /// positions, so copies never drift on repeated paste.
    pub fn paste(&mut self) {
        if self.clipboard.is_empty() {
            return;
        }
        self.push_history();
        let mut new_ids = Vec::with_capacity(self.clipboard.len());
        for original in &self.clipboard {
            let id = self.layout.elements.generate_id();
            let mut pasted = original.clone();
            pasted.id = id;
            pasted.x = original.x + PASTE_OFFSET;
            pasted.y = original.y + PASTE_OFFSET;
            self.layout.elements.insert(pasted);
            new_ids.push(id);
        }
        self.selection.select(new_ids);
        self.touch();
        tracing::debug!(count = self.clipboard.len(), "pasted elements");
    }

    /// Adds a directed connection between two existing elements.
    pub fn connect(&mut self, from: u64, to: u64, kind: ConnectionKind) {
        if !self.layout.elements.contains(from) || !self.layout.elements.contains(to) {
            return;
        }
        self.push_history();
        self.layout.connect(from, to, kind);
        self.touch();
    }
}
