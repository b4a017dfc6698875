//! Selection state and marquee (rubber-band) selection.
//!
//! The selection is an ordered set of element ids: insertion order
//! decides which element is the "primary" one, but nothing else
//! depends on order. Marquee selection replaces the whole set.

use shopfloor_core::geometry::Bounds;

use crate::element_store::ElementStore;

/// Ordered set of selected element ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet {
    ids: Vec<u64>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the selection, deduplicating while preserving order.
    pub fn select(&mut self, ids: impl IntoIterator<Item = u64>) {
        self.ids.clear();
        for id in ids {
            if !self.ids.contains(&id) {
                self.ids.push(id);
            }
        }
    }

    /// Shift-click semantics: adds the id if absent, removes it if
    /// present.
    pub fn toggle(&mut self, id: u64) {
        if let Some(pos) = self.ids.iter().position(|&other| other == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id);
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    /// Selected ids in insertion order.
    pub fn ids(&self) -> &[u64] {
        &self.ids
    }

    /// The first-selected id, if any.
    pub fn primary(&self) -> Option<u64> {
        self.ids.first().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Drops ids that no longer exist in the store. Called after
    /// deletes and undo so the selection never dangles.
    pub fn retain_existing(&mut self, store: &ElementStore) {
        self.ids.retain(|&id| store.contains(id));
    }

    /// Removes the given ids from the selection.
    pub fn remove_ids(&mut self, ids: &[u64]) {
        self.ids.retain(|id| !ids.contains(id));
    }

    /// Replaces the selection with every element whose bounding box
    /// overlaps `marquee`. Non-additive: prior selection is discarded.
    /// The result only depends on the box and the element set, not on
    /// iteration order.
    pub fn marquee_select(&mut self, marquee: &Bounds, store: &ElementStore) {
        let hits: Vec<u64> = store
            .iter()
            .filter(|e| e.bounds().intersects(marquee))
            .map(|e| e.id)
            .collect();
        self.select(hits);
    }
}
