//! The layout aggregate: elements, connections, and the viewport.
//!
//! One `Layout` is the full scene for one named model. It is swapped
//! wholesale when the active model changes and cloned into history
//! before every mutating action.

use std::collections::HashSet;

use shopfloor_core::geometry::{Bounds, Point};

use crate::element_store::ElementStore;
use crate::model::{Connection, ConnectionKind, Element, ElementKind};
use crate::viewport::Viewport;

/// The full scene for one named model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    pub elements: ElementStore,
    pub connections: Vec<Connection>,
    pub viewport: Viewport,
}

impl Layout {
    pub fn new() -> Self {
        Self {
            elements: ElementStore::new(),
            connections: Vec::new(),
            viewport: Viewport::new(),
        }
    }

    /// Creates an element of `kind` with variant defaults at the fixed
    /// default position and returns its id.
    pub fn add_element(&mut self, kind: ElementKind) -> u64 {
        let id = self.elements.generate_id();
        self.elements.insert(Element::new(id, kind));
        id
    }

    /// Applies `f` to the element with the given id. No-op when the id
    /// is absent; returns whether anything was touched.
    pub fn update_element(&mut self, id: u64, f: impl FnOnce(&mut Element)) -> bool {
        match self.elements.get_mut(id) {
            Some(element) => {
                f(element);
                true
            }
            None => false,
        }
    }

    /// Applies `f` to every matching element. Each element's new fields
    /// are derived from its own prior state, which is what lets a
    /// multi-select resize scale every element from its own origin.
    pub fn update_elements(&mut self, ids: &[u64], mut f: impl FnMut(&mut Element)) {
        for &id in ids {
            if let Some(element) = self.elements.get_mut(id) {
                f(element);
            }
        }
    }

    /// Removes the given elements and cascades to any connection whose
    /// endpoints intersect them.
    pub fn delete_elements(&mut self, ids: &[u64]) {
        let doomed: HashSet<u64> = ids.iter().copied().collect();
        for &id in ids {
            self.elements.remove(id);
        }
        self.connections
            .retain(|c| !doomed.contains(&c.from) && !doomed.contains(&c.to));
    }

    /// Adds a directed connection when both endpoints exist. Returns
    /// whether the connection was added.
    pub fn connect(&mut self, from: u64, to: u64, kind: ConnectionKind) -> bool {
        if !self.elements.contains(from) || !self.elements.contains(to) {
            return false;
        }
        self.connections.push(Connection { from, to, kind });
        true
    }

    /// Topmost element under a world point.
    pub fn hit_test(&self, world: Point) -> Option<u64> {
        self.elements.hit_test(world)
    }

    /// Bounding box of all elements, `None` when the layout is empty.
    pub fn content_bounds(&self) -> Option<Bounds> {
        self.elements
            .iter()
            .map(|e| e.bounds())
            .reduce(|acc, b| acc.union(&b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_cascades_connections() {
        let mut layout = Layout::new();
        let a = layout.add_element(ElementKind::Machine);
        let b = layout.add_element(ElementKind::Storage);
        let c = layout.add_element(ElementKind::Workstation);
        assert!(layout.connect(a, b, ConnectionKind::Flow));
        assert!(layout.connect(b, c, ConnectionKind::Logic));

        layout.delete_elements(&[b]);

        assert!(!layout.elements.contains(b));
        assert!(layout.connections.is_empty());
    }

    #[test]
    fn connect_requires_both_endpoints() {
        let mut layout = Layout::new();
        let a = layout.add_element(ElementKind::Machine);
        assert!(!layout.connect(a, 999, ConnectionKind::Flow));
        assert!(layout.connections.is_empty());
    }

    #[test]
    fn update_missing_element_is_a_noop() {
        let mut layout = Layout::new();
        assert!(!layout.update_element(7, |e| e.x = 50.0));
    }
}
