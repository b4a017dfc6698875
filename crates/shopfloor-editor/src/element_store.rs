//! Flat element storage with stable insertion order.
//!
//! The store is the single source of truth for elements. Iteration
//! follows insertion order (which is also draw order); hit testing
//! walks it in reverse so the topmost element wins.

use std::collections::HashMap;

use shopfloor_core::geometry::Point;

use crate::model::Element;

/// Id-keyed element collection with a monotonically increasing id
/// counter and a stable draw order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementStore {
    elements: HashMap<u64, Element>,
    order: Vec<u64>,
    next_id: u64,
}

impl ElementStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            elements: HashMap::new(),
            order: Vec::new(),
            next_id: 1,
        }
    }

    /// Returns a fresh unique id.
    pub fn generate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Sets the next id to be generated. Used when restoring a layout
    /// from storage so new elements never collide with loaded ones.
    pub fn set_next_id(&mut self, id: u64) {
        self.next_id = id;
    }

    /// Inserts an element under its own id, appending to draw order if
    /// the id is new.
    pub fn insert(&mut self, element: Element) {
        let id = element.id;
        if self.elements.insert(id, element).is_none() {
            self.order.push(id);
        }
        if id >= self.next_id {
            self.next_id = id + 1;
        }
    }

    pub fn get(&self, id: u64) -> Option<&Element> {
        self.elements.get(&id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut Element> {
        self.elements.get_mut(&id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.elements.contains_key(&id)
    }

    /// Removes an element, keeping draw order consistent.
    pub fn remove(&mut self, id: u64) -> Option<Element> {
        let removed = self.elements.remove(&id);
        if removed.is_some() {
            self.order.retain(|&other| other != id);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.elements.clear();
        self.order.clear();
    }

    /// Iterates elements in draw (insertion) order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.order.iter().filter_map(|id| self.elements.get(id))
    }

    /// Iterates elements mutably. Order is unspecified; callers that
    /// care about draw order should go through [`ElementStore::iter`].
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.elements.values_mut()
    }

    /// Iterates ids in draw order.
    pub fn order_iter(&self) -> impl DoubleEndedIterator<Item = u64> + '_ {
        self.order.iter().copied()
    }

    /// Returns the topmost element whose bounding box contains `point`.
    pub fn hit_test(&self, point: Point) -> Option<u64> {
        self.order_iter()
            .rev()
            .find(|&id| {
                self.elements
                    .get(&id)
                    .is_some_and(|e| e.bounds().contains(point))
            })
    }
}
