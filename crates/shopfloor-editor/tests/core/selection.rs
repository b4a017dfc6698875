use shopfloor_core::geometry::{Bounds, Point};
use shopfloor_editor::element_store::ElementStore;
use shopfloor_editor::model::{Element, ElementKind};
use shopfloor_editor::selection::SelectionSet;

fn element_at(id: u64, x: f64, y: f64, width: f64, height: f64) -> Element {
    let mut e = Element::new(id, ElementKind::Machine);
    e.x = x;
    e.y = y;
    e.width = width;
    e.height = height;
    e
}

#[test]
fn test_select_replaces_and_dedups() {
    let mut sel = SelectionSet::new();
    sel.select([1, 2, 2, 3]);
    assert_eq!(sel.ids(), &[1, 2, 3]);

    sel.select([9]);
    assert_eq!(sel.ids(), &[9]);
    assert_eq!(sel.primary(), Some(9));
}

#[test]
fn test_toggle_adds_and_removes() {
    let mut sel = SelectionSet::new();
    sel.toggle(5);
    assert!(sel.contains(5));
    sel.toggle(7);
    sel.toggle(5);
    assert!(!sel.contains(5));
    assert_eq!(sel.ids(), &[7]);
}

#[test]
fn test_marquee_selects_overlapping_element() {
    let mut store = ElementStore::new();
    store.insert(element_at(1, 10.0, 10.0, 20.0, 20.0));

    let mut sel = SelectionSet::new();
    sel.marquee_select(&Bounds::new(0.0, 0.0, 50.0, 50.0), &store);
    assert_eq!(sel.ids(), &[1]);

    // Same element, far-away box: nothing selected.
    sel.marquee_select(&Bounds::new(100.0, 100.0, 150.0, 150.0), &store);
    assert!(sel.is_empty());
}

#[test]
fn test_marquee_replaces_prior_selection() {
    let mut store = ElementStore::new();
    store.insert(element_at(1, 0.0, 0.0, 10.0, 10.0));
    store.insert(element_at(2, 500.0, 500.0, 10.0, 10.0));

    let mut sel = SelectionSet::new();
    sel.select([2]);
    sel.marquee_select(&Bounds::new(0.0, 0.0, 20.0, 20.0), &store);
    assert_eq!(sel.ids(), &[1]);
}

#[test]
fn test_degenerate_marquee_acts_as_point() {
    let mut store = ElementStore::new();
    store.insert(element_at(1, 10.0, 10.0, 20.0, 20.0));

    let mut sel = SelectionSet::new();
    let point = Point::new(15.0, 15.0);
    sel.marquee_select(&Bounds::from_corners(point, point), &store);
    assert_eq!(sel.ids(), &[1]);

    let outside = Point::new(200.0, 200.0);
    sel.marquee_select(&Bounds::from_corners(outside, outside), &store);
    assert!(sel.is_empty());
}

#[test]
fn test_marquee_boundary_touch_selects() {
    let mut store = ElementStore::new();
    store.insert(element_at(1, 50.0, 50.0, 20.0, 20.0));

    let mut sel = SelectionSet::new();
    // Marquee right edge exactly at the element's left edge.
    sel.marquee_select(&Bounds::new(0.0, 0.0, 50.0, 60.0), &store);
    assert_eq!(sel.ids(), &[1]);
}

#[test]
fn test_retain_existing_drops_dangling_ids() {
    let mut store = ElementStore::new();
    store.insert(element_at(1, 0.0, 0.0, 10.0, 10.0));

    let mut sel = SelectionSet::new();
    sel.select([1, 2, 3]);
    sel.retain_existing(&store);
    assert_eq!(sel.ids(), &[1]);
}
