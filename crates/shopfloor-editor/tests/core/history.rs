use shopfloor_editor::history::HistoryStack;
use shopfloor_editor::layout::Layout;
use shopfloor_editor::model::ElementKind;

fn layout_with_elements(count: usize) -> Layout {
    let mut layout = Layout::new();
    for _ in 0..count {
        layout.add_element(ElementKind::Machine);
    }
    layout
}

#[test]
fn test_empty_stack_is_a_noop() {
    let mut history = HistoryStack::new();
    let current = Layout::new();
    assert!(!history.can_undo());
    assert!(history.undo(&current).is_none());
    assert!(history.redo(&current).is_none());
}

#[test]
fn test_undo_returns_most_recent_snapshot() {
    let mut history = HistoryStack::new();
    history.push(layout_with_elements(1));
    history.push(layout_with_elements(2));

    let current = layout_with_elements(3);
    let restored = history.undo(&current).unwrap();
    assert_eq!(restored.elements.len(), 2);
    assert_eq!(history.undo_depth(), 1);
    assert!(history.can_redo());
}

#[test]
fn test_redo_restores_undone_state() {
    let mut history = HistoryStack::new();
    history.push(layout_with_elements(1));

    let current = layout_with_elements(2);
    let previous = history.undo(&current).unwrap();
    assert_eq!(previous.elements.len(), 1);

    let redone = history.redo(&previous).unwrap();
    assert_eq!(redone.elements.len(), 2);
    assert_eq!(history.undo_depth(), 1);
    assert!(!history.can_redo());
}

#[test]
fn test_new_push_invalidates_redo() {
    let mut history = HistoryStack::new();
    history.push(layout_with_elements(1));

    let current = layout_with_elements(2);
    let _ = history.undo(&current).unwrap();
    assert!(history.can_redo());

    history.push(layout_with_elements(5));
    assert!(!history.can_redo());
    assert_eq!(history.redo_depth(), 0);
}

#[test]
fn test_depth_cap_discards_oldest() {
    let mut history = HistoryStack::with_depth(3);
    for n in 0..5 {
        history.push(layout_with_elements(n));
    }
    assert_eq!(history.undo_depth(), 3);

    // Oldest surviving snapshot has 2 elements: 0 and 1 were discarded.
    let current = layout_with_elements(9);
    let _ = history.undo(&current).unwrap();
    let _ = history.undo(&current).unwrap();
    let oldest = history.undo(&current).unwrap();
    assert_eq!(oldest.elements.len(), 2);
    assert!(!history.can_undo());
}

#[test]
fn test_default_depth_is_thirty() {
    let mut history = HistoryStack::new();
    for n in 0..40 {
        history.push(layout_with_elements(n));
    }
    assert_eq!(history.undo_depth(), 30);
}

#[test]
fn test_clear_drops_both_sides() {
    let mut history = HistoryStack::new();
    history.push(layout_with_elements(1));
    let current = layout_with_elements(2);
    let _ = history.undo(&current);
    history.push(layout_with_elements(3));
    history.clear();
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}
