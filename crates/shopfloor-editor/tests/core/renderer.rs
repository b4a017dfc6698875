use shopfloor_editor::layout::Layout;
use shopfloor_editor::model::{ConnectionKind, ElementKind};
use shopfloor_editor::renderer::{RenderPrimitive, Renderer};
use shopfloor_editor::selection::SelectionSet;

fn is_grid_line(p: &RenderPrimitive) -> bool {
    matches!(p, RenderPrimitive::Line { color, .. } if color == "#e2e8f0")
}

#[test]
fn test_empty_layout_renders_only_grid() {
    let layout = Layout::new();
    let mut renderer = Renderer::new();
    let primitives = renderer.render(&layout, &SelectionSet::new(), 200.0, 200.0);

    assert!(!primitives.is_empty());
    assert!(primitives.iter().all(is_grid_line));
    // 50-unit spacing over a 200x200 view: lines at 0..=200 both ways.
    assert_eq!(primitives.len(), 10);
}

#[test]
fn test_machine_renders_body_and_name() {
    let mut layout = Layout::new();
    let id = layout.add_element(ElementKind::Machine);
    layout.update_element(id, |e| e.name = "Press 1".to_string());

    let mut renderer = Renderer::new();
    let primitives = renderer.render(&layout, &SelectionSet::new(), 200.0, 200.0);
    let range = renderer.primitives_for(id).unwrap();
    let mine = &primitives[range];

    assert!(mine
        .iter()
        .any(|p| matches!(p, RenderPrimitive::Rect { filled: true, .. })));
    assert!(mine
        .iter()
        .any(|p| matches!(p, RenderPrimitive::Text { content, .. } if content == "Press 1")));
}

#[test]
fn test_selected_element_gets_outline() {
    let mut layout = Layout::new();
    let id = layout.add_element(ElementKind::Workstation);

    let mut selection = SelectionSet::new();
    selection.select([id]);

    let mut renderer = Renderer::new();
    let primitives = renderer.render(&layout, &selection, 200.0, 200.0);
    let range = renderer.primitives_for(id).unwrap();

    let outlines = primitives[range]
        .iter()
        .filter(|p| {
            matches!(p, RenderPrimitive::Rect { color, filled: false, .. } if color == "#2563eb")
        })
        .count();
    assert_eq!(outlines, 1);
}

#[test]
fn test_area_is_outline_only() {
    let mut layout = Layout::new();
    let id = layout.add_element(ElementKind::Area);

    let mut renderer = Renderer::new();
    let primitives = renderer.render(&layout, &SelectionSet::new(), 200.0, 200.0);
    let range = renderer.primitives_for(id).unwrap();

    assert!(primitives[range]
        .iter()
        .all(|p| !matches!(p, RenderPrimitive::Rect { filled: true, .. })));
}

#[test]
fn test_logic_connection_is_dashed() {
    let mut layout = Layout::new();
    let a = layout.add_element(ElementKind::Machine);
    let b = layout.add_element(ElementKind::Storage);
    layout.update_element(b, |e| {
        e.x = 400.0;
        e.y = 400.0;
    });
    assert!(layout.connect(a, b, ConnectionKind::Logic));

    let mut renderer = Renderer::new();
    let primitives = renderer.render(&layout, &SelectionSet::new(), 200.0, 200.0);

    assert!(primitives
        .iter()
        .any(|p| matches!(p, RenderPrimitive::Line { dashed: true, .. })));
}

#[test]
fn test_worker_glyph_has_head_circle() {
    let mut layout = Layout::new();
    let id = layout.add_element(ElementKind::Worker);
    layout.update_element(id, |e| e.task = Some("picking".to_string()));

    let mut renderer = Renderer::new();
    let primitives = renderer.render(&layout, &SelectionSet::new(), 200.0, 200.0);
    let range = renderer.primitives_for(id).unwrap();
    let mine = &primitives[range];

    assert!(mine
        .iter()
        .any(|p| matches!(p, RenderPrimitive::Circle { .. })));
    assert!(mine
        .iter()
        .any(|p| matches!(p, RenderPrimitive::Text { content, .. } if content == "picking")));
}

#[test]
fn test_index_rebuilt_each_frame() {
    let mut layout = Layout::new();
    let id = layout.add_element(ElementKind::Label);

    let mut renderer = Renderer::new();
    let _ = renderer.render(&layout, &SelectionSet::new(), 200.0, 200.0);
    assert!(renderer.primitives_for(id).is_some());

    layout.delete_elements(&[id]);
    let _ = renderer.render(&layout, &SelectionSet::new(), 200.0, 200.0);
    assert!(renderer.primitives_for(id).is_none());
}
