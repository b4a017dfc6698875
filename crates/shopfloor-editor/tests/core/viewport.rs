use shopfloor_core::geometry::Point;
use shopfloor_editor::viewport::Viewport;

#[test]
fn test_viewport_creation() {
    let vp = Viewport::new();
    assert_eq!(vp.zoom(), 1.0);
    assert_eq!(vp.pan_x(), 0.0);
    assert_eq!(vp.pan_y(), 0.0);
}

#[test]
fn test_screen_to_world_with_pan_and_zoom() {
    let mut vp = Viewport::new();
    vp.set_zoom(2.0);
    vp.set_pan(100.0, 50.0);
    // world = (screen - pan) / zoom
    let world = vp.screen_to_world(Point::new(300.0, 250.0));
    assert!((world.x - 100.0).abs() < 1e-9);
    assert!((world.y - 100.0).abs() < 1e-9);
}

#[test]
fn test_roundtrip_conversion() {
    let mut vp = Viewport::new();
    vp.set_zoom(2.5);
    vp.set_pan(75.0, 125.0);

    let original = Point::new(123.45, 456.78);
    let screen = vp.world_to_screen(original);
    let roundtrip = vp.screen_to_world(screen);
    assert!((roundtrip.x - original.x).abs() < 1e-9);
    assert!((roundtrip.y - original.y).abs() < 1e-9);
}

#[test]
fn test_zoom_constraints() {
    let mut vp = Viewport::new();
    vp.set_zoom(0.001);
    assert_eq!(vp.zoom(), 0.05);
    vp.set_zoom(500.0);
    assert_eq!(vp.zoom(), 20.0);
}

#[test]
fn test_zoom_at_keeps_anchor_point_fixed() {
    let mut vp = Viewport::new();
    vp.set_pan(40.0, -20.0);
    vp.set_zoom(1.5);

    let pointer = Point::new(320.0, 240.0);
    let before = vp.screen_to_world(pointer);
    vp.zoom_at(pointer, 1.1);
    let after = vp.screen_to_world(pointer);

    assert!((before.x - after.x).abs() < 1e-9);
    assert!((before.y - after.y).abs() < 1e-9);
    assert!((vp.zoom() - 1.65).abs() < 1e-9);
}

#[test]
fn test_zoom_in_then_out_restores_scale() {
    let mut vp = Viewport::new();
    let pointer = Point::new(100.0, 100.0);
    vp.zoom_in_at(pointer);
    vp.zoom_out_at(pointer);
    assert!((vp.zoom() - 1.0).abs() < 1e-9);
}

#[test]
fn test_pan_by_accumulates() {
    let mut vp = Viewport::new();
    vp.pan_by(10.0, 20.0);
    vp.pan_by(-4.0, 6.0);
    assert_eq!(vp.pan_x(), 6.0);
    assert_eq!(vp.pan_y(), 26.0);
}

#[test]
fn test_visible_world_at_zoom() {
    let mut vp = Viewport::new();
    vp.set_zoom(2.0);
    let visible = vp.visible_world(800.0, 600.0);
    assert_eq!(visible.min_x, 0.0);
    assert_eq!(visible.max_x, 400.0);
    assert_eq!(visible.max_y, 300.0);
}
