//! Input event routing: pointer, wheel, and keyboard shortcuts.
//!
//! Coordinates arrive in screen space and are converted through the
//! viewport before they touch the element model. Per gesture, input is
//! routed to exactly one of: element drag, marquee, or viewport pan.

use shopfloor_core::geometry::{Bounds, Point};

use super::EditorState;
use crate::transform::{bake_transform, Gesture, NodeTransform};

/// Pointer button discriminator. Primary drags select and move
/// elements; middle drags pan the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
}

/// A pointer-down event in screen coordinates.
#[derive(Debug, Clone, Copy)]
pub struct PointerEvent {
    pub position: Point,
    pub button: PointerButton,
    pub shift: bool,
}

/// Keyboard shortcuts handled by the editor core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Undo,
    Redo,
    Copy,
    Paste,
    Delete,
    SelectAll,
}

impl EditorState {
    /// Starts a gesture. Primary button on an element begins a drag
    /// (with shift-click toggling selection); primary on empty canvas
    /// opens a marquee; middle button pans.
    pub fn pointer_down(&mut self, event: PointerEvent) {
        match event.button {
            PointerButton::Middle => {
                self.gesture = Gesture::Pan {
                    last_screen: event.position,
                };
            }
            PointerButton::Primary => {
                let world = self.layout.viewport.screen_to_world(event.position);
                match self.layout.hit_test(world) {
                    Some(id) => {
                        if event.shift {
                            self.selection.toggle(id);
                        } else if !self.selection.contains(id) {
                            self.selection.select([id]);
                        }
                        // A shift-click that toggled the element off
                        // leaves nothing to drag.
                        if self.selection.contains(id) {
                            if let Some(element) = self.layout.elements.get(id) {
                                let grab_dx = world.x - element.x;
                                let grab_dy = world.y - element.y;
                                self.gesture = Gesture::DragElement {
                                    id,
                                    grab_dx,
                                    grab_dy,
                                    snapshot: Some(Box::new(self.layout.clone())),
                                };
                            }
                        }
                    }
                    None => {
                        self.gesture = Gesture::Marquee {
                            origin: world,
                            current: world,
                        };
                    }
                }
            }
        }
    }

    /// Advances the in-flight gesture. Element drags mutate positions
    /// live (pushing the pre-mutation snapshot on the first real move);
    /// pans mutate only the viewport.
    pub fn pointer_move(&mut self, position: Point) {
        let gesture = std::mem::take(&mut self.gesture);
        self.gesture = match gesture {
            Gesture::Idle => Gesture::Idle,
            Gesture::DragElement {
                id,
                grab_dx,
                grab_dy,
                mut snapshot,
            } => {
                let world = self.layout.viewport.screen_to_world(position);
                let target = Point::new(world.x - grab_dx, world.y - grab_dy);
                if let Some(element) = self.layout.elements.get(id) {
                    let dx = target.x - element.x;
                    let dy = target.y - element.y;
                    if dx != 0.0 || dy != 0.0 {
                        if let Some(pre) = snapshot.take() {
                            self.history.push(*pre);
                        }
                        if self.selection.len() >= 2 && self.selection.contains(id) {
                            // Rigid group translation: the dragged
                            // element's delta applies to every selected
                            // element.
                            let ids: Vec<u64> = self.selection.ids().to_vec();
                            self.layout.update_elements(&ids, |e| e.translate(dx, dy));
                        } else {
                            self.layout.update_element(id, |e| {
                                e.x = target.x;
                                e.y = target.y;
                            });
                        }
                        self.touch();
                    }
                }
                Gesture::DragElement {
                    id,
                    grab_dx,
                    grab_dy,
                    snapshot,
                }
            }
            Gesture::Marquee { origin, .. } => {
                let world = self.layout.viewport.screen_to_world(position);
                Gesture::Marquee {
                    origin,
                    current: world,
                }
            }
            Gesture::Pan { last_screen } => {
                self.layout
                    .viewport
                    .pan_by(position.x - last_screen.x, position.y - last_screen.y);
                Gesture::Pan {
                    last_screen: position,
                }
            }
        };
    }

    /// Ends the gesture. Marquee selection runs once against the final
    /// rectangle; viewport changes are committed for persistence only
    /// on release.
    pub fn pointer_up(&mut self, position: Point) {
        match std::mem::take(&mut self.gesture) {
            Gesture::Idle => {}
            Gesture::DragElement { snapshot, .. } => {
                // A consumed snapshot means the element actually moved.
                if snapshot.is_none() {
                    self.touch();
                }
            }
            Gesture::Marquee { origin, .. } => {
                let world = self.layout.viewport.screen_to_world(position);
                let marquee = Bounds::from_corners(origin, world);
                self.selection.marquee_select(&marquee, &self.layout.elements);
            }
            Gesture::Pan { .. } => {
                self.touch();
            }
        }
    }

    /// Wheel zoom at the pointer position: negative delta zooms in.
    /// Viewport-only, so persisted but never part of undo history.
    pub fn wheel(&mut self, delta: f64, position: Point) {
        if delta < 0.0 {
            self.layout.viewport.zoom_in_at(position);
        } else if delta > 0.0 {
            self.layout.viewport.zoom_out_at(position);
        } else {
            return;
        }
        self.touch();
    }

    /// Dispatches a keyboard shortcut, unless a text input has focus.
    pub fn shortcut(&mut self, shortcut: Shortcut) {
        if self.text_input_focused {
            return;
        }
        match shortcut {
            Shortcut::Undo => self.undo(),
            Shortcut::Redo => self.redo(),
            Shortcut::Copy => self.copy_selected(),
            Shortcut::Paste => self.paste(),
            Shortcut::Delete => self.delete_selected(),
            Shortcut::SelectAll => self.select_all(),
        }
    }

    /// Commits a resize/rotate read back from the bounding-box
    /// manipulator: one history entry, each element baked from its own
    /// node transform (scale folded into size, minimum size enforced).
    pub fn commit_transforms(&mut self, transforms: &[(u64, NodeTransform)]) {
        // Degenerate transforms bake to nothing, so a commit made up
        // entirely of them must not spend a history entry.
        if !transforms
            .iter()
            .any(|(id, node)| self.layout.elements.contains(*id) && !node.is_degenerate())
        {
            return;
        }
        self.push_history();
        for (id, node) in transforms {
            if let Some(element) = self.layout.elements.get_mut(*id) {
                bake_transform(element, node);
            }
        }
        self.touch();
    }
}
