//! Transform baking and the gesture state machine.
//!
//! Resize handles on the drawable node apply multiplicative scale; the
//! model stays scale-free, so on commit the node's live geometry is
//! "baked" into width/height and the scale factors reset to 1. Drags,
//! marquees, and pans are mutually exclusive per gesture.

use shopfloor_core::constants::MIN_ELEMENT_SIZE;
use shopfloor_core::geometry::Point;

use crate::layout::Layout;
use crate::model::Element;

/// Live geometry read back from a drawable node at the end of a
/// resize/rotate gesture. `scale_x`/`scale_y` are the node's
/// accumulated scale factors, 1.0 when untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeTransform {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl NodeTransform {
    /// A node transform matching the element's committed geometry.
    pub fn from_element(element: &Element) -> Self {
        Self {
            x: element.x,
            y: element.y,
            width: element.width,
            height: element.height,
            rotation: element.rotation,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    /// Whether the scaled box has crossed zero on either axis. Baking a
    /// degenerate transform leaves the element untouched.
    pub fn is_degenerate(&self) -> bool {
        self.width * self.scale_x <= 0.0 || self.height * self.scale_y <= 0.0
    }
}

/// Bakes a node transform into the element: scale folds into
/// width/height, dimensions are floored at the minimum size, and a
/// resize that would cross zero keeps the pre-transform box untouched.
pub fn bake_transform(element: &mut Element, node: &NodeTransform) {
    if node.is_degenerate() {
        return;
    }
    element.x = node.x;
    element.y = node.y;
    element.width = (node.width * node.scale_x).max(MIN_ELEMENT_SIZE);
    element.height = (node.height * node.scale_y).max(MIN_ELEMENT_SIZE);
    element.rotation = node.rotation;
}

/// The in-flight pointer gesture. Exactly one gesture is active at a
/// time; pointer-down decides which based on button and hit test.
#[derive(Debug, Clone, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// Primary-button drag that started on a selected element.
    DragElement {
        /// The element under the pointer when the drag started.
        id: u64,
        /// Pointer offset from the element origin at grab time, so the
        /// element doesn't jump to the cursor.
        grab_dx: f64,
        grab_dy: f64,
        /// Pre-mutation snapshot, pushed to history on the first actual
        /// move and then dropped.
        snapshot: Option<Box<Layout>>,
    },
    /// Primary-button drag that started on empty canvas.
    Marquee { origin: Point, current: Point },
    /// Middle-button viewport pan. Touches only the viewport and stays
    /// out of history.
    Pan { last_screen: Point },
}

impl Gesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }
}
