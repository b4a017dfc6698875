//! Maps the layout to drawable primitives.
//!
//! The renderer is a pure projection: layout + viewport + view size in,
//! a flat primitive list out. The drawing backend (out of scope here)
//! turns primitives into pixels. The renderer keeps an id -> primitive
//! range index so live-gesture feedback can find an element's drawables
//! without ever treating them as a second source of truth.

use std::collections::HashMap;
use std::ops::Range;

use shopfloor_core::constants::GRID_SPACING;
use shopfloor_core::geometry::Point;

use crate::layout::Layout;
use crate::model::{Element, ElementKind};
use crate::selection::SelectionSet;

const GRID_COLOR: &str = "#e2e8f0";
const SELECTION_COLOR: &str = "#2563eb";
const TEXT_COLOR: &str = "#1e293b";
const TREAD_SPACING: f64 = 25.0;

/// One drawable primitive in world coordinates. The backend applies the
/// viewport transform when rasterizing.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderPrimitive {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rotation: f64,
        color: String,
        filled: bool,
    },
    Line {
        from: Point,
        to: Point,
        color: String,
        dashed: bool,
    },
    Circle {
        center: Point,
        radius: f64,
        color: String,
        filled: bool,
    },
    Text {
        position: Point,
        content: String,
        size: f64,
        color: String,
    },
}

/// Stateless scene projection plus the per-frame id index.
#[derive(Debug, Default)]
pub struct Renderer {
    index: HashMap<u64, Range<usize>>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Primitive range produced for an element in the last
    /// [`Renderer::render`] call. Used for live-gesture feedback only.
    pub fn primitives_for(&self, id: u64) -> Option<Range<usize>> {
        self.index.get(&id).cloned()
    }

    /// Projects the layout into a primitive list: background grid,
    /// connections, then elements in draw order with selection
    /// outlines on top.
    pub fn render(
        &mut self,
        layout: &Layout,
        selection: &SelectionSet,
        view_width: f64,
        view_height: f64,
    ) -> Vec<RenderPrimitive> {
        let mut out = Vec::new();
        self.index.clear();

        self.render_grid(layout, view_width, view_height, &mut out);
        self.render_connections(layout, &mut out);

        for element in layout.elements.iter() {
            let start = out.len();
            render_element(element, &mut out);
            if selection.contains(element.id) {
                out.push(selection_outline(element));
            }
            self.index.insert(element.id, start..out.len());
        }

        out
    }

    fn render_grid(
        &self,
        layout: &Layout,
        view_width: f64,
        view_height: f64,
        out: &mut Vec<RenderPrimitive>,
    ) {
        let visible = layout.viewport.visible_world(view_width, view_height);
        let first_x = (visible.min_x / GRID_SPACING).floor() * GRID_SPACING;
        let first_y = (visible.min_y / GRID_SPACING).floor() * GRID_SPACING;

        let mut x = first_x;
        while x <= visible.max_x {
            out.push(RenderPrimitive::Line {
                from: Point::new(x, visible.min_y),
                to: Point::new(x, visible.max_y),
                color: GRID_COLOR.to_string(),
                dashed: false,
            });
            x += GRID_SPACING;
        }
        let mut y = first_y;
        while y <= visible.max_y {
            out.push(RenderPrimitive::Line {
                from: Point::new(visible.min_x, y),
                to: Point::new(visible.max_x, y),
                color: GRID_COLOR.to_string(),
                dashed: false,
            });
            y += GRID_SPACING;
        }
    }

    fn render_connections(&self, layout: &Layout, out: &mut Vec<RenderPrimitive>) {
        for connection in &layout.connections {
            let (Some(from), Some(to)) = (
                layout.elements.get(connection.from),
                layout.elements.get(connection.to),
            ) else {
                continue;
            };
            out.push(RenderPrimitive::Line {
                from: from.center(),
                to: to.center(),
                color: TEXT_COLOR.to_string(),
                dashed: matches!(connection.kind, crate::model::ConnectionKind::Logic),
            });
        }
    }
}

fn render_element(element: &Element, out: &mut Vec<RenderPrimitive>) {
    match element.kind {
        ElementKind::Machine | ElementKind::Workstation => {
            out.push(body_rect(element, true));
            out.push(name_text(element));
        }
        ElementKind::Area => {
            // Areas are outlines so the elements inside stay visible.
            out.push(body_rect(element, false));
            out.push(name_text(element));
        }
        ElementKind::Storage => {
            out.push(body_rect(element, true));
            if element.cross_mark {
                render_cross_mark(element, out);
            }
            out.push(name_text(element));
        }
        ElementKind::Conveyor => {
            out.push(body_rect(element, true));
            render_treads(element, out);
        }
        ElementKind::Worker => {
            render_worker_glyph(element, out);
        }
        ElementKind::Label => {
            out.push(RenderPrimitive::Text {
                position: element.position(),
                content: element.name.clone(),
                size: element.font_size.unwrap_or(14.0),
                color: element.color.clone(),
            });
        }
        ElementKind::Arrow => {
            render_arrow(element, out);
        }
    }
}

fn body_rect(element: &Element, filled: bool) -> RenderPrimitive {
    RenderPrimitive::Rect {
        x: element.x,
        y: element.y,
        width: element.width,
        height: element.height,
        rotation: element.rotation,
        color: element.color.clone(),
        filled,
    }
}

fn name_text(element: &Element) -> RenderPrimitive {
    RenderPrimitive::Text {
        position: element.center(),
        content: element.name.clone(),
        size: element.font_size.unwrap_or(12.0),
        color: TEXT_COLOR.to_string(),
    }
}

fn selection_outline(element: &Element) -> RenderPrimitive {
    RenderPrimitive::Rect {
        x: element.x,
        y: element.y,
        width: element.width,
        height: element.height,
        rotation: element.rotation,
        color: SELECTION_COLOR.to_string(),
        filled: false,
    }
}

fn render_cross_mark(element: &Element, out: &mut Vec<RenderPrimitive>) {
    let b = element.bounds();
    out.push(RenderPrimitive::Line {
        from: Point::new(b.min_x, b.min_y),
        to: Point::new(b.max_x, b.max_y),
        color: TEXT_COLOR.to_string(),
        dashed: false,
    });
    out.push(RenderPrimitive::Line {
        from: Point::new(b.min_x, b.max_y),
        to: Point::new(b.max_x, b.min_y),
        color: TEXT_COLOR.to_string(),
        dashed: false,
    });
}

/// Repeating tread lines sized to fit the conveyor box, following the
/// orientation flag.
fn render_treads(element: &Element, out: &mut Vec<RenderPrimitive>) {
    let b = element.bounds();
    if element.vertical {
        let mut y = b.min_y + TREAD_SPACING;
        while y < b.max_y {
            out.push(RenderPrimitive::Line {
                from: Point::new(b.min_x, y),
                to: Point::new(b.max_x, y),
                color: TEXT_COLOR.to_string(),
                dashed: false,
            });
            y += TREAD_SPACING;
        }
    } else {
        let mut x = b.min_x + TREAD_SPACING;
        while x < b.max_x {
            out.push(RenderPrimitive::Line {
                from: Point::new(x, b.min_y),
                to: Point::new(x, b.max_y),
                color: TEXT_COLOR.to_string(),
                dashed: false,
            });
            x += TREAD_SPACING;
        }
    }
}

/// Fixed stick-figure glyph scaled into the worker box, plus name and
/// task labels underneath.
fn render_worker_glyph(element: &Element, out: &mut Vec<RenderPrimitive>) {
    let b = element.bounds();
    let cx = b.center().x;
    let head_r = b.height() * 0.15;
    let head_cy = b.min_y + head_r;
    let hip_y = b.min_y + b.height() * 0.7;

    out.push(RenderPrimitive::Circle {
        center: Point::new(cx, head_cy),
        radius: head_r,
        color: element.color.clone(),
        filled: false,
    });
    // torso
    out.push(RenderPrimitive::Line {
        from: Point::new(cx, head_cy + head_r),
        to: Point::new(cx, hip_y),
        color: element.color.clone(),
        dashed: false,
    });
    // arms
    out.push(RenderPrimitive::Line {
        from: Point::new(b.min_x, b.min_y + b.height() * 0.45),
        to: Point::new(b.max_x, b.min_y + b.height() * 0.45),
        color: element.color.clone(),
        dashed: false,
    });
    // legs
    out.push(RenderPrimitive::Line {
        from: Point::new(cx, hip_y),
        to: Point::new(b.min_x, b.max_y),
        color: element.color.clone(),
        dashed: false,
    });
    out.push(RenderPrimitive::Line {
        from: Point::new(cx, hip_y),
        to: Point::new(b.max_x, b.max_y),
        color: element.color.clone(),
        dashed: false,
    });

    out.push(RenderPrimitive::Text {
        position: Point::new(cx, b.max_y + 12.0),
        content: element.name.clone(),
        size: 11.0,
        color: TEXT_COLOR.to_string(),
    });
    if let Some(task) = &element.task {
        out.push(RenderPrimitive::Text {
            position: Point::new(cx, b.max_y + 26.0),
            content: task.clone(),
            size: 10.0,
            color: TEXT_COLOR.to_string(),
        });
    }
}

fn render_arrow(element: &Element, out: &mut Vec<RenderPrimitive>) {
    let b = element.bounds();
    let center = b.center();
    let mid_y = center.y;
    let head = b.height() / 2.0;

    let tail = rotate_about(Point::new(b.min_x, mid_y), center, element.rotation);
    let tip = rotate_about(Point::new(b.max_x, mid_y), center, element.rotation);
    let barb_up = rotate_about(
        Point::new(b.max_x - head, mid_y - head),
        center,
        element.rotation,
    );
    let barb_down = rotate_about(
        Point::new(b.max_x - head, mid_y + head),
        center,
        element.rotation,
    );

    for (from, to) in [(tail, tip), (barb_up, tip), (barb_down, tip)] {
        out.push(RenderPrimitive::Line {
            from,
            to,
            color: element.color.clone(),
            dashed: false,
        });
    }
}

fn rotate_about(p: Point, pivot: Point, degrees: f64) -> Point {
    let rad = degrees.to_radians();
    let (sin, cos) = rad.sin_cos();
    let dx = p.x - pivot.x;
    let dy = p.y - pivot.y;
    Point::new(
        pivot.x + dx * cos - dy * sin,
        pivot.y + dx * sin + dy * cos,
    )
}
