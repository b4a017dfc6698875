//! The element model: typed factory elements and the connections
//! between them.
//!
//! An [`Element`] is one placed object on the floor (a machine, a
//! conveyor, a worker...). The variant-specific defaults live in a
//! static per-kind table consulted only at creation time; after that
//! every element carries the same flat set of fields.

use std::fmt;

use serde::{Deserialize, Serialize};
use shopfloor_core::constants::{DEFAULT_ELEMENT_X, DEFAULT_ELEMENT_Y};
use shopfloor_core::geometry::{Bounds, Point};

/// The kinds of factory elements that can be placed on the floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Machine,
    Workstation,
    Storage,
    Conveyor,
    Area,
    Label,
    Arrow,
    Worker,
}

impl ElementKind {
    /// Every kind, in palette order.
    pub const ALL: [ElementKind; 8] = [
        ElementKind::Machine,
        ElementKind::Workstation,
        ElementKind::Storage,
        ElementKind::Conveyor,
        ElementKind::Area,
        ElementKind::Label,
        ElementKind::Arrow,
        ElementKind::Worker,
    ];

    /// Default size in world units for a freshly created element.
    pub fn default_size(&self) -> (f64, f64) {
        match self {
            ElementKind::Machine => (120.0, 80.0),
            ElementKind::Workstation => (100.0, 60.0),
            ElementKind::Storage => (80.0, 80.0),
            ElementKind::Conveyor => (400.0, 40.0),
            ElementKind::Area => (240.0, 160.0),
            ElementKind::Label => (120.0, 30.0),
            ElementKind::Arrow => (120.0, 20.0),
            ElementKind::Worker => (40.0, 40.0),
        }
    }

    /// Default fill color for a freshly created element.
    pub fn default_color(&self) -> &'static str {
        match self {
            ElementKind::Machine => "#60a5fa",
            ElementKind::Workstation => "#34d399",
            ElementKind::Storage => "#fbbf24",
            ElementKind::Conveyor => "#9ca3af",
            ElementKind::Area => "#a78bfa",
            ElementKind::Label => "#e5e7eb",
            ElementKind::Arrow => "#f87171",
            ElementKind::Worker => "#f472b6",
        }
    }

    /// Default display name for a freshly created element.
    pub fn default_name(&self) -> &'static str {
        match self {
            ElementKind::Machine => "Machine",
            ElementKind::Workstation => "Workstation",
            ElementKind::Storage => "Storage",
            ElementKind::Conveyor => "Conveyor",
            ElementKind::Area => "Area",
            ElementKind::Label => "Label",
            ElementKind::Arrow => "Arrow",
            ElementKind::Worker => "Worker",
        }
    }

    /// Whether the variant renders its own text and therefore carries a
    /// font size.
    pub fn is_text_bearing(&self) -> bool {
        matches!(
            self,
            ElementKind::Label | ElementKind::Area | ElementKind::Arrow
        )
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_name())
    }
}

/// Operational status shown on the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementStatus {
    #[default]
    Active,
    Maintenance,
    Idle,
}

/// One placed, positioned, typed object on the factory floor.
///
/// `id` is unique within a layout and never changes. Position is the
/// top-left corner of the element box in world units; `rotation` is in
/// degrees. Width and height never drop below
/// [`shopfloor_core::constants::MIN_ELEMENT_SIZE`] after a transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: u64,
    pub kind: ElementKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub rotation: f64,
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub status: ElementStatus,
    /// Throughput capacity, machines only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    /// Current task description, workers only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    /// Draw a cross mark over the box, storage only.
    #[serde(default)]
    pub cross_mark: bool,
    /// Treads run top-to-bottom instead of left-to-right, conveyors only.
    #[serde(default)]
    pub vertical: bool,
    /// Text size for text-bearing variants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
}

impl Element {
    /// Creates an element of `kind` with the per-kind defaults, placed
    /// at the fixed default position.
    pub fn new(id: u64, kind: ElementKind) -> Self {
        let (width, height) = kind.default_size();
        Self {
            id,
            kind,
            x: DEFAULT_ELEMENT_X,
            y: DEFAULT_ELEMENT_Y,
            width,
            height,
            rotation: 0.0,
            name: kind.default_name().to_string(),
            color: kind.default_color().to_string(),
            status: ElementStatus::Active,
            capacity: None,
            task: None,
            cross_mark: false,
            vertical: false,
            font_size: kind.is_text_bearing().then_some(14.0),
        }
    }

    /// Axis-aligned bounding box, ignoring rotation. Hit testing and
    /// marquee selection both work on this box.
    pub fn bounds(&self) -> Bounds {
        Bounds::from_rect(self.x, self.y, self.width, self.height)
    }

    /// Position of the top-left corner.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Moves the element by a delta.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Center of the element box.
    pub fn center(&self) -> Point {
        self.bounds().center()
    }
}

/// A directed edge between two elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionKind {
    /// Material flow (conveyed goods).
    Flow,
    /// Control or signaling relationship.
    Logic,
}

/// Connects two elements by id. Both endpoints must exist in the same
/// layout; deleting an element cascades to its connections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub from: u64,
    pub to: u64,
    pub kind: ConnectionKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conveyor_and_worker_defaults() {
        let c = Element::new(1, ElementKind::Conveyor);
        assert_eq!((c.width, c.height), (400.0, 40.0));
        assert!(!c.vertical);

        let w = Element::new(2, ElementKind::Worker);
        assert_eq!((w.width, w.height), (40.0, 40.0));
        assert!(w.task.is_none());
    }

    #[test]
    fn text_bearing_kinds_get_a_font_size() {
        assert!(Element::new(1, ElementKind::Label).font_size.is_some());
        assert!(Element::new(2, ElementKind::Machine).font_size.is_none());
    }

    #[test]
    fn status_defaults_to_active() {
        assert_eq!(
            Element::new(1, ElementKind::Storage).status,
            ElementStatus::Active
        );
    }
}
