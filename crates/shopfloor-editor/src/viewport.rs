//! Viewport and coordinate transformation.
//!
//! Handles conversion between screen coordinates (pointer events) and
//! world coordinates (element positions), and manages pan/zoom. Screen
//! and world share the same orientation; the transform is a uniform
//! scale plus a pan offset:
//!
//! ```text
//! world = (screen - pan) / zoom
//! screen = world * zoom + pan
//! ```

use serde::{Deserialize, Serialize};
use shopfloor_core::constants::{MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
use shopfloor_core::geometry::{Bounds, Point};

/// The viewport transformation state (pan and uniform zoom).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pan_x: f64,
    pan_y: f64,
    zoom: f64,
}

impl Viewport {
    /// Creates a viewport at 1:1 zoom with no pan.
    pub fn new() -> Self {
        Self {
            pan_x: 0.0,
            pan_y: 0.0,
            zoom: 1.0,
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level, clamped to the sane range.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    /// Pans by a screen-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Converts screen coordinates to world coordinates.
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.pan_x) / self.zoom,
            (screen.y - self.pan_y) / self.zoom,
        )
    }

    /// Converts world coordinates to screen coordinates.
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point::new(
            world.x * self.zoom + self.pan_x,
            world.y * self.zoom + self.pan_y,
        )
    }

    /// Applies a multiplicative zoom while keeping the world point under
    /// `pointer` (a screen position) fixed on screen.
    pub fn zoom_at(&mut self, pointer: Point, factor: f64) {
        let anchor = self.screen_to_world(pointer);
        self.set_zoom(self.zoom * factor);
        // screen = world * zoom + pan, solved for pan at the anchor
        self.pan_x = pointer.x - anchor.x * self.zoom;
        self.pan_y = pointer.y - anchor.y * self.zoom;
    }

    /// Zooms in one wheel notch at the pointer.
    pub fn zoom_in_at(&mut self, pointer: Point) {
        self.zoom_at(pointer, ZOOM_STEP);
    }

    /// Zooms out one wheel notch at the pointer.
    pub fn zoom_out_at(&mut self, pointer: Point) {
        self.zoom_at(pointer, 1.0 / ZOOM_STEP);
    }

    /// World-space rectangle currently visible in a view of the given
    /// screen size.
    pub fn visible_world(&self, view_width: f64, view_height: f64) -> Bounds {
        let top_left = self.screen_to_world(Point::new(0.0, 0.0));
        let bottom_right = self.screen_to_world(Point::new(view_width, view_height));
        Bounds::from_corners(top_left, bottom_right)
    }

    /// Resets to 1:1 zoom and no pan.
    pub fn reset(&mut self) {
        self.pan_x = 0.0;
        self.pan_y = 0.0;
        self.zoom = 1.0;
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}
