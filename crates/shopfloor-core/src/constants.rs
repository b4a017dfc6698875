//! Editor-wide constants.

/// Smallest width or height an element may have, in world units.
/// Transforms that would shrink a dimension below this are floored.
pub const MIN_ELEMENT_SIZE: f64 = 5.0;

/// Viewport zoom bounds; clamping avoids degenerate transforms at
/// extreme scales.
pub const MIN_ZOOM: f64 = 0.05;
pub const MAX_ZOOM: f64 = 20.0;

/// Multiplicative zoom step for one wheel notch.
pub const ZOOM_STEP: f64 = 1.1;

/// Maximum number of layout snapshots kept for undo.
pub const HISTORY_DEPTH: usize = 30;

/// Offset applied to pasted elements, relative to the copied originals.
pub const PASTE_OFFSET: f64 = 20.0;

/// Quiet window before a pending layout change is flushed to storage.
pub const AUTOSAVE_DEBOUNCE_MS: u64 = 1000;

/// World-unit spacing of the background grid.
pub const GRID_SPACING: f64 = 50.0;

/// Where newly added elements land before the user drags them.
pub const DEFAULT_ELEMENT_X: f64 = 100.0;
pub const DEFAULT_ELEMENT_Y: f64 = 100.0;
