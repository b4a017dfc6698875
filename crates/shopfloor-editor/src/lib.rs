//! # Shopfloor Editor
//!
//! Interactive layout editor core for a factory floor: place, select,
//! transform, and persist typed elements (machines, conveyors, workers,
//! labels, areas) on a pannable/zoomable canvas.
//!
//! ## Architecture
//!
//! ```text
//! EditorState (facade, input routing)
//!   ├── Layout (elements + connections + viewport)
//!   │     └── ElementStore (flat id-keyed scene)
//!   ├── SelectionSet (ordered ids, marquee)
//!   ├── HistoryStack (bounded layout snapshots)
//!   └── Debouncer / LayoutStore (named-model persistence)
//!
//! Renderer (layout -> drawable primitives)
//! ```
//!
//! Pointer events arrive in screen space and are converted through the
//! [`viewport::Viewport`] before touching the model. Each gesture is
//! exclusively a drag, a marquee, or a pan; mutating gestures push one
//! pre-mutation snapshot, viewport-only gestures push none.

pub mod editor_state;
pub mod element_store;
pub mod history;
pub mod layout;
pub mod model;
pub mod persistence;
pub mod renderer;
pub mod selection;
pub mod serialization;
pub mod transform;
pub mod viewport;

pub use editor_state::{EditorState, PointerButton, PointerEvent, Shortcut};
pub use element_store::ElementStore;
pub use history::HistoryStack;
pub use layout::Layout;
pub use model::{Connection, ConnectionKind, Element, ElementKind, ElementStatus};
pub use persistence::{Debouncer, JsonFileStore, LayoutStore, MemoryStore};
pub use renderer::{RenderPrimitive, Renderer};
pub use selection::SelectionSet;
pub use serialization::{LayoutFile, LayoutMetadata, ViewportState};
pub use transform::{bake_transform, Gesture, NodeTransform};
pub use viewport::Viewport;
