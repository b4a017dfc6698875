//! Editor state facade for UI integration.
//!
//! Owns the current layout, selection, history, clipboard, and the
//! in-flight gesture, and routes input events into mutations. Split
//! into submodules:
//! - `elements`: element creation, deletion, clipboard
//! - `input`: pointer/wheel/keyboard event routing
//! - `history`: undo/redo
//! - `persistence`: model switching and debounced autosave

mod elements;
mod history;
mod input;
mod persistence;

pub use input::{PointerButton, PointerEvent, Shortcut};

use std::time::Instant;

use chrono::{DateTime, Utc};

use crate::history::HistoryStack;
use crate::layout::Layout;
use crate::model::Element;
use crate::persistence::Debouncer;
use crate::selection::SelectionSet;
use crate::transform::Gesture;

/// The whole interactive editor: one current layout plus everything
/// needed to mutate it in response to input.
#[derive(Debug)]
pub struct EditorState {
    pub layout: Layout,
    pub selection: SelectionSet,
    history: HistoryStack,
    clipboard: Vec<Element>,
    gesture: Gesture,
    autosave: Debouncer,
    text_input_focused: bool,
    active_model: String,
    modified: bool,
    /// Creation timestamp of the stored layout, carried across resaves.
    created: Option<DateTime<Utc>>,
}

impl EditorState {
    /// Creates an editor with an empty layout under the default model
    /// name.
    pub fn new() -> Self {
        Self {
            layout: Layout::new(),
            selection: SelectionSet::new(),
            history: HistoryStack::new(),
            clipboard: Vec::new(),
            gesture: Gesture::Idle,
            autosave: Debouncer::new(),
            text_input_focused: false,
            active_model: "default".to_string(),
            modified: false,
            created: None,
        }
    }

    /// The in-flight gesture, if any.
    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    /// Clipboard contents (value copies captured at copy time).
    pub fn clipboard(&self) -> &[Element] {
        &self.clipboard
    }

    /// Whether the layout has unsaved changes.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Shortcuts are suppressed while a text input has focus, so typing
    /// an element name never triggers delete/undo.
    pub fn set_text_input_focused(&mut self, focused: bool) {
        self.text_input_focused = focused;
    }

    pub fn text_input_focused(&self) -> bool {
        self.text_input_focused
    }

    /// Marks the layout dirty, restarting the autosave quiet window.
    pub(crate) fn touch(&mut self) {
        self.modified = true;
        self.autosave.mark(Instant::now());
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
