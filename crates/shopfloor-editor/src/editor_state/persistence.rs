//! Model switching and debounced autosave for the editor state.
//!
//! A store failure is logged and surfaced; it never corrupts the
//! in-memory layout, so the editor stays usable while the store is
//! unreachable.

use std::time::Instant;

use shopfloor_core::error::{Error, Result};

use super::EditorState;
use crate::layout::Layout;
use crate::persistence::LayoutStore;
use crate::serialization::LayoutFile;
use crate::transform::Gesture;

impl EditorState {
    /// The model name the current layout is stored under.
    pub fn active_model(&self) -> &str {
        &self.active_model
    }

    /// Opens an editor on the store's active model, falling back to an
    /// empty default model when nothing is stored yet.
    pub fn from_store(store: &dyn LayoutStore) -> Result<Self> {
        let mut editor = Self::new();
        if let Some(name) = store.active_layout()? {
            editor.active_model = name;
        }
        editor.layout = match store.load_layout(&editor.active_model) {
            Ok(file) => {
                editor.created = Some(file.metadata.created);
                file.into_layout()
            }
            Err(Error::LayoutNotFound { .. }) => Layout::new(),
            Err(err) => return Err(err),
        };
        Ok(editor)
    }

    /// Writes the current layout under the active model name and marks
    /// it as the store's active model. The creation timestamp survives
    /// resaves; only `modified` is refreshed.
    pub fn save_to(&mut self, store: &mut dyn LayoutStore) -> Result<()> {
        let mut file = LayoutFile::from_layout(&self.active_model, &self.layout);
        match self.created {
            Some(created) => file.metadata.created = created,
            None => self.created = Some(file.metadata.created),
        }
        store.save_layout(&self.active_model, &file)?;
        store.set_active_layout(&self.active_model)?;
        self.modified = false;
        self.autosave.clear();
        Ok(())
    }

    /// Flushes to the store if the debounce window has elapsed. Returns
    /// whether a save happened. On failure the dirty state is kept, so
    /// the next tick retries.
    pub fn autosave_tick(&mut self, store: &mut dyn LayoutStore, now: Instant) -> bool {
        if !self.autosave.is_due(now) {
            return false;
        }
        match self.save_to(store) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(model = %self.active_model, %err, "autosave failed, keeping in-memory state");
                false
            }
        }
    }

    /// Swaps the whole layout for another named model: saves the
    /// current one if modified, loads (or creates) the target, and
    /// resets selection, history, and any in-flight gesture.
    pub fn switch_model(&mut self, store: &mut dyn LayoutStore, name: &str) -> Result<()> {
        if self.modified {
            self.save_to(store)?;
        }

        let (layout, created) = match store.load_layout(name) {
            Ok(file) => (file.into_layout(), Some(file.metadata.created)),
            Err(Error::LayoutNotFound { .. }) => (Layout::new(), None),
            Err(err) => return Err(err),
        };

        self.layout = layout;
        self.created = created;
        self.selection.clear();
        self.history.clear();
        self.gesture = Gesture::Idle;
        self.clipboard.clear();
        self.active_model = name.to_string();
        self.modified = false;
        self.autosave.clear();
        store.set_active_layout(name)?;
        tracing::debug!(model = name, "switched active model");
        Ok(())
    }
}
