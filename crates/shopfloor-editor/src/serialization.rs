//! Serialization for layout files.
//!
//! One [`LayoutFile`] is the stored form of one named model: versioned
//! JSON with metadata, viewport state, every element field (including
//! the optional variant-specific ones), and the connection list.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::layout::Layout;
use crate::model::{Connection, Element};
use crate::viewport::Viewport;

/// Layout file format version.
const FILE_FORMAT_VERSION: &str = "1.0";

/// Complete stored layout for one model name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutFile {
    pub version: String,
    pub metadata: LayoutMetadata,
    pub viewport: ViewportState,
    pub elements: Vec<Element>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

/// Layout metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
}

/// Stored viewport state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewportState {
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
}

impl LayoutFile {
    /// Creates an empty layout file for a model name.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: LayoutMetadata {
                name: name.into(),
                created: now,
                modified: now,
                description: String::new(),
            },
            viewport: ViewportState {
                zoom: 1.0,
                pan_x: 0.0,
                pan_y: 0.0,
            },
            elements: Vec::new(),
            connections: Vec::new(),
        }
    }

    /// Captures the current layout under a model name. Elements are
    /// stored in draw order so loading reproduces stacking.
    pub fn from_layout(name: impl Into<String>, layout: &Layout) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: LayoutMetadata {
                name: name.into(),
                created: now,
                modified: now,
                description: String::new(),
            },
            viewport: ViewportState {
                zoom: layout.viewport.zoom(),
                pan_x: layout.viewport.pan_x(),
                pan_y: layout.viewport.pan_y(),
            },
            elements: layout.elements.iter().cloned().collect(),
            connections: layout.connections.clone(),
        }
    }

    /// Rebuilds a live layout. Connections with dangling endpoints are
    /// dropped (referential integrity is advisory), and the id counter
    /// resumes past the highest loaded id.
    pub fn into_layout(&self) -> Layout {
        let mut layout = Layout::new();
        for element in &self.elements {
            layout.elements.insert(element.clone());
        }
        let max_id = self.elements.iter().map(|e| e.id).max().unwrap_or(0);
        layout.elements.set_next_id(max_id + 1);

        for connection in &self.connections {
            if layout.elements.contains(connection.from) && layout.elements.contains(connection.to)
            {
                layout.connections.push(*connection);
            } else {
                tracing::warn!(
                    from = connection.from,
                    to = connection.to,
                    "dropping connection with missing endpoint"
                );
            }
        }

        let mut viewport = Viewport::new();
        viewport.set_zoom(self.viewport.zoom);
        viewport.set_pan(self.viewport.pan_x, self.viewport.pan_y);
        layout.viewport = viewport;
        layout
    }

    /// Saves the layout file as pretty JSON.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize layout")?;
        std::fs::write(path.as_ref(), json).context("Failed to write layout file")?;
        Ok(())
    }

    /// Loads a layout file, refreshing the modified timestamp.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read layout file")?;
        let mut file: LayoutFile =
            serde_json::from_str(&content).context("Failed to parse layout file")?;
        file.metadata.modified = Utc::now();
        Ok(file)
    }
}
