//! The persistence boundary: named-layout storage and write debouncing.
//!
//! The store is a key-value mapping of model name -> serialized layout,
//! plus two well-known keys: the currently active model name and a
//! user-customizable application title. The editor core only talks to
//! the [`LayoutStore`] trait; store failures are surfaced to the caller
//! and never corrupt in-memory editor state.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use shopfloor_core::constants::AUTOSAVE_DEBOUNCE_MS;
use shopfloor_core::error::{Error, Result};

use crate::serialization::LayoutFile;

/// Key-value storage boundary for named layouts.
pub trait LayoutStore {
    fn save_layout(&mut self, name: &str, file: &LayoutFile) -> Result<()>;
    fn load_layout(&self, name: &str) -> Result<LayoutFile>;
    fn delete_layout(&mut self, name: &str) -> Result<()>;
    /// Stored model names, sorted.
    fn list_layouts(&self) -> Result<Vec<String>>;
    fn active_layout(&self) -> Result<Option<String>>;
    fn set_active_layout(&mut self, name: &str) -> Result<()>;
    fn app_title(&self) -> Result<Option<String>>;
    fn set_app_title(&mut self, title: &str) -> Result<()>;
}

/// In-memory store, used in tests and as the offline fallback.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    layouts: BTreeMap<String, LayoutFile>,
    active: Option<String>,
    title: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LayoutStore for MemoryStore {
    fn save_layout(&mut self, name: &str, file: &LayoutFile) -> Result<()> {
        self.layouts.insert(name.to_string(), file.clone());
        Ok(())
    }

    fn load_layout(&self, name: &str) -> Result<LayoutFile> {
        self.layouts
            .get(name)
            .cloned()
            .ok_or_else(|| Error::LayoutNotFound {
                name: name.to_string(),
            })
    }

    fn delete_layout(&mut self, name: &str) -> Result<()> {
        self.layouts.remove(name);
        Ok(())
    }

    fn list_layouts(&self) -> Result<Vec<String>> {
        Ok(self.layouts.keys().cloned().collect())
    }

    fn active_layout(&self) -> Result<Option<String>> {
        Ok(self.active.clone())
    }

    fn set_active_layout(&mut self, name: &str) -> Result<()> {
        self.active = Some(name.to_string());
        Ok(())
    }

    fn app_title(&self) -> Result<Option<String>> {
        Ok(self.title.clone())
    }

    fn set_app_title(&mut self, title: &str) -> Result<()> {
        self.title = Some(title.to_string());
        Ok(())
    }
}

const META_FILE: &str = "editor.json";
const LAYOUT_SUFFIX: &str = ".layout.json";

#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
struct StoreMeta {
    #[serde(default)]
    active: Option<String>,
    #[serde(default)]
    title: Option<String>,
}

/// Directory-backed store: one JSON document per model name plus a
/// small metadata file for the active-model and title keys.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Opens (creating if needed) a store rooted at `dir`.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        std::fs::create_dir_all(dir.as_ref())?;
        Ok(Self {
            dir: dir.as_ref().to_path_buf(),
        })
    }

    fn layout_path(&self, name: &str) -> Result<PathBuf> {
        // Model names become file names; anything that would escape the
        // store directory is rejected.
        if name.is_empty() || name.contains(['/', '\\', '\0']) || name == "." || name == ".." {
            return Err(Error::InvalidName {
                name: name.to_string(),
            });
        }
        Ok(self.dir.join(format!("{name}{LAYOUT_SUFFIX}")))
    }

    fn read_meta(&self) -> Result<StoreMeta> {
        let path = self.dir.join(META_FILE);
        if !path.exists() {
            return Ok(StoreMeta::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn write_meta(&self, meta: &StoreMeta) -> Result<()> {
        let json = serde_json::to_string_pretty(meta)?;
        std::fs::write(self.dir.join(META_FILE), json)?;
        Ok(())
    }
}

impl LayoutStore for JsonFileStore {
    fn save_layout(&mut self, name: &str, file: &LayoutFile) -> Result<()> {
        let path = self.layout_path(name)?;
        let json = serde_json::to_string_pretty(file)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    fn load_layout(&self, name: &str) -> Result<LayoutFile> {
        let path = self.layout_path(name)?;
        if !path.exists() {
            return Err(Error::LayoutNotFound {
                name: name.to_string(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn delete_layout(&mut self, name: &str) -> Result<()> {
        let path = self.layout_path(name)?;
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }

    fn list_layouts(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };
            if let Some(name) = file_name.strip_suffix(LAYOUT_SUFFIX) {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn active_layout(&self) -> Result<Option<String>> {
        Ok(self.read_meta()?.active)
    }

    fn set_active_layout(&mut self, name: &str) -> Result<()> {
        let mut meta = self.read_meta()?;
        meta.active = Some(name.to_string());
        self.write_meta(&meta)
    }

    fn app_title(&self) -> Result<Option<String>> {
        Ok(self.read_meta()?.title)
    }

    fn set_app_title(&mut self, title: &str) -> Result<()> {
        let mut meta = self.read_meta()?;
        meta.title = Some(title.to_string());
        self.write_meta(&meta)
    }
}

/// Write debouncer: a flush becomes due once a quiet window has passed
/// since the last change. A later change simply restarts the window
/// (last-write-wins); there is nothing to cancel.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    dirty_since: Option<Instant>,
}

impl Debouncer {
    /// Creates a debouncer with the default autosave window.
    pub fn new() -> Self {
        Self::with_window(Duration::from_millis(AUTOSAVE_DEBOUNCE_MS))
    }

    pub fn with_window(window: Duration) -> Self {
        Self {
            window,
            dirty_since: None,
        }
    }

    /// Records a change at `now`, restarting the quiet window.
    pub fn mark(&mut self, now: Instant) {
        self.dirty_since = Some(now);
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty_since.is_some()
    }

    /// Whether the quiet window has elapsed and a flush is due.
    pub fn is_due(&self, now: Instant) -> bool {
        self.dirty_since
            .is_some_and(|since| now.saturating_duration_since(since) >= self.window)
    }

    /// Clears the pending state after a successful flush.
    pub fn clear(&mut self) {
        self.dirty_since = None;
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}
