//! Saved level library
//!
//! Named custom levels, persisted to LocalStorage on the web. Supports JSON
//! export and merge-on-import so stages can be shared as files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{MakerError, Result};
use crate::level::Grid;

/// Name -> level map, sorted by name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelLibrary {
    levels: BTreeMap<String, Grid>,
}

impl LevelLibrary {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "custom_levels";

    pub fn new() -> Self {
        Self::default()
    }

    /// Store a level under `name`, replacing any level with that name
    pub fn save(&mut self, name: &str, level: &Grid) {
        self.levels.insert(name.to_string(), level.clone());
    }

    pub fn get(&self, name: &str) -> Option<&Grid> {
        self.levels.get(name)
    }

    /// Remove a level; returns it if it existed
    pub fn delete(&mut self, name: &str) -> Option<Grid> {
        self.levels.remove(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.levels.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Pretty JSON object of name -> rows, suitable for a download
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Merge levels from an exported file. Imported names overwrite existing
    /// ones. Nothing is merged if any entry is malformed.
    pub fn import_json(&mut self, json: &str) -> Result<usize> {
        let imported = LevelLibrary::try_from(json)?;
        let count = imported.len();
        self.levels.extend(imported.levels);
        log::info!("Imported {count} levels");
        Ok(count)
    }

    /// Load the library from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str::<LevelLibrary>(&json) {
                    Ok(library) => {
                        log::info!("Loaded {} saved levels", library.len());
                        return library;
                    }
                    Err(e) => log::warn!("Saved levels unreadable, starting fresh: {e}"),
                }
            }
        }

        log::info!("No saved levels found, starting fresh");
        Self::new()
    }

    /// Save the library to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn store(&self) -> Result<()> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| MakerError::Storage("LocalStorage unavailable".into()))?;
        let json = serde_json::to_string(self)?;
        storage
            .set_item(Self::STORAGE_KEY, &json)
            .map_err(|e| MakerError::Storage(format!("{e:?}")))?;
        log::info!("Saved levels stored ({} entries)", self.len());
        Ok(())
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn store(&self) -> Result<()> {
        // No-op for native
        Ok(())
    }
}

/// Reject anything that isn't an object of string arrays before merging
impl TryFrom<&str> for LevelLibrary {
    type Error = MakerError;

    fn try_from(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(MakerError::Storage("level file must be a JSON object".into()));
        }
        Ok(serde_json::from_value(value)?)
    }
}
