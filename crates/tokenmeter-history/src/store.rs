//! History and settings stores backed by JSON files

use crate::error::{HistoryError, Result};
use crate::io::{read_json_or_default, write_json};
use crate::paths::Paths;
use crate::types::{HistoryItem, HistoryUpdate, Settings};
use std::path::{Path, PathBuf};

/// Most recent records kept on disk
pub const MAX_HISTORY: usize = 50;

/// Newest-first list of saved estimates
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(paths: &Paths) -> Self {
        Self::open(paths.history_file())
    }

    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records, newest first
    pub fn list(&self) -> Result<Vec<HistoryItem>> {
        Ok(read_json_or_default(&self.path)?)
    }

    /// Prepend `item`, evicting the oldest records beyond `MAX_HISTORY`
    pub fn save(&self, item: HistoryItem) -> Result<()> {
        let mut items = self.list()?;
        items.insert(0, item);
        if items.len() > MAX_HISTORY {
            tracing::debug!(evicted = items.len() - MAX_HISTORY, "history full");
            items.truncate(MAX_HISTORY);
        }
        self.write(&items)
    }

    pub fn get(&self, id: &str) -> Result<HistoryItem> {
        self.list()?
            .into_iter()
            .find(|item| item.id == id)
            .ok_or_else(|| HistoryError::NotFound(id.to_string()))
    }

    /// Apply a partial update to the record with `id`
    pub fn update(&self, id: &str, update: &HistoryUpdate) -> Result<HistoryItem> {
        let mut items = self.list()?;
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| HistoryError::NotFound(id.to_string()))?;
        update.apply(item);
        let updated = item.clone();
        self.write(&items)?;
        Ok(updated)
    }

    pub fn remove(&self, id: &str) -> Result<()> {
        let mut items = self.list()?;
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Err(HistoryError::NotFound(id.to_string()));
        }
        self.write(&items)
    }

    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, items: &[HistoryItem]) -> Result<()> {
        write_json(&self.path, &items)?;
        tracing::info!(records = items.len(), path = %self.path.display(), "history written");
        Ok(())
    }
}

/// Records whose text contains `query`, ignoring case
pub fn search<'a>(items: &'a [HistoryItem], query: &str) -> Vec<&'a HistoryItem> {
    let query = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.text.to_lowercase().contains(&query))
        .collect()
}

/// Persisted user preferences
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(paths: &Paths) -> Self {
        Self::open(paths.settings_file())
    }

    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Saved settings, or defaults when nothing usable is on disk
    pub fn load(&self) -> Result<Settings> {
        Ok(read_json_or_default(&self.path)?)
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        write_json(&self.path, settings)?;
        Ok(())
    }
}
