//! Key/value configuration backends.
//!
//! Values are strings grouped by a config group name. Writes are treated
//! as infallible by callers: the file backend logs persistence failures
//! and keeps its in-memory view.

use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use swapper_core::ConfigError;

/// String key/value storage grouped by config group.
pub trait ConfigBackend: Send + Sync {
    /// Read a value. Returns None if the key is unset.
    fn get(&self, group: &str, key: &str) -> Option<String>;

    /// Write a value, replacing any existing one.
    fn set(&self, group: &str, key: &str, value: &str);

    /// Remove a value. No-op if the key is unset.
    fn unset(&self, group: &str, key: &str);
}

/// Composite key: (group, key).
type EntryKey = (String, String);

/// In-memory backend.
#[derive(Default)]
pub struct MemoryBackend {
    entries: RwLock<HashMap<EntryKey, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored values across all groups.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl ConfigBackend for MemoryBackend {
    fn get(&self, group: &str, key: &str) -> Option<String> {
        self.entries
            .read()
            .get(&(group.to_string(), key.to_string()))
            .cloned()
    }

    fn set(&self, group: &str, key: &str, value: &str) {
        self.entries
            .write()
            .insert((group.to_string(), key.to_string()), value.to_string());
    }

    fn unset(&self, group: &str, key: &str) {
        self.entries
            .write()
            .remove(&(group.to_string(), key.to_string()));
    }
}

/// Group name -> key -> value, as laid out in the TOML file.
type Tables = BTreeMap<String, BTreeMap<String, String>>;

/// TOML file backend.
///
/// The whole file is loaded on open and rewritten after every mutation:
///
/// ```toml
/// [bankmenuentryswapper]
/// bank_shift_995 = "3"
/// ```
pub struct FileBackend {
    path: PathBuf,
    tables: RwLock<Tables>,
}

impl FileBackend {
    /// Open the file at `path`. A missing file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let tables = if path.exists() {
            let text = std::fs::read_to_string(&path)?;
            toml::from_str(&text).map_err(|e| ConfigError::Parse(e.to_string()))?
        } else {
            Tables::new()
        };

        tracing::info!("Opened preference file {:?}", path);
        Ok(Self {
            path,
            tables: RwLock::new(tables),
        })
    }

    /// Open the file at the default location.
    pub fn open_default() -> Result<Self, ConfigError> {
        let path = swapper_core::preferences_path().ok_or(ConfigError::NoConfigDir)?;
        Self::open(path)
    }

    fn persist(&self, tables: &Tables) {
        if let Err(e) = write_tables(&self.path, tables) {
            tracing::error!("Failed to write preferences to {:?}: {}", self.path, e);
        }
    }
}

fn write_tables(path: &Path, tables: &Tables) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let text = toml::to_string(tables).map_err(|e| ConfigError::Parse(e.to_string()))?;
    std::fs::write(path, text)?;
    Ok(())
}

impl ConfigBackend for FileBackend {
    fn get(&self, group: &str, key: &str) -> Option<String> {
        self.tables.read().get(group)?.get(key).cloned()
    }

    fn set(&self, group: &str, key: &str, value: &str) {
        let mut tables = self.tables.write();
        tables
            .entry(group.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
        self.persist(&tables);
    }

    fn unset(&self, group: &str, key: &str) {
        let mut tables = self.tables.write();
        let Some(table) = tables.get_mut(group) else {
            return;
        };
        if table.remove(key).is_none() {
            return;
        }
        if table.is_empty() {
            tables.remove(group);
        }
        self.persist(&tables);
    }
}
