//! Persistence boundary: configurations as self-describing JSON blobs in a
//! key-value store.
//!
//! The store itself is a collaborator; [`MemoryStore`] and [`FileStore`] cover
//! embedding and tests. Blobs use the camelCase field names of the
//! configuration records.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use blake3::Hash;

use crate::error::{GridError, Result};
use crate::model::GridConfiguration;

/// Key the editor saves under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "gridGeneratorConfig";

/// Key-value store holding serialized configurations.
pub trait ConfigStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Serialize a configuration into a compact JSON blob.
pub fn encode(config: &GridConfiguration) -> Result<String> {
    Ok(serde_json::to_string(config)?)
}

/// Parse a blob back into a configuration.
///
/// Only well-formedness is checked. The id counter is raised past any id
/// already present so later additions cannot collide.
pub fn decode(blob: &str) -> Result<GridConfiguration> {
    let mut config: GridConfiguration = serde_json::from_str(blob)?;
    config.reconcile_item_counter();
    Ok(config)
}

/// Content hash of the serialized configuration.
pub fn fingerprint(config: &GridConfiguration) -> Result<Hash> {
    let bytes = serde_json::to_vec(config)?;
    Ok(blake3::hash(&bytes))
}

/// In-process store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let guard = self
            .entries
            .read()
            .map_err(|_| GridError::Storage("memory store poisoned".to_string()))?;
        Ok(guard.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut guard = self
            .entries
            .write()
            .map_err(|_| GridError::Storage("memory store poisoned".to_string()))?;
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        let file: String = key
            .chars()
            .map(|c| if matches!(c, '/' | '\\' | ':') { '_' } else { c })
            .collect();
        self.dir.join(format!("{file}.json"))
    }
}

impl ConfigStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}
