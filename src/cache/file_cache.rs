use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, trace};

use super::SettingsCache;
use crate::utils::{AppError, AppResult};

/// Settings cache storing one pretty-printed JSON file per key
#[derive(Debug, Clone)]
pub struct JsonFileCache {
    directory: PathBuf,
}

impl JsonFileCache {
    /// Open the cache rooted at `directory`, creating it when missing
    pub fn new(directory: impl Into<PathBuf>) -> AppResult<Self> {
        let directory = directory.into();
        fs::create_dir_all(&directory)?;
        debug!("Settings cache at {:?}", directory);
        Ok(Self { directory })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Filename-safe representation of a key
    fn path_for(&self, key: &str) -> AppResult<PathBuf> {
        if key.trim().is_empty() {
            return Err(AppError::Cache("empty cache key".to_string()));
        }
        let name = key.replace(['/', '\\', ':', '*', '?', '"', '<', '>', '|'], "_");
        Ok(self.directory.join(format!("{}.json", name)))
    }
}

impl SettingsCache for JsonFileCache {
    fn get(&self, key: &str) -> AppResult<Option<Value>> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)?;
        let value = serde_json::from_str(&contents)?;
        trace!("Read {} from {:?}", key, path);
        Ok(Some(value))
    }

    fn set(&self, key: &str, value: Value) -> AppResult<()> {
        let path = self.path_for(key)?;
        let contents = serde_json::to_string_pretty(&value)?;
        fs::write(&path, contents)?;
        trace!("Wrote {} to {:?}", key, path);
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
