//! Key/value store for small UI settings such as per-list sort preferences.

pub mod config;
pub mod file_cache;

pub use config::SettingsCacheConfig;
pub use file_cache::JsonFileCache;

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::utils::{AppError, AppResult};

pub trait SettingsCache: Send + Sync {
    fn get(&self, key: &str) -> AppResult<Option<Value>>;

    fn set(&self, key: &str, value: Value) -> AppResult<()>;

    fn remove(&self, key: &str) -> AppResult<()>;
}

/// Settings cache that forgets everything when dropped
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, Value>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: T) -> AppError {
    AppError::Cache("memory cache lock poisoned".to_string())
}

impl SettingsCache for MemoryCache {
    fn get(&self, key: &str) -> AppResult<Option<Value>> {
        Ok(self.entries.read().map_err(poisoned)?.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> AppResult<()> {
        self.entries
            .write()
            .map_err(poisoned)?
            .insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.entries.write().map_err(poisoned)?.remove(key);
        Ok(())
    }
}

/// Build the cache described by `config`
pub fn open(config: &SettingsCacheConfig) -> AppResult<Arc<dyn SettingsCache>> {
    if config.persist {
        Ok(Arc::new(JsonFileCache::new(config.cache_directory()?)?))
    } else {
        Ok(Arc::new(MemoryCache::new()))
    }
}

/// Read and decode a typed value
pub fn load_settings<T: DeserializeOwned>(
    cache: &dyn SettingsCache,
    key: &str,
) -> AppResult<Option<T>> {
    match cache.get(key)? {
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
        None => Ok(None),
    }
}

pub fn store_settings<T: Serialize>(cache: &dyn SettingsCache, key: &str, value: &T) -> AppResult<()> {
    cache.set(key, serde_json::to_value(value)?)
}
