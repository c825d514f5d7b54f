use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::utils::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsCacheConfig {
    /// Keep settings on disk; otherwise they only live for the session
    #[serde(default = "default_persist")]
    pub persist: bool,

    /// Directory holding one JSON file per key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_directory: Option<PathBuf>,
}

impl Default for SettingsCacheConfig {
    fn default() -> Self {
        Self {
            persist: default_persist(),
            cache_directory: None,
        }
    }
}

impl SettingsCacheConfig {
    /// Get the cache directory path, using platform-specific defaults if not set
    pub fn cache_directory(&self) -> AppResult<PathBuf> {
        match self.cache_directory {
            Some(ref dir) => Ok(dir.clone()),
            None => Self::default_cache_directory(),
        }
    }

    pub fn default_cache_directory() -> AppResult<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            let cache_dir = dirs::cache_dir()
                .or_else(|| dirs::home_dir().map(|h| h.join("Library/Caches")))
                .ok_or_else(|| AppError::Cache("Failed to get cache directory".to_string()))?;
            Ok(cache_dir.join("Komodio").join("settings"))
        }
        #[cfg(not(target_os = "macos"))]
        {
            let cache_dir = dirs::cache_dir()
                .ok_or_else(|| AppError::Cache("Failed to get cache directory".to_string()))?;
            Ok(cache_dir.join("komodio").join("settings"))
        }
    }
}

fn default_persist() -> bool {
    true
}
