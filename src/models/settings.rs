use serde::{Deserialize, Serialize};

/// Top level section of the Kodi settings tree, e.g. "videos"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingSection {
    pub id: String,
    pub label: String,
}

/// A category inside a settings section, e.g. "videos / library"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingCategory {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub help: String,
}
