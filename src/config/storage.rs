use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Where configuration objects live.
///
/// Relative paths are resolved against the site root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory of active configuration objects.
    pub active: PathBuf,

    /// Directory of staged configuration objects, read with `--source sync`.
    pub sync: Option<PathBuf>,

    /// YAML file of values layered over active configuration on read.
    pub overrides: Option<PathBuf>,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            active: PathBuf::from("config/active"),
            sync: Some(PathBuf::from("config/sync")),
            overrides: Some(PathBuf::from("config/overrides.yml")),
        }
    }
}

/// Storage paths resolved against a site root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    /// Directory of active configuration objects.
    pub active: PathBuf,
    /// Directory of staged configuration objects.
    pub sync: Option<PathBuf>,
    /// Overrides document.
    pub overrides: Option<PathBuf>,
}

impl StorageSettings {
    /// Resolves relative paths against `root`. Absolute paths are kept.
    pub fn resolve(&self, root: &Path) -> StorageLayout {
        StorageLayout {
            active: root.join(&self.active),
            sync: self.sync.as_ref().map(|path| root.join(path)),
            overrides: self.overrides.as_ref().map(|path| root.join(path)),
        }
    }
}
