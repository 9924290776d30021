//! Settings of the confctl tool itself.
//!
//! Where configuration objects are stored, how loudly to log and whether
//! to run in simulate mode. Settings are read from a TOML file; every field
//! has a default so the file is optional.

mod general;
mod loading;
mod paths;
mod storage;

#[cfg(test)]
mod tests;

pub use general::{GeneralSettings, LogLevel};
pub use paths::ConfigPaths;
pub use storage::{StorageLayout, StorageSettings};

use serde::{Deserialize, Serialize};

/// Main settings structure for confctl.
///
/// Represents the complete settings schema that can be loaded from a TOML
/// file. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Settings {
    /// General tool behavior.
    #[serde(default)]
    pub general: GeneralSettings,

    /// Location of configuration storage.
    #[serde(default)]
    pub storage: StorageSettings,
}
