use std::{fs, path::Path};

use tracing::debug;

use super::{ConfigPaths, Settings};
use crate::{ConfctlError, Result};

impl Settings {
    /// Loads settings from `explicit`, or from the default settings file if it
    /// exists, or falls back to defaults.
    ///
    /// # Errors
    /// Returns an error if the chosen file cannot be read or parsed. A missing
    /// explicit file is an error; a missing default file is not.
    pub fn load(explicit: Option<&Path>) -> Result<Settings> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match ConfigPaths::settings_file() {
            Ok(path) if path.is_file() => Self::from_file(&path),
            _ => {
                debug!("No settings file found, using defaults");
                Ok(Settings::default())
            }
        }
    }

    /// Reads and parses one settings file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid settings TOML.
    pub fn from_file(path: &Path) -> Result<Settings> {
        let content = fs::read_to_string(path).map_err(|e| ConfctlError::io(e, path))?;
        debug!(path = %path.display(), "Loading settings");

        Self::parse(&content, Some(path))
    }

    /// Parses settings TOML.
    ///
    /// # Errors
    /// Returns `ConfctlError::TomlParseError` for malformed or mistyped input.
    pub fn parse(content: &str, path: Option<&Path>) -> Result<Settings> {
        toml::from_str(content).map_err(|e| ConfctlError::toml_parse(e, path))
    }
}
