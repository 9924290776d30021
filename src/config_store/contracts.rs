use serde_yaml::Value;

use super::ConfigError;

/// Source of configuration objects.
///
/// Handles are obtained fresh for every command invocation and are never
/// cached by the store.
pub trait ConfigStore: Send + Sync {
    /// Opens `name` for reading with overrides applied.
    ///
    /// The returned handle is immutable: `save` fails on it.
    ///
    /// # Errors
    /// Returns `ConfigError` if the stored document is unreadable.
    fn get(&self, name: &str) -> Result<Box<dyn ConfigHandle>, ConfigError>;

    /// Opens `name` for mutation, bypassing overrides.
    ///
    /// # Errors
    /// Returns `ConfigError` if the stored document is unreadable.
    fn get_editable(&self, name: &str) -> Result<Box<dyn ConfigHandle>, ConfigError>;

    /// Lists stored configuration names starting with `prefix`, sorted.
    ///
    /// # Errors
    /// Returns `ConfigError::Persistence` if the storage cannot be enumerated.
    fn list_all(&self, prefix: &str) -> Result<Vec<String>, ConfigError>;
}

/// One configuration object held in memory for the duration of a command.
pub trait ConfigHandle {
    /// Name of the configuration object.
    fn name(&self) -> &str;

    /// Whether the object does not exist in storage yet.
    fn is_new(&self) -> bool;

    /// Reads the whole tree (`None`) or the value at a dotted key path.
    ///
    /// Returns `None` when the path does not resolve.
    fn get(&self, key: Option<&str>) -> Option<Value>;

    /// Writes `value` at a dotted key path in memory.
    ///
    /// # Errors
    /// * `ConfigError::InvalidPath` - If the path cannot be written; the tree is left unchanged
    fn set(&mut self, key: &str, value: Value) -> Result<(), ConfigError>;

    /// Persists the in-memory tree.
    ///
    /// # Errors
    /// * `ConfigError::Immutable` - If the handle was opened with overrides applied
    /// * `ConfigError::InvalidName` - If the object name cannot be stored
    /// * `ConfigError::Persistence` - If the backing storage rejects the write
    fn save(&mut self) -> Result<(), ConfigError>;
}
