use std::sync::Arc;

use serde_yaml::{Mapping, Value};
use tracing::debug;

use super::{
    ConfigError, ConfigHandle,
    naming::validate_name,
    path_ops::{navigate_path, set_value_at_path},
};

/// Write side of a store, used by [`ConfigObject::save`].
pub trait ConfigSink: Send + Sync {
    /// Replaces the stored tree of `name` with `data`.
    ///
    /// # Errors
    /// Returns `ConfigError` if the tree cannot be serialized or written.
    fn write(&self, name: &str, data: &Mapping) -> Result<(), ConfigError>;
}

/// Whether a handle may be saved back to its store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Raw stored values; `save` is allowed.
    Editable,
    /// Values with overrides applied; `save` is refused.
    Immutable,
}

/// The configuration handle shared by the bundled stores.
pub struct ConfigObject {
    name: String,
    data: Value,
    is_new: bool,
    access: Access,
    sink: Arc<dyn ConfigSink>,
}

impl ConfigObject {
    /// Wraps a loaded tree. `data` of `None` marks an object that is not stored yet.
    pub fn new(
        name: impl Into<String>,
        data: Option<Mapping>,
        access: Access,
        sink: Arc<dyn ConfigSink>,
    ) -> Self {
        let is_new = data.is_none();

        Self {
            name: name.into(),
            data: Value::Mapping(data.unwrap_or_default()),
            is_new,
            access,
            sink,
        }
    }

    fn mapping(&self) -> Mapping {
        match &self.data {
            Value::Mapping(map) => map.clone(),
            _ => Mapping::new(),
        }
    }
}

impl ConfigHandle for ConfigObject {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_new(&self) -> bool {
        self.is_new
    }

    fn get(&self, key: Option<&str>) -> Option<Value> {
        match key {
            None | Some("") => Some(self.data.clone()),
            Some(path) => navigate_path(&self.data, path).cloned(),
        }
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), ConfigError> {
        let mut updated = self.data.clone();
        set_value_at_path(&mut updated, key, value)?;
        self.data = updated;

        debug!(config = %self.name, key, "Updated key in memory");
        Ok(())
    }

    fn save(&mut self) -> Result<(), ConfigError> {
        if self.access == Access::Immutable {
            return Err(ConfigError::Immutable(self.name.clone()));
        }

        validate_name(&self.name)?;

        self.sink.write(&self.name, &self.mapping())?;
        self.is_new = false;
        Ok(())
    }
}
