use std::{
    collections::BTreeMap,
    sync::{
        Arc, RwLock,
        atomic::{AtomicUsize, Ordering},
    },
};

use serde_yaml::{Mapping, Value};

use super::{
    ConfigError, ConfigHandle, ConfigStore,
    merging::merge_override,
    naming::validate_name,
    object::{Access, ConfigObject, ConfigSink},
};

/// An in-process configuration store
///
/// Counts every persistence call, which lets callers observe exactly how
/// many times a command saved.
#[derive(Clone, Default)]
pub struct MemoryConfigStore {
    inner: Arc<MemoryObjects>,
    overrides: BTreeMap<String, Value>,
}

#[derive(Default)]
struct MemoryObjects {
    objects: RwLock<BTreeMap<String, Mapping>>,
    saves: AtomicUsize,
}

impl MemoryConfigStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `data` under `name` without counting a save.
    pub fn insert(&self, name: &str, data: Mapping) {
        match self.inner.objects.write() {
            Ok(mut objects) => {
                objects.insert(name.to_string(), data);
            }
            Err(poisoned) => {
                poisoned.into_inner().insert(name.to_string(), data);
            }
        }
    }

    /// Adds an override applied by [`ConfigStore::get`].
    pub fn with_override(mut self, name: &str, overlay: Value) -> Self {
        self.overrides.insert(name.to_string(), overlay);
        self
    }

    /// Returns the stored tree of `name`, if any.
    pub fn stored(&self, name: &str) -> Option<Mapping> {
        match self.inner.objects.read() {
            Ok(objects) => objects.get(name).cloned(),
            Err(poisoned) => poisoned.into_inner().get(name).cloned(),
        }
    }

    /// Number of successful saves since the store was created.
    pub fn save_count(&self) -> usize {
        self.inner.saves.load(Ordering::SeqCst)
    }

    fn load(&self, name: &str) -> Option<Mapping> {
        if validate_name(name).is_err() {
            return None;
        }
        self.stored(name)
    }
}

impl ConfigStore for MemoryConfigStore {
    fn get(&self, name: &str) -> Result<Box<dyn ConfigHandle>, ConfigError> {
        let data = self.load(name).map(|map| match self.overrides.get(name) {
            Some(overlay) => match merge_override(Value::Mapping(map.clone()), overlay.clone()) {
                Value::Mapping(merged) => merged,
                _ => map,
            },
            None => map,
        });

        Ok(Box::new(ConfigObject::new(
            name,
            data,
            Access::Immutable,
            self.inner.clone(),
        )))
    }

    fn get_editable(&self, name: &str) -> Result<Box<dyn ConfigHandle>, ConfigError> {
        let data = self.load(name);

        Ok(Box::new(ConfigObject::new(
            name,
            data,
            Access::Editable,
            self.inner.clone(),
        )))
    }

    fn list_all(&self, prefix: &str) -> Result<Vec<String>, ConfigError> {
        let objects = match self.inner.objects.read() {
            Ok(objects) => objects,
            Err(poisoned) => poisoned.into_inner(),
        };

        Ok(objects
            .keys()
            .filter(|name| name.starts_with(prefix))
            .cloned()
            .collect())
    }
}

impl ConfigSink for MemoryObjects {
    fn write(&self, name: &str, data: &Mapping) -> Result<(), ConfigError> {
        let mut objects = match self.objects.write() {
            Ok(objects) => objects,
            Err(poisoned) => poisoned.into_inner(),
        };

        objects.insert(name.to_string(), data.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
