use std::sync::Arc;

use crate::{
    config::StorageLayout,
    config_store::{ConfigError, ConfigStore, FileConfigStore},
};

use super::{CliError, args::Source};

/// The configuration stores a command may read from.
#[derive(Clone)]
pub struct ConfigSources {
    active: Arc<dyn ConfigStore>,
    sync: Option<Arc<dyn ConfigStore>>,
}

impl ConfigSources {
    /// Sources with only an active store.
    pub fn new(active: Arc<dyn ConfigStore>) -> Self {
        Self { active, sync: None }
    }

    /// Adds a sync store.
    pub fn with_sync(mut self, sync: Arc<dyn ConfigStore>) -> Self {
        self.sync = Some(sync);
        self
    }

    /// Opens YAML directory stores for a resolved storage layout.
    ///
    /// Overrides are layered over the active store only.
    ///
    /// # Errors
    /// Returns `ConfigError` if the overrides document is unreadable.
    pub fn open(layout: &StorageLayout) -> Result<Self, ConfigError> {
        let active = FileConfigStore::open(&layout.active, layout.overrides.as_deref())?;
        let mut sources = Self::new(Arc::new(active));

        if let Some(sync) = &layout.sync {
            sources = sources.with_sync(Arc::new(FileConfigStore::new(sync)));
        }

        Ok(sources)
    }

    /// The store commands write to.
    pub fn active(&self) -> &dyn ConfigStore {
        self.active.as_ref()
    }

    /// The store behind `source`.
    ///
    /// # Errors
    /// * `CliError::InvalidArguments` - If the sync source is requested but not configured
    pub fn select(&self, source: Source) -> Result<&dyn ConfigStore, CliError> {
        match source {
            Source::Active => Ok(self.active()),
            Source::Sync => self.sync.as_deref().ok_or_else(|| {
                CliError::InvalidArguments("no sync storage is configured".to_string())
            }),
        }
    }
}
