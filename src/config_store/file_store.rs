use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};

use serde_yaml::{Mapping, Value};
use tracing::{debug, info, instrument};

use super::{
    ConfigError, ConfigHandle, ConfigStore,
    merging::merge_override,
    naming::validate_name,
    object::{Access, ConfigObject, ConfigSink},
};

const EXTENSION: &str = "yml";

/// Configuration objects stored as one YAML document per file
///
/// `system.site` lives in `<dir>/system.site.yml`. A missing file is a new
/// object. An optional overrides document layers values on top of stored
/// trees for [`ConfigStore::get`].
pub struct FileConfigStore {
    directory: Arc<YamlDirectory>,
    overrides: Mapping,
}

impl FileConfigStore {
    /// Opens a storage directory without overrides.
    ///
    /// The directory does not need to exist until the first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            directory: Arc::new(YamlDirectory { dir: dir.into() }),
            overrides: Mapping::new(),
        }
    }

    /// Opens a storage directory and loads the overrides document, if any.
    ///
    /// A missing overrides file means no overrides.
    ///
    /// # Errors
    /// * `ConfigError::Parse` - If the overrides file is not a YAML mapping
    /// * `ConfigError::Persistence` - If the overrides file cannot be read
    #[instrument(skip_all, fields(dir = %dir.as_ref().display()))]
    pub fn open(dir: impl AsRef<Path>, overrides: Option<&Path>) -> Result<Self, ConfigError> {
        let mut store = Self::new(dir.as_ref());

        if let Some(path) = overrides {
            if let Some(map) = read_mapping(path)? {
                debug!(path = %path.display(), entries = map.len(), "Loaded config overrides");
                store.overrides = map;
            }
        }

        Ok(store)
    }

    /// Directory holding the YAML documents.
    pub fn dir(&self) -> &Path {
        &self.directory.dir
    }

    fn load(&self, name: &str) -> Result<Option<Mapping>, ConfigError> {
        // Invalid names can never have been saved.
        if validate_name(name).is_err() {
            debug!(config = name, "Name cannot be stored, treating as new");
            return Ok(None);
        }
        read_mapping(&self.directory.path_for(name))
    }
}

impl ConfigStore for FileConfigStore {
    fn get(&self, name: &str) -> Result<Box<dyn ConfigHandle>, ConfigError> {
        let stored = self.load(name)?;

        let data = match (stored, self.overrides.get(name)) {
            // A non-mapping override cannot replace the document root.
            (Some(map), Some(overlay)) => {
                match merge_override(Value::Mapping(map.clone()), overlay.clone()) {
                    Value::Mapping(merged) => Some(merged),
                    _ => Some(map),
                }
            }
            (stored, _) => stored,
        };

        Ok(Box::new(ConfigObject::new(
            name,
            data,
            Access::Immutable,
            self.directory.clone(),
        )))
    }

    fn get_editable(&self, name: &str) -> Result<Box<dyn ConfigHandle>, ConfigError> {
        let data = self.load(name)?;

        Ok(Box::new(ConfigObject::new(
            name,
            data,
            Access::Editable,
            self.directory.clone(),
        )))
    }

    fn list_all(&self, prefix: &str) -> Result<Vec<String>, ConfigError> {
        let dir = &self.directory.dir;
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(persistence(dir, e)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| persistence(dir, e))?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(EXTENSION) {
                continue;
            }

            if let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) {
                if name.starts_with(prefix) && validate_name(name).is_ok() {
                    names.push(name.to_string());
                }
            }
        }

        names.sort();
        Ok(names)
    }
}

struct YamlDirectory {
    dir: PathBuf,
}

impl YamlDirectory {
    fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{EXTENSION}"))
    }
}

impl ConfigSink for YamlDirectory {
    #[instrument(skip(self, data))]
    fn write(&self, name: &str, data: &Mapping) -> Result<(), ConfigError> {
        let path = self.path_for(name);
        let content = serde_yaml::to_string(data).map_err(|e| ConfigError::Serialization {
            content_type: format!("config object '{name}'"),
            details: e.to_string(),
        })?;

        fs::create_dir_all(&self.dir).map_err(|e| persistence(&self.dir, e))?;

        let staging = self.dir.join(format!(".{name}.{EXTENSION}.tmp"));
        fs::write(&staging, content).map_err(|e| persistence(&staging, e))?;
        fs::rename(&staging, &path).map_err(|e| persistence(&path, e))?;

        info!(path = %path.display(), "Saved config object");
        Ok(())
    }
}

/// Reads a YAML document whose root must be a mapping.
///
/// Returns `None` when the file does not exist. An empty document is an
/// empty mapping.
fn read_mapping(path: &Path) -> Result<Option<Mapping>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(persistence(path, e)),
    };

    if content.trim().is_empty() {
        return Ok(Some(Mapping::new()));
    }

    let parse_error = |details: String| ConfigError::Parse {
        path: path.to_path_buf(),
        details,
    };

    match serde_yaml::from_str::<Value>(&content).map_err(|e| parse_error(e.to_string()))? {
        Value::Mapping(map) => Ok(Some(map)),
        Value::Null => Ok(Some(Mapping::new())),
        other => Err(parse_error(format!(
            "expected a mapping at the document root, found {}",
            super::path_ops::type_name(&other)
        ))),
    }
}

fn persistence(path: &Path, error: io::Error) -> ConfigError {
    ConfigError::Persistence {
        path: path.to_path_buf(),
        details: error.to_string(),
    }
}
