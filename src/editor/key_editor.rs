use std::fmt;

use serde_yaml::{Mapping, Value};
use tracing::{debug, info, instrument, warn};

use crate::config_store::{ConfigHandle, ConfigStore};

use super::{
    Confirmer, EditorError, InputFormat, InputSource, names::validate_config_name,
    value::normalize_value,
};

/// Key that switches `set` into bulk mode: the value is a mapping of
/// top-level keys to assign.
pub const BULK_KEY: &str = "?";

/// Arguments of one `set` invocation.
#[derive(Debug, Clone, Copy)]
pub struct SetRequest<'a> {
    /// Configuration object to edit.
    pub config_name: &'a str,
    /// Dotted key path, or [`BULK_KEY`].
    pub key: &'a str,
    /// Raw payload as typed; `-` reads the input stream.
    pub value: &'a str,
    /// How to interpret the payload.
    pub input_format: InputFormat,
}

/// What a `set` invocation would change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// The object did not exist and is created with one key.
    CreateObject,
    /// The object exists but the key is absent or null.
    CreateKey,
    /// The key already holds a value.
    UpdateKey,
    /// Several top-level keys are assigned at once.
    Bulk {
        /// Number of keys in the supplied mapping
        keys: usize,
    },
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Change::CreateObject => write!(f, "create config object"),
            Change::CreateKey => write!(f, "create key"),
            Change::UpdateKey => write!(f, "update key"),
            Change::Bulk { keys } => write!(f, "set {keys} keys"),
        }
    }
}

/// Result of a `set` invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    /// Confirmed and persisted.
    Saved(Change),
    /// Confirmed and applied in memory, but not persisted (simulate mode).
    Simulated(Change),
    /// The operator declined; nothing was changed.
    Declined(Change),
}

impl SetOutcome {
    /// The change that was asked about.
    pub fn change(&self) -> Change {
        match self {
            SetOutcome::Saved(change)
            | SetOutcome::Simulated(change)
            | SetOutcome::Declined(change) => *change,
        }
    }

    /// Whether the operator declined the change.
    pub fn is_declined(&self) -> bool {
        matches!(self, SetOutcome::Declined(_))
    }
}

/// Reads and edits values inside configuration objects.
///
/// Mutations go through exactly one confirmation. The simulate flag only
/// suppresses the final save; parsing, confirmation and the in-memory update
/// still run.
pub struct ConfigKeyEditor<'s> {
    store: &'s dyn ConfigStore,
    simulate: bool,
}

impl<'s> ConfigKeyEditor<'s> {
    /// Creates an editor over `store`.
    pub fn new(store: &'s dyn ConfigStore, simulate: bool) -> Self {
        Self { store, simulate }
    }

    /// Reads a whole object or a single key.
    ///
    /// Without a key the full tree is returned. With a key the result is a
    /// one-entry mapping from `"<config_name>:<key>"` to the value, which is
    /// null when the key is absent.
    ///
    /// # Errors
    /// * `EditorError::NotFound` - If the object does not exist
    /// * `EditorError::Store` - If the store cannot read the object
    #[instrument(skip(self))]
    pub fn get(
        &self,
        config_name: &str,
        key: Option<&str>,
        include_overridden: bool,
    ) -> Result<Value, EditorError> {
        validate_config_name(self.store, config_name)?;

        let config = if include_overridden {
            self.store.get(config_name)?
        } else {
            self.store.get_editable(config_name)?
        };

        let key = key.filter(|key| !key.is_empty());
        let value = config.get(key).unwrap_or(Value::Null);

        Ok(match key {
            Some(key) => {
                let mut result = Mapping::new();
                result.insert(Value::String(format!("{config_name}:{key}")), value);
                Value::Mapping(result)
            }
            None => value,
        })
    }

    /// Assigns a value to a key, or several top-level keys in bulk mode.
    ///
    /// Bulk mode applies when the key is [`BULK_KEY`] and the parsed value is
    /// a non-empty mapping; every other request edits a single key. The
    /// object is not required to exist.
    ///
    /// # Errors
    /// * `EditorError::Io` - If the input stream or the prompt fails
    /// * `EditorError::Parse` - If YAML input is malformed
    /// * `EditorError::Store` - If the key path is invalid or saving fails
    #[instrument(
        skip(self, confirmer, input),
        fields(config = request.config_name, key = request.key, simulate = self.simulate)
    )]
    pub fn set(
        &self,
        request: &SetRequest<'_>,
        confirmer: &mut dyn Confirmer,
        input: &mut dyn InputSource,
    ) -> Result<SetOutcome, EditorError> {
        let value = normalize_value(request.value, request.input_format, input)?;
        let mut config = self.store.get_editable(request.config_name)?;

        if request.key == BULK_KEY {
            if let Value::Mapping(entries) = &value {
                if !entries.is_empty() {
                    return self.set_many(config.as_mut(), entries, confirmer);
                }
            }
            debug!("Bulk key without a non-empty mapping, setting it as a single key");
        }

        self.set_one(config.as_mut(), request.key, value, confirmer)
    }

    fn set_many(
        &self,
        config: &mut dyn ConfigHandle,
        entries: &Mapping,
        confirmer: &mut dyn Confirmer,
    ) -> Result<SetOutcome, EditorError> {
        let change = Change::Bulk {
            keys: entries.len(),
        };
        let question = format!(
            "Do you want to update or set multiple keys on {} config?",
            config.name()
        );

        if !confirmer.confirm(&question)? {
            return Ok(declined(config, change));
        }

        for (data_key, value) in entries {
            let key = key_path(data_key)?;
            config.set(&key, value.clone())?;
        }

        self.persist(config, change)
    }

    fn set_one(
        &self,
        config: &mut dyn ConfigHandle,
        key: &str,
        value: Value,
        confirmer: &mut dyn Confirmer,
    ) -> Result<SetOutcome, EditorError> {
        let new_key = matches!(config.get(Some(key)), None | Some(Value::Null));
        let name = config.name().to_string();

        let (change, question) = if config.is_new() {
            (
                Change::CreateObject,
                format!("{name} config does not exist. Do you want to create a new config object?"),
            )
        } else if new_key {
            (
                Change::CreateKey,
                format!(
                    "{key} key does not exist in {name} config. Do you want to create a new config key?"
                ),
            )
        } else {
            (
                Change::UpdateKey,
                format!("Do you want to update {key} key in {name} config?"),
            )
        };

        if !confirmer.confirm(&question)? {
            return Ok(declined(config, change));
        }

        config.set(key, value)?;
        self.persist(config, change)
    }

    fn persist(
        &self,
        config: &mut dyn ConfigHandle,
        change: Change,
    ) -> Result<SetOutcome, EditorError> {
        if self.simulate {
            warn!(config = config.name(), %change, "Simulate mode, not saving");
            return Ok(SetOutcome::Simulated(change));
        }

        config.save()?;
        info!(config = config.name(), %change, "Config saved");
        Ok(SetOutcome::Saved(change))
    }
}

fn declined(config: &dyn ConfigHandle, change: Change) -> SetOutcome {
    warn!(config = config.name(), %change, "Confirmation declined, no changes made");
    SetOutcome::Declined(change)
}

/// Bulk mapping keys may be written as YAML scalars such as `403: x`.
fn key_path(key: &Value) -> Result<String, EditorError> {
    match key {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(EditorError::Parse {
            format: InputFormat::Yaml.to_string(),
            details: format!("bulk keys must be scalars, found {other:?}"),
        }),
    }
}
