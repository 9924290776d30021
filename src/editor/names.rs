use crate::config_store::ConfigStore;

use super::EditorError;

/// A configuration name argument before expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameList {
    /// Comma-separated text as typed on the command line.
    Csv(String),
    /// Names that are already split.
    List(Vec<String>),
}

impl From<&str> for NameList {
    fn from(value: &str) -> Self {
        NameList::Csv(value.to_string())
    }
}

impl From<String> for NameList {
    fn from(value: String) -> Self {
        NameList::Csv(value)
    }
}

impl From<Vec<String>> for NameList {
    fn from(value: Vec<String>) -> Self {
        NameList::List(value)
    }
}

/// Expands comma-separated text into trimmed, non-empty, distinct tokens.
///
/// First occurrence order is kept. Already split input is returned unchanged.
pub fn csv_to_array(input: impl Into<NameList>) -> Vec<String> {
    match input.into() {
        NameList::List(names) => names,
        NameList::Csv(text) => {
            let mut names: Vec<String> = Vec::new();
            for token in text.split(',').map(str::trim).filter(|t| !t.is_empty()) {
                if !names.iter().any(|name| name == token) {
                    names.push(token.to_string());
                }
            }
            names
        }
    }
}

/// Checks that every named configuration object exists.
///
/// All names are looked up in input order; the first one that does not
/// exist is reported.
///
/// # Errors
/// * `EditorError::NotFound` - Naming the first missing object
/// * `EditorError::Store` - If the store cannot open a name
pub fn validate_config_name(
    store: &dyn ConfigStore,
    names: impl Into<NameList>,
) -> Result<(), EditorError> {
    for name in csv_to_array(names) {
        if store.get(&name)?.is_new() {
            return Err(EditorError::NotFound(name));
        }
    }

    Ok(())
}
