use serde_yaml::{Mapping, Value};

use super::ConfigError;

/// Navigates through a YAML value tree following a dot-separated path
///
/// Mapping segments match string keys first and fall back to integer keys
/// (`page.403`). Sequence segments are numeric indexes.
///
/// # Arguments
/// * `value` - The root value to navigate from
/// * `path` - Dot-separated path (e.g., "page.front" or "permissions.0")
///
/// Returns `None` when any segment is missing or the path runs into a scalar.
pub(super) fn navigate_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;

    for part in path.split('.') {
        current = match current {
            Value::Mapping(map) => map.get(resolve_key(map, part))?,
            Value::Sequence(seq) => seq.get(part.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }

    Some(current)
}

/// Sets a value at the specified path, creating intermediate mappings
///
/// Missing or null intermediate nodes become empty mappings. A sequence
/// segment may address an existing index or the position just past the end.
///
/// # Arguments
/// * `value` - The root value to modify
/// * `path` - Dot-separated path to the target location
/// * `new_value` - The value to insert at the path
///
/// # Errors
/// * `ConfigError::InvalidPath` - If the path has an empty segment, runs into a
///   scalar, or addresses a sequence with a bad index. The tree may be
///   partially extended when this happens; callers that need atomicity work
///   on a copy.
pub(super) fn set_value_at_path(
    value: &mut Value,
    path: &str,
    new_value: Value,
) -> Result<(), ConfigError> {
    let parts = split_path(path)?;

    let Some((last_key, parents)) = parts.split_last() else {
        return Err(ConfigError::InvalidPath("Empty path".to_string()));
    };

    let mut current = value;
    for (i, part) in parents.iter().enumerate() {
        current = navigate_step_mut(current, part, &parts[..=i])?;
    }

    insert_value(current, last_key, new_value, &parts)
}

/// Splits a key path into its segments, rejecting empty segments
///
/// # Errors
/// * `ConfigError::InvalidPath` - If the path is empty or contains `..`
pub(super) fn split_path(path: &str) -> Result<Vec<&str>, ConfigError> {
    let parts: Vec<&str> = path.split('.').collect();

    if parts.iter().any(|part| part.is_empty()) {
        return Err(ConfigError::InvalidPath(format!(
            "Empty segment in path '{path}'"
        )));
    }

    Ok(parts)
}

/// Performs a single mutable navigation step
///
/// # Arguments
/// * `current` - The current value
/// * `key` - The key or index to navigate to
/// * `path_so_far` - The path traversed so far (for error messages)
///
/// # Errors
/// * `ConfigError::InvalidPath` - If the step cannot be taken or created
fn navigate_step_mut<'a>(
    current: &'a mut Value,
    key: &str,
    path_so_far: &[&str],
) -> Result<&'a mut Value, ConfigError> {
    if current.is_null() {
        *current = Value::Mapping(Mapping::new());
    }

    match current {
        Value::Mapping(map) => {
            let resolved = resolve_key(map, key);
            if !map.contains_key(&resolved) {
                map.insert(resolved.clone(), Value::Mapping(Mapping::new()));
            }

            map.get_mut(&resolved).ok_or_else(|| {
                ConfigError::InvalidPath(format!(
                    "Key '{}' not found at path '{}'",
                    key,
                    path_so_far.join(".")
                ))
            })
        }
        Value::Sequence(seq) => {
            let index = sequence_index(key, seq.len(), path_so_far)?;
            if index == seq.len() {
                seq.push(Value::Mapping(Mapping::new()));
            }

            seq.get_mut(index).ok_or_else(|| {
                ConfigError::InvalidPath(format!(
                    "Sequence index {} out of bounds at path '{}'",
                    index,
                    path_so_far.join(".")
                ))
            })
        }
        other => Err(ConfigError::InvalidPath(format!(
            "Cannot create key '{}' inside {} value at path '{}'",
            key,
            type_name(other),
            path_so_far.join(".")
        ))),
    }
}

/// Inserts a value into a container (mapping or sequence)
///
/// # Errors
/// * `ConfigError::InvalidPath` - If the container is a scalar or the index is invalid
fn insert_value(
    container: &mut Value,
    key: &str,
    new_value: Value,
    full_path: &[&str],
) -> Result<(), ConfigError> {
    if container.is_null() {
        *container = Value::Mapping(Mapping::new());
    }

    match container {
        Value::Mapping(map) => {
            let resolved = resolve_key(map, key);
            map.insert(resolved, new_value);
            Ok(())
        }
        Value::Sequence(seq) => {
            let index = sequence_index(key, seq.len(), full_path)?;
            match seq.get_mut(index) {
                Some(elem) => *elem = new_value,
                None => seq.push(new_value),
            }
            Ok(())
        }
        other => Err(ConfigError::InvalidPath(format!(
            "Cannot set '{}' inside {} value",
            full_path.join("."),
            type_name(other)
        ))),
    }
}

/// Picks the mapping key a path segment refers to.
///
/// Existing string keys win; a numeric segment matches an existing integer
/// key; anything else is addressed as a new string key.
fn resolve_key(map: &Mapping, segment: &str) -> Value {
    let as_string = Value::String(segment.to_string());
    if map.contains_key(&as_string) {
        return as_string;
    }

    if let Ok(number) = segment.parse::<i64>() {
        let as_number = Value::Number(number.into());
        if map.contains_key(&as_number) {
            return as_number;
        }
    }

    as_string
}

/// Parses a sequence segment; the index may equal `len` to append.
fn sequence_index(key: &str, len: usize, path: &[&str]) -> Result<usize, ConfigError> {
    let index = key.parse::<usize>().map_err(|_| {
        ConfigError::InvalidPath(format!(
            "Invalid sequence index '{}' at path '{}'",
            key,
            path.join(".")
        ))
    })?;

    if index > len {
        return Err(ConfigError::InvalidPath(format!(
            "Sequence index {} out of bounds at path '{}'",
            index,
            path.join(".")
        )));
    }

    Ok(index)
}

pub(super) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged",
    }
}
