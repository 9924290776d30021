use super::ConfigError;

const MAX_NAME_LENGTH: usize = 250;
const FORBIDDEN_CHARACTERS: [char; 9] = [':', '?', '*', '<', '>', '"', '\'', '/', '\\'];

/// Checks that `name` can identify a stored configuration object.
///
/// Names are namespaced by their owner (`system.site`), so at least one dot
/// is required. Characters that are unsafe in file names are rejected.
///
/// # Errors
/// * `ConfigError::InvalidName` - If the name is empty, too long, lacks a
///   namespace or contains a forbidden character
pub fn validate_name(name: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidName {
        name: name.to_string(),
        reason,
    };

    if name.is_empty() {
        return Err(invalid("name is empty".to_string()));
    }

    if name.len() > MAX_NAME_LENGTH {
        return Err(invalid(format!(
            "name exceeds {MAX_NAME_LENGTH} characters"
        )));
    }

    if !name.contains('.') {
        return Err(invalid(
            "missing namespace, expected a name such as 'system.site'".to_string(),
        ));
    }

    if let Some(c) = name.chars().find(|c| FORBIDDEN_CHARACTERS.contains(c)) {
        return Err(invalid(format!("contains forbidden character '{c}'")));
    }

    Ok(())
}
