use std::{fmt, str::FromStr};

use serde_yaml::Value;

use super::{EditorError, InputSource};

/// Marker value that requests reading the payload from the input stream.
pub const STDIN_MARKER: &str = "-";

/// How a raw `config:set` payload is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// Store the text as-is (after the null and empty-list substitutions).
    #[default]
    String,
    /// Parse the text as YAML; JSON documents are accepted as well.
    Yaml,
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFormat::String => write!(f, "string"),
            InputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(InputFormat::String),
            "yaml" => Ok(InputFormat::Yaml),
            other => Err(format!(
                "unknown input format '{other}', expected 'string' or 'yaml'"
            )),
        }
    }
}

/// Turns a raw command-line payload into a configuration value.
///
/// Steps, in order:
/// 1. `-` is replaced by the full contents of `input`.
/// 2. `null` in any letter case becomes the null value.
/// 3. `[]` becomes an empty sequence.
/// 4. With [`InputFormat::Yaml`], remaining text is parsed as YAML.
///
/// # Errors
/// * `EditorError::Io` - If the input stream cannot be read
/// * `EditorError::Parse` - If YAML parsing fails
pub fn normalize_value(
    raw: &str,
    format: InputFormat,
    input: &mut dyn InputSource,
) -> Result<Value, EditorError> {
    let text = if raw == STDIN_MARKER {
        input.read_all()?
    } else {
        raw.to_string()
    };

    if text.eq_ignore_ascii_case("null") {
        return Ok(Value::Null);
    }

    if text == "[]" {
        return Ok(Value::Sequence(Vec::new()));
    }

    match format {
        InputFormat::String => Ok(Value::String(text)),
        InputFormat::Yaml => parse_yaml(&text),
    }
}

fn parse_yaml(text: &str) -> Result<Value, EditorError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_yaml::from_str(text).map_err(|e| EditorError::Parse {
        format: InputFormat::Yaml.to_string(),
        details: e.to_string(),
    })
}
