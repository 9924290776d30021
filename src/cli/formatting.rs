//! Formatting utilities for CLI output.
//!
//! Renders configuration values for stdout and styles messages for the
//! terminal.

use serde_yaml::Value;

use super::{CliError, args::OutputFormat};

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";

    /// Red color
    pub const RED: &'static str = "\x1b[31m";
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// Renders a configuration value for stdout.
///
/// YAML output is the document without the trailing newline; JSON output
/// is pretty-printed. Mapping keys keep their stored order.
///
/// # Errors
///
/// Returns `CliError::OutputError` if the value cannot be serialized, e.g.
/// a mapping with non-string keys rendered as JSON.
///
/// # Examples
///
/// ```
/// use confctl::cli::{OutputFormat, formatting::render_value};
///
/// let value = serde_yaml::Value::String("hello".to_string());
/// assert_eq!(render_value(&value, OutputFormat::Yaml).unwrap(), "hello");
/// assert_eq!(render_value(&value, OutputFormat::Json).unwrap(), "\"hello\"");
/// ```
pub fn render_value(value: &Value, format: OutputFormat) -> Result<String, CliError> {
    let rendered = match format {
        OutputFormat::Yaml => {
            serde_yaml::to_string(value).map_err(|e| CliError::OutputError(e.to_string()))?
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(value).map_err(|e| CliError::OutputError(e.to_string()))?
        }
    };

    Ok(rendered.trim_end().to_string())
}
