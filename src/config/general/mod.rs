mod log_level;

pub use log_level::LogLevel;
use serde::{Deserialize, Serialize};

/// General settings for the confctl tool.
///
/// Contains global settings that affect every command, such as logging
/// and simulate mode.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GeneralSettings {
    /// Logging level for the tool.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Run every command in simulate mode (never persist changes).
    #[serde(default)]
    pub simulate: bool,

    /// Also write logs to daily rotated files in the data directory.
    #[serde(default)]
    pub log_to_file: bool,
}
