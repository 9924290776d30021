use serde::{Deserialize, Serialize};
use std::fmt;

/// Logging level for the tool.
///
/// Controls the verbosity of log output, from critical errors only
/// to detailed trace information.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Only show errors that stop a command.
    Error,

    /// Show warnings and errors, including declined or simulated changes (default level).
    #[default]
    Warn,

    /// Show informational messages such as saved objects.
    Info,

    /// Show debug information useful for troubleshooting key resolution.
    Debug,

    /// Show detailed trace information including function entry/exit (very verbose).
    Trace,
}

impl LogLevel {
    /// Raises the level by `steps` (one per `-v` flag), saturating at trace.
    pub fn raised(self, steps: u8) -> Self {
        const ORDER: [LogLevel; 5] = [
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ];

        let current = ORDER.iter().position(|level| *level == self).unwrap_or(1);
        let index = (current + usize::from(steps)).min(ORDER.len() - 1);
        ORDER[index]
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}
