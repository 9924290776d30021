use std::path::PathBuf;

/// Errors that can occur during configuration storage operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The key path is malformed or cannot be written.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// The configuration object name is not acceptable to the store.
    #[error("invalid config name '{name}': {reason}")]
    InvalidName {
        /// The rejected name
        name: String,
        /// Reason why the name is invalid
        reason: String,
    },

    /// A handle opened for override-applied reading was asked to persist.
    #[error("config '{0}' was opened read-only and cannot be saved")]
    Immutable(String),

    /// A stored configuration document could not be parsed.
    #[error("failed to parse config at '{path}': {details}")]
    Parse {
        /// File that failed to parse
        path: PathBuf,
        /// Parse error details
        details: String,
    },

    /// Error occurred while persisting configuration to disk
    #[error("failed to persist config to '{path}': {details}")]
    Persistence {
        /// Path where persistence failed
        path: PathBuf,
        /// Error details from the persistence operation
        details: String,
    },

    /// Error occurred while serializing configuration
    #[error("failed to serialize {content_type}: {details}")]
    Serialization {
        /// Type of content being serialized (e.g., "config object")
        content_type: String,
        /// Serialization error details
        details: String,
    },
}
