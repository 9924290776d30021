use std::io;

use thiserror::Error;

use crate::config_store::ConfigError;

/// Errors raised while reading or editing a configuration object.
///
/// A declined confirmation is not an error; see [`super::SetOutcome::Declined`].
#[derive(Error, Debug)]
pub enum EditorError {
    /// The configuration object does not exist.
    #[error("Config {0} does not exist")]
    NotFound(String),

    /// Structured input could not be parsed.
    #[error("failed to parse {format} input: {details}")]
    Parse {
        /// Input format that was requested
        format: String,
        /// Parser error details
        details: String,
    },

    /// Reading piped input or prompting the operator failed.
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    /// The configuration store rejected the operation.
    #[error(transparent)]
    Store(#[from] ConfigError),
}
