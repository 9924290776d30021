use std::{
    fmt, io,
    path::{Path, PathBuf},
    result,
};

use thiserror::Error;

use crate::{cli::CliError, config_store::ConfigError};

/// Error types for the confctl process.
///
/// Covers failures that happen around command execution: loading tool
/// settings, preparing storage and running a command.
#[derive(Error, Debug)]
pub enum ConfctlError {
    /// The log subscriber could not be installed
    #[error("failed to initialize logging: {0}")]
    Logging(String),

    /// Configuration storage could not be opened
    #[error(transparent)]
    Storage(#[from] ConfigError),

    /// I/O operation error
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// Standard I/O operation error (for compatibility)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParseError {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },

    /// A command failed
    #[error(transparent)]
    Command(#[from] CliError),
}

/// A specialized `Result` type for confctl operations.
pub type Result<T> = result::Result<T, ConfctlError>;

impl ConfctlError {
    /// Creates a TOML parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn toml_parse(error: impl fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        ConfctlError::TomlParseError {
            location,
            details: error.to_string(),
        }
    }

    /// Creates an I/O error with file path context.
    pub fn io(error: impl fmt::Display, path: &Path) -> Self {
        ConfctlError::IoError {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }
}
