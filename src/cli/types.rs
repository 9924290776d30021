use std::io;

use thiserror::Error;

use crate::{
    config_store::ConfigError,
    editor::{EditorError, InputSource, Prompt},
};

/// Errors that can occur during CLI command execution.
///
/// Each variant carries a human-readable message naming the offending
/// configuration object or key. A declined confirmation is not an error.
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid arguments were provided to a command.
    ///
    /// Returned when a required value is missing and cannot be asked for,
    /// or when the requested storage source is not configured.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The referenced configuration object does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Structured input supplied by the operator could not be parsed.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// An error occurred in the configuration storage.
    ///
    /// This wraps store errors such as invalid key paths, unreadable
    /// documents or failed writes.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Command output could not be rendered.
    #[error("Output error: {0}")]
    OutputError(String),

    /// An I/O operation failed.
    ///
    /// Covers reading piped input and talking to the terminal.
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

impl From<EditorError> for CliError {
    fn from(error: EditorError) -> Self {
        match error {
            EditorError::NotFound(_) => CliError::NotFound(error.to_string()),
            EditorError::Parse { .. } => CliError::ParseError(error.to_string()),
            EditorError::Io(e) => CliError::IoError(e),
            EditorError::Store(e) => e.into(),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::ConfigError(error.to_string())
    }
}

/// Type alias for command execution results.
///
/// All CLI commands return this type, providing either the text to print
/// on stdout or a CliError describing what went wrong.
pub type CommandResult = Result<String, CliError>;

/// Per-invocation capabilities handed to a command.
///
/// Built once in `main` from the global options; tests build it from
/// scripted answers and in-memory input.
pub struct ExecutionContext<'a> {
    /// Dry-run: confirmed changes are applied in memory but never saved.
    pub simulate: bool,

    /// Confirmation and choice prompts.
    pub prompt: &'a mut dyn Prompt,

    /// Stream read when a value of `-` is given.
    pub input: &'a mut dyn InputSource,
}

/// Trait defining the interface for all CLI commands.
///
/// Commands receive their storage through their constructors and their
/// parsed arguments and per-invocation capabilities through `execute`.
pub trait Command: Send + Sync {
    /// Parsed arguments of this command.
    type Args;

    /// Executes the command.
    ///
    /// # Errors
    ///
    /// Returns `CliError` for any execution failures, including:
    /// - Missing configuration objects
    /// - Malformed input
    /// - Configuration storage errors
    /// - I/O failures
    fn execute(&self, args: &Self::Args, ctx: &mut ExecutionContext<'_>) -> CommandResult;
}
