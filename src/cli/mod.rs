//! Command-line interface for configuration management.
//!
//! Arguments are parsed with clap into a [`CliCommand`], which
//! [`CliService`] routes to the matching command. Commands receive their
//! stores at construction and prompts and input through
//! [`ExecutionContext`].

mod args;
mod commands;
pub mod formatting;
mod service;
mod sources;
mod types;


pub use args::{
    Cli, CliCommand, CompleteArgs, GetArgs, GlobalOptions, OutputFormat, SetArgs, Source,
};
pub use commands::{
    complete::CompleteCommand,
    config::{GetCommand, SetCommand},
};
pub use service::CliService;
pub use sources::ConfigSources;
pub use types::{CliError, Command, CommandResult, ExecutionContext};
