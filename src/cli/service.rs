use tracing::instrument;

use super::{
    CliError, Command, ConfigSources, ExecutionContext,
    args::CliCommand,
    commands::{
        complete::CompleteCommand,
        config::{GetCommand, SetCommand},
    },
};

/// High-level service for executing CLI commands.
///
/// Owns one instance of every command, all sharing the same configuration
/// sources, and routes parsed commands to them.
pub struct CliService {
    get: GetCommand,
    set: SetCommand,
    complete: CompleteCommand,
}

impl CliService {
    /// Creates a new CLI service with all available commands.
    ///
    /// # Arguments
    /// * `sources` - Configuration stores shared by the commands
    pub fn new(sources: ConfigSources) -> Self {
        CliService {
            get: GetCommand::new(sources.clone()),
            set: SetCommand::new(sources.clone()),
            complete: CompleteCommand::new(sources),
        }
    }

    /// Executes a parsed command.
    ///
    /// Returns the command output as a string on success.
    ///
    /// # Errors
    /// Returns the `CliError` produced by the command.
    #[instrument(skip_all, fields(command = command.name()))]
    pub fn execute_command(
        &self,
        command: &CliCommand,
        ctx: &mut ExecutionContext<'_>,
    ) -> Result<String, CliError> {
        match command {
            CliCommand::ConfigGet(args) => self.get.execute(args, ctx),
            CliCommand::ConfigSet(args) => self.set.execute(args, ctx),
            CliCommand::Complete(args) => self.complete.execute(args, ctx),
        }
    }
}

impl CliCommand {
    /// Canonical name of the command.
    pub fn name(&self) -> &'static str {
        match self {
            CliCommand::ConfigGet(_) => "config:get",
            CliCommand::ConfigSet(_) => "config:set",
            CliCommand::Complete(_) => "complete",
        }
    }
}
