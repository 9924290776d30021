use crate::cli::{Command, CommandResult, ConfigSources, ExecutionContext, args::CompleteArgs};

/// Lists stored configuration names, one per line.
///
/// Backs shell completion of the `config_name` argument.
pub struct CompleteCommand {
    sources: ConfigSources,
}

impl CompleteCommand {
    /// Creates a new CompleteCommand listing the active store.
    pub fn new(sources: ConfigSources) -> Self {
        Self { sources }
    }
}

impl Command for CompleteCommand {
    type Args = CompleteArgs;

    fn execute(&self, args: &CompleteArgs, _ctx: &mut ExecutionContext<'_>) -> CommandResult {
        let prefix = args.prefix.as_deref().unwrap_or_default();
        let names = self.sources.active().list_all(prefix)?;
        Ok(names.join("\n"))
    }
}
