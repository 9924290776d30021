use crate::{
    cli::{Command, CommandResult, ConfigSources, ExecutionContext, args::SetArgs},
    editor::{Change, ConfigKeyEditor, SetOutcome, SetRequest},
};

/// Command for assigning configuration values.
///
/// Always writes to the active store, after one confirmation.
///
/// # Example Usage
///
/// ```bash
/// confctl config:set system.site name MySite
/// confctl config:set user.role.test permissions '[]'
/// cat site.yml | confctl config:set system.site ? - --input-format=yaml
/// ```
pub struct SetCommand {
    sources: ConfigSources,
}

impl SetCommand {
    /// Creates a new SetCommand writing to the active store of `sources`.
    pub fn new(sources: ConfigSources) -> Self {
        Self { sources }
    }
}

impl Command for SetCommand {
    type Args = SetArgs;

    /// Parses the value, confirms and applies the change.
    ///
    /// A declined confirmation is reported, not returned as an error.
    ///
    /// # Errors
    ///
    /// * `CliError::ParseError` - If YAML input is malformed
    /// * `CliError::ConfigError` - If the key path is invalid or saving fails
    /// * `CliError::IoError` - If reading input or prompting fails
    fn execute(&self, args: &SetArgs, ctx: &mut ExecutionContext<'_>) -> CommandResult {
        let editor = ConfigKeyEditor::new(self.sources.active(), ctx.simulate);
        let request = SetRequest {
            config_name: &args.config_name,
            key: &args.key,
            value: &args.value,
            input_format: args.input_format,
        };

        let outcome = editor.set(&request, ctx.prompt.confirmer(), &mut *ctx.input)?;

        Ok(describe(&args.config_name, &args.key, outcome))
    }
}

fn describe(config_name: &str, key: &str, outcome: SetOutcome) -> String {
    match outcome {
        SetOutcome::Saved(Change::CreateObject) => {
            format!("Created {config_name} config with {key} key.")
        }
        SetOutcome::Saved(Change::CreateKey | Change::UpdateKey) => {
            format!("Set {key} key in {config_name} config.")
        }
        SetOutcome::Saved(Change::Bulk { keys }) => {
            format!("Updated {keys} keys in {config_name} config.")
        }
        SetOutcome::Simulated(change) => {
            format!("Simulated: {change} on {config_name} config, nothing saved.")
        }
        SetOutcome::Declined(_) => "No changes made.".to_string(),
    }
}
