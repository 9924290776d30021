use crate::{
    cli::{
        CliError, Command, CommandResult, ConfigSources, ExecutionContext, args::GetArgs,
        formatting::render_value,
    },
    editor::ConfigKeyEditor,
};

/// Command for retrieving configuration objects and keys.
///
/// Prints the whole object when no key is given, otherwise a single
/// `"<name>:<key>"` entry whose value is null when the key is absent.
///
/// # Example Usage
///
/// ```bash
/// confctl config:get system.site
/// confctl config:get system.site page.front
/// confctl config:get system.site name --no-include-overridden --format json
/// ```
pub struct GetCommand {
    sources: ConfigSources,
}

impl GetCommand {
    /// Creates a new GetCommand reading from `sources`.
    pub fn new(sources: ConfigSources) -> Self {
        Self { sources }
    }
}

impl Command for GetCommand {
    type Args = GetArgs;

    /// Retrieves and renders a configuration object or key.
    ///
    /// A missing object name is asked for, offering every stored name.
    ///
    /// # Errors
    ///
    /// * `CliError::InvalidArguments` - If no name is given or chosen, or the source is not configured
    /// * `CliError::NotFound` - If the object does not exist
    /// * `CliError::ConfigError` - If the store cannot read the object
    fn execute(&self, args: &GetArgs, ctx: &mut ExecutionContext<'_>) -> CommandResult {
        let store = self.sources.select(args.source)?;

        let config_name = match &args.config_name {
            Some(name) => name.clone(),
            None => {
                let names = store.list_all("")?;
                ctx.prompt
                    .chooser()
                    .choose("Choose a configuration name:", &names)?
                    .ok_or_else(|| {
                        CliError::InvalidArguments(
                            "Expected <config_name> argument for 'config:get' command".to_string(),
                        )
                    })?
            }
        };

        let editor = ConfigKeyEditor::new(store, ctx.simulate);
        let value = editor.get(
            &config_name,
            args.key.as_deref(),
            args.include_overridden(),
        )?;

        render_value(&value, args.format)
    }
}
